// Command-line interface for jdiff
//
// This binary writes the JDiff XML file for an API model. The model is the JSON form of
// jdiff_xml::Codebase, typically produced by whatever tool extracted the API from sources.
//
// Usage:
//  jdiff <model.json> [--output <file>]   - Write the JDiff XML (stdout by default)
//  jdiff - [--output <file>]              - Read the model from stdin
//  jdiff --list-toggles                   - List compatibility toggles and their presets
//
// Configuration:
//
// Settings come from the embedded defaults, then ./jdiff.toml if present, then --config,
// then the command line. --legacy selects the legacy preset.
//
// Extra Parameters:
//
// Individual compatibility toggles can be set with --extra-<toggle> [value]. Dashes and
// underscores are interchangeable and a bare flag means "true".
// Example:
//  jdiff api.json --legacy --extra-xml-char-as-int false

mod logging;

use clap::{Arg, ArgAction, Command, ValueHint};
use jdiff_config::{ConfigError, JDiffConfig, Loader};
use jdiff_xml::{write_codebase, Codebase, Compatibility, Filters, WriteOptions};
use std::collections::HashMap;
use std::fs;
use std::io::{self, BufWriter, Read};
use tracing::debug;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("jdiff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write JDiff XML API files")
        .long_about(
            "jdiff writes the API surface described by a JSON model as a JDiff XML file,\n\
            the format read by JDiff-style API comparison tools.\n\n\
            Compatibility:\n  \
            By default the output follows plain XML conventions. --legacy reproduces\n  \
            every quirk of the predecessor tool so existing baselines diff cleanly.\n\n\
            Extra Parameters:\n  \
            Use --extra-<toggle> [value] to set a single compatibility toggle.\n  \
            Boolean flags can omit the value (defaults to 'true').\n  \
            Use --list-toggles to see every toggle.\n\n\
            Examples:\n  \
            jdiff api.json                              # Write XML to stdout\n  \
            jdiff api.json -o api.xml --legacy          # Legacy format to a file\n  \
            jdiff api.json --extra-xml-char-as-int      # Default format, chars as ints\n  \
            jdiff - < api.json                          # Read the model from stdin",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the JSON API model ('-' for stdin)")
                .required_unless_present("list-toggles")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a jdiff.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("legacy")
                .long("legacy")
                .help("Use the legacy compatibility preset")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("include-hidden")
                .long("include-hidden")
                .help("Also write package-private and private items")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pre-filtered")
                .long("pre-filtered")
                .help("Write supertypes and thrown types exactly as the model lists them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-toggles")
                .long("list-toggles")
                .help("List compatibility toggles")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);
    let matches = build_cli().get_matches_from(&cleaned_args);

    if matches.get_flag("list-toggles") {
        handle_list_toggles_command();
        return;
    }

    let overrides = collect_overrides(&mut extra_params);
    if let Some(unknown) = extra_params.keys().next() {
        eprintln!("Unknown option --extra-{unknown}. Use --list-toggles to see valid names.");
        std::process::exit(1);
    }

    let mut config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_flag("legacy"),
        &overrides,
    );
    config.output.include_hidden |= matches.get_flag("include-hidden");
    config.output.pre_filtered |= matches.get_flag("pre-filtered");

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = matches.get_one::<String>("output").map(|s| s.as_str());
    handle_write_command(input, output, &config);
}

/// Handle the default command: read the model, write the XML
fn handle_write_command(input: &str, output: Option<&str>, config: &JDiffConfig) {
    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let codebase = Codebase::from_json(&source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let options = write_options(config);
    debug!(compatibility = ?options.compatibility, "resolved configuration");

    match output {
        Some(path) => {
            let file = fs::File::create(path).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            if let Err(e) = write_codebase(&codebase, &options, BufWriter::new(file)) {
                // Never leave a truncated document behind.
                let _ = fs::remove_file(path);
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            }
        }
        None => {
            let stdout = io::stdout().lock();
            if let Err(e) = write_codebase(&codebase, &options, BufWriter::new(stdout)) {
                eprintln!("Serialization error: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

fn write_options(config: &JDiffConfig) -> WriteOptions {
    let filters = if config.output.include_hidden {
        Filters::all()
    } else {
        Filters::visible_api()
    };
    WriteOptions::new(Compatibility::from(&config.compatibility))
        .with_filters(filters)
        .with_pre_filtered(config.output.pre_filtered)
}

/// Handle the list-toggles command
fn handle_list_toggles_command() {
    let default = Compatibility::default();
    let legacy = Compatibility::legacy();

    println!("Compatibility toggles (default / legacy):\n");
    for &name in Compatibility::TOGGLE_NAMES {
        println!(
            "  {:<36} {:<5} / {}",
            name,
            default.get(name).unwrap_or_default(),
            legacy.get(name).unwrap_or_default()
        );
    }
    println!("\nSet one with --extra-<toggle> [true|false], e.g. --extra-xml-char-as-int");
}

fn load_cli_config(
    explicit_path: Option<&str>,
    legacy: bool,
    overrides: &[(String, bool)],
) -> JDiffConfig {
    let loader = Loader::new().with_optional_file("jdiff.toml");
    let mut loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    if legacy {
        loader = loader
            .set_override("compatibility.preset", "legacy")
            .unwrap_or_else(|e| config_error(e));
    }
    for (key, value) in overrides {
        loader = loader
            .set_override(key, *value)
            .unwrap_or_else(|e| config_error(e));
    }

    loader.build().unwrap_or_else(|e| config_error(e))
}

fn config_error(err: ConfigError) -> ! {
    eprintln!("Failed to load configuration: {err}");
    std::process::exit(1);
}

/// Turn the recognised `--extra-*` parameters into configuration overrides, removing them from
/// `extra_params`.
fn collect_overrides(extra_params: &mut HashMap<String, String>) -> Vec<(String, bool)> {
    let mut overrides = Vec::new();

    for &name in Compatibility::TOGGLE_NAMES {
        let dashed = name.replace('_', "-");
        if let Some(raw) = take_override(extra_params, &[name, dashed.as_str()]) {
            overrides.push((
                format!("compatibility.{name}"),
                parse_bool_arg(&dashed, &raw),
            ));
        }
    }

    if let Some(raw) = take_override(extra_params, &["include-hidden", "include_hidden"]) {
        overrides.push((
            "output.include_hidden".to_string(),
            parse_bool_arg("include-hidden", &raw),
        ));
    }
    if let Some(raw) = take_override(extra_params, &["pre-filtered", "pre_filtered"]) {
        overrides.push((
            "output.pre_filtered".to_string(),
            parse_bool_arg("pre-filtered", &raw),
        ));
    }

    overrides
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
