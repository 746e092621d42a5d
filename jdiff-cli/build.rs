use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("jdiff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write JDiff XML API files")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "jdiff", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "jdiff", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "jdiff", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
