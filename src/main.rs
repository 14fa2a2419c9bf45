//! Command-line interface for xsd-checkr

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::process::ExitCode;

#[cfg(feature = "cli")]
use xsd_checkr::Validator;

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "xsd-checkr")]
#[command(author, version, about = "Validate an XML document against an XSD schema", long_about = None)]
struct Cli {
    /// Path to the XSD schema file
    #[arg(short, long, value_name = "SCHEMA")]
    schema: PathBuf,

    /// Path to the XML file to validate
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Only set the exit code, print nothing
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();

    let validator = Validator::new();
    let result = validator.validate_files(&cli.file, &cli.schema);

    if result.valid {
        if !cli.quiet {
            println!("{} is valid", cli.file.display());
        }
        ExitCode::SUCCESS
    } else {
        if !cli.quiet {
            eprintln!("{} is not valid:", cli.file.display());
            for error in &result.errors {
                eprintln!("  {}", error);
            }
        }
        ExitCode::FAILURE
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("xsd-checkr was built without CLI support. Rebuild with --features cli");
    std::process::exit(1);
}
