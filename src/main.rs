use clap::error::ErrorKind;
use clap::Parser;
use filetimegen::application::{generate, PruneService};
use filetimegen::cli::{format_name_list, Cli};
use filetimegen::error::RotateError;
use filetimegen::infrastructure::{
    init_logging, CandidateSource, Delimiter, DirectorySource, ReaderSource, RotationConfig,
};
use std::io::{self, Write};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help is an early exit, not a successful run
            let code = match e.kind() {
                ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), RotateError> {
    // Validate everything before touching input
    let config = match &cli.config {
        Some(path) => RotationConfig::load(path)?,
        None => RotationConfig::default(),
    };
    let policy = cli.retention_policy(config.policy())?;
    let template = cli.naming_template()?;

    let mut stdout = io::stdout().lock();

    if !cli.prune {
        stdout.write_all(generate(&template).as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let delimiter = Delimiter::from_newline_flag(cli.newline || config.newline);
    let names = match cli.dir {
        Some(dir) => DirectorySource::new(dir).candidates()?,
        None => ReaderSource::new(io::stdin().lock(), delimiter).candidates()?,
    };

    let outcome = PruneService::new(template, policy).execute(&names);
    stdout.write_all(format_name_list(&outcome.prune, delimiter).as_bytes())?;
    stdout.flush()?;

    Ok(())
}
