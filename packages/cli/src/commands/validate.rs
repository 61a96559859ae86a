use anyhow::{bail, Context};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Card JSON file
    pub input: PathBuf,
}

pub fn validate(args: ValidateArgs) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let document = cardstock_schema::parse(&source)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    let validation = document.validate();
    if validation.is_valid {
        println!(
            "{} {} is a valid card (version {})",
            "ok:".green().bold(),
            args.input.display(),
            document.version
        );
        return Ok(());
    }

    for error in &validation.errors {
        eprintln!("{} {}", "error:".red().bold(), error.message);
    }
    bail!(
        "{} failed validation with {} error(s)",
        args.input.display(),
        validation.errors.len()
    );
}
