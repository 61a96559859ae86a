use anyhow::Context;
use cardstock_renderer::{CardInstance, HostConfig, PresentationTree, Theme};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Card JSON file
    pub input: PathBuf,

    /// Theme to resolve colors against
    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    pub theme: ThemeArg,

    /// Host config JSON overriding the built-in style tables
    #[arg(long)]
    pub host_config: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

pub fn render(args: RenderArgs) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let mut config = match &args.host_config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<HostConfig>(&text)
                .with_context(|| format!("invalid host config in {}", path.display()))?
        }
        None => HostConfig::default(),
    };
    config.theme = args.theme.into();

    // Parse failure is a whole-card failure: print the error presentation,
    // same as an embedding host would show.
    let tree = match CardInstance::from_json(&source, config) {
        Ok(mut card) => card.render(),
        Err(error) => {
            eprintln!("{} {}", "error:".red().bold(), error);
            PresentationTree::error_card(error.to_string())
        }
    };

    let output = if args.compact {
        serde_json::to_string(&tree)?
    } else {
        serde_json::to_string_pretty(&tree)?
    };
    println!("{}", output);

    Ok(())
}
