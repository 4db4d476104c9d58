//! Plume CLI
//!
//! Inspect the built-in component themes, print the CSS a part compiles to,
//! and check theme override files before shipping them.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use plume_theme::{ColorMode, Pseudo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Theme tooling for Plume components
#[derive(Parser, Debug)]
#[command(name = "plume")]
#[command(about = "Inspect and validate Plume component themes")]
#[command(version)]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered components and their parts
    Parts {
        /// Only show this component
        component: Option<String>,
    },

    /// Print the compiled CSS of one component part
    Css {
        component: String,
        part: String,

        /// Color mode to resolve for [default: the override file's, else light]
        #[arg(short, long)]
        mode: Option<ColorMode>,

        /// Flatten the style as it applies in these states (hover, focus, ...)
        #[arg(short, long, value_parser = parse_state)]
        state: Vec<Pseudo>,

        #[arg(long)]
        variant: Option<String>,

        #[arg(long)]
        size: Option<String>,

        /// Theme override file to apply first
        #[arg(short, long)]
        overrides: Option<PathBuf>,

        /// Emit JSON instead of CSS text
        #[arg(long)]
        json: bool,
    },

    /// Check a theme override file against the registered components
    Validate { file: PathBuf },
}

fn parse_state(s: &str) -> Result<Pseudo, String> {
    let key = format!("_{}", s.trim_start_matches('_'));
    Pseudo::from_key(&key).ok_or_else(|| {
        let known: Vec<&str> = Pseudo::all()
            .iter()
            .map(|p| p.key().trim_start_matches('_'))
            .collect();
        format!("unknown state `{s}` (expected one of: {})", known.join(", "))
    })
}

fn init_logging(verbose: bool) {
    let default = if verbose { "plume_cli=debug,plume_theme=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match cli.command {
        Command::Parts { component } => commands::parts(component.as_deref())?,
        Command::Css {
            component,
            part,
            mode,
            state,
            variant,
            size,
            overrides,
            json,
        } => commands::css(&commands::CssRequest {
            component,
            part,
            mode,
            states: state,
            variant,
            size,
            overrides,
            json,
        })?,
        Command::Validate { file } => commands::validate(&file)?,
    };
    println!("{output}");
    Ok(())
}
