//! CLI Adapter.

mod enhance;
mod input;
mod output;
mod render;

use crate::app::logging;
use crate::domain::{AppError, EnhancementStyle, OutputView};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "penh")]
#[command(version)]
#[command(
    about = "Turn raw prompts into structured, style-aware prompts using the Gemini API",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enhance a raw prompt and print the selected views
    #[clap(visible_alias = "e")]
    Enhance(EnhanceArgs),
    /// Re-render views from a saved JSON result (no network access)
    #[clap(visible_alias = "r")]
    Render(RenderArgs),
    /// List available enhancement styles
    Styles,
    /// List available output views
    Views,
}

#[derive(Args)]
struct EnhanceArgs {
    /// Raw prompt; read from stdin or asked interactively when omitted
    prompt: Vec<String>,
    /// Enhancement style (professional, technical, academic, creative, marketing, simple)
    #[arg(short, long)]
    style: Option<EnhancementStyle>,
    #[command(flatten)]
    views: ViewArgs,
    /// Path to config.toml (defaults to ~/.config/penh/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct RenderArgs {
    /// Saved JSON result, or `-` for stdin
    input: PathBuf,
    #[command(flatten)]
    views: ViewArgs,
}

#[derive(Args)]
struct ViewArgs {
    /// View to print (main, minimal, json, api, markdown); repeatable
    #[arg(short, long = "view", conflicts_with = "all")]
    views: Vec<OutputView>,
    /// Print every view
    #[arg(short, long)]
    all: bool,
}

impl ViewArgs {
    fn selected(&self) -> Vec<OutputView> {
        if self.all {
            OutputView::ALL.to_vec()
        } else if self.views.is_empty() {
            vec![OutputView::Main]
        } else {
            self.views.clone()
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Enhance(args) => enhance::run_enhance(args),
        Commands::Render(args) => render::run_render(args),
        Commands::Styles => {
            run_styles();
            Ok(())
        }
        Commands::Views => {
            run_views();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_styles() {
    for style in EnhancementStyle::ALL {
        println!("{:<14}{}", style.slug(), style.label());
    }
}

fn run_views() {
    for view in OutputView::ALL {
        println!("{:<10}{}", view.slug(), view.label());
    }
}
