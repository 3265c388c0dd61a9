//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use wyre_tui::DemoConfig;
use wyre_tui::widgets::WIDGETS;

use crate::logging;

#[derive(Parser)]
#[command(name = "wyre")]
#[command(version = "0.1")]
#[command(about = "Widget listeners demo TUI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file (default: ${WYRE_HOME}/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to this file (the TUI owns the terminal, so logs
    /// never go to stderr)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the key map for the demo screen
    Keys,
    /// List the demo widgets and what they are wired to
    Widgets,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = cli.log_file.as_deref().map(logging::init).transpose()?;

    match cli.command {
        Some(Commands::Keys) => {
            print_keys();
            Ok(())
        }
        Some(Commands::Widgets) => {
            print_widgets();
            Ok(())
        }
        None => {
            let config = match &cli.config {
                Some(path) => DemoConfig::load_from(path)?,
                None => DemoConfig::load()?,
            };
            wyre_tui::run_demo(config)
        }
    }
}

fn print_keys() {
    println!("Tab / Down         focus next widget");
    println!("Shift+Tab / Up     focus previous widget");
    println!("Enter / Space      click button or toggle switch");
    println!("Left / Right       adjust the focused slider");
    println!("q / Esc / Ctrl+C   quit");
}

fn print_widgets() {
    for widget in WIDGETS {
        println!("{:<12} {}", widget.label, widget.description);
    }
}
