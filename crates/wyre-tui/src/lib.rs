//! Full-screen terminal demo hosting the wyre event dispatcher.

pub mod bindings;
pub mod config;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;
pub mod widgets;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use config::DemoConfig;
pub use runtime::DemoRuntime;

/// Runs the interactive widget demo.
pub fn run_demo(config: DemoConfig) -> Result<()> {
    // The demo requires a terminal to render
    if !stdout().is_terminal() {
        anyhow::bail!("The wyre demo requires a terminal.");
    }

    let mut runtime = DemoRuntime::new(config)?;
    runtime.run()?;

    Ok(())
}
