//! Full-screen TUI for TUDO.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::TuiRuntime;
pub use state::AppOptions;

/// Runs the interactive app until the user quits.
pub async fn run_app(options: AppOptions) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("tudo needs an interactive terminal to render its screens.");
    }

    let mut runtime = TuiRuntime::new(options)?;
    runtime.run()?;
    Ok(())
}
