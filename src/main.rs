use anyhow::{Result, bail};
use env_logger::Env;

mod brush;
mod cli;
mod config;
mod error;
mod keybindings;
mod mask;
mod render;
mod selection;
mod selection_logic;
mod session;
mod store;
mod viewer;

use cli::Cli;
use error::LabelError;
use session::FileOutcome;
use viewer::Viewer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = match Cli::from_env() {
        Some(Ok(cli)) => cli,
        // Help lands here too and exits with 0.
        Some(Err(err)) => err.exit(),
        None => bail!("Incorrect number of command line arguments. See help for usage."),
    };
    let config = cli.config();

    // One window per file, strictly in order. A bad file never stops the batch.
    for file in &cli.files {
        let result = session::label_file(file, &config, |path, width, height| {
            Viewer::open(&format!("editor - {}", path.display()), width, height)
        });
        match result {
            Ok(FileOutcome::Quit) => {}
            Ok(FileOutcome::Saved(paths)) => {
                for path in paths {
                    log::debug!("  {}", path.display());
                }
            }
            Err(err @ LabelError::Load { .. }) => log::warn!("{err}"),
            Err(err) => log::error!("{}: {err}", file.display()),
        }
    }
    Ok(())
}
