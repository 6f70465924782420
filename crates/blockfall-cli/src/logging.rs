use std::{fs::File, path::Path};

use anyhow::Context as _;
use env_logger::{Builder, Env, Target};

/// Routes `log` output to `path`.
///
/// The terminal belongs to the TUI while the game runs, so logging only
/// happens when a file is given. The filter comes from `RUST_LOG` and
/// defaults to `info`.
pub(crate) fn init_file_logger(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}
