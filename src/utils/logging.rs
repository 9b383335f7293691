use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, Level};

use crate::error::Result;

/// Install the global fmt subscriber.
///
/// Logs go to stderr (or `log_file` when given) so stdout only carries the
/// report. Level is `warn`, or `debug` when `verbose` is set. A second call
/// leaves the existing subscriber in place.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    if let Err(err) = installed {
        debug!(error = %err, "keeping existing tracing subscriber");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_is_created() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("merge.log");

        init_logging(true, Some(&path))?;

        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_second_init_keeps_running() -> Result<()> {
        init_logging(false, None)?;
        init_logging(true, None)?;
        Ok(())
    }
}
