use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Sends plain-text logs to `path`, filtered by `RUST_LOG` (default `info`).
///
/// Fails when the file cannot be created or a global subscriber is already
/// installed.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::init_file_logging;

    #[test]
    fn second_install_is_reported() {
        let dir = std::env::temp_dir().join("tile-snake-logging-tests");
        fs::create_dir_all(&dir).expect("test log directory should be creatable");

        let _ = init_file_logging(&dir.join("first.log"));
        let second = init_file_logging(&dir.join("second.log"));

        assert!(second.is_err(), "a second global subscriber must not install silently");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unwritable_path_is_reported() {
        let path = std::env::temp_dir()
            .join("tile-snake-missing-dir")
            .join("nested")
            .join("run.log");

        assert!(init_file_logging(&path).is_err());
    }
}
