use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use yarrow_config::yarrow_dir;

/// Install the global subscriber. `RUST_LOG` wins over the configured
/// level, which wins over `info`. The configured file is tried before the
/// default locations.
pub fn init_tracing(configured_level: Option<&str>, configured_file: Option<&Path>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured_level.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let mut failures = Vec::new();
    let opened = log_file_candidates(configured_file)
        .into_iter()
        .find_map(|candidate| match open_append(&candidate) {
            Ok(file) => Some((candidate, file)),
            Err(err) => {
                failures.push(format!("Skipping log file {}: {err}", candidate.display()));
                None
            }
        });

    // Compositions go to stdout; no log file means no logs.
    let Some((path, file)) = opened else {
        tracing_subscriber::registry().with(env_filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();

    tracing::info!(path = %path.display(), "Logging initialized");
    for failure in failures {
        tracing::warn!("{failure}");
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Configured file, then `~/.yarrow/logs/yarrow.log`, then
/// `./.yarrow/logs/yarrow.log`.
fn log_file_candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    let default_name = Path::new("logs").join("yarrow.log");
    configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(yarrow_dir().map(|dir| dir.join(&default_name)))
        .chain([Path::new(".yarrow").join(&default_name)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn local_fallback_is_last() {
        let candidates = log_file_candidates(None);
        assert_eq!(
            candidates.last(),
            Some(&PathBuf::from(".yarrow/logs/yarrow.log"))
        );
        assert!(candidates.iter().all(|c| c.ends_with("logs/yarrow.log")));
    }

    #[test]
    fn configured_file_is_tried_first() {
        let configured = Path::new("/var/tmp/cast.log");
        let candidates = log_file_candidates(Some(configured));
        assert_eq!(candidates.first().map(PathBuf::as_path), Some(configured));
        assert_eq!(candidates.len(), log_file_candidates(None).len() + 1);
    }

    #[test]
    fn open_append_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("yarrow.log");
        open_append(&path).unwrap();
        assert!(path.exists());
    }
}
