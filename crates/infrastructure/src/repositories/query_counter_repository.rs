use async_trait::async_trait;
use reverse_dns_application::ports::QueryCounterRepository;
use reverse_dns_domain::DomainError;
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Label written in front of the count, e.g. `DNS Queries: 42`.
pub const COUNTER_LABEL: &str = "DNS Queries";

/// Query counter persisted as a one-line text file.
///
/// The count and the file write share one lock, so concurrent queries can
/// never persist an older total over a newer one.
pub struct FileQueryCounterRepository {
    path: PathBuf,
    staging_path: PathBuf,
    count: Mutex<u64>,
}

impl FileQueryCounterRepository {
    /// Reads the persisted count, starting from 0 when the file is missing or unreadable.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let count = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => parse_counter(&contents).unwrap_or_else(|| {
                warn!(path = %path.display(), "Unparsable query counter file, starting from 0");
                0
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No query counter file, starting from 0");
                0
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to read query counter, starting from 0");
                0
            }
        };

        info!(path = %path.display(), count, "Query counter loaded");

        Self {
            staging_path: staging_path(&path),
            path,
            count: Mutex::new(count),
        }
    }

    async fn persist(&self, value: u64) -> io::Result<()> {
        let contents = format_counter(value);
        match self.replace_file(&contents).await {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!(error = %e, path = %self.path.display(), "Query counter write failed, retrying");
                self.replace_file(&contents).await
            }
        }
    }

    /// Writes next to the target and renames over it, so the file always
    /// holds either the previous or the new count.
    async fn replace_file(&self, contents: &str) -> io::Result<()> {
        tokio::fs::write(&self.staging_path, contents).await?;
        tokio::fs::rename(&self.staging_path, &self.path).await
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[async_trait]
impl QueryCounterRepository for FileQueryCounterRepository {
    async fn record_query(&self) -> Result<u64, DomainError> {
        let mut count = self.count.lock().await;
        *count += 1;

        self.persist(*count)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))?;

        Ok(*count)
    }

    async fn current(&self) -> u64 {
        *self.count.lock().await
    }
}

/// Parses `"<label>: <integer>"`; anything else yields `None`.
pub fn parse_counter(contents: &str) -> Option<u64> {
    contents.trim().split(": ").nth(1)?.trim().parse().ok()
}

pub fn format_counter(value: u64) -> String {
    format!("{}: {}\n", COUNTER_LABEL, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_persisted_form() {
        assert_eq!(parse_counter("DNS Queries: 42\n"), Some(42));
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(parse_counter("42"), None);
        assert_eq!(parse_counter(""), None);
    }

    #[test]
    fn rejects_non_numeric_value() {
        assert_eq!(parse_counter("DNS Queries: many"), None);
        assert_eq!(parse_counter("DNS Queries: -1"), None);
    }

    #[test]
    fn staging_file_sits_next_to_target() {
        assert_eq!(
            staging_path(Path::new("/var/lib/reverse-dns/stats.txt")),
            PathBuf::from("/var/lib/reverse-dns/stats.txt.tmp")
        );
    }

    #[test]
    fn formats_with_trailing_newline() {
        assert_eq!(format_counter(7), "DNS Queries: 7\n");
    }
}
