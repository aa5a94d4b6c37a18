//! Display-hostname source backed by a local file.

use std::path::PathBuf;

use roverhome_app::ports::HostnameSource;
use roverhome_domain::error::{HostnameError, RoverHomeError};

/// Reads the display hostname verbatim from a file.
///
/// The contents are not trimmed or validated — the page shows exactly
/// what the file holds. The file is re-read on every call.
#[derive(Debug, Clone)]
pub struct FileHostnameSource {
    path: PathBuf,
}

impl FileHostnameSource {
    /// Create a source over the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HostnameSource for FileHostnameSource {
    async fn display_hostname(&self) -> Result<String, RoverHomeError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| {
                HostnameError::Read {
                    path: self.path.clone(),
                    source,
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "roverhome-hostname-{}-{name}",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn should_return_file_contents_verbatim() {
        let path = temp_file("verbatim", "gopigo17\n");
        let source = FileHostnameSource::new(&path);

        let hostname = source.display_hostname().await.unwrap();
        assert_eq!(hostname, "gopigo17\n");

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn should_return_empty_string_for_empty_file() {
        let path = temp_file("empty", "");
        let source = FileHostnameSource::new(&path);

        let hostname = source.display_hostname().await.unwrap();
        assert!(hostname.is_empty());

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn should_report_read_error_when_file_is_missing() {
        let source = FileHostnameSource::new("/nonexistent/roverhome-hostname");

        let result = source.display_hostname().await;
        assert!(matches!(
            result,
            Err(RoverHomeError::Hostname(HostnameError::Read { .. }))
        ));
    }
}
