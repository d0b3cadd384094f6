//! Environment-driven configuration for the authenticated download flow.

use std::env;
use std::path::PathBuf;

use crate::error::{DkError, Result};
use crate::{
    CSV_DIR_ENV_VAR, DOWNLOAD_DIR_ENV_VAR, EMAIL_ENV_VAR, PASSWORD_ENV_VAR, USERNAME_ENV_VAR,
    WEBDRIVER_ENV_VAR,
};

pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// DraftKings account credentials, read from `DK_EMAIL` / `DK_PASSWORD`.
///
/// `username` (`DK_USERNAME`) is optional and only used to pick the opponent
/// out of head-to-head entry descriptions.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub username: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        let email = env::var(EMAIL_ENV_VAR).map_err(|_| DkError::MissingEnvVar {
            env_var: EMAIL_ENV_VAR,
        })?;
        let password = env::var(PASSWORD_ENV_VAR).map_err(|_| DkError::MissingEnvVar {
            env_var: PASSWORD_ENV_VAR,
        })?;
        let username = env::var(USERNAME_ENV_VAR).ok().filter(|s| !s.is_empty());

        Ok(Self {
            email,
            password,
            username,
        })
    }
}

/// WebDriver endpoint for the browser session (`DK_WEBDRIVER_URL`).
pub fn webdriver_url() -> String {
    env::var(WEBDRIVER_ENV_VAR).unwrap_or_else(|_| DEFAULT_WEBDRIVER_URL.to_string())
}

/// Directory layout for downloaded CSVs.
///
/// The browser drops exports into `browser`; files then move through
/// `staging` while being parsed and end up in `imported` or `failed`.
#[derive(Debug, Clone)]
pub struct DownloadDirs {
    /// Where the browser writes downloads (`DOWNLOAD_DIRECTORY`).
    pub browser: PathBuf,
    /// Root of the staging/import/failed tree (`CSV_DIRECTORY`).
    pub root: PathBuf,
}

impl DownloadDirs {
    pub fn from_env() -> Result<Self> {
        let browser = match env::var(DOWNLOAD_DIR_ENV_VAR) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::download_dir().ok_or(DkError::MissingEnvVar {
                env_var: DOWNLOAD_DIR_ENV_VAR,
            })?,
        };
        let root = env::var(CSV_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("downloads"));

        Ok(Self { browser, root })
    }

    pub fn staging(&self) -> PathBuf {
        self.root.join("download")
    }

    pub fn imported(&self) -> PathBuf {
        self.root.join("import")
    }

    pub fn failed(&self) -> PathBuf {
        self.root.join("failed")
    }

    /// The history flow only touches the browser and root directories.
    pub fn validate_base(&self) -> Result<()> {
        let mut missing = Vec::new();
        for dir in [&self.browser, &self.root] {
            if !dir.is_dir() {
                missing.push(dir.display().to_string());
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DkError::MissingDirectories { missing })
        }
    }

    /// Every directory must already exist before an authenticated run; the
    /// error names each missing one so the operator can create them.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        for dir in [
            self.browser.clone(),
            self.root.clone(),
            self.staging(),
            self.imported(),
            self.failed(),
        ] {
            if !dir.is_dir() {
                missing.push(dir.display().to_string());
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DkError::MissingDirectories { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn dirs_under(root: &std::path::Path) -> DownloadDirs {
        DownloadDirs {
            browser: root.join("browser"),
            root: root.join("csv"),
        }
    }

    #[test]
    fn test_validate_reports_every_missing_directory() {
        let tmp = tempdir().unwrap();
        let dirs = dirs_under(tmp.path());

        let err = dirs.validate().unwrap_err();
        match err {
            DkError::MissingDirectories { missing } => {
                assert_eq!(missing.len(), 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_passes_when_tree_exists() {
        let tmp = tempdir().unwrap();
        let dirs = dirs_under(tmp.path());

        std::fs::create_dir_all(&dirs.browser).unwrap();
        std::fs::create_dir_all(dirs.staging()).unwrap();
        std::fs::create_dir_all(dirs.imported()).unwrap();
        std::fs::create_dir_all(dirs.failed()).unwrap();

        assert!(dirs.validate().is_ok());
    }

    #[test]
    fn test_subdirectory_layout() {
        let dirs = DownloadDirs {
            browser: PathBuf::from("/tmp/browser"),
            root: PathBuf::from("/tmp/csv"),
        };
        assert_eq!(dirs.staging(), PathBuf::from("/tmp/csv/download"));
        assert_eq!(dirs.imported(), PathBuf::from("/tmp/csv/import"));
        assert_eq!(dirs.failed(), PathBuf::from("/tmp/csv/failed"));
    }
}
