//! File-system helpers for the CSV download pipeline.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DkError, Result};

/// Chrome writes in-progress downloads with this suffix.
pub const PARTIAL_DOWNLOAD_SUFFIX: &str = ".crdownload";

/// Move `file_name` from one directory to another, replacing any existing
/// file at the destination. Falls back to copy+remove for cross-device moves.
pub fn move_file(file_name: &str, from: &Path, to: &Path) -> Result<()> {
    let source = from.join(file_name);
    let target = to.join(file_name);

    if target.exists() {
        fs::remove_file(&target)?;
    }

    match fs::rename(&source, &target) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(&source, &target)?;
            fs::remove_file(&source)?;
            Ok(())
        }
    }
}

/// File names in `dir` whose name contains `fragment`, completed downloads
/// only (in-progress `.crdownload` files are ignored).
pub fn completed_downloads(dir: &Path, fragment: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.contains(fragment) && !name.ends_with(PARTIAL_DOWNLOAD_SUFFIX) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Poll `dir` until a completed file containing `fragment` appears.
///
/// Returns the file name. Errors with [`DkError::DownloadTimeout`] once
/// `timeout` elapses.
pub async fn wait_for_download(
    dir: &Path,
    fragment: &str,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<String> {
    let deadline = tokio::time::Instant::now() + timeout;

    loop {
        if let Some(name) = completed_downloads(dir, fragment)?.into_iter().next() {
            return Ok(name);
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(DkError::DownloadTimeout {
                pattern: fragment.to_string(),
                dir: dir.to_path_buf(),
                timeout,
            });
        }
        tokio::time::sleep(poll_interval).await;
    }
}

/// Remove leftover partial downloads so a stale `.crdownload` from a dead
/// session is not mistaken for an active one.
pub fn remove_partial_downloads(dir: &Path) -> Result<Vec<String>> {
    let mut removed = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(PARTIAL_DOWNLOAD_SUFFIX) {
            fs::remove_file(entry.path())?;
            removed.push(name);
        }
    }
    Ok(removed)
}

/// Delete every `.csv`/`.zip` in `dir`, returning how many were removed.
pub fn clear_csv_files(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".csv") || name.ends_with(".zip") {
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// All CSV file names in `dir` containing `fragment`.
pub fn csv_files_matching(dir: &Path, fragment: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".csv") && name.contains(fragment) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_move_file_replaces_destination() {
        let tmp = tempdir().unwrap();
        let from = tmp.path().join("from");
        let to = tmp.path().join("to");
        fs::create_dir_all(&from).unwrap();
        fs::create_dir_all(&to).unwrap();

        fs::write(from.join("a.csv"), "new").unwrap();
        fs::write(to.join("a.csv"), "old").unwrap();

        move_file("a.csv", &from, &to).unwrap();

        assert!(!from.join("a.csv").exists());
        assert_eq!(fs::read_to_string(to.join("a.csv")).unwrap(), "new");
    }

    #[test]
    fn test_completed_downloads_skips_partials() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("contest-standings-1.csv"), "").unwrap();
        fs::write(tmp.path().join("contest-standings-2.csv.crdownload"), "").unwrap();
        fs::write(tmp.path().join("unrelated.txt"), "").unwrap();

        let names = completed_downloads(tmp.path(), "contest-standings").unwrap();
        assert_eq!(names, vec!["contest-standings-1.csv".to_string()]);
    }

    #[tokio::test]
    async fn test_wait_for_download_finds_existing_file() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("contest-standings-7.csv"), "").unwrap();

        let name = wait_for_download(
            tmp.path(),
            "contest-standings-7",
            Duration::from_secs(1),
            Duration::from_millis(10),
        )
        .await
        .unwrap();
        assert_eq!(name, "contest-standings-7.csv");
    }

    #[tokio::test]
    async fn test_wait_for_download_times_out() {
        let tmp = tempdir().unwrap();

        let err = wait_for_download(
            tmp.path(),
            "never-appears",
            Duration::from_millis(50),
            Duration::from_millis(10),
        )
        .await
        .unwrap_err();

        match err {
            DkError::DownloadTimeout { pattern, .. } => assert_eq!(pattern, "never-appears"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_remove_partial_downloads() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.csv.crdownload"), "").unwrap();
        fs::write(tmp.path().join("b.csv"), "").unwrap();

        let removed = remove_partial_downloads(tmp.path()).unwrap();
        assert_eq!(removed, vec!["a.csv.crdownload".to_string()]);
        assert!(tmp.path().join("b.csv").exists());
    }

    #[test]
    fn test_clear_csv_files() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.csv"), "").unwrap();
        fs::write(tmp.path().join("b.zip"), "").unwrap();
        fs::write(tmp.path().join("keep.txt"), "").unwrap();

        assert_eq!(clear_csv_files(tmp.path()).unwrap(), 2);
        assert!(tmp.path().join("keep.txt").exists());
    }
}
