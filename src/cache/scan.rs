// Cache directory scanning.
// Lists *.json entries with their modification time; unreadable files are skipped.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{Result, SsostatError};

use super::entry::CachedToken;

/// One successfully parsed cache file.
#[derive(Debug, Clone)]
pub struct CacheReport {
    pub file_name: String,
    pub modified_at: DateTime<Utc>,
    pub token: CachedToken,
}

/// Scan the cache directory for token files, sorted by file name.
/// Files that fail to read or parse are skipped without stopping the scan.
pub fn scan_cache(dir: &Path) -> Result<Vec<CacheReport>> {
    if !dir.is_dir() {
        return Err(SsostatError::CacheDirMissing(dir.to_path_buf()));
    }

    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut reports = Vec::new();
    for path in paths {
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        let Ok(token) = serde_json::from_str::<CachedToken>(&contents) else {
            continue;
        };
        let modified_at = fs::metadata(&path)?.modified()?.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        reports.push(CacheReport {
            file_name,
            modified_at,
            token,
        });
    }

    Ok(reports)
}
