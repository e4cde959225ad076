use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 在資料夾（不遞迴）中尋找檔名相同但大小寫不同的檔案
///
/// 只比對 ASCII 大小寫；依檔名排序後回傳第一個符合的檔案。
/// 無法以 UTF-8 表示的檔名會被略過。
pub fn find_case_insensitive(directory: &Path, file_name: &str) -> Result<Option<PathBuf>> {
    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to list directory {}", directory.display()))?;

        // 符號連結依其目標判斷
        if !entry.path().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            debug!("略過非 UTF-8 檔名: {}", entry.path().display());
            continue;
        };

        if name.eq_ignore_ascii_case(file_name) {
            return Ok(Some(entry.into_path()));
        }
    }

    Ok(None)
}
