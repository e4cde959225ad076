use anyhow::{Context, Result, bail};
use log::info;
use std::path::Path;

/// 確保輸出資料夾存在，不存在時建立（含上層資料夾）
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            bail!("Output path is not a directory: {}", path.display());
        }
        return Ok(());
    }

    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))?;
    info!("已建立輸出資料夾: {}", path.display());
    Ok(())
}
