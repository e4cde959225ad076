use anyhow::{Context, Result, anyhow};
use image::ImageReader;
use log::debug;
use std::fs;
use std::path::Path;

/// 固定的 WEBP 有損壓縮品質（0–100）
pub const WEBP_QUALITY: f32 = 80.0;

/// 解碼來源圖片並以有損 WEBP 格式寫入目標路徑，目標已存在時直接覆寫
pub fn convert_to_webp(source: &Path, destination: &Path) -> Result<()> {
    // 依檔案內容判斷格式，不信任副檔名
    let image = ImageReader::open(source)
        .and_then(ImageReader::with_guessed_format)
        .with_context(|| format!("cannot open image {}", source.display()))?
        .decode()
        .with_context(|| format!("cannot decode image {}", source.display()))?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(anyhow!("image {} has no pixels", source.display()));
    }

    let encoded = webp::Encoder::from_rgba(rgba.as_raw(), width, height)
        .encode_simple(false, WEBP_QUALITY)
        .map_err(|e| anyhow!("cannot encode {} as WEBP: {e:?}", source.display()))?;
    debug!(
        "編碼 {} ({}x{}) -> {} bytes",
        source.display(),
        width,
        height,
        encoded.len()
    );

    fs::write(destination, &*encoded)
        .with_context(|| format!("cannot write {}", destination.display()))?;

    Ok(())
}
