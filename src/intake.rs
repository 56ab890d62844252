//! 画像取り込み
//!
//! 画像ファイルを読み込み、プレビュー情報と Base64 ペイロード（ヘッダなし）を作る。

use crate::error::{AppError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use namelist_common::{ImagePreview, PendingImage};
use std::path::Path;
use tracing::debug;

/// 画像ファイルを読み込む。`None` なら何もしない
pub fn load_image(path: Option<&Path>) -> Result<Option<PendingImage>> {
    let Some(path) = path else {
        return Ok(None);
    };

    if !path.is_file() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    encode_image(&file_name, path, &bytes).map(Some)
}

/// バイト列から PendingImage を作る
pub fn encode_image(file_name: &str, source: &Path, bytes: &[u8]) -> Result<PendingImage> {
    let mime_type = detect_mime_type(bytes, source)
        .ok_or_else(|| AppError::ImageLoad(format!("画像形式を判定できません: {}", file_name)))?;

    debug!(file_name, mime_type, bytes = bytes.len(), "画像を読み込みました");

    Ok(PendingImage {
        preview: ImagePreview {
            file_name: file_name.to_string(),
            source: source.display().to_string(),
            mime_type: mime_type.to_string(),
            byte_len: bytes.len(),
        },
        base64_data: STANDARD.encode(bytes),
    })
}

/// MIMEタイプ判定（マジックバイト優先、次に拡張子）
fn detect_mime_type(bytes: &[u8], source: &Path) -> Option<&'static str> {
    image::guess_format(bytes)
        .ok()
        .or_else(|| {
            source
                .extension()
                .and_then(ImageFormat::from_extension)
        })
        .map(|format| format.to_mime_type())
}
