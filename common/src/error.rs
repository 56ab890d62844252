//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// AIレスポンスがJSONとして読めない
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSONとしては正しいが Row 配列の形をしていない
    #[error("Shape error: {0}")]
    Shape(String),

    #[error("ยังไม่ได้เลือกรูปภาพ")]
    NoImage,

    #[error("กรุณาใส่ Web App URL จาก Google Apps Script ก่อน")]
    MissingSheetUrl,

    #[error("แถวที่ {index} ไม่มีอยู่ (มีทั้งหมด {len} แถว)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Busy: {0} is already running")]
    Busy(&'static str),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
