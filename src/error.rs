use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ยังไม่ได้ตั้งค่า Gemini API key: `namelist-ocr config --set-api-key YOUR_KEY` หรือตั้งค่า GEMINI_API_KEY")]
    MissingApiKey,

    #[error("ไม่พบไฟล์: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("Webhook送信エラー: {0}")]
    SheetDelivery(String),

    #[error("クリップボードエラー: {0}")]
    Clipboard(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] namelist_common::Error),
}

impl AppError {
    /// ログ用の分類（ユーザー向けメッセージは共通）
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Common(namelist_common::Error::Parse(_))
            | AppError::Common(namelist_common::Error::Shape(_)) => "parse",
            AppError::ApiCall(_) | AppError::SheetDelivery(_) => "transport",
            AppError::Config(_) | AppError::MissingApiKey => "config",
            _ => "other",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
