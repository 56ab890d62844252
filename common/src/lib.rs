//! Thai Name-List OCR Common Library
//!
//! CLIと将来のフロントエンドで共有される型とユーティリティ（I/Oなし）

pub mod types;
pub mod error;
pub mod prompts;
pub mod parser;
pub mod gemini;
pub mod export;
pub mod session;

pub use types::{ImagePreview, PendingImage, ResultSet, Row, RowField};
pub use error::{Error, Result};
pub use prompts::{build_extraction_prompt, EXTRACTION_PROMPT};
pub use parser::{extract_json, parse_rows_response};
pub use gemini::{GenerateContentRequest, GenerateContentResponse};
pub use export::{notepad_file_name, to_clipboard_text, to_notepad_text, to_webhook_body};
pub use session::{Session, Status, COPY_ACK_DURATION};
