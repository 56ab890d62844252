//! タイ語名簿OCR
//!
//! 画像 → Gemini で 名前・姓・บ้านเลขที่ を抽出 → 編集 → クリップボード / テキスト / Google Sheets

pub mod analyzer;
pub mod app;
pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod intake;
pub mod normalizer;
pub mod sinks;
