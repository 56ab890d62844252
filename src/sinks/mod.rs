//! エクスポート先
//!
//! 3つとも結果が空なら何もしない。
//! - clipboard: タブ区切りをシステムクリップボードへ
//! - notepad: BOM付きテキストファイル
//! - sheet: Google Apps Script Web App へ JSON POST

pub mod clipboard;
pub mod notepad;
pub mod sheet;

pub use clipboard::{copy_results, ClipboardSink, SystemClipboard};
pub use notepad::{save_notepad, save_notepad_now};
pub use sheet::{send_to_sheet, HttpSheetTransport, SheetTransport};
