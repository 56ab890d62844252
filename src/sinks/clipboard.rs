use crate::error::{AppError, Result};
use namelist_common::{to_clipboard_text, Session};
use std::time::Instant;
use tracing::debug;

/// クリップボードへの書き込み先
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// システムクリップボード（arboard）
///
/// Linux ではプロセスが所有している間だけ内容が有効なので、
/// 確認表示の間はインスタンスを保持しておく。
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        let Some(clipboard) = self.inner.as_mut() else {
            return Err(AppError::Clipboard("clipboard unavailable".into()));
        };

        clipboard
            .set_text(text.to_owned())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// 結果をタブ区切りでコピーし、コピー済み表示を立てる
///
/// 結果が空なら `Ok(false)`。
pub fn copy_results<C: ClipboardSink>(session: &mut Session, sink: &mut C, now: Instant) -> Result<bool> {
    if session.results().is_empty() {
        return Ok(false);
    }

    let text = to_clipboard_text(session.results().rows());
    sink.set_text(&text)?;
    session.mark_copied(now);

    debug!(rows = session.results().len(), chars = text.chars().count(), "クリップボードへコピー");
    Ok(true)
}
