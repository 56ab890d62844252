use crate::error::Result;
use namelist_common::{notepad_file_name, to_notepad_text, ResultSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// `dir/list_names_<epoch_ms>.txt` に書き出す
///
/// 結果が空なら何もせず `None`。
pub fn save_notepad(results: &ResultSet, dir: &Path, epoch_millis: i64) -> Result<Option<PathBuf>> {
    if results.is_empty() {
        return Ok(None);
    }

    std::fs::create_dir_all(dir)?;
    let path = dir.join(notepad_file_name(epoch_millis));
    std::fs::write(&path, to_notepad_text(results.rows()))?;

    debug!(path = %path.display(), rows = results.len(), "テキストファイルを保存");
    Ok(Some(path))
}

/// 現在時刻のファイル名で書き出す
pub fn save_notepad_now(results: &ResultSet, dir: &Path) -> Result<Option<PathBuf>> {
    save_notepad(results, dir, chrono::Utc::now().timestamp_millis())
}
