//! エクスポート用テキスト生成
//!
//! - クリップボード: タブ区切り（スプレッドシートへ貼り付け用）
//! - メモ帳: 番号付き行 + BOM（古いエディタでタイ語を正しく開くため）
//! - Webhook: Row の JSON 配列

use crate::error::Result;
use crate::types::Row;

/// UTF-8 BOM
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// タブ区切りテキスト（行は改行区切り、末尾改行なし）
pub fn to_clipboard_text(rows: &[Row]) -> String {
    rows.iter()
        .map(|row| format!("{}\t{}\t{}", row.first_name, row.last_name, row.address))
        .collect::<Vec<_>>()
        .join("\n")
}

/// メモ帳用の1行（`number` は1始まり）
pub fn to_notepad_line(number: usize, row: &Row) -> String {
    format!(
        "{}. ชื่อ: {} นามสกุล: {} บ้านเลขที่: {}",
        number, row.first_name, row.last_name, row.address
    )
}

/// メモ帳用テキスト（先頭にBOM）
pub fn to_notepad_text(rows: &[Row]) -> String {
    let body = rows
        .iter()
        .enumerate()
        .map(|(i, row)| to_notepad_line(i + 1, row))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}{}", BYTE_ORDER_MARK, body)
}

/// 出力ファイル名 `list_names_<epoch-ms>.txt`
pub fn notepad_file_name(epoch_millis: i64) -> String {
    format!("list_names_{}.txt", epoch_millis)
}

/// Webhook送信用のJSON配列
pub fn to_webhook_body(rows: &[Row]) -> Result<String> {
    Ok(serde_json::to_string(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Row> {
        vec![
            Row::new("นางสาวสมหญิง", "รักเรียน", "123/45"),
            Row::new("นายสมชาย", "ใจดี", "9"),
        ]
    }

    #[test]
    fn test_clipboard_text_single_row() {
        let rows = vec![Row::new("นางสาวสมหญิง", "รักเรียน", "123/45")];
        assert_eq!(to_clipboard_text(&rows), "นางสาวสมหญิง\tรักเรียน\t123/45");
    }

    #[test]
    fn test_clipboard_text_keeps_order() {
        let text = to_clipboard_text(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("นางสาวสมหญิง\t"));
        assert!(lines[1].starts_with("นายสมชาย\t"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_clipboard_text_is_idempotent() {
        let rows = sample();
        assert_eq!(to_clipboard_text(&rows), to_clipboard_text(&rows));
    }

    #[test]
    fn test_notepad_line() {
        let row = Row::new("นางสาวสมหญิง", "รักเรียน", "123/45");
        assert_eq!(
            to_notepad_line(1, &row),
            "1. ชื่อ: นางสาวสมหญิง นามสกุล: รักเรียน บ้านเลขที่: 123/45"
        );
    }

    #[test]
    fn test_notepad_text_starts_with_bom_and_first_line() {
        let text = to_notepad_text(&sample());
        let mut chars = text.chars();
        assert_eq!(chars.next(), Some(BYTE_ORDER_MARK));
        assert!(chars.as_str().starts_with("1. ชื่อ: นางสาวสมหญิง"));
        assert!(text.contains("\n2. ชื่อ: นายสมชาย นามสกุล: ใจดี บ้านเลขที่: 9"));
    }

    #[test]
    fn test_notepad_text_is_idempotent() {
        let rows = sample();
        assert_eq!(to_notepad_text(&rows), to_notepad_text(&rows));
    }

    #[test]
    fn test_notepad_file_name() {
        assert_eq!(notepad_file_name(1760000000123), "list_names_1760000000123.txt");
    }

    #[test]
    fn test_webhook_body_is_bare_array() {
        let body = to_webhook_body(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        let items = value.as_array().expect("配列ではない");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["firstName"], "นางสาวสมหญิง");
        assert_eq!(items[1]["address"], "9");
    }
}
