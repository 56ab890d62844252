//! APIレスポンスパーサー
//!
//! Gemini の応答テキストから JSON 配列を取り出し、Row 一覧に変換する。
//! JSONとして読めない場合は `Error::Parse`、形が違う場合は `Error::Shape`。

use crate::error::{Error, Result};
use crate::types::{Row, RowField};
use serde_json::{Map, Value};

/// APIレスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の [...] 配列
/// 3. エラー
///
/// # Examples
/// ```
/// use namelist_common::extract_json;
///
/// let response = "result: [{\"firstName\": \"นายสมชาย\"}]";
/// let json = extract_json(response).unwrap();
/// assert!(json.starts_with('['));
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7;
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('[') {
        if let Some(end) = response.rfind(']') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 抽出レスポンスをパース
///
/// `responseMimeType: application/json` 指定時は本文そのものが配列のはずだが、
/// 前後に説明文や ```json ブロックが付く場合にも対応する。
pub fn parse_rows_response(response: &str) -> Result<Vec<Row>> {
    let trimmed = response.trim();

    let value = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value,
        Err(_) => {
            let json_str = extract_json(trimmed)?;
            serde_json::from_str::<Value>(json_str.trim())
                .map_err(|e| Error::Parse(format!("JSONパースエラー: {}", e)))?
        }
    };

    rows_from_value(value)
}

fn rows_from_value(value: Value) -> Result<Vec<Row>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::Shape(format!(
                "JSON配列ではありません: {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => row_from_map(&map)
                .map_err(|msg| Error::Shape(format!("{}番目の要素: {}", i + 1, msg))),
            other => Err(Error::Shape(format!(
                "{}番目の要素がオブジェクトではありません: {}",
                i + 1,
                json_kind(&other)
            ))),
        })
        .collect()
}

fn row_from_map(map: &Map<String, Value>) -> std::result::Result<Row, String> {
    let mut row = Row::default();
    for field in RowField::ALL {
        *row.field_mut(field) = get_string(map, field.key())?;
    }
    Ok(row)
}

/// 文字列フィールドを取得
///
/// 欠落・null は空文字、数値はそのまま文字列化（บ้านเลขที่ が数値で返る場合）。
fn get_string(map: &Map<String, Value>, key: &str) -> std::result::Result<String, String> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(format!("\"{}\" が文字列ではありません: {}", key, json_kind(other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
