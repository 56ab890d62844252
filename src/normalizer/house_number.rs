//! บ้านเลขที่ の抽出

use regex::Regex;

lazy_static::lazy_static! {
    /// ラベル（บ้านเลขที่ / เลขที่）の直後の番号。`12-14`・`99/1/2` も1つの番号として扱う
    static ref LABELED_HOUSE_NUMBER_RE: Regex =
        Regex::new(r"(?:บ้านเลขที่|เลขที่)\s*[:.]?\s*(\d+(?:\s*[/-]\s*\d+)*)").unwrap();
}

/// 住所文字列からラベル付きの บ้านเลขที่ を取り出す
///
/// ラベルがない場合は `None`（モデルの出力をそのまま使う）。
/// `\d` はタイ数字（๑๒๓）にも一致する。
pub fn extract_house_number(address: &str) -> Option<String> {
    let found = LABELED_HOUSE_NUMBER_RE.captures(address)?.get(1)?;
    let number: String = found.as_str().chars().filter(|c| !c.is_whitespace()).collect();

    if number == address {
        None
    } else {
        Some(number)
    }
}
