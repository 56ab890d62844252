//! 抽出結果の型定義
//!
//! CLIと将来のフロントエンドで共有される型:
//! - Row: 1人分の 名前・姓・บ้านเลขที่
//! - RowField: 編集対象のフィールド
//! - ResultSet: 表示・編集中の Row 一覧（順序のみで識別）
//! - PendingImage: 解析待ちの画像（1枚のみ）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 抽出された1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Row {
    /// 敬称込みの名前（例: "นางสาวสมหญิง"）
    pub first_name: String,

    pub last_name: String,

    /// บ้านเลขที่ のみ（例: "123/45"）
    pub address: String,
}

impl Row {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
        }
    }

    pub fn field(&self, field: RowField) -> &str {
        match field {
            RowField::FirstName => &self.first_name,
            RowField::LastName => &self.last_name,
            RowField::Address => &self.address,
        }
    }

    pub fn field_mut(&mut self, field: RowField) -> &mut String {
        match field {
            RowField::FirstName => &mut self.first_name,
            RowField::LastName => &mut self.last_name,
            RowField::Address => &mut self.address,
        }
    }
}

/// 編集可能なフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    FirstName,
    LastName,
    Address,
}

impl RowField {
    pub const ALL: [RowField; 3] = [RowField::FirstName, RowField::LastName, RowField::Address];

    /// JSONキー名
    pub fn key(&self) -> &'static str {
        match self {
            RowField::FirstName => "firstName",
            RowField::LastName => "lastName",
            RowField::Address => "address",
        }
    }

    /// 表の見出し
    pub fn heading(&self) -> &'static str {
        match self {
            RowField::FirstName => "ชื่อ",
            RowField::LastName => "นามสกุล",
            RowField::Address => "บ้านเลขที่",
        }
    }
}

impl std::str::FromStr for RowField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        RowField::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(trimmed) || f.heading() == trimmed)
            .or(match trimmed.to_lowercase().as_str() {
                "first" | "name" => Some(RowField::FirstName),
                "last" | "surname" => Some(RowField::LastName),
                "addr" | "house" => Some(RowField::Address),
                _ => None,
            })
            .ok_or_else(|| {
                format!(
                    "Unknown field: {}. Use firstName, lastName, or address",
                    trimmed
                )
            })
    }
}

impl std::fmt::Display for RowField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 表示中の Row 一覧
///
/// 抽出ごとに丸ごと置き換えられる。並べ替えはしない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    rows: Vec<Row>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn replace(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    /// 1行の1フィールドだけを書き換える
    ///
    /// 値の検証はしない（空文字も可）。範囲外なら何も変更せずエラー。
    pub fn set_field(&mut self, index: usize, field: RowField, value: impl Into<String>) -> Result<()> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *row.field_mut(field) = value.into();
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// 画像のプレビュー情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePreview {
    pub file_name: String,
    /// 元ファイルの場所（表示用）
    pub source: String,
    pub mime_type: String,
    pub byte_len: usize,
}

/// 解析待ちの画像
///
/// `base64_data` には Data URL のヘッダ（`data:...;base64,`）を含めない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub preview: ImagePreview,
    pub base64_data: String,
}
