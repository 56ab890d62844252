//! 後処理（正規化）モジュール
//!
//! AI抽出直後の Row に対して、プロンプトのルールをローカルでも適用する。
//! ユーザーの編集値には適用しない。
//!
//! ## 処理内容
//! 1. 前後の空白除去
//! 2. 敬称の展開（น.ส. → นางสาว）
//! 3. ラベル付き住所から บ้านเลขที่ だけを取り出す（ラベルがなければそのまま）

pub mod honorific;
pub mod house_number;

use namelist_common::{Row, RowField};

/// 正規化結果
#[derive(Debug, Clone, Default)]
pub struct NormalizationResult {
    /// 修正内容のリスト
    pub corrections: Vec<NormalizationCorrection>,
    /// 統計情報
    pub stats: NormalizationStats,
}

/// 個別の修正内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationCorrection {
    /// 0始まりの行番号
    pub row_index: usize,
    pub field: RowField,
    pub original: String,
    pub corrected: String,
    pub reason: CorrectionReason,
}

/// 修正理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionReason {
    Whitespace,
    Honorific,
    HouseNumber,
}

impl std::fmt::Display for CorrectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrectionReason::Whitespace => write!(f, "空白除去"),
            CorrectionReason::Honorific => write!(f, "敬称展開"),
            CorrectionReason::HouseNumber => write!(f, "บ้านเลขที่抽出"),
        }
    }
}

/// 正規化の統計情報
#[derive(Debug, Clone, Default)]
pub struct NormalizationStats {
    /// 処理した行数
    pub total_rows: usize,
    /// 修正した行数
    pub corrected_rows: usize,
    pub honorific_corrections: usize,
    pub house_number_corrections: usize,
}

/// 行を正規化した場合の修正内容を求める（行は変更しない）
pub fn normalize_rows(rows: &[Row]) -> NormalizationResult {
    let mut corrections = Vec::new();

    for (row_index, row) in rows.iter().enumerate() {
        for field in RowField::ALL {
            let original = row.field(field);
            let mut value = original.trim().to_string();
            let mut reason = CorrectionReason::Whitespace;

            match field {
                RowField::FirstName => {
                    if let Some(expanded) = honorific::expand_honorific(&value) {
                        value = expanded;
                        reason = CorrectionReason::Honorific;
                    }
                }
                RowField::Address => {
                    if let Some(number) = house_number::extract_house_number(&value) {
                        value = number;
                        reason = CorrectionReason::HouseNumber;
                    }
                }
                RowField::LastName => {}
            }

            if value != original {
                corrections.push(NormalizationCorrection {
                    row_index,
                    field,
                    original: original.to_string(),
                    corrected: value,
                    reason,
                });
            }
        }
    }

    let corrected_rows: std::collections::HashSet<usize> =
        corrections.iter().map(|c| c.row_index).collect();

    let stats = NormalizationStats {
        total_rows: rows.len(),
        corrected_rows: corrected_rows.len(),
        honorific_corrections: count_reason(&corrections, CorrectionReason::Honorific),
        house_number_corrections: count_reason(&corrections, CorrectionReason::HouseNumber),
    };

    NormalizationResult { corrections, stats }
}

fn count_reason(corrections: &[NormalizationCorrection], reason: CorrectionReason) -> usize {
    corrections.iter().filter(|c| c.reason == reason).count()
}

/// 修正を適用する
pub fn apply_corrections(rows: &mut [Row], corrections: &[NormalizationCorrection]) {
    for correction in corrections {
        if let Some(row) = rows.get_mut(correction.row_index) {
            *row.field_mut(correction.field) = correction.corrected.clone();
        }
    }
}
