//! 敬称の展開

use namelist_common::prompts::{ABBREVIATED_FEMALE_HONORIFIC, FULL_FEMALE_HONORIFIC};

/// 先頭の省略敬称を正式な形に展開する
///
/// `"น.ส.สมหญิง"` / `"น.ส. สมหญิง"` / `"น.ส สมหญิง"` → `"นางสาวสมหญิง"`。
/// 展開不要なら `None`。
pub fn expand_honorific(first_name: &str) -> Option<String> {
    let without_dot = ABBREVIATED_FEMALE_HONORIFIC.trim_end_matches('.');

    // ドットなしは空白が続く場合のみ（"น.สมศรี" を誤展開しない）
    let rest = first_name.strip_prefix(ABBREVIATED_FEMALE_HONORIFIC).or_else(|| {
        first_name
            .strip_prefix(without_dot)
            .filter(|rest| rest.starts_with(char::is_whitespace))
    })?;

    Some(format!("{}{}", FULL_FEMALE_HONORIFIC, rest.trim_start()))
}
