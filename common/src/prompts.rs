//! プロンプト生成モジュール
//!
//! 名簿画像からの抽出ルールをまとめた固定プロンプト

/// 省略形の女性敬称
pub const ABBREVIATED_FEMALE_HONORIFIC: &str = "น.ส.";

/// 省略形を展開した正式な敬称
pub const FULL_FEMALE_HONORIFIC: &str = "นางสาว";

/// 抽出用プロンプト
///
/// 出力は `[{"firstName", "lastName", "address"}]` の JSON 配列のみ。
pub const EXTRACTION_PROMPT: &str = r#"Extract a list of people's information from this image.
The data is in Thai.

Rules for Extraction:
1. Prefix & First Name: Keep them together (e.g., "นายสมชาย").
2. Title Change: If the prefix is "น.ส.", change it to "นางสาว".
3. Last Name: Separate into a different field.
4. Address: Extract the "House Number" (บ้านเลขที่) only, not the rest of the address.
5. Correction: Fix common Thai OCR errors (vowels, tone marks).

Return ONLY a JSON array of objects with these keys:
"firstName" (includes prefix), "lastName", and "address" (house number).

Format example: [{"firstName": "นางสาวสมหญิง", "lastName": "รักเรียน", "address": "123/45"}]"#;

/// 抽出用プロンプトを返す
pub fn build_extraction_prompt() -> String {
    EXTRACTION_PROMPT.to_string()
}
