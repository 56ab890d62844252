//! 対話式の結果編集
//!
//! 表を表示し、`<番号> <フィールド> <値>` で1セルずつ書き換える。

use crate::error::{AppError, Result};
use dialoguer::Input;
use namelist_common::{ResultSet, RowField, Session};
use std::path::Path;

/// 編集コマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// 0始まりの行番号で1フィールドを書き換え
    Set {
        index: usize,
        field: RowField,
        value: String,
    },
    /// 表を再表示
    Show,
    /// 編集終了
    Done,
}

/// 入力行を解釈する
///
/// 行番号は表示どおり1始まり。値は2つ目の区切り以降すべて（空も可）。
pub fn parse_edit_command(input: &str) -> std::result::Result<EditCommand, String> {
    let trimmed = input.trim();

    match trimmed {
        "" | "q" | "Q" => return Ok(EditCommand::Done),
        "p" | "P" => return Ok(EditCommand::Show),
        _ => {}
    }

    let (number, rest) = trimmed
        .split_once(char::is_whitespace)
        .ok_or_else(|| format!("ต้องระบุช่องที่จะแก้: {}", trimmed))?;

    let number: usize = number
        .parse()
        .map_err(|_| format!("เลขแถวไม่ถูกต้อง: {}", number))?;
    if number == 0 {
        return Err("เลขแถวเริ่มที่ 1".to_string());
    }

    let rest = rest.trim_start();
    let (field, value) = rest
        .split_once(char::is_whitespace)
        .map(|(f, v)| (f, v.trim()))
        .unwrap_or((rest, ""));

    Ok(EditCommand::Set {
        index: number - 1,
        field: field.parse()?,
        value: value.to_string(),
    })
}

/// 表を文字列にする（タイ文字は結合文字を含むので桁揃えはしない）
pub fn format_table(results: &ResultSet) -> String {
    if results.is_empty() {
        return "ยังไม่มีข้อมูล".to_string();
    }

    let header = format!(
        "#  | {} | {} | {}",
        RowField::FirstName.heading(),
        RowField::LastName.heading(),
        RowField::Address.heading()
    );

    let lines = results
        .iter()
        .enumerate()
        .map(|(i, row)| format!("{:<2} | {} | {} | {}", i + 1, row.first_name, row.last_name, row.address));

    std::iter::once(header)
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_table(results: &ResultSet) {
    println!("ผลลัพธ์ ({})", results.len());
    println!("{}", format_table(results));
}

/// 対話式でセッションの結果を編集
pub fn run_interactive_edit(session: &mut Session) -> Result<()> {
    if session.results().is_empty() {
        println!("ยังไม่มีข้อมูล");
        return Ok(());
    }

    println!("---");
    println!("แก้ไข: <แถว> <firstName|lastName|address> <ค่าใหม่>  [p]แสดงตาราง [q/Enter]เสร็จ");
    println!("---\n");
    print_table(session.results());

    loop {
        let input: String = Input::new()
            .with_prompt("แก้ไข")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::Prompt(e.to_string()))?;

        match parse_edit_command(&input) {
            Ok(EditCommand::Done) => break,
            Ok(EditCommand::Show) => print_table(session.results()),
            Ok(EditCommand::Set { index, field, value }) => {
                match session.set_field(index, field, value.clone()) {
                    Ok(()) => println!("  → {}. {} = {}\n", index + 1, field.heading(), value),
                    Err(e) => println!("  → {}\n", e),
                }
            }
            Err(msg) => println!("  → {}\n", msg),
        }
    }

    Ok(())
}

/// 保存済みの結果JSONを読み込む
pub fn load_results(path: &Path) -> Result<ResultSet> {
    if !path.is_file() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(ResultSet::from_json(&content)?)
}

/// 保存済みJSONを編集して保存
pub fn edit_file(input_path: &Path, output_path: Option<&Path>) -> Result<()> {
    let mut session = Session::with_results(load_results(input_path)?);

    run_interactive_edit(&mut session)?;

    let output = output_path.unwrap_or(input_path);
    std::fs::write(output, session.results().to_json_pretty()?)?;
    println!("\n✓ บันทึกแล้ว: {}", output.display());

    Ok(())
}
