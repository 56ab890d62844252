//! コマンド共通の処理（エクスポート先の実行）

use crate::cli::SinkArgs;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::sinks::{self, ClipboardSink, SheetTransport};
use namelist_common::Session;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

/// 実行したエクスポートの結果
///
/// 各エクスポート先は独立しており、失敗しても残りは実行される。
#[derive(Debug, Default)]
pub struct SinkReport {
    pub copied: bool,
    pub notepad_path: Option<PathBuf>,
    pub sent: bool,
    /// 実行順に並んだ失敗
    pub errors: Vec<AppError>,
}

impl SinkReport {
    /// 最初の失敗を返す（なければ `Ok`）
    pub fn into_result(self) -> Result<()> {
        match self.errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// 指定されたエクスポート先を順に実行（clipboard → notepad → sheet）
///
/// Webhook URL は空白でない `--sheet-url` を優先し、なければ設定ファイルの値。
pub async fn run_sinks<C: ClipboardSink, T: SheetTransport>(
    session: &mut Session,
    args: &SinkArgs,
    config: &Config,
    clipboard: &mut C,
    transport: &T,
) -> SinkReport {
    let mut report = SinkReport::default();

    if args.copy {
        match sinks::copy_results(session, clipboard, Instant::now()) {
            Ok(copied) => {
                report.copied = copied;
                if copied {
                    println!("✔ คัดลอกแล้ว ({} แถว)", session.results().len());
                }
            }
            Err(e) => record_failure(&mut report, "clipboard", e),
        }
    }

    if let Some(dir) = &args.notepad {
        match sinks::save_notepad_now(session.results(), dir) {
            Ok(path) => {
                if let Some(path) = &path {
                    println!("✔ บันทึก Notepad: {}", path.display());
                }
                report.notepad_path = path;
            }
            Err(e) => record_failure(&mut report, "notepad", e),
        }
    }

    if args.sheet {
        let url = args
            .sheet_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .or(config.sheet_url());

        match sinks::send_to_sheet(session, transport, url).await {
            Ok(sent) => {
                report.sent = sent;
                if sent {
                    println!("✔ {}", session.status_text());
                }
            }
            Err(e) => record_failure(&mut report, "sheet", e),
        }
    }

    report
}

fn record_failure(report: &mut SinkReport, sink: &'static str, error: AppError) {
    warn!(sink, kind = error.kind(), error = %error, "エクスポート失敗");
    report.errors.push(error);
}
