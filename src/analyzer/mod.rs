//! AI抽出
//!
//! 画像1枚 → Gemini → Row 一覧 → ローカル正規化 → セッションへ反映。
//! HTTP部分は `ExtractionBackend` に切り出してあり、テストでは差し替える。

mod gemini;

pub use gemini::GeminiClient;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::normalizer;
use namelist_common::{build_extraction_prompt, parse_rows_response, GenerateContentRequest, Session};
use tracing::{debug, info, warn};

/// generateContent を1回呼び、応答テキスト（内側のJSON文字列）を返す
#[allow(async_fn_in_trait)]
pub trait ExtractionBackend {
    async fn generate_content(&self, request: &GenerateContentRequest) -> Result<String>;
}

/// セッションの画像から行を抽出する
///
/// - 画像なし: 何も変えずに `NoImage`（通信しない）
/// - 実行中: `Busy`
/// - 失敗: ステータスを失敗にし、結果は空のまま（リトライしない）
///
/// 成功時は抽出した行数を返す。
pub async fn run_extraction<B: ExtractionBackend>(
    session: &mut Session,
    backend: &B,
) -> Result<usize> {
    let request = {
        let image = session
            .pending_image()
            .ok_or(AppError::Common(namelist_common::Error::NoImage))?;
        GenerateContentRequest::for_image(&build_extraction_prompt(), image)
    };

    session.begin_extraction()?;
    info!("AI抽出を開始");

    let outcome = match backend.generate_content(&request).await {
        Ok(text) => {
            debug!(chars = text.len(), "応答を受信");
            parse_rows_response(&text).map_err(AppError::from)
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok(mut rows) => {
            let normalized = normalizer::normalize_rows(&rows);
            for correction in &normalized.corrections {
                debug!(
                    row = correction.row_index + 1,
                    field = %correction.field,
                    reason = %correction.reason,
                    "正規化"
                );
            }
            normalizer::apply_corrections(&mut rows, &normalized.corrections);

            let count = rows.len();
            session.complete_extraction(rows);
            info!(rows = count, corrected = normalized.stats.corrected_rows, "AI抽出完了");
            Ok(count)
        }
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "AI抽出失敗");
            session.fail_extraction();
            Err(e)
        }
    }
}

/// 設定からバックエンドを作って抽出する
///
/// APIキーがなければステータスを `MissingApiKey` にし、通信せずに `MissingApiKey` を返す。
pub async fn run_configured_extraction<B, F>(
    session: &mut Session,
    config: &Config,
    build_backend: F,
) -> Result<usize>
where
    B: ExtractionBackend,
    F: FnOnce(&Config) -> Result<B>,
{
    let backend = match build_backend(config) {
        Ok(backend) => backend,
        Err(e @ AppError::MissingApiKey) => {
            warn!(kind = e.kind(), "APIキー未設定");
            session.report_missing_api_key();
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    run_extraction(session, &backend).await
}
