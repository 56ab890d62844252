//! Google Sheets 連携（Apps Script Web App への POST）
//!
//! ブラウザの no-cors と違い応答を読めるので、2xx 以外は送信失敗として扱う。

use crate::error::{AppError, Result};
use namelist_common::{to_webhook_body, Session};
use std::time::Duration;
use tracing::{info, warn};

/// JSON本文をPOSTし、HTTPステータスを返す
#[allow(async_fn_in_trait)]
pub trait SheetTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16>;
}

pub struct HttpSheetTransport {
    http: reqwest::Client,
}

impl HttpSheetTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;
        Ok(Self { http })
    }
}

impl SheetTransport for HttpSheetTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16> {
        let response = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::ApiCall(e.without_url().to_string()))?;

        Ok(response.status().as_u16())
    }
}

/// 結果を Web App URL へ送信する
///
/// - URL未設定: `MissingSheetUrl`（通信しない、ステータス不変）
/// - 結果が空: `Ok(false)`
/// - 2xx 以外・通信失敗: ステータスを失敗にしてエラー
pub async fn send_to_sheet<T: SheetTransport>(
    session: &mut Session,
    transport: &T,
    url: Option<&str>,
) -> Result<bool> {
    let url = url.map(str::trim).unwrap_or_default();
    let body = to_webhook_body(session.results().rows())?;

    if !session.begin_sheet_export(url)? {
        return Ok(false);
    }

    match transport.post_json(url, body).await {
        Ok(status) if (200..300).contains(&status) => {
            session.complete_sheet_export();
            info!(status, rows = session.results().len(), "Google Sheetsへ送信完了");
            Ok(true)
        }
        Ok(status) => {
            session.fail_sheet_export();
            warn!(status, "Google Sheets送信失敗");
            Err(AppError::SheetDelivery(format!("HTTP {}", status)))
        }
        Err(e) => {
            session.fail_sheet_export();
            warn!(kind = e.kind(), error = %e, "Google Sheets送信失敗");
            Err(e)
        }
    }
}
