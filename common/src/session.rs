//! セッション状態
//!
//! 画像・抽出結果・ステータス・実行中フラグを1つの構造体にまとめ、
//! 各操作は名前付きの遷移メソッドで状態を書き換える。
//!
//! 抽出失敗時の扱い: 開始時点で結果を消すため、失敗すると表は空になる。

use crate::error::{Error, Result};
use crate::types::{PendingImage, ResultSet, Row, RowField};
use std::time::{Duration, Instant};

/// 「コピーしました」表示の持続時間
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

/// 現在のステータス（履歴は持たない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Extracting,
    Extracted,
    ExtractionFailed,
    MissingApiKey,
    Sending,
    Sent,
    SendFailed,
}

impl Status {
    pub fn message(&self) -> &'static str {
        match self {
            Status::Idle => "",
            Status::Extracting => "กำลังวิเคราะห์และแยกข้อมูลด้วย AI...",
            Status::Extracted => "ประมวลผลสำเร็จ",
            Status::ExtractionFailed => "เกิดข้อผิดพลาด กรุณาลองใหม่อีกครั้ง",
            Status::MissingApiKey => "ยังไม่ได้ตั้งค่า Gemini API key",
            Status::Sending => "กำลังส่งข้อมูลไปยัง Google Sheets...",
            Status::Sent => "ส่งข้อมูลไปยัง Google Sheets เรียบร้อยแล้ว!",
            Status::SendFailed => "เกิดข้อผิดพลาดในการส่งข้อมูล",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// 1ユーザー・1セッションの状態
#[derive(Debug, Clone, Default)]
pub struct Session {
    pending_image: Option<PendingImage>,
    results: ResultSet,
    status: Status,
    extracting: bool,
    saving: bool,
    copied_at: Option<Instant>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みの結果から始める（edit / export 用）
    pub fn with_results(results: ResultSet) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }

    pub fn pending_image(&self) -> Option<&PendingImage> {
        self.pending_image.as_ref()
    }

    /// 画像を差し替える。`None` なら何もしない
    ///
    /// 既存の結果はそのまま残る（次の抽出開始時に消える）。
    pub fn load_image(&mut self, image: Option<PendingImage>) {
        if let Some(image) = image {
            self.pending_image = Some(image);
        }
    }

    /// 画像・結果・ステータスをすべて消す
    pub fn reset(&mut self) {
        self.pending_image = None;
        self.results.clear();
        self.status = Status::Idle;
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn set_field(&mut self, index: usize, field: RowField, value: impl Into<String>) -> Result<()> {
        self.results.set_field(index, field, value)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn status_text(&self) -> &'static str {
        self.status.message()
    }

    pub fn is_extracting(&self) -> bool {
        self.extracting
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    // =============================================
    // 抽出
    // =============================================

    /// 抽出開始
    ///
    /// 画像がなければ何も変えずに `NoImage`、実行中なら `Busy`。
    pub fn begin_extraction(&mut self) -> Result<()> {
        if self.pending_image.is_none() {
            return Err(Error::NoImage);
        }
        if self.extracting {
            return Err(Error::Busy("extraction"));
        }

        self.extracting = true;
        self.results.clear();
        self.status = Status::Extracting;
        Ok(())
    }

    pub fn complete_extraction(&mut self, rows: Vec<Row>) {
        self.results.replace(rows);
        self.extracting = false;
        self.status = Status::Extracted;
    }

    pub fn fail_extraction(&mut self) {
        self.extracting = false;
        self.status = Status::ExtractionFailed;
    }

    pub fn report_missing_api_key(&mut self) {
        self.status = Status::MissingApiKey;
    }

    // =============================================
    // Webhook送信
    // =============================================

    /// 送信開始
    ///
    /// URLが空なら `MissingSheetUrl`（ステータスは変えない）。
    /// 結果が空なら `Ok(false)` で何もしない。実行中なら `Busy`。
    pub fn begin_sheet_export(&mut self, url: &str) -> Result<bool> {
        if url.trim().is_empty() {
            return Err(Error::MissingSheetUrl);
        }
        if self.results.is_empty() {
            return Ok(false);
        }
        if self.saving {
            return Err(Error::Busy("sheet export"));
        }

        self.saving = true;
        self.status = Status::Sending;
        Ok(true)
    }

    pub fn complete_sheet_export(&mut self) {
        self.saving = false;
        self.status = Status::Sent;
    }

    pub fn fail_sheet_export(&mut self) {
        self.saving = false;
        self.status = Status::SendFailed;
    }

    // =============================================
    // クリップボード
    // =============================================

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// コピー直後 `COPY_ACK_DURATION` の間だけ true
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .map(|at| now.saturating_duration_since(at) < COPY_ACK_DURATION)
            .unwrap_or(false)
    }
}
