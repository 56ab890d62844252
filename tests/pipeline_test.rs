//! 抽出パイプラインテスト
//!
//! HTTPの代わりに固定応答のバックエンドを使い、セッション遷移を検証

use namelist_common::{GenerateContentRequest, Session, Status};
use namelist_ocr::analyzer::{run_configured_extraction, run_extraction, ExtractionBackend};
use namelist_ocr::config::Config;
use namelist_ocr::error::{AppError, Result};
use namelist_ocr::intake;
use std::cell::Cell;
use std::rc::Rc;
use std::path::Path;

struct FakeBackend {
    reply: std::result::Result<String, String>,
    calls: Cell<usize>,
}

impl FakeBackend {
    fn ok(text: &str) -> Self {
        Self { reply: Ok(text.to_string()), calls: Cell::new(0) }
    }

    fn failing(message: &str) -> Self {
        Self { reply: Err(message.to_string()), calls: Cell::new(0) }
    }
}

impl ExtractionBackend for FakeBackend {
    async fn generate_content(&self, request: &GenerateContentRequest) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        assert_eq!(request.contents.len(), 1);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(AppError::ApiCall(message.clone())),
        }
    }
}

fn session_with_image() -> Session {
    let image = intake::encode_image("names.png", Path::new("names.png"), b"\x89PNG\r\n\x1a\n0000")
        .expect("PNG判定に失敗");
    let mut session = Session::new();
    session.load_image(Some(image));
    session
}

/// 画像なしでは通信しない
#[tokio::test]
async fn test_no_image_makes_no_call() {
    let backend = FakeBackend::ok("[]");
    let mut session = Session::new();

    let result = run_extraction(&mut session, &backend).await;

    assert!(matches!(result, Err(AppError::Common(namelist_common::Error::NoImage))));
    assert_eq!(backend.calls.get(), 0);
    assert_eq!(session.status(), Status::Idle);
    assert!(!session.is_extracting());
}

/// 正常応答 → 正規化して結果に反映
#[tokio::test]
async fn test_successful_extraction_normalizes_rows() {
    let backend = FakeBackend::ok(
        r#"[
            {"firstName": "น.ส. สมหญิง", "lastName": " รักเรียน ", "address": "บ้านเลขที่ 123/45 หมู่ 2"},
            {"firstName": "นายสมชาย", "lastName": "ใจดี", "address": "9"}
        ]"#,
    );
    let mut session = session_with_image();

    let count = run_extraction(&mut session, &backend).await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(backend.calls.get(), 1);
    assert_eq!(session.status(), Status::Extracted);
    assert_eq!(session.status_text(), "ประมวลผลสำเร็จ");
    assert!(!session.is_extracting());

    let first = session.results().get(0).unwrap();
    assert_eq!(first.first_name, "นางสาวสมหญิง");
    assert_eq!(first.last_name, "รักเรียน");
    assert_eq!(first.address, "123/45");
    assert_eq!(session.results().get(1).unwrap().address, "9");
}

/// コードフェンス付き応答も受け付ける
#[tokio::test]
async fn test_fenced_response_accepted() {
    let backend = FakeBackend::ok(
        "ผลลัพธ์:\n```json\n[{\"firstName\":\"นายเอ\",\"lastName\":\"บี\",\"address\":\"1\"}]\n```",
    );
    let mut session = session_with_image();

    assert_eq!(run_extraction(&mut session, &backend).await.unwrap(), 1);
}

/// 不正な応答 → 失敗ステータス、表は空
#[tokio::test]
async fn test_malformed_response_leaves_table_empty() {
    let mut session = session_with_image();
    run_extraction(&mut session, &FakeBackend::ok(r#"[{"firstName":"ก","lastName":"ข","address":"1"}]"#))
        .await
        .unwrap();
    assert_eq!(session.results().len(), 1);

    let backend = FakeBackend::ok("ขออภัย ไม่สามารถอ่านภาพได้");
    let result = run_extraction(&mut session, &backend).await;

    let err = result.unwrap_err();
    assert_eq!(err.kind(), "parse");
    assert_eq!(session.status(), Status::ExtractionFailed);
    assert_eq!(session.status_text(), "เกิดข้อผิดพลาด กรุณาลองใหม่อีกครั้ง");
    assert!(session.results().is_empty());
    assert!(!session.is_extracting());
    assert!(session.pending_image().is_some());
}

/// 通信エラー → 失敗ステータス（リトライしない）
#[tokio::test]
async fn test_transport_error_fails_once() {
    let backend = FakeBackend::failing("API error: 500 Internal Server Error");
    let mut session = session_with_image();

    let err = run_extraction(&mut session, &backend).await.unwrap_err();

    assert_eq!(err.kind(), "transport");
    assert_eq!(backend.calls.get(), 1);
    assert_eq!(session.status(), Status::ExtractionFailed);
    assert!(session.results().is_empty());
}

/// 空配列は成功（0行）
#[tokio::test]
async fn test_empty_array_is_success() {
    let backend = FakeBackend::ok("[]");
    let mut session = session_with_image();

    assert_eq!(run_extraction(&mut session, &backend).await.unwrap(), 0);
    assert_eq!(session.status(), Status::Extracted);
    assert!(session.results().is_empty());
}

/// 実行中は二重に開始しない
#[tokio::test]
async fn test_busy_session_rejects_second_run() {
    let backend = FakeBackend::ok("[]");
    let mut session = session_with_image();
    session.begin_extraction().unwrap();

    let result = run_extraction(&mut session, &backend).await;

    assert!(matches!(result, Err(AppError::Common(namelist_common::Error::Busy(_)))));
    assert_eq!(backend.calls.get(), 0);
    assert!(session.is_extracting());
}

/// 呼び出し回数を外から確認できるバックエンド
struct CountingBackend {
    calls: Rc<Cell<usize>>,
}

impl ExtractionBackend for CountingBackend {
    async fn generate_content(&self, _request: &GenerateContentRequest) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok("[]".to_string())
    }
}

/// APIキー未設定 → ステータスのみ設定し、通信しない
#[tokio::test]
async fn test_missing_api_key_reports_status_without_call() {
    let calls = Rc::new(Cell::new(0));
    let built = Cell::new(false);
    let mut session = session_with_image();

    let result = run_configured_extraction(&mut session, &Config::default(), |_| {
        built.set(true);
        Err::<CountingBackend, _>(AppError::MissingApiKey)
    })
    .await;

    assert!(matches!(result, Err(AppError::MissingApiKey)));
    assert!(built.get());
    assert_eq!(calls.get(), 0);
    assert_eq!(session.status(), Status::MissingApiKey);
    assert_eq!(session.status_text(), "ยังไม่ได้ตั้งค่า Gemini API key");
    assert!(!session.is_extracting());
    assert!(session.pending_image().is_some());
}

/// キー以外の設定エラーは未設定扱いにしない
#[tokio::test]
async fn test_other_config_error_keeps_status() {
    let mut session = session_with_image();

    let result = run_configured_extraction(&mut session, &Config::default(), |_| {
        Err::<CountingBackend, _>(AppError::Config("bad timeout".into()))
    })
    .await;

    assert!(matches!(result, Err(AppError::Config(_))));
    assert_eq!(session.status(), Status::Idle);
}

/// バックエンドが作れれば1回だけ呼ぶ
#[tokio::test]
async fn test_configured_extraction_calls_backend_once() {
    let calls = Rc::new(Cell::new(0));
    let mut session = session_with_image();
    let config = Config {
        api_key: Some("test-key".into()),
        ..Default::default()
    };

    let count = run_configured_extraction(&mut session, &config, |c| {
        assert!(c.has_api_key());
        Ok(CountingBackend { calls: calls.clone() })
    })
    .await
    .unwrap();

    assert_eq!(count, 0);
    assert_eq!(calls.get(), 1);
    assert_eq!(session.status(), Status::Extracted);
}
