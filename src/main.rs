use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use namelist_common::{Session, Status, COPY_ACK_DURATION};
use namelist_ocr::{analyzer, app, cli, config, editor, error, intake, sinks};
use cli::{Cli, Commands, SinkArgs};
use config::Config;
use error::{AppError, Result};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Scan { image, output, edit, sinks } => {
            println!("📋 namelist-ocr - สแกนรายชื่อ\n");

            // 1. 画像読み込み
            let mut session = Session::new();
            session.load_image(intake::load_image(Some(image.as_path()))?);
            if let Some(pending) = session.pending_image() {
                println!(
                    "✔ {} ({}, {} bytes)\n",
                    pending.preview.file_name, pending.preview.mime_type, pending.preview.byte_len
                );
            }

            // 2. AI抽出
            let spinner = create_spinner(Status::Extracting.message());
            let extracted =
                analyzer::run_configured_extraction(&mut session, &config, analyzer::GeminiClient::from_config)
                    .await;
            spinner.finish_and_clear();

            match extracted {
                Ok(count) => println!("✔ {} ({} แถว, {})\n", session.status_text(), count, config.model),
                Err(e) => {
                    println!("{}", session.status_text());
                    return Err(e);
                }
            }

            editor::print_table(session.results());

            // 3. 編集
            if edit {
                editor::run_interactive_edit(&mut session)?;
            }

            // 4. 保存・送信
            if let Some(output) = output {
                std::fs::write(&output, session.results().to_json_pretty()?)?;
                println!("\n✔ บันทึก JSON: {}", output.display());
            }

            export_session(&mut session, &sinks, &config).await?;
        }

        Commands::Edit { input, output } => {
            println!("✏️  namelist-ocr - แก้ไขรายชื่อ\n");
            editor::edit_file(&input, output.as_deref())?;
        }

        Commands::Export { input, sinks } => {
            println!("📤 namelist-ocr - ส่งออก\n");

            let mut session = Session::with_results(editor::load_results(&input)?);
            editor::print_table(session.results());

            if !sinks.any() {
                println!("\nระบุปลายทาง: --copy / --notepad [DIR] / --sheet");
                return Ok(());
            }

            export_session(&mut session, &sinks, &config).await?;
        }

        Commands::Config { set_api_key, set_sheet_url, clear_sheet_url, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(key) = set_api_key {
                config.set_api_key(key);
                changed = true;
                println!("✔ ตั้งค่า API key แล้ว");
            }

            if let Some(url) = set_sheet_url {
                config.set_sheet_url(url);
                changed = true;
                println!("✔ ตั้งค่า Web App URL แล้ว");
            }

            if clear_sheet_url {
                config.clear_sheet_url();
                changed = true;
                println!("✔ ลบ Web App URL แล้ว");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("การตั้งค่า:");
                println!("  ไฟล์: {}", Config::config_path()?.display());
                println!("  โมเดล: {}", config.model);
                println!("  API key: {}", if config.has_api_key() { "ตั้งค่าแล้ว" } else { "ยังไม่ได้ตั้งค่า" });
                println!("  Web App URL: {}", config.sheet_url().unwrap_or("-"));
            }
        }
    }

    Ok(())
}

/// 指定されたエクスポート先を実行し、コピーした場合は確認表示の間クリップボードを保持する
async fn export_session(session: &mut Session, args: &SinkArgs, config: &Config) -> Result<()> {
    if !args.any() {
        return Ok(());
    }

    if session.results().is_empty() {
        println!("\nยังไม่มีข้อมูล");
        return Ok(());
    }

    // 入力されたURLは次回以降も使う
    if let Some(url) = args.sheet_url.as_deref().filter(|u| !u.trim().is_empty()) {
        if config.sheet_url() != Some(url.trim()) {
            let mut updated = config.clone();
            updated.set_sheet_url(url.trim().to_string());
            updated.save()?;
        }
    }

    println!();
    let mut clipboard = sinks::SystemClipboard::new();
    let transport = sinks::HttpSheetTransport::new(Duration::from_secs(config.timeout_seconds))?;

    let report = app::run_sinks(session, args, config, &mut clipboard, &transport).await;
    if report.errors.iter().any(|e| matches!(e, AppError::SheetDelivery(_) | AppError::ApiCall(_))) {
        println!("{}", session.status_text());
    }

    // 後続の失敗に関係なく、コピーした内容は確認表示の間保持する
    if report.copied {
        tokio::time::sleep(COPY_ACK_DURATION).await;
    }

    report.into_result()
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
