use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "namelist-ocr")]
#[command(about = "สแกนรายชื่อภาษาไทยจากรูปภาพด้วย AI (ชื่อ / นามสกุล / บ้านเลขที่)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// แสดง log ละเอียด
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// สแกนรูปภาพรายชื่อด้วย AI แล้วแสดงเป็นตาราง
    Scan {
        /// ไฟล์รูปภาพ
        #[arg(required = true)]
        image: PathBuf,

        /// บันทึกผลลัพธ์เป็น JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// แก้ไขตารางก่อนส่งออก
        #[arg(short, long)]
        edit: bool,

        #[command(flatten)]
        sinks: SinkArgs,
    },

    /// แก้ไขผลลัพธ์ JSON ที่บันทึกไว้
    Edit {
        /// ไฟล์ JSON
        #[arg(required = true)]
        input: PathBuf,

        /// ไฟล์ปลายทาง (ค่าเริ่มต้น: เขียนทับ)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ส่งออกผลลัพธ์ JSON ที่บันทึกไว้
    Export {
        /// ไฟล์ JSON
        #[arg(required = true)]
        input: PathBuf,

        #[command(flatten)]
        sinks: SinkArgs,
    },

    /// แสดง/แก้ไขการตั้งค่า
    Config {
        /// ตั้งค่า Gemini API key
        #[arg(long)]
        set_api_key: Option<String>,

        /// ตั้งค่า Google Apps Script Web App URL
        #[arg(long)]
        set_sheet_url: Option<String>,

        /// ลบ Web App URL ที่บันทึกไว้
        #[arg(long)]
        clear_sheet_url: bool,

        /// แสดงการตั้งค่า
        #[arg(long)]
        show: bool,
    },
}

/// ปลายทางการส่งออก
#[derive(Args, Debug, Clone, Default)]
pub struct SinkArgs {
    /// คัดลอกเป็นข้อความคั่นด้วย Tab
    #[arg(long)]
    pub copy: bool,

    /// บันทึกไฟล์ .txt สำหรับ Notepad (ค่าเริ่มต้น: โฟลเดอร์ปัจจุบัน)
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
    pub notepad: Option<PathBuf>,

    /// ส่งข้อมูลลง Google Sheets
    #[arg(long)]
    pub sheet: bool,

    /// Web App URL (ใช้แทนค่าที่บันทึกไว้)
    #[arg(long)]
    pub sheet_url: Option<String>,
}

impl SinkArgs {
    pub fn any(&self) -> bool {
        self.copy || self.notepad.is_some() || self.sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan_with_sinks() {
        let cli = Cli::parse_from([
            "namelist-ocr", "scan", "list.jpg", "--copy", "--notepad", "--sheet",
        ]);
        match cli.command {
            Commands::Scan { image, sinks, edit, .. } => {
                assert_eq!(image, PathBuf::from("list.jpg"));
                assert!(!edit);
                assert!(sinks.copy);
                assert!(sinks.sheet);
                assert_eq!(sinks.notepad, Some(PathBuf::from(".")));
            }
            _ => panic!("Expected Scan"),
        }
    }

    #[test]
    fn test_parse_export_notepad_dir() {
        let cli = Cli::parse_from(["namelist-ocr", "export", "out.json", "--notepad", "/tmp/out"]);
        match cli.command {
            Commands::Export { sinks, .. } => {
                assert_eq!(sinks.notepad, Some(PathBuf::from("/tmp/out")));
                assert!(!sinks.copy);
                assert!(sinks.any());
            }
            _ => panic!("Expected Export"),
        }
    }

    #[test]
    fn test_sink_args_none() {
        assert!(!SinkArgs::default().any());
    }
}
