use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 預設的 logo 圖片資料夾（輸入與輸出相同）
pub const DEFAULT_LOGO_DIR: &str = "public/images/logo";

/// 介面語言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

/// 單一轉檔工作：來源檔名 -> 目標檔名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionJob {
    pub source_name: String,
    pub dest_name: String,
}

impl ConversionJob {
    pub fn new(source_name: impl Into<String>, dest_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            dest_name: dest_name.into(),
        }
    }

    /// 預設的兩個 logo 轉檔工作
    #[must_use]
    pub fn default_logo_jobs() -> Vec<Self> {
        vec![
            Self::new("logo-dark.png", "logo-dark.webp"),
            Self::new("logo-light.png", "logo-light.webp"),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub jobs: Vec<ConversionJob>,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_LOGO_DIR),
            output_dir: PathBuf::from(DEFAULT_LOGO_DIR),
            jobs: ConversionJob::default_logo_jobs(),
        }
    }
}

/// 使用者設定（settings.json）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    pub conversion: ConversionSettings,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: UserSettings,
}
