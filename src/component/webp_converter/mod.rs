//! Logo 圖片轉 WEBP 元件
//!
//! 依設定的工作清單逐一轉檔，來源檔不存在時改以不分大小寫的方式在資料夾中尋找

mod job_runner;
mod main;
mod outcome;

pub use job_runner::{convert_job, run_jobs};
pub use main::WebpConverter;
pub use outcome::{ConversionOutcome, ConversionSummary, JobReport};
