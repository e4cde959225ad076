use super::job_runner::run_jobs;
use super::outcome::{ConversionOutcome, ConversionSummary};
use crate::config::ConversionSettings;
use crate::tools::{WEBP_QUALITY, ensure_directory_exists};
use anyhow::Result;
use console::style;
use log::info;
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Logo 轉 WEBP 元件
pub struct WebpConverter {
    settings: ConversionSettings,
    shutdown_signal: Arc<AtomicBool>,
}

impl WebpConverter {
    pub const fn new(settings: ConversionSettings, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            settings,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<ConversionSummary> {
        println!("{}", style(t!("converter.title")).cyan().bold());

        if self.settings.jobs.is_empty() {
            println!("{}", style(t!("converter.no_jobs")).yellow());
            return Ok(ConversionSummary::default());
        }

        // 輸入與輸出相同時不建立資料夾，避免在錯誤的工作目錄下產生空資料夾
        if self.settings.output_dir != self.settings.input_dir {
            ensure_directory_exists(&self.settings.output_dir)?;
        }

        info!(
            "開始轉檔: {} 個工作，來源 {}，輸出 {}，品質 {}",
            self.settings.jobs.len(),
            self.settings.input_dir.display(),
            self.settings.output_dir.display(),
            WEBP_QUALITY
        );

        let summary = run_jobs(
            &self.settings.jobs,
            &self.settings.input_dir,
            &self.settings.output_dir,
            &self.shutdown_signal,
        );

        self.print_summary(&summary);

        Ok(summary)
    }

    fn print_summary(&self, summary: &ConversionSummary) {
        println!();
        println!("{}", style(t!("summary.title")).cyan().bold());
        println!(
            "{}",
            t!("summary.converted", count = style(summary.converted()).green())
        );

        if summary.not_found() > 0 {
            println!(
                "{}",
                t!("summary.not_found", count = style(summary.not_found()).yellow())
            );
        }

        if summary.failed() > 0 {
            println!(
                "{}",
                t!("summary.failed", count = style(summary.failed()).red())
            );
            for report in &summary.reports {
                if let ConversionOutcome::Failed { error, .. } = &report.outcome {
                    println!(
                        "  {} {}: {}",
                        style("•").dim(),
                        report.job.source_name,
                        error
                    );
                }
            }
        }

        if summary.interrupted {
            println!("{}", style(t!("summary.interrupted")).yellow());
        }

        info!(
            "轉檔完成 - 成功: {}, 找不到: {}, 失敗: {}",
            summary.converted(),
            summary.not_found(),
            summary.failed()
        );
    }
}
