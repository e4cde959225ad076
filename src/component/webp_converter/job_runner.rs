use super::outcome::{ConversionOutcome, ConversionSummary, JobReport};
use crate::config::ConversionJob;
use crate::tools::{convert_to_webp, find_case_insensitive};
use console::style;
use log::{debug, info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 依序執行所有工作，單一工作失敗不影響後續工作
pub fn run_jobs(
    jobs: &[ConversionJob],
    input_dir: &Path,
    output_dir: &Path,
    shutdown_signal: &Arc<AtomicBool>,
) -> ConversionSummary {
    let mut summary = ConversionSummary::default();

    for job in jobs {
        if shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，略過剩餘 {} 個工作", jobs.len() - summary.reports.len());
            summary.interrupted = true;
            break;
        }

        let outcome = convert_job(job, input_dir, output_dir);
        summary.reports.push(JobReport {
            job: job.clone(),
            outcome,
        });
    }

    summary
}

/// 執行單一轉檔工作
pub fn convert_job(job: &ConversionJob, input_dir: &Path, output_dir: &Path) -> ConversionOutcome {
    let source = input_dir.join(&job.source_name);
    let destination = output_dir.join(&job.dest_name);

    if source.exists() {
        println!(
            "{}",
            t!(
                "converter.converting",
                source = job.source_name,
                dest = job.dest_name
            )
        );
        return encode(job, &job.source_name, source, destination, false);
    }

    println!(
        "{}",
        style(t!("converter.not_found_directly", source = job.source_name)).dim()
    );

    match find_case_insensitive(input_dir, &job.source_name) {
        Ok(Some(found)) => {
            let found_name = found
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!(
                "{}",
                t!(
                    "converter.found_case_insensitive",
                    found = found_name,
                    source = job.source_name
                )
            );
            encode(job, &found_name, found, destination, true)
        }
        Ok(None) => {
            println!(
                "{}",
                style(t!(
                    "converter.could_not_find",
                    source = job.source_name,
                    dir = input_dir.display()
                ))
                .yellow()
            );
            info!("找不到來源檔: {}", source.display());
            ConversionOutcome::NotFound {
                searched_dir: input_dir.to_path_buf(),
            }
        }
        Err(e) => {
            let error = format!("{e:#}");
            println!(
                "{}",
                style(t!(
                    "converter.convert_error",
                    source = job.source_name,
                    error = error
                ))
                .red()
            );
            warn!("無法列出資料夾 {}: {error}", input_dir.display());
            ConversionOutcome::Failed { source, error }
        }
    }
}

/// 轉檔並輸出結果訊息；`display_name` 為實際使用的來源檔名
fn encode(
    job: &ConversionJob,
    display_name: &str,
    source: PathBuf,
    destination: PathBuf,
    case_insensitive_match: bool,
) -> ConversionOutcome {
    match convert_to_webp(&source, &destination) {
        Ok(()) => {
            println!(
                "{}",
                style(t!(
                    "converter.converted",
                    source = display_name,
                    dest = job.dest_name
                ))
                .green()
            );
            debug!("轉檔完成: {} -> {}", source.display(), destination.display());
            ConversionOutcome::Converted {
                source,
                destination,
                case_insensitive_match,
            }
        }
        Err(e) => {
            let error = format!("{e:#}");
            println!(
                "{}",
                style(t!(
                    "converter.convert_error",
                    source = display_name,
                    error = error
                ))
                .red()
            );
            warn!("轉檔失敗 {}: {error}", source.display());
            ConversionOutcome::Failed { source, error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::TempDir;

    fn write_png(path: &Path) {
        RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]))
            .save(path)
            .unwrap();
    }

    fn no_signal() -> Arc<AtomicBool> {
        Arc::new(AtomicBool::new(false))
    }

    #[test]
    fn test_exact_match_converts() {
        let temp_dir = TempDir::new().unwrap();
        write_png(&temp_dir.path().join("logo-dark.png"));
        let job = ConversionJob::new("logo-dark.png", "logo-dark.webp");

        let outcome = convert_job(&job, temp_dir.path(), temp_dir.path());

        assert_eq!(
            outcome,
            ConversionOutcome::Converted {
                source: temp_dir.path().join("logo-dark.png"),
                destination: temp_dir.path().join("logo-dark.webp"),
                case_insensitive_match: false,
            }
        );
        assert!(temp_dir.path().join("logo-dark.webp").exists());
    }

    #[test]
    fn test_case_insensitive_fallback_converts() {
        let temp_dir = TempDir::new().unwrap();
        write_png(&temp_dir.path().join("Logo-Dark.png"));
        let job = ConversionJob::new("logo-dark.png", "logo-dark.webp");

        let outcome = convert_job(&job, temp_dir.path(), temp_dir.path());

        assert!(outcome.is_converted());
        // 大小寫不敏感的檔案系統上會直接命中，不經過比對
        if let ConversionOutcome::Converted { source, .. } = &outcome {
            assert!(
                source.ends_with("Logo-Dark.png") || source.ends_with("logo-dark.png")
            );
        }
        assert!(temp_dir.path().join("logo-dark.webp").exists());
    }

    #[test]
    fn test_missing_source_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let job = ConversionJob::new("logo-light.png", "logo-light.webp");

        let outcome = convert_job(&job, temp_dir.path(), temp_dir.path());

        assert_eq!(
            outcome,
            ConversionOutcome::NotFound {
                searched_dir: temp_dir.path().to_path_buf(),
            }
        );
        assert!(!temp_dir.path().join("logo-light.webp").exists());
    }

    #[test]
    fn test_corrupt_fallback_source_is_isolated() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("LOGO-DARK.PNG"), "garbage").unwrap();
        write_png(&temp_dir.path().join("logo-light.png"));
        let jobs = ConversionJob::default_logo_jobs();

        let summary = run_jobs(&jobs, temp_dir.path(), temp_dir.path(), &no_signal());

        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.converted(), 1);
        assert!(temp_dir.path().join("logo-light.webp").exists());
    }

    #[test]
    fn test_unreadable_input_dir_is_failure() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let job = ConversionJob::new("logo-dark.png", "logo-dark.webp");

        let outcome = convert_job(&job, &missing, temp_dir.path());

        assert!(matches!(outcome, ConversionOutcome::Failed { .. }));
    }

    #[test]
    fn test_interrupted_run_skips_remaining_jobs() {
        let temp_dir = TempDir::new().unwrap();
        write_png(&temp_dir.path().join("logo-dark.png"));
        let signal = Arc::new(AtomicBool::new(true));

        let summary = run_jobs(
            &ConversionJob::default_logo_jobs(),
            temp_dir.path(),
            temp_dir.path(),
            &signal,
        );

        assert!(summary.interrupted);
        assert_eq!(summary.total_jobs(), 0);
        assert!(!temp_dir.path().join("logo-dark.webp").exists());
    }

    #[test]
    fn test_status_messages_render() {
        let converted = t!(
            "converter.converted",
            locale = "en-US",
            source = "logo-dark.png",
            dest = "logo-dark.webp"
        );
        assert_eq!(converted, "Successfully converted logo-dark.png to logo-dark.webp");

        let missing = t!(
            "converter.could_not_find",
            locale = "en-US",
            source = "logo-light.png",
            dir = "public/images/logo"
        );
        assert_eq!(missing, "Could not find logo-light.png in public/images/logo");

        let failed = t!(
            "converter.convert_error",
            locale = "en-US",
            source = "logo-dark.png",
            error = "boom"
        );
        assert_eq!(failed, "Error converting logo-dark.png: boom");

        let missing_zh = t!(
            "converter.could_not_find",
            locale = "zh-TW",
            source = "logo-light.png",
            dir = "public/images/logo"
        );
        assert_eq!(missing_zh, "在 public/images/logo 中找不到 logo-light.png");
    }
}
