use crate::config::ConversionJob;
use std::path::PathBuf;

/// 單一工作的執行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted {
        source: PathBuf,
        destination: PathBuf,
        /// 來源是透過不分大小寫比對找到的
        case_insensitive_match: bool,
    },
    NotFound {
        searched_dir: PathBuf,
    },
    Failed {
        source: PathBuf,
        error: String,
    },
}

impl ConversionOutcome {
    #[must_use]
    pub const fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

#[derive(Debug, Clone)]
pub struct JobReport {
    pub job: ConversionJob,
    pub outcome: ConversionOutcome,
}

/// 整批轉檔結果
#[derive(Debug, Default)]
pub struct ConversionSummary {
    /// 依工作順序排列的結果
    pub reports: Vec<JobReport>,
    /// 是否因中斷訊號而提前結束
    pub interrupted: bool,
}

impl ConversionSummary {
    #[must_use]
    pub fn converted(&self) -> usize {
        self.count(|o| matches!(o, ConversionOutcome::Converted { .. }))
    }

    #[must_use]
    pub fn not_found(&self) -> usize {
        self.count(|o| matches!(o, ConversionOutcome::NotFound { .. }))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ConversionOutcome::Failed { .. }))
    }

    /// 實際執行過的工作數（中斷後略過的不計）
    #[must_use]
    pub fn total_jobs(&self) -> usize {
        self.reports.len()
    }

    fn count(&self, predicate: impl Fn(&ConversionOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| predicate(&r.outcome)).count()
    }
}
