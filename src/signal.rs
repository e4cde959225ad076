use log::warn;
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 設定 Ctrl-C 處理器，回傳的旗標會在收到中斷時設為 true
///
/// 轉檔工作之間會檢查此旗標；處理器無法註冊時只記錄警告。
#[must_use]
pub fn setup_shutdown_signal() -> Arc<AtomicBool> {
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let signal_clone = Arc::clone(&shutdown_signal);

    if let Err(e) = ctrlc::set_handler(move || {
        signal_clone.store(true, Ordering::SeqCst);
        eprintln!("\n{}", t!("signal.received"));
    }) {
        warn!("無法設定 Ctrl-C 處理器: {e}");
    }

    shutdown_signal
}
