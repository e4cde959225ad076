use console::style;
use log::{info, warn};
use logo_webp_converter::component::WebpConverter;
use logo_webp_converter::config::Config;
use logo_webp_converter::init;
use logo_webp_converter::signal::setup_shutdown_signal;
use rust_i18n::t;

rust_i18n::i18n!("locales", fallback = "en-US");

fn main() {
    init::init();
    let shutdown_signal = setup_shutdown_signal();

    let config = Config::new();
    rust_i18n::set_locale(config.settings.language.as_str());

    let converter = WebpConverter::new(config.settings.conversion, shutdown_signal);

    // 個別工作的失敗已記錄在摘要中，不影響結束代碼
    if let Err(e) = converter.run() {
        warn!("Program error: {e:#}");
        eprintln!("{} {e:#}", style(t!("main.error_prefix")).red().bold());
        std::process::exit(1);
    }

    info!("Program exited normally");
}
