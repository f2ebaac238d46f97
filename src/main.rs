use clap::Parser;
use daily_info::config::LogFormat;
use daily_info::core::ConfigProvider;
use daily_info::utils::logger;
use daily_info::{CliConfig, DailyInfoEngine, HttpHoroscopeSource, LocalStorage, RunOptions};
use std::io::Write;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting daily-info CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入並驗證配置
    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let birth_date = config.resolve_birth_date(&settings);
    let options = RunOptions {
        show_source: config.show_source,
        ..if config.dry_run {
            RunOptions::dry_run()
        } else {
            RunOptions::default()
        }
    };

    let storage = LocalStorage::new(settings.data_dir().to_string());
    let engine =
        DailyInfoEngine::new_with_options(storage, settings, HttpHoroscopeSource::new(), options);

    let today = chrono::Local::now().date_naive();
    let report = engine
        .run(Some(&birth_date), config.target_date.as_deref(), today)
        .await;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", report)?;

    if config.show_logs {
        let log = report.diagnostics();
        if !log.is_empty() {
            writeln!(stdout, "{}", log)?;
        }
    }
    stdout.flush()?;

    Ok(())
}
