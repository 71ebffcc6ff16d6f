use clap::Parser;
use mcp_probe::utils::{logger, validation::Validate};
use mcp_probe::{CliConfig, ConnectivityProbe, ConsoleReporter, Credentials, DiagnosticRunner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mcp-probe");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 讀取憑證（僅在啟動時讀一次）
    let credentials = Credentials::from_env();
    match credentials.supabase_url() {
        Some(url) => tracing::debug!("SUPABASE_URL is set to {}", url),
        None => tracing::debug!("SUPABASE_URL is not set"),
    }
    if credentials.anon_key().is_none() {
        tracing::warn!("SUPABASE_ANON_KEY not set; requests will be sent unauthenticated");
    }

    // 創建探測器並執行
    let reporter = ConsoleReporter::new();
    let probe = ConnectivityProbe::new(reporter.clone(), config, credentials);
    let runner = DiagnosticRunner::new_with_monitoring(probe, reporter, monitor_enabled);

    let summary = runner.run().await;
    tracing::info!(
        "Probe finished: reachability={:?}, project={:?}",
        summary.reachability.status(),
        summary.project.status()
    );

    // 請求結果不影響退出碼
    Ok(())
}
