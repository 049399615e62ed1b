use clap::Parser;
use primes_json::utils::error::PrimeError;
use primes_json::utils::{logger, validation::Validate};
use primes_json::{CliConfig, RunConfig};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting primes-json CLI");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        report_failure(&e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig) -> Result<(), PrimeError> {
    // 取得設定（設定檔、參數或互動輸入）
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let resolved = cli.resolve(&mut input, &mut output)?;
    let config = resolved.run;
    tracing::info!("✅ Configuration resolved: count={}, output={}", config.count, config.output_path);

    if cli.dry_run {
        // 驗證配置
        config.validate()?;
        tracing::info!("🔍 DRY RUN MODE - No file will be written");
        display_dry_run(&config);
        return Ok(());
    }

    if resolved.monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    println!("{}", config.status_line());
    let report = primes_json::run(config, resolved.monitor_enabled)?;

    tracing::info!("✅ Prime generation completed successfully!");
    println!("✅ Wrote {} primes", report.primes_written);
    println!("📁 Output saved to: {}", report.output_path);

    Ok(())
}

fn display_dry_run(config: &RunConfig) {
    let preview = primes_json::generate(config.count.min(10));
    println!("🔍 Would write {} primes to {}", config.count.max(0), config.output_path);
    println!("   First values: {:?}", preview);
}

fn report_failure(e: &PrimeError) {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Prime generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
}
