use clap::Parser;
use drone_fleet_admin::utils::error::ErrorSeverity;
use drone_fleet_admin::utils::logger;
use drone_fleet_admin::{app, CliConfig};
use std::io::{BufRead, Write};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.json_logs);

    tracing::info!("Starting fleet-admin CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 刪除前先確認
    if let Some((kind, id)) = config.delete_target() {
        let question = format!("Weet je zeker dat je {} {} wilt verwijderen?", kind, id);
        if !config.yes && !confirm(&question) {
            println!("Geannuleerd.");
            return;
        }
    }

    match app::run(&config).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,   // 可重試
                ErrorSeverity::High => 1,     // 請求錯誤
                ErrorSeverity::Critical => 3, // 系統錯誤
            };
            std::process::exit(exit_code);
        }
    }
}

fn confirm(question: &str) -> bool {
    print!("{} [y/N] ", question);
    if std::io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "j" | "ja"),
        Err(_) => false,
    }
}
