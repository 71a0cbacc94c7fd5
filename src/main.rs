use anyhow::Context;
use clap::Parser;
use manosaba_config::utils::logger::{self, LogFormat};
use manosaba_config::{Action, CliConfig, ConfigError, ProjectConfig, ProjectSettings};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    let log_format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, log_format);

    tracing::debug!("CLI config: {:?}", cli);

    // 載入設定 (預設值 + 可選的覆寫檔)
    let settings = match &cli.config {
        Some(path) => match ProjectSettings::from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                report_config_error(&e);
                std::process::exit(1);
            }
        },
        None => ProjectSettings::default(),
    };

    let config = ProjectConfig::new(&settings);

    match cli.action() {
        Action::GetConfig => {
            let json = config
                .to_json_pretty()
                .context("failed to serialize configuration")?;
            println!("{}", json);
        }
        Action::Install => {
            // Exit code stays 0 either way; the result is in the printed status line.
            let installed = config.install();
            tracing::debug!("Install result: {}", installed);
        }
        Action::Info => {
            for line in config.info_lines() {
                println!("{}", line);
            }
        }
        Action::Help => {
            print!("{}", CliConfig::help_text(&settings.project.display_name));
        }
    }

    Ok(())
}

fn report_config_error(e: &ConfigError) {
    tracing::error!("❌ Failed to load configuration: {}", e);
    eprintln!("❌ {}", e);
    eprintln!("💡 建議: {}", e.recovery_suggestion());
}
