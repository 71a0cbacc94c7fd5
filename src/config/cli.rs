use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "manosaba-config")]
#[command(about = "Manosaba AI 配置脚本")]
pub struct CliConfig {
    #[arg(long, help = "获取配置信息")]
    pub get_config: bool,

    #[arg(long, help = "安装项目")]
    pub install: bool,

    #[arg(long, help = "显示项目信息")]
    pub info: bool,

    #[arg(short, long, help = "TOML file overriding the built-in settings")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

/// What a single invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GetConfig,
    Install,
    Info,
    Help,
}

impl CliConfig {
    /// 第一個被設定的旗標勝出：--get-config, --install, --info
    pub fn action(&self) -> Action {
        if self.get_config {
            Action::GetConfig
        } else if self.install {
            Action::Install
        } else if self.info {
            Action::Info
        } else {
            Action::Help
        }
    }

    /// 用設定中的顯示名稱產生說明文字
    pub fn help_text(display_name: &str) -> String {
        Self::command()
            .about(format!("{} 配置脚本", display_name))
            .render_help()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("manosaba-config").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_no_flags_is_help() {
        assert_eq!(parse(&[]).action(), Action::Help);
        assert_eq!(parse(&["--verbose"]).action(), Action::Help);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            parse(&["--info", "--install", "--get-config"]).action(),
            Action::GetConfig
        );
        assert_eq!(parse(&["--info", "--install"]).action(), Action::Install);
        assert_eq!(parse(&["--info"]).action(), Action::Info);
    }

    #[test]
    fn test_config_path() {
        let cli = parse(&["-c", "override.toml", "--info"]);
        assert_eq!(cli.config, Some(PathBuf::from("override.toml")));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(CliConfig::try_parse_from(["manosaba-config", "--deploy"]).is_err());
    }

    #[test]
    fn test_help_text_lists_flags() {
        let help = CliConfig::help_text("Manosaba AI");
        assert!(help.contains("Manosaba AI 配置脚本"));
        assert!(help.contains("--get-config"));
        assert!(help.contains("--install"));
        assert!(help.contains("--info"));
    }

    #[test]
    fn test_help_text_uses_display_name() {
        let help = CliConfig::help_text("Manosaba Staging");
        assert!(help.contains("Manosaba Staging 配置脚本"));
        assert!(!help.contains("Manosaba AI"));
    }
}
