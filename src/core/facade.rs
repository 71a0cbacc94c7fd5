use crate::adapters::SystemLauncher;
use crate::config::settings::{ProjectSettings, PRODUCTION_API_URL, PRODUCTION_WS_URL};
use crate::domain::model::{
    ApiEndpoints, DependencyRequirement, EnvironmentConfig, EnvironmentProfile, FullConfig,
    ProjectIdentity, RuntimeConfig,
};
use crate::domain::ports::ProcessLauncher;
use crate::utils::error::Result;
use std::path::Path;

/// Read-only views over [`ProjectSettings`], plus the install action.
pub struct ProjectConfig<'a> {
    settings: &'a ProjectSettings,
}

impl<'a> ProjectConfig<'a> {
    pub fn new(settings: &'a ProjectSettings) -> Self {
        Self { settings }
    }

    pub fn get_project_info(&self) -> ProjectIdentity {
        self.settings.project.clone()
    }

    pub fn get_runtime_config(&self) -> RuntimeConfig {
        let commands = &self.settings.commands;
        RuntimeConfig {
            port: self.settings.ports.frontend,
            install_command: commands.install.clone(),
            dev_command: commands.dev.clone(),
            build_command: commands.build.clone(),
            test_command: commands.test.clone(),
            lint_command: commands.lint.clone(),
        }
    }

    pub fn get_dependencies(&self) -> DependencyRequirement {
        self.settings.dependencies.clone()
    }

    pub fn get_api_config(&self) -> ApiEndpoints {
        let ports = &self.settings.ports;
        ApiEndpoints {
            api_endpoint: format!("http://localhost:{}/api/v1", ports.backend),
            websocket_url: format!("ws://localhost:{}/ws", ports.websocket),
            cors_origins: vec![format!("http://localhost:{}", ports.frontend)],
        }
    }

    /// Development derives from the local ports; production never does.
    pub fn get_env_config(&self) -> EnvironmentConfig {
        let ports = &self.settings.ports;

        let development = profile([
            ("NODE_ENV", "development".to_string()),
            (
                "NEXT_PUBLIC_API_URL",
                format!("http://localhost:{}", ports.backend),
            ),
            (
                "NEXT_PUBLIC_WS_URL",
                format!("ws://localhost:{}/ws", ports.websocket),
            ),
        ]);

        let production = profile([
            ("NODE_ENV", "production".to_string()),
            ("NEXT_PUBLIC_API_URL", PRODUCTION_API_URL.to_string()),
            ("NEXT_PUBLIC_WS_URL", PRODUCTION_WS_URL.to_string()),
        ]);

        EnvironmentConfig {
            development,
            production,
        }
    }

    pub fn full_config(&self) -> FullConfig {
        FullConfig {
            project: self.get_project_info(),
            runtime: self.get_runtime_config(),
            dependencies: self.get_dependencies(),
            api: self.get_api_config(),
            environment: self.get_env_config(),
        }
    }

    /// Two-space indented JSON; non-ASCII text is written as-is.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.full_config())?)
    }

    pub fn info_lines(&self) -> Vec<String> {
        let info = &self.settings.project;
        vec![
            format!("项目: {} ({})", info.display_name, info.name),
            format!("类型: {}", info.project_type),
            format!("端口: {}", self.settings.ports.frontend),
        ]
    }

    /// 在目前工作目錄執行安裝命令
    pub fn install(&self) -> bool {
        match std::env::current_dir() {
            Ok(cwd) => self.install_with(&SystemLauncher, &cwd),
            Err(e) => {
                println!("🚀 安装 {}...", self.settings.project.display_name);
                tracing::error!("❌ Cannot resolve working directory: {}", e);
                println!("❌ 安装失败: {}", e);
                false
            }
        }
    }

    pub fn install_with<L: ProcessLauncher>(&self, launcher: &L, cwd: &Path) -> bool {
        let command = &self.settings.commands.install;
        println!("🚀 安装 {}...", self.settings.project.display_name);
        tracing::info!("Running install command: {}", command);

        match launcher.run(command, cwd) {
            Ok(()) => {
                tracing::info!("✅ Install finished");
                println!("✅ 安装完成");
                true
            }
            Err(e) => {
                tracing::error!("❌ Install failed: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                println!("❌ 安装失败: {}", e);
                false
            }
        }
    }
}

fn profile<const N: usize>(entries: [(&str, String); N]) -> EnvironmentProfile {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CommandLine, RuntimePorts};
    use crate::utils::error::ConfigError;
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct RecordingLauncher {
        fail_with: Option<i32>,
        calls: RefCell<Vec<(Vec<String>, PathBuf)>>,
    }

    impl RecordingLauncher {
        fn new(fail_with: Option<i32>) -> Self {
            Self {
                fail_with,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProcessLauncher for RecordingLauncher {
        fn run(&self, command: &CommandLine, cwd: &Path) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((command.tokens().to_vec(), cwd.to_path_buf()));
            match self.fail_with {
                None => Ok(()),
                Some(code) => Err(ConfigError::ChildProcessFailure {
                    command: command.to_string(),
                    code: Some(code),
                }),
            }
        }
    }

    #[test]
    fn test_project_info_matches_defaults() {
        let settings = ProjectSettings::default();
        let info = ProjectConfig::new(&settings).get_project_info();

        assert_eq!(info.name, "manosaba_ai");
        assert_eq!(info.display_name, "Manosaba AI");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.project_type, "nextjs");
        assert_eq!(info.author, "Manosaba Team");
        assert_eq!(info.license, "MIT");
    }

    #[test]
    fn test_runtime_config() {
        let settings = ProjectSettings::default();
        let runtime = ProjectConfig::new(&settings).get_runtime_config();

        assert_eq!(runtime.port, 3002);
        assert_eq!(runtime.install_command.to_string(), "pnpm install");
        assert_eq!(runtime.dev_command.to_string(), "pnpm run dev");
        assert_eq!(runtime.build_command.to_string(), "pnpm run build");
        assert_eq!(runtime.test_command.to_string(), "pnpm test");
        assert_eq!(runtime.lint_command.to_string(), "pnpm run lint");
    }

    #[test]
    fn test_api_config_follows_ports() {
        let settings = ProjectSettings::default().with_ports(RuntimePorts {
            frontend: 4000,
            backend: 9100,
            websocket: 9200,
        });
        let api = ProjectConfig::new(&settings).get_api_config();

        assert_eq!(api.api_endpoint, "http://localhost:9100/api/v1");
        assert_eq!(api.websocket_url, "ws://localhost:9200/ws");
        assert_eq!(api.cors_origins, vec!["http://localhost:4000"]);
    }

    #[test]
    fn test_env_profile_key_order() {
        let settings = ProjectSettings::default();
        let env = ProjectConfig::new(&settings).get_env_config();
        let keys: Vec<&str> = env.development.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["NODE_ENV", "NEXT_PUBLIC_API_URL", "NEXT_PUBLIC_WS_URL"]);
        assert_eq!(env.production["NEXT_PUBLIC_WS_URL"], "wss://api.manosaba.com/ws");
    }

    #[test]
    fn test_info_lines() {
        let settings = ProjectSettings::default();
        let lines = ProjectConfig::new(&settings).info_lines();
        assert_eq!(
            lines,
            vec!["项目: Manosaba AI (manosaba_ai)", "类型: nextjs", "端口: 3002"]
        );
    }

    #[test]
    fn test_install_success_uses_install_command_and_cwd() {
        let settings = ProjectSettings::default();
        let launcher = RecordingLauncher::new(None);
        let cwd = PathBuf::from("/srv/manosaba");

        assert!(ProjectConfig::new(&settings).install_with(&launcher, &cwd));

        let calls = launcher.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, vec!["pnpm", "install"]);
        assert_eq!(calls[0].1, cwd);
    }

    #[test]
    fn test_install_failure_returns_false() {
        let settings = ProjectSettings::default();
        let launcher = RecordingLauncher::new(Some(1));
        assert!(!ProjectConfig::new(&settings).install_with(&launcher, Path::new(".")));
    }

    #[test]
    fn test_install_is_not_memoized() {
        let settings = ProjectSettings::default();
        let launcher = RecordingLauncher::new(None);
        let config = ProjectConfig::new(&settings);

        config.install_with(&launcher, Path::new("."));
        config.install_with(&launcher, Path::new("."));
        assert_eq!(launcher.calls.borrow().len(), 2);
    }
}
