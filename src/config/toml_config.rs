use crate::config::settings::ProjectSettings;
use crate::domain::model::CommandLine;
use crate::utils::error::{ConfigError, Result};
use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

const VERSION_KEY_SUFFIX: &str = "_version";

/// Override file layout. Every table and key is optional; whatever is present
/// replaces the matching default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub project: Option<ProjectOverride>,
    pub ports: Option<PortsOverride>,
    pub commands: Option<CommandsOverride>,
    pub dependencies: Option<DependenciesOverride>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectOverride {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortsOverride {
    pub frontend: Option<u16>,
    pub backend: Option<u16>,
    pub websocket: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandsOverride {
    pub install: Option<CommandLine>,
    pub dev: Option<CommandLine>,
    pub build: Option<CommandLine>,
    pub test: Option<CommandLine>,
    pub lint: Option<CommandLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependenciesOverride {
    pub required_tools: Option<Vec<String>>,
    pub optional_tools: Option<Vec<String>>,
    /// Merged key by key into the existing constraints.
    pub versions: Option<IndexMap<String, String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入覆寫設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConfigError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析覆寫設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| ConfigError::ConfigParseError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        config.check_version_keys()?;
        Ok(config)
    }

    // Version keys share a JSON object with the tool lists, so only
    // `<tool>_version` names are accepted.
    fn check_version_keys(&self) -> Result<()> {
        let versions = self
            .dependencies
            .as_ref()
            .and_then(|deps| deps.versions.as_ref());

        for key in versions.into_iter().flat_map(|v| v.keys()) {
            let tool = key.strip_suffix(VERSION_KEY_SUFFIX).unwrap_or_default();
            if tool.is_empty() {
                return Err(ConfigError::ConfigParseError {
                    field: format!("dependencies.versions.{}", key),
                    message: format!("version keys must look like <tool>{}", VERSION_KEY_SUFFIX),
                });
            }
        }

        Ok(())
    }

    /// 替換環境變數 (例如 ${API_PORT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 將覆寫值套用到設定上
    pub fn apply(self, mut settings: ProjectSettings) -> ProjectSettings {
        if let Some(project) = self.project {
            let identity = &mut settings.project;
            replace(&mut identity.name, project.name);
            replace(&mut identity.display_name, project.display_name);
            replace(&mut identity.version, project.version);
            replace(&mut identity.description, project.description);
            replace(&mut identity.project_type, project.project_type);
            replace(&mut identity.author, project.author);
            replace(&mut identity.license, project.license);
        }

        if let Some(ports) = self.ports {
            replace(&mut settings.ports.frontend, ports.frontend);
            replace(&mut settings.ports.backend, ports.backend);
            replace(&mut settings.ports.websocket, ports.websocket);
        }

        if let Some(commands) = self.commands {
            let set = &mut settings.commands;
            replace(&mut set.install, commands.install);
            replace(&mut set.dev, commands.dev);
            replace(&mut set.build, commands.build);
            replace(&mut set.test, commands.test);
            replace(&mut set.lint, commands.lint);
        }

        if let Some(dependencies) = self.dependencies {
            let deps = &mut settings.dependencies;
            replace(&mut deps.required_tools, dependencies.required_tools);
            replace(&mut deps.optional_tools, dependencies.optional_tools);
            if let Some(versions) = dependencies.versions {
                deps.version_constraints.extend(versions);
            }
        }

        tracing::debug!("Applied overrides: {:?}", settings);
        settings
    }
}

fn replace<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl ProjectSettings {
    /// 讀取覆寫檔並疊加在預設值之上
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::info!("📁 Loading overrides from: {}", path.as_ref().display());
        Ok(TomlConfig::from_file(path)?.apply(Self::default()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(TomlConfig::from_toml_str(content)?.apply(Self::default()))
    }
}
