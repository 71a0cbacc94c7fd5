use crate::utils::error::{ConfigError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 專案識別資訊
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectIdentity {
    pub name: String,
    pub display_name: String,
    pub version: String,
    pub description: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub author: String,
    pub license: String,
}

impl Default for ProjectIdentity {
    fn default() -> Self {
        Self {
            name: "manosaba_ai".to_string(),
            display_name: "Manosaba AI".to_string(),
            version: "1.0.0".to_string(),
            description: "基于Next.js的AI智能助手应用".to_string(),
            project_type: "nextjs".to_string(),
            author: "Manosaba Team".to_string(),
            license: "MIT".to_string(),
        }
    }
}

/// Ports the application listens on. Backend and websocket share a value by
/// default but are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuntimePorts {
    pub frontend: u16,
    pub backend: u16,
    pub websocket: u16,
}

impl Default for RuntimePorts {
    fn default() -> Self {
        Self {
            frontend: 3002,
            backend: 8000,
            websocket: 8000,
        }
    }
}

/// A command as an ordered list of argument tokens; the first is the program.
///
/// Serialized as one space-joined string so the JSON view reads like a shell
/// line, and parsed back by splitting on whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    pub fn parse(line: &str) -> Result<Self> {
        Self::from_tokens(line.split_whitespace().map(str::to_string).collect())
    }

    pub fn from_tokens(tokens: Vec<String>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(ConfigError::EmptyCommandError {
                field: "command".to_string(),
            });
        }
        Ok(Self { tokens })
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    // Literal commands baked into the defaults.
    fn literal(line: &str) -> Self {
        Self {
            tokens: line.split_whitespace().map(str::to_string).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

impl TryFrom<String> for CommandLine {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CommandLine> for String {
    fn from(value: CommandLine) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSet {
    pub install: CommandLine,
    pub dev: CommandLine,
    pub build: CommandLine,
    pub test: CommandLine,
    pub lint: CommandLine,
}

impl Default for CommandSet {
    fn default() -> Self {
        Self {
            install: CommandLine::literal("pnpm install"),
            dev: CommandLine::literal("pnpm run dev"),
            build: CommandLine::literal("pnpm run build"),
            test: CommandLine::literal("pnpm test"),
            lint: CommandLine::literal("pnpm run lint"),
        }
    }
}

/// Tooling the project expects. Version constraints are informational and are
/// flattened into `<tool>_version` keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyRequirement {
    pub required_tools: Vec<String>,
    pub optional_tools: Vec<String>,
    #[serde(flatten)]
    pub version_constraints: IndexMap<String, String>,
}

impl Default for DependencyRequirement {
    fn default() -> Self {
        let mut version_constraints = IndexMap::new();
        version_constraints.insert("node_version".to_string(), ">=18.0.0".to_string());
        version_constraints.insert("pnpm_version".to_string(), ">=8.0.0".to_string());

        Self {
            required_tools: vec!["node".to_string(), "pnpm".to_string()],
            optional_tools: vec!["yarn".to_string(), "npm".to_string()],
            version_constraints,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeConfig {
    pub port: u16,
    pub install_command: CommandLine,
    pub dev_command: CommandLine,
    pub build_command: CommandLine,
    pub test_command: CommandLine,
    pub lint_command: CommandLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiEndpoints {
    pub api_endpoint: String,
    pub websocket_url: String,
    pub cors_origins: Vec<String>,
}

/// Environment variable name → value, in declaration order.
pub type EnvironmentProfile = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentConfig {
    pub development: EnvironmentProfile,
    pub production: EnvironmentProfile,
}

/// Everything `--get-config` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullConfig {
    pub project: ProjectIdentity,
    pub runtime: RuntimeConfig,
    pub dependencies: DependencyRequirement,
    pub api: ApiEndpoints,
    pub environment: EnvironmentConfig,
}
