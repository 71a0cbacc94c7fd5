use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Config parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Command line for '{field}' is empty")]
    EmptyCommandError { field: String },

    #[error("Failed to launch '{command}': {source}")]
    SpawnFailure {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {}", exit_description(.code))]
    ChildProcessFailure { command: String, code: Option<i32> },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

impl ConfigError {
    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConfigError::IoError(_) => "檢查設定檔路徑是否存在且可讀取",
            ConfigError::SerializationError(_) => "設定內容無法序列化，請檢查覆寫值",
            ConfigError::RegexError(_) => "內部樣式錯誤，請回報此問題",
            ConfigError::ConfigParseError { .. } => "確認設定檔為合法的 TOML 格式",
            ConfigError::EmptyCommandError { .. } => "為該命令提供至少一個參數，例如 \"pnpm install\"",
            ConfigError::SpawnFailure { .. } => "確認套件管理工具已安裝並位於 PATH 中",
            ConfigError::ChildProcessFailure { .. } => "查看上方命令輸出，修正後重新執行 --install",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
