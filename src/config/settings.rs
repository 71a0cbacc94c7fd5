use crate::domain::model::{CommandSet, DependencyRequirement, ProjectIdentity, RuntimePorts};

/// Production targets a fixed external host, whatever the local ports are.
pub const PRODUCTION_API_URL: &str = "https://api.manosaba.com";
pub const PRODUCTION_WS_URL: &str = "wss://api.manosaba.com/ws";

/// Process-wide project settings. Built once at startup, then only read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectSettings {
    pub project: ProjectIdentity,
    pub ports: RuntimePorts,
    pub commands: CommandSet,
    pub dependencies: DependencyRequirement,
}

impl ProjectSettings {
    /// 以指定的埠號覆寫預設值
    pub fn with_ports(mut self, ports: RuntimePorts) -> Self {
        self.ports = ports;
        self
    }

    pub fn with_commands(mut self, commands: CommandSet) -> Self {
        self.commands = commands;
        self
    }
}
