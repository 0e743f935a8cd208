//! Subsystem tags attached to every log entry

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The subsystem a log entry originates from.
///
/// Sub-classes are written with a period in their display name
/// (`Service.FS`), which is also the spelling accepted by filter strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogClass {
    Log,
    Common,
    CommonFilesystem,
    CommonMemory,
    Core,
    CoreTiming,
    Config,
    Debug,
    Kernel,
    Service,
    ServiceFs,
    ServiceNet,
    Hardware,
    Frontend,
    Render,
    Audio,
    Input,
    Loader,
    Network,
}

impl LogClass {
    pub const COUNT: usize = 19;

    pub const ALL: [LogClass; Self::COUNT] = [
        LogClass::Log,
        LogClass::Common,
        LogClass::CommonFilesystem,
        LogClass::CommonMemory,
        LogClass::Core,
        LogClass::CoreTiming,
        LogClass::Config,
        LogClass::Debug,
        LogClass::Kernel,
        LogClass::Service,
        LogClass::ServiceFs,
        LogClass::ServiceNet,
        LogClass::Hardware,
        LogClass::Frontend,
        LogClass::Render,
        LogClass::Audio,
        LogClass::Input,
        LogClass::Loader,
        LogClass::Network,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LogClass::Log => "Log",
            LogClass::Common => "Common",
            LogClass::CommonFilesystem => "Common.Filesystem",
            LogClass::CommonMemory => "Common.Memory",
            LogClass::Core => "Core",
            LogClass::CoreTiming => "Core.Timing",
            LogClass::Config => "Config",
            LogClass::Debug => "Debug",
            LogClass::Kernel => "Kernel",
            LogClass::Service => "Service",
            LogClass::ServiceFs => "Service.FS",
            LogClass::ServiceNet => "Service.NET",
            LogClass::Hardware => "HW",
            LogClass::Frontend => "Frontend",
            LogClass::Render => "Render",
            LogClass::Audio => "Audio",
            LogClass::Input => "Input",
            LogClass::Loader => "Loader",
            LogClass::Network => "Network",
        }
    }

    /// Position in [`LogClass::ALL`], used to index per-class tables.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LogClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogClass {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogClass::ALL
            .iter()
            .copied()
            .find(|class| class.name() == s)
            .ok_or_else(|| LoggerError::UnknownLogClass(s.to_string()))
    }
}
