use clap::ValueEnum;
use mobilenovin_config::{Mode, Target};

/// Build mode
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Readable output, no size check
    #[value(name = "development")]
    Development,

    /// Minified output with console diagnostics removed
    #[value(name = "production")]
    Production,
}

/// Deployment target
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum TargetArg {
    /// Full-featured artifact (mobilenovin-ai.js, 512000 byte budget)
    #[value(name = "standard")]
    Standard,

    /// Size-constrained artifact (mobilenovin-ai-edge.js, 51200 byte budget)
    #[value(name = "edge")]
    Edge,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}

impl From<TargetArg> for Target {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::Standard => Target::Standard,
            TargetArg::Edge => Target::Edge,
        }
    }
}
