//! Output format selection shared by the subcommands.

use clap::ValueEnum;
use meetpoint_lib::RenderMode;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full multi-line report with nodes and paths.
    #[default]
    Text,
    /// Three-line summary.
    Compact,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render mode for the human-readable formats; `None` for JSON.
    pub fn render_mode(self) -> Option<RenderMode> {
        match self {
            OutputFormat::Text => Some(RenderMode::PlainText),
            OutputFormat::Compact => Some(RenderMode::Compact),
            OutputFormat::Json => None,
        }
    }

    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

/// Output choices for listings that have no compact rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DataFormat {
    #[default]
    Text,
    Json,
}

impl DataFormat {
    pub fn is_json(self) -> bool {
        self == DataFormat::Json
    }
}
