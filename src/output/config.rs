//! Output configuration types

/// Indent unit repeated once per nesting level in text output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IndentStyle {
    #[default]
    TwoSpaces,
    FourSpaces,
    Tab,
    Custom(String),
}

impl IndentStyle {
    pub fn unit(&self) -> &str {
        match self {
            IndentStyle::TwoSpaces => "  ",
            IndentStyle::FourSpaces => "    ",
            IndentStyle::Tab => "\t",
            IndentStyle::Custom(unit) => unit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Extension given to saved artifacts that have none.
    pub fn default_extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub indent: IndentStyle,
    pub format: OutputFormat,
    /// Only affects terminal printing, never the rendered string.
    pub use_color: bool,
}
