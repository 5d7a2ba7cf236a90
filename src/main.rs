//! CLI entry point for foldertree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use foldertree::{
    IndentStyle, OutputConfig, OutputFormat, ScanError, TextFormatter, TreeWalker,
    parse_dropped_path, print_json, render, save_artifact,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Indent {
    /// Two spaces per level
    Two,
    /// Four spaces per level
    Four,
    /// One tab per level
    Tab,
}

impl From<Indent> for IndentStyle {
    fn from(indent: Indent) -> Self {
        match indent {
            Indent::Two => IndentStyle::TwoSpaces,
            Indent::Four => IndentStyle::FourSpaces,
            Indent::Tab => IndentStyle::Tab,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    #[default]
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "foldertree")]
#[command(about = "Render a directory as an indented outline or a nested JSON document")]
#[command(version)]
struct Args {
    /// Directory to render
    #[arg(default_value = ".")]
    path: String,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: Format,

    /// Indent unit for text output
    #[arg(long = "indent", default_value = "two")]
    indent: Indent,

    /// Write the output to FILE instead of stdout
    /// (.txt or .json is appended when FILE has no extension)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Treat PATH as a raw drag-and-drop payload ({...} or quoted)
    #[arg(long = "dropped")]
    dropped: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Diagnostic log level (written to stderr)
    #[arg(short = 'l', long = "log-level", default_value = "error")]
    log_level: LogLevel,
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);

    let root = if args.dropped {
        parse_dropped_path(&args.path)
    } else {
        PathBuf::from(&args.path)
    };

    let scan = match TreeWalker::new().walk(&root) {
        Ok(scan) => scan,
        Err(ScanError::NotADirectory { path }) => {
            eprintln!("foldertree: '{}' is not a folder", path.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("foldertree: cannot access '{}': {}", root.display(), e);
            process::exit(1);
        }
    };

    for warning in &scan.warnings {
        eprintln!("foldertree: warning: {}", warning);
    }

    let config = OutputConfig {
        indent: args.indent.into(),
        format: args.format.into(),
        use_color: args.output.is_none() && should_use_color(args.color),
    };

    let result = match &args.output {
        Some(target) => match render(&scan.tree, &config) {
            Ok(content) => save_artifact(target, &content, config.format).map(|written| {
                eprintln!("foldertree: saved: {}", written.display());
            }),
            Err(e) => {
                eprintln!("foldertree: error rendering output: {}", e);
                process::exit(1);
            }
        },
        None => match config.format {
            OutputFormat::Text => {
                TextFormatter::new(config.indent.clone()).print(&scan.tree, config.use_color)
            }
            OutputFormat::Json => print_json(&scan.tree),
        },
    };

    if let Err(e) = result {
        eprintln!("foldertree: error writing output: {}", e);
        process::exit(1);
    }
}
