//! CLI definitions for cygen.

use std::path::PathBuf;

use clap::Parser;

use cygen_config::{BlankLineStyle, GeneratorOptions};

/// cygen CLI.
#[derive(Parser)]
#[command(name = "cygen")]
#[command(about = "Generate a Cypress test from recorded browser events")]
#[command(version)]
pub(crate) struct Cli {
    /// Recorded events as a JSON array (`-` or omitted reads stdin)
    pub events: Option<PathBuf>,

    /// Do not wrap the test in a describe block
    #[arg(long)]
    pub no_describe: bool,

    /// Do not separate generated lines with blank lines
    #[arg(long)]
    pub no_blank_lines: bool,

    /// Blank line style (joined, separators)
    #[arg(long, default_value = "joined")]
    pub blank_line_style: BlankLineStyle,

    /// Do not declare sub-frames before their first use
    #[arg(long)]
    pub no_frame_declarations: bool,

    /// Attribute preferred for selectors by the recorder
    #[arg(long, env = "CYGEN_DATA_ATTRIBUTE", default_value = "")]
    pub data_attribute: String,

    /// Fail on events with missing fields instead of writing placeholders
    #[arg(long)]
    pub strict: bool,

    /// Also write logs to daily rotated files in this directory
    #[arg(long, env = "CYGEN_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Generator options selected by the flags.
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            wrap_describe: !self.no_describe,
            blank_lines_between_blocks: !self.no_blank_lines,
            data_attribute: self.data_attribute.clone(),
            declare_frames: !self.no_frame_declarations,
            blank_line_style: self.blank_line_style,
        }
    }
}
