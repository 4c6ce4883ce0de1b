//! CLI argument definitions using clap.
//!
//! ```text
//! smalires [OPTIONS] <PROJECT_ROOT>
//! ```
//!
//! `PROJECT_ROOT` is an apktool output directory containing
//! `res/values/public.xml`, `res/values/strings.xml` and `smali/`.

use std::path::PathBuf;

use clap::Parser;

use crate::context::Overrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Root directory of the disassembled application
    pub project_root: PathBuf,

    /// Report what would be annotated without rewriting any file
    #[arg(long)]
    pub dry_run: bool,

    /// Maximum characters of a string literal shown in previews (overrides config file)
    #[arg(long, env = "SMALIRES_PREVIEW_LENGTH")]
    pub preview_length: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            preview_length: self.preview_length,
        }
    }
}
