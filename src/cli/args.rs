//! CLI argument definitions using clap
//!
//! Commands:
//! - pagesmith pages
//! - pagesmith schema --section <type>
//! - pagesmith validate --section <type> [--file <path>]
//! - pagesmith authorize --page <type> --section <type> [--existing <type>:<uuid>]...
//! - pagesmith check-config

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

use crate::content::{PageType, SectionType};
use crate::policy::ExistingSection;

/// Pagesmith - section schemas and page policies for a multi-language CMS
#[derive(Parser, Debug)]
#[command(name = "pagesmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (default: ./pagesmith.json if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List page types with their allowed and repeatable sections
    Pages,

    /// Show the schema, description and example for a section type
    Schema {
        #[arg(long)]
        section: SectionType,
    },

    /// Validate a section payload read from a file or stdin
    Validate {
        #[arg(long)]
        section: SectionType,

        /// JSON payload file; stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Check whether a section may be added to a page
    Authorize {
        #[arg(long)]
        page: PageType,

        #[arg(long)]
        section: SectionType,

        /// Section already on the page, as <type>:<uuid>
        #[arg(long, value_parser = parse_existing)]
        existing: Vec<ExistingSection>,
    },

    /// Load and validate the configuration file
    CheckConfig,
}

/// Parses `<section-type>:<uuid>`
pub fn parse_existing(raw: &str) -> Result<ExistingSection, String> {
    let (section_type, id) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected <section-type>:<uuid>, got '{}'", raw))?;
    let section_type: SectionType = section_type.parse().map_err(|e| format!("{}", e))?;
    let id = Uuid::parse_str(id).map_err(|e| format!("invalid section id '{}': {}", id, e))?;
    Ok(ExistingSection { id, section_type })
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
