use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hitos::view::SortKey;

#[derive(Debug, Parser)]
#[command(name = "hitos")]
#[command(about = "Milestone tracking for the Icon Bay Torres project")]
pub struct Cli {
    /// Directory holding base.yaml and <environment>.yaml
    #[arg(long, global = true, default_value = "config")]
    pub config_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Headline KPIs, category breakdown and project statistics
    Summary {
        /// Print the full dashboard as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cumulative progress per month
    Timeline,
    /// Monthly load, risk levels and recommendations
    Risk,
    /// Filtered, sorted and paginated milestone table
    List {
        /// Exact category ("Todas" for all)
        #[arg(long)]
        category: Option<String>,
        /// Text in the title or the milestone number
        #[arg(long)]
        search: Option<String>,
        /// number | planned_month | progress_percent | category
        #[arg(long)]
        sort: Option<SortKey>,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Write the catalogue as CSV
    Export {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Apply one edit in memory and show the result
    Edit {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        planned_month: Option<u32>,
        #[arg(long, conflicts_with = "clear_actual")]
        actual_month: Option<u32>,
        /// Remove the recorded actual month
        #[arg(long)]
        clear_actual: bool,
        #[arg(long)]
        progress: Option<u8>,
        #[arg(long)]
        category: Option<String>,
    },
}
