use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::group::{DEFAULT_GROUP_COLUMN, DEFAULT_ORDER_COLUMN, GroupSpec};

#[derive(Debug, Parser)]
#[command(author, version, about = "Group CSV rows by one column and order them by another", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a copy of the input grouped by one column and ordered by another
    Group(GroupArgs),
    /// Show the first grouped rows in a formatted table
    Preview(PreviewArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ColumnArgs {
    /// Column whose value buckets rows together
    #[arg(long = "group-by", default_value = DEFAULT_GROUP_COLUMN)]
    pub group_by: String,
    /// Numeric column ordering rows within a group (largest first)
    #[arg(long = "order-by", default_value = DEFAULT_ORDER_COLUMN)]
    pub order_by: String,
}

impl ColumnArgs {
    pub fn spec(&self) -> GroupSpec {
        GroupSpec::new(self.group_by.trim(), self.order_by.trim())
    }
}

#[derive(Debug, Args)]
pub struct GroupArgs {
    /// Input CSV file (`-` for stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Output CSV file (stdout if omitted or `-`)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub columns: ColumnArgs,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Character encoding for the output file/stdout (defaults to utf-8)
    #[arg(long = "output-encoding")]
    pub output_encoding: Option<String>,
    /// Print a per-group row count table after writing the output file
    #[arg(long = "summary")]
    pub summary: bool,
    /// Also write the grouped rows as JSON to this path
    #[arg(long = "summary-json")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Input CSV file (`-` for stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    #[command(flatten)]
    pub columns: ColumnArgs,
    /// Number of grouped rows to display
    #[arg(long, default_value_t = 10)]
    pub rows: usize,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}
