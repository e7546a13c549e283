pub mod cli;
pub mod data;
pub mod dialect;
pub mod error;
pub mod group;
pub mod io_utils;
pub mod preview;
pub mod regroup;
pub mod table;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Commands};

pub use crate::{
    dialect::{escape_field, split_line},
    error::RegroupError,
    group::{GroupSpec, GroupedOutput, group_lines},
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("csv_regroup", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Group(args) => regroup::execute(&args),
        Commands::Preview(args) => preview::execute(&args),
    }
}
