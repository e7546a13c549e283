use anyhow::{Context, Result};
use log::info;

use crate::{cli::PreviewArgs, group::group_lines, io_utils, table};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let text = io_utils::read_text(&args.input, encoding)?;
    let lines = io_utils::split_lines(&text);
    let spec = args.columns.spec();
    let grouped = group_lines(&lines, &spec)
        .with_context(|| format!("Grouping rows from {:?}", args.input))?;

    print!("{}", table::render_preview(&grouped, args.rows));
    info!(
        "Displayed {} of {} row(s) from {:?}",
        args.rows.min(grouped.row_count()),
        grouped.row_count(),
        args.input
    );
    Ok(())
}
