use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use encoding_rs::Encoding;
use log::info;

use crate::{
    cli::GroupArgs,
    group::{GroupSpec, GroupedOutput, group_lines},
    io_utils, table,
};

pub fn execute(args: &GroupArgs) -> Result<()> {
    let output_path = args.output.as_deref();
    let writing_to_stdout = output_path.is_none_or(io_utils::is_dash);
    if args.summary && writing_to_stdout {
        return Err(anyhow!("--summary requires --output to name a file"));
    }
    let input_encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let output_encoding = io_utils::resolve_encoding(args.output_encoding.as_deref())?;
    let spec = args.columns.spec();
    info!(
        "Grouping '{}' by '{}' ordered by '{}' -> {}",
        args.input.display(),
        spec.group_column,
        spec.order_column,
        io_utils::describe_path(output_path)
    );

    let grouped = regroup_file(
        &args.input,
        output_path,
        &spec,
        input_encoding,
        output_encoding,
    )?;

    if let Some(json_path) = &args.summary_json {
        write_summary_json(json_path, &grouped)?;
        info!("Grouped rows written as JSON to {:?}", json_path);
    }

    info!("Wrote: {}", io_utils::describe_path(output_path));
    info!(
        "Groups: {} Total rows: {}",
        grouped.group_count(),
        grouped.row_count()
    );
    if args.summary {
        print!("{}", table::render_summary(&grouped, &spec.group_column));
    }
    Ok(())
}

/// Reads `input`, groups it and writes the result to `output` (stdout when
/// `None`). Nothing is written if the input is empty or lacks a column.
pub fn regroup_file(
    input: &Path,
    output: Option<&Path>,
    spec: &GroupSpec,
    input_encoding: &'static Encoding,
    output_encoding: &'static Encoding,
) -> Result<GroupedOutput> {
    let text = io_utils::read_text(input, input_encoding)?;
    let lines = io_utils::split_lines(&text);
    let grouped =
        group_lines(&lines, spec).with_context(|| format!("Grouping rows from {input:?}"))?;
    io_utils::write_text(output, &grouped.to_csv(), output_encoding)?;
    Ok(grouped)
}

fn write_summary_json(path: &Path, grouped: &GroupedOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(&grouped.groups).context("Serializing groups")?;
    fs::write(path, json).with_context(|| format!("Writing JSON summary to {path:?}"))
}
