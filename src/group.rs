//! Group-and-sort transform.
//!
//! [`group_lines()`] takes the raw lines of a file (header first), buckets the
//! data rows by the grouping column and orders every bucket by the ordering
//! column, largest first. Groups are emitted in case-insensitive alphabetical
//! order of their key. Both sorts are stable, so equal keys keep input order
//! and identical input always produces identical output.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::{
    data::parse_ordering_key,
    dialect::{join_fields, split_line},
    error::RegroupError,
};

pub const DEFAULT_GROUP_COLUMN: &str = "album_name";
pub const DEFAULT_ORDER_COLUMN: &str = "duration_ms";

/// Names of the columns driving the transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    pub group_column: String,
    pub order_column: String,
}

impl GroupSpec {
    pub fn new(group_column: impl Into<String>, order_column: impl Into<String>) -> Self {
        Self {
            group_column: group_column.into(),
            order_column: order_column.into(),
        }
    }
}

impl Default for GroupSpec {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_COLUMN, DEFAULT_ORDER_COLUMN)
    }
}

/// Zero-based header positions of the grouping and ordering columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnPositions {
    pub group: usize,
    pub order: usize,
}

/// Locates both columns by exact name. The ordering column is checked first.
pub fn resolve_columns(
    header: &[String],
    spec: &GroupSpec,
) -> Result<ColumnPositions, RegroupError> {
    let position = |name: &str| {
        header
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| RegroupError::MissingColumn {
                column: name.to_string(),
            })
    };
    let order = position(&spec.order_column)?;
    let group = position(&spec.group_column)?;
    Ok(ColumnPositions { group, order })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub key: String,
    pub rows: Vec<Vec<String>>,
}

/// Header plus groups in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedOutput {
    pub header: Vec<String>,
    pub groups: Vec<Group>,
}

impl GroupedOutput {
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|group| group.rows.len()).sum()
    }

    pub fn group(&self, key: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.key == key)
    }

    /// Rows in output order, paired with their group key.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().flat_map(|group| {
            group
                .rows
                .iter()
                .map(move |row| (group.key.as_str(), row.as_slice()))
        })
    }

    /// Serializes the header and every row, each line ending in `\n`.
    pub fn to_csv(&self) -> String {
        let mut output = join_fields(&self.header);
        output.push('\n');
        for (_, row) in self.rows() {
            output.push_str(&join_fields(row));
            output.push('\n');
        }
        output
    }
}

struct Bucket {
    key: String,
    rows: Vec<(i64, Vec<String>)>,
}

/// Groups and orders the data lines. The first line is the header.
pub fn group_lines<S: AsRef<str>>(
    lines: &[S],
    spec: &GroupSpec,
) -> Result<GroupedOutput, RegroupError> {
    let (header_line, data_lines) = lines.split_first().ok_or(RegroupError::EmptyInput)?;
    let header = split_line(header_line.as_ref());
    let positions = resolve_columns(&header, spec)?;
    debug!(
        "Grouping by '{}' (column {}), ordering by '{}' (column {})",
        spec.group_column, positions.group, spec.order_column, positions.order
    );

    let mut buckets: Vec<Bucket> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for line in data_lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        let mut row = split_line(line);
        if row.len() < header.len() {
            row.resize(header.len(), String::new());
        }
        let ordering_key = parse_ordering_key(&row[positions.order]);
        let group_key = &row[positions.group];
        let slot = match slots.get(group_key) {
            Some(slot) => *slot,
            None => {
                slots.insert(group_key.clone(), buckets.len());
                buckets.push(Bucket {
                    key: group_key.clone(),
                    rows: Vec::new(),
                });
                buckets.len() - 1
            }
        };
        buckets[slot].rows.push((ordering_key, row));
    }

    for bucket in &mut buckets {
        bucket.rows.sort_by(|a, b| b.0.cmp(&a.0));
    }
    buckets.sort_by_cached_key(|bucket| bucket.key.to_lowercase());

    let groups = buckets
        .into_iter()
        .map(|bucket| Group {
            key: bucket.key,
            rows: bucket.rows.into_iter().map(|(_, row)| row).collect(),
        })
        .collect();

    Ok(GroupedOutput { header, groups })
}
