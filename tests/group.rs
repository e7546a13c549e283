mod common;

use csv_regroup::{
    GroupSpec, RegroupError,
    data::parse_ordering_key,
    group::group_lines,
    io_utils::split_lines,
};
use proptest::prelude::*;

use common::fixture_text;

#[test]
fn fixture_groups_match_expected_output() {
    let text = fixture_text("discography.csv");
    let lines = split_lines(&text);
    let grouped = group_lines(&lines, &GroupSpec::default()).expect("grouped");

    assert_eq!(grouped.group_count(), 6);
    assert_eq!(grouped.row_count(), 11);
    assert_eq!(grouped.to_csv(), fixture_text("discography_grouped.csv"));
}

#[test]
fn summary_mapping_exposes_rows_without_ordering_key() {
    let text = fixture_text("discography.csv");
    let grouped = group_lines(&split_lines(&text), &GroupSpec::default()).expect("grouped");
    let folklore = grouped.group("folklore").expect("folklore group");
    let titles: Vec<&str> = folklore.rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(titles, vec!["cardigan", "the 1", "Interlude"]);
    assert!(folklore.rows.iter().all(|row| row.len() == 4));
}

#[test]
fn header_only_input_yields_no_groups() {
    let grouped =
        group_lines(&["album_name,duration_ms"], &GroupSpec::default()).expect("grouped");
    assert_eq!(grouped.group_count(), 0);
    assert_eq!(grouped.to_csv(), "album_name,duration_ms\n");
}

#[test]
fn blank_header_reports_missing_column() {
    let err = group_lines(&["", "Red,1"], &GroupSpec::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Header does not contain 'duration_ms' column"
    );
}

#[test]
fn empty_input_error_message() {
    let lines: Vec<String> = Vec::new();
    let err = group_lines(&lines, &GroupSpec::default()).unwrap_err();
    assert_eq!(err, RegroupError::EmptyInput);
    assert_eq!(err.to_string(), "Input is empty");
}

#[derive(Debug, Clone)]
struct Record {
    album: String,
    duration: String,
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        prop::sample::select(vec!["Red", "red", "1989", "", "Lover", "lover", "Speak Now"]),
        prop_oneof![
            (0i64..1_000).prop_map(|d| d.to_string()),
            (0i64..1_000).prop_map(|d| format!("{d}.5")),
            Just("abc".to_string()),
        ],
    )
        .prop_map(|(album, duration)| Record {
            album: album.to_string(),
            duration,
        })
}

fn render_lines(records: &[Record]) -> Vec<String> {
    let mut lines = vec!["idx,album_name,duration_ms".to_string()];
    lines.extend(
        records
            .iter()
            .enumerate()
            .map(|(idx, r)| format!("{idx},{},{}", r.album, r.duration)),
    );
    lines
}

proptest! {
    #[test]
    fn grouping_invariants_hold(records in prop::collection::vec(record_strategy(), 0..40)) {
        let lines = render_lines(&records);
        let grouped = group_lines(&lines, &GroupSpec::default()).expect("grouped");

        prop_assert_eq!(grouped.row_count(), records.len());

        let keys: Vec<String> = grouped.groups.iter().map(|g| g.key.to_lowercase()).collect();
        prop_assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));

        for group in &grouped.groups {
            let durations: Vec<i64> = group.rows.iter().map(|row| parse_ordering_key(&row[2])).collect();
            prop_assert!(durations.windows(2).all(|pair| pair[0] >= pair[1]));
            prop_assert!(group.rows.iter().all(|row| row[1] == group.key));

            // Equal durations keep their input order.
            for pair in group.rows.windows(2) {
                if parse_ordering_key(&pair[0][2]) == parse_ordering_key(&pair[1][2]) {
                    let first: usize = pair[0][0].parse().expect("idx");
                    let second: usize = pair[1][0].parse().expect("idx");
                    prop_assert!(first < second);
                }
            }
        }
    }

    #[test]
    fn grouping_is_idempotent(records in prop::collection::vec(record_strategy(), 0..40)) {
        let lines = render_lines(&records);
        let first = group_lines(&lines, &GroupSpec::default()).expect("grouped").to_csv();
        let second = group_lines(&lines, &GroupSpec::default()).expect("grouped").to_csv();
        prop_assert_eq!(&first, &second);

        let reparsed = split_lines(&first);
        let third = group_lines(&reparsed, &GroupSpec::default()).expect("grouped").to_csv();
        prop_assert_eq!(first, third);
    }
}
