use mysqladmin_charts::aggregator::{classify_prefix, group_series, DeltaAccumulator};
use mysqladmin_charts::collector::{collect_directory, CollectOptions};
use mysqladmin_charts::parser::{parse_line, GroupedData, RawSample};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn table(rows: &[(&str, &str)]) -> String {
    let mut out = String::from(
        "+----------------------------------+-------+\n\
         | Variable_name                    | Value |\n\
         +----------------------------------+-------+\n",
    );
    for (name, value) in rows {
        out.push_str(&format!("| {:<32} | {:<5} |\n", name, value));
    }
    out.push_str("+----------------------------------+-------+\n");
    out
}

fn write_snapshot(dir: &Path, name: &str, rows: &[(&str, &str)]) {
    fs::write(dir.join(name), table(rows)).unwrap();
}

fn groups_for(dir: &Path) -> Vec<GroupedData> {
    let collection = collect_directory(dir, &CollectOptions::default()).unwrap();
    group_series(collection.series).0
}

#[test]
fn test_end_to_end_bytes_sent() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path(), "2024_05_01_10_00_00-mysqladmin", &[("Bytes_sent", "100")]);
    write_snapshot(dir.path(), "2024_05_01_10_00_01-mysqladmin", &[("Bytes_sent", "250")]);

    let groups = groups_for(dir.path());

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].prefix, "Bytes");
    let point = &groups[0].data_points[0];
    assert_eq!(point.name, "Bytes_sent");
    assert_eq!(point.values, vec![150]);
    assert_eq!((point.max, point.min, point.avg), (150, 150, 150.0));
}

#[test]
fn test_series_lengths() {
    let dir = tempfile::tempdir().unwrap();
    for (i, (questions, threads)) in [("10", "1"), ("20", "4"), ("35", "2"), ("60", "8")]
        .iter()
        .enumerate()
    {
        write_snapshot(
            dir.path(),
            &format!("2024_05_01_10_00_0{}-mysqladmin", i),
            &[("Questions", *questions), ("Threads_connected", *threads)],
        );
    }

    let collection = collect_directory(dir.path(), &CollectOptions::default()).unwrap();

    // counters: occurrences - 1, gauges: every occurrence at raw value
    assert_eq!(collection.series["Questions"], vec![10, 15, 25]);
    assert_eq!(collection.series["Threads_connected"], vec![1, 4, 2, 8]);
}

#[test]
fn test_multiple_tables_in_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut contents = table(&[("Com_select", "5")]);
    contents.push_str(&table(&[("Com_select", "9")]));
    fs::write(dir.path().join("2024_05_01_10_00_00-mysqladmin"), &contents).unwrap();
    write_snapshot(dir.path(), "2024_05_01_10_00_30-mysqladmin", &[("Com_select", "20")]);

    let collection = collect_directory(dir.path(), &CollectOptions::default()).unwrap();
    assert_eq!(collection.series["Com_select"], vec![4, 11]);
}

#[test]
fn test_files_replayed_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    // Written out of order on purpose
    write_snapshot(dir.path(), "2024_05_01_10_00_20-mysqladmin", &[("Questions", "300")]);
    write_snapshot(dir.path(), "2024_05_01_10_00_00-mysqladmin", &[("Questions", "100")]);
    write_snapshot(dir.path(), "2024_05_01_10_00_10-mysqladmin", &[("Questions", "150")]);

    let collection = collect_directory(dir.path(), &CollectOptions::default()).unwrap();
    assert_eq!(collection.series["Questions"], vec![50, 150]);
}

#[test]
fn test_grouping_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let names = [
        "Innodb_buffer_pool_pages_total",
        "Innodb_rows_read",
        "Threads_connected",
        "Bytes_received",
        "Bytes_sent",
        "Uptime",
        "Com_insert",
    ];
    for step in 0..3 {
        let rows: Vec<(&str, String)> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, ((i + 1) * (step + 1) * 7).to_string()))
            .collect();
        let rows: Vec<(&str, &str)> = rows.iter().map(|(n, v)| (*n, v.as_str())).collect();
        write_snapshot(dir.path(), &format!("2024_05_01_10_00_0{}-mysqladmin", step), &rows);
    }

    let first = groups_for(dir.path());
    let second = groups_for(dir.path());
    assert_eq!(first, second);

    let prefixes: Vec<&str> = first.iter().map(|g| g.prefix.as_str()).collect();
    assert_eq!(
        prefixes,
        vec!["Bytes", "Com", "Innodb", "Innodb_buffer_pool", "Threads", "Uptime"]
    );
}

#[test]
fn test_all_zero_series_never_grouped() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(
        dir.path(),
        "1-mysqladmin",
        &[("Aborted_clients", "3"), ("Bytes_sent", "1"), ("Threads_running", "0")],
    );
    write_snapshot(
        dir.path(),
        "2-mysqladmin",
        &[("Aborted_clients", "3"), ("Bytes_sent", "2"), ("Threads_running", "0")],
    );

    let groups = groups_for(dir.path());
    let names: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.data_points.iter().map(|p| p.name.as_str()))
        .collect();
    assert_eq!(names, vec!["Bytes_sent"]);
}

#[test]
fn test_malformed_lines_leave_previous_value_untouched() {
    let mut acc = DeltaAccumulator::new();
    let lines = [
        "| Bytes_sent | 100 |",
        "| Bytes_sent | n/a |",
        "| Bytes_sent",
        "+------------+-----+",
        "| Bytes_sent | 130 |",
    ];
    for line in lines {
        if let Some(sample) = parse_line(line) {
            acc.record(sample);
        }
        if line == "| Bytes_sent" {
            assert_eq!(acc.previous("Bytes_sent"), Some(100));
        }
    }

    assert_eq!(acc.previous("Bytes_sent"), Some(130));
    assert_eq!(acc.series("Bytes_sent"), Some(&[30][..]));
}

#[test]
fn test_prefix_classification_examples() {
    assert_eq!(classify_prefix("Innodb_buffer_pool_pages_total"), "Innodb_buffer_pool");
    assert_eq!(classify_prefix("Innodb_rows_read"), "Innodb");
    assert_eq!(classify_prefix("Threads_connected"), "Threads");
    assert_eq!(classify_prefix("Bytes_received"), "Bytes");
    assert_eq!(classify_prefix("Uptime"), "Uptime");
}

#[test]
fn test_threads_are_raw_not_delta() {
    let mut acc = DeltaAccumulator::new();
    acc.ingest(vec![
        RawSample::new("Threads_connected", 12),
        RawSample::new("Threads_connected", 12),
    ]);
    assert_eq!(acc.series("Threads_connected"), Some(&[12, 12][..]));
}

#[test]
fn test_unreadable_directory_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let result = collect_directory(dir.path().join("missing"), &CollectOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_other_files_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path(), "1-mysqladmin", &[("Questions", "1")]);
    write_snapshot(dir.path(), "1-mysqladmin.bak", &[("Questions", "1000")]);
    write_snapshot(dir.path(), "2-mysqladmin", &[("Questions", "5")]);

    let collection = collect_directory(dir.path(), &CollectOptions::default()).unwrap();
    assert_eq!(collection.files.len(), 2);
    assert_eq!(collection.series["Questions"], vec![4]);
}

#[test]
fn test_nested_directory_replayed_before_dashed_sibling() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    write_snapshot(&dir.path().join("a"), "1-mysqladmin", &[("Questions", "10")]);
    write_snapshot(dir.path(), "a-mysqladmin", &[("Questions", "100")]);

    let collection = collect_directory(dir.path(), &CollectOptions::default()).unwrap();

    assert!(collection.files[0].path.ends_with("a/1-mysqladmin"));
    assert!(collection.files[1].path.ends_with("a-mysqladmin"));
    assert_eq!(collection.series["Questions"], vec![90]);
}
