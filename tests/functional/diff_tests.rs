//! Functional tests covering the full resolve → load → diff → emit pipeline

use crate::common::{baseline_fixture_rows, newer_fixture_rows, TestFixture};
use statdiff::resolver::SnapshotPair;
use statdiff::{diff, output, snapshot, CounterValue, Relation};
use std::fs;
use std::path::Path;

fn run_pipeline(first: &Path, second: &Path) -> (Relation, usize) {
    let pair = SnapshotPair::resolve(first, second).unwrap();
    let old = snapshot::load(&pair.old_path).unwrap();
    let new = snapshot::load(&pair.new_path).unwrap();
    let outcome = diff::compute_diff(&old, &new, pair.cutoff);
    (outcome.combined, outcome.new_entries)
}

#[test]
fn test_end_to_end_scenario() {
    let fixture = TestFixture::new().unwrap();
    let old_path = fixture
        .create_snapshot("temp_20240601.txt", &baseline_fixture_rows())
        .unwrap();
    let new_path = fixture
        .create_snapshot("temp_20240610.txt", &newer_fixture_rows())
        .unwrap();

    let (combined, new_entries) = run_pipeline(&old_path, &new_path);

    // id2/id6 vanished, id5 predates the cutoff: three rows survive
    let ids: Vec<&str> = combined.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["id1", "id3", "id4"]);
    assert_eq!(new_entries, 1);

    // Common rows carry counter deltas
    let id1 = combined.get("id1").unwrap();
    assert_eq!(id1.views, CounterValue::Int(100));
    assert_eq!(id1.comments, CounterValue::Int(500));
    assert_eq!(id1.mylists, CounterValue::Int(100));
    assert_eq!(id1.likes, CounterValue::Int(100));

    let id3 = combined.get("id3").unwrap();
    assert_eq!(id3.views, CounterValue::Int(200));
    assert_eq!(id3.comments, CounterValue::Int(100));
    assert_eq!(id3.mylists, CounterValue::Int(200));
    assert_eq!(id3.likes, CounterValue::Int(200));

    // The post-cutoff newcomer keeps its raw counters
    let id4 = combined.get("id4").unwrap();
    assert_eq!(id4.views, CounterValue::Int(1000));
    assert_eq!(id4.comments, CounterValue::Int(2000));
    assert_eq!(id4.mylists, CounterValue::Int(3000));
    assert_eq!(id4.likes, CounterValue::Int(5000));

    // Non-counter fields always come from the newer snapshot
    assert_eq!(id1.channel_id, "string1_new");
    assert_eq!(id3.channel_id, "string3_new");
    assert_eq!(id1.posted_at, "2024年06月01日 05：00：00");
}

#[test]
fn test_argument_order_does_not_change_the_result() {
    let fixture = TestFixture::new().unwrap();
    let old_path = fixture
        .create_snapshot("temp_20240601.txt", &baseline_fixture_rows())
        .unwrap();
    let new_path = fixture
        .create_snapshot("temp_20240610.txt", &newer_fixture_rows())
        .unwrap();

    let forward = run_pipeline(&old_path, &new_path);
    let reversed = run_pipeline(&new_path, &old_path);

    assert_eq!(forward.0, reversed.0);
    assert_eq!(forward.1, reversed.1);
}

#[test]
fn test_sort_desc_orders_by_view_delta() {
    let fixture = TestFixture::new().unwrap();
    let old_path = fixture
        .create_snapshot("temp_20240601.txt", &baseline_fixture_rows())
        .unwrap();
    let new_path = fixture
        .create_snapshot("temp_20240610.txt", &newer_fixture_rows())
        .unwrap();

    let (mut combined, _) = run_pipeline(&old_path, &new_path);
    combined.sort_by_views_desc();

    let ids: Vec<&str> = combined.iter().map(|r| r.id.as_str()).collect();
    // View deltas: id4 = 1000, id3 = 200, id1 = 100
    assert_eq!(ids, vec!["id4", "id3", "id1"]);
}

#[test]
fn test_written_output_is_headerless_tsv_keyed_first() {
    let fixture = TestFixture::new().unwrap();
    let old_path = fixture
        .create_snapshot("temp_20240601.txt", &baseline_fixture_rows())
        .unwrap();
    let new_path = fixture
        .create_snapshot("temp_20240610.txt", &newer_fixture_rows())
        .unwrap();

    let (combined, _) = run_pipeline(&old_path, &new_path);
    let out_path = fixture.root().join("combined.txt");
    output::write_to_path(&combined, &out_path).unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id1\t"));
    assert_eq!(lines[0].split('\t').count(), 14);
    // Deltas are rendered as plain integers, separators stripped
    assert_eq!(lines[2].split('\t').nth(2), Some("1000"));

    // The emitted file is itself a valid snapshot
    let reloaded = snapshot::load(&out_path).unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded.get("id1").unwrap().views, CounterValue::Int(100));
}
