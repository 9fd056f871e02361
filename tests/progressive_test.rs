mod test_streams;

use approx::assert_relative_eq;
use ringframe::constants::PROGRESSIVE_BUFFER_CAPACITY;
use ringframe::progressive_column;
use ringframe::smoothing::{median_filter, moving_average};

#[test]
fn test_progressive_moving_average() {
    let values = [2.0, 4.0, 6.0, 8.0, 10.0];
    let records = test_streams::timed_records(&values, 1000);

    let out = progressive_column(&test_streams::value_schema(), &records, None, |b| {
        moving_average(b, 3, "value")
    })
    .unwrap();

    assert_eq!(out.len(), values.len());
    assert_eq!(out[0], None);
    assert_eq!(out[1], None);
    assert_relative_eq!(out[2].unwrap(), 4.0);
    assert_relative_eq!(out[4].unwrap(), 8.0);
}

#[test]
fn test_progressive_time_window_counts() {
    let values: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let records = test_streams::timed_records(&values, 500);

    let out = progressive_column(&test_streams::value_schema(), &records, None, |b| {
        Ok(Some(b.time_window_view("ts", Some(1000))?.len()))
    })
    .unwrap();

    // Rows at most 1s older than the newest: 1, 2, then 3 from the third row on
    let expected: Vec<Option<usize>> = (0..10).map(|i| Some((i + 1).min(3))).collect();
    assert_eq!(out, expected);
}

#[test]
fn test_progressive_matches_manual_replay() {
    let values: Vec<f64> = (0..50).map(|i| ((i * 37) % 11) as f64).collect();
    let records = test_streams::timed_records(&values, 1000);

    let out = progressive_column(&test_streams::value_schema(), &records, None, |b| {
        median_filter(b, 7, "value")
    })
    .unwrap();

    for (i, result) in out.iter().enumerate() {
        let expected = if i + 1 < 7 {
            None
        } else {
            let mut window = values[i + 1 - 7..=i].to_vec();
            window.sort_by(f64::total_cmp);
            Some(window[3])
        };
        assert_eq!(*result, expected, "row {i}");
    }
}

#[test]
fn test_progressive_capacity_is_fixed() {
    let values = vec![1.0; 1200];
    let records = test_streams::timed_records(&values, 1);

    let out = progressive_column(&test_streams::value_schema(), &records, Some(10), |b| {
        Ok(Some(b.occupancy()))
    })
    .unwrap();

    assert_eq!(out[9], Some(10));
    assert_eq!(out[10], Some(11));
    assert_eq!(out[1199], Some(PROGRESSIVE_BUFFER_CAPACITY));
}

#[test]
fn test_progressive_propagates_filter_errors() {
    let records = test_streams::timed_records(&[1.0, 2.0], 1000);
    let result = progressive_column(&test_streams::value_schema(), &records, None, |b| {
        moving_average(b, 1, "missing")
    });
    assert!(result.is_err());
}
