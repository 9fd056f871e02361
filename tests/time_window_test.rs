mod test_streams;

use approx::assert_abs_diff_eq;
use chrono::DateTime;
use ringframe::buffer::window_start;
use ringframe::{WindowError, WindowedBuffer};

fn ten_seconds(capacity: usize) -> WindowedBuffer {
    let values: Vec<f64> = (0..10).map(|i| i as f64).collect();
    test_streams::timed_buffer(capacity, &values, 1000)
}

#[test]
fn test_trailing_three_seconds() {
    let buffer = ten_seconds(10);
    let view = buffer.time_window_view("ts", Some(3000)).unwrap();
    assert_eq!(
        view.f64_values("value").unwrap(),
        vec![6.0, 7.0, 8.0, 9.0]
    );
}

#[test]
fn test_zero_window_is_latest_row() {
    let buffer = ten_seconds(10);
    let view = buffer.time_window_view("ts", Some(0)).unwrap();
    assert_eq!(view.f64_values("value").unwrap(), vec![9.0]);
}

#[test]
fn test_negative_or_unset_window_is_empty() {
    let buffer = ten_seconds(10);
    assert!(buffer.time_window_view("ts", Some(-1000)).unwrap().is_empty());
    assert!(buffer.time_window_view("ts", None).unwrap().is_empty());
}

#[test]
fn test_empty_buffer_is_empty() {
    let buffer = WindowedBuffer::new(test_streams::value_schema(), 5);
    assert!(buffer.time_window_view("ts", Some(3000)).unwrap().is_empty());
}

#[test]
fn test_missing_timestamp_column_fails() {
    let buffer = ten_seconds(10);
    assert!(matches!(
        buffer.time_window_view("time", Some(3000)),
        Err(WindowError::InvalidColumn(_))
    ));
    assert!(matches!(
        buffer.time_window_view("value", Some(3000)),
        Err(WindowError::InvalidColumn(_))
    ));
}

#[test]
fn test_window_on_wrapped_buffer() {
    let buffer = ten_seconds(5);
    assert_eq!(buffer.write_cursor(), 0);

    let view = buffer.time_window_view("ts", Some(3000)).unwrap();
    assert_eq!(
        view.f64_values("value").unwrap(),
        vec![6.0, 7.0, 8.0, 9.0]
    );

    let all = buffer.time_window_view("ts", Some(60_000)).unwrap();
    assert_eq!(
        all.f64_values("value").unwrap(),
        vec![5.0, 6.0, 7.0, 8.0, 9.0]
    );
}

#[test]
fn test_window_on_partially_wrapped_buffer() {
    let values: Vec<f64> = (0..7).map(|i| i as f64).collect();
    let buffer = test_streams::timed_buffer(5, &values, 1000);
    assert_eq!(buffer.write_cursor(), 2);

    let view = buffer.time_window_view("ts", Some(1500)).unwrap();
    assert_eq!(view.f64_values("value").unwrap(), vec![5.0, 6.0]);
    assert_eq!(view.slots(), &[0, 1]);
}

#[test]
fn test_window_boundary_is_inclusive() {
    let buffer = ten_seconds(10);
    let view = buffer.time_window_view("ts", Some(2999)).unwrap();
    assert_eq!(view.len(), 3);
    let view = buffer.time_window_view("ts", Some(3000)).unwrap();
    assert_eq!(view.len(), 4);
}

#[test]
fn test_huge_window_keeps_everything() {
    let buffer = ten_seconds(10);
    let view = buffer.time_window_view("ts", Some(i64::MAX)).unwrap();
    assert_eq!(view.len(), 10);
}

#[test]
fn test_window_rows_timestamps() {
    let buffer = ten_seconds(10);
    let view = buffer.time_window_view("ts", Some(1000)).unwrap();
    let instants = view.instants("ts").unwrap();
    let last = instants.last().unwrap();
    assert_eq!(
        *last,
        DateTime::from_timestamp_millis(test_streams::BASE_MILLIS + 9000).unwrap()
    );
    let span = (instants[1] - instants[0]).num_milliseconds() as f64;
    assert_abs_diff_eq!(span, 1000.0);
}

#[test]
fn test_window_start_is_lower_bound() {
    let timestamps: Vec<i64> = (0..20).map(|i| i * 10).collect();
    // Rotate the physical layout so the oldest sample sits at slot 7
    let mut physical = vec![0; 20];
    let indices: Vec<usize> = (0..20).map(|i| (i + 7) % 20).collect();
    for (pos, &slot) in indices.iter().enumerate() {
        physical[slot] = timestamps[pos];
    }

    for target in -5..=205 {
        let expected = timestamps.iter().position(|&t| t >= target).unwrap_or(20);
        assert_eq!(
            window_start(&physical, &indices, &target),
            expected,
            "target {target}"
        );
    }
}
