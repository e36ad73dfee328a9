use std::collections::HashMap;

use forcedash::{scroll_window, DashError, SampleWindow};

fn sample(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs.iter().map(|(name, v)| (name.to_string(), *v)).collect()
}

#[test]
fn sequences_stay_aligned_and_capped_at_capacity() {
    let mut w = SampleWindow::new(3, ["a", "b"]).unwrap();
    for i in 0..10 {
        let t = i as f64;
        w.append(t, &sample(&[("a", t * 10.0), ("b", -t)])).unwrap();
        assert!(w.len() <= 3);
        assert_eq!(w.timestamps().len(), w.values("a").unwrap().len());
        assert_eq!(w.timestamps().len(), w.values("b").unwrap().len());
    }
    assert_eq!(w.len(), 3);
}

#[test]
fn eviction_drops_the_oldest_sample_from_every_sequence() {
    let mut w = SampleWindow::new(3, ["force"]).unwrap();
    for (t, v) in [(0.0, 1.0), (1.0, -4.0), (2.0, 2.0), (3.0, 1.0)] {
        w.append(t, &sample(&[("force", v)])).unwrap();
    }
    let ts: Vec<f64> = w.timestamps().iter().copied().collect();
    let vs: Vec<f64> = w.values("force").unwrap().iter().copied().collect();
    assert_eq!(ts, vec![1.0, 2.0, 3.0]);
    assert_eq!(vs, vec![-4.0, 2.0, 1.0]);

    let bound = w.symmetric_bound(0.1).unwrap();
    assert!((bound - 4.4).abs() < 1e-9);
}

#[test]
fn series_pairs_each_timestamp_with_its_value() {
    let mut w = SampleWindow::new(4, ["force"]).unwrap();
    for t in 0..3 {
        let t = t as f64;
        w.append(t, &sample(&[("force", t * 2.0)])).unwrap();
    }
    let points = w.series("force").unwrap();
    assert_eq!(points, vec![[0.0, 0.0], [1.0, 2.0], [2.0, 4.0]]);
    assert!(w.series("nope").is_none());
    assert!(w.values("nope").is_none());
}

#[test]
fn missing_channel_rejects_the_whole_sample() {
    let mut w = SampleWindow::new(3, ["a", "b"]).unwrap();
    w.append(0.0, &sample(&[("a", 1.0), ("b", 2.0)])).unwrap();

    let err = w.append(1.0, &sample(&[("a", 3.0)])).unwrap_err();
    assert!(matches!(err, DashError::MissingChannel { ref name, .. } if name == "b"));

    // Nothing from the rejected sample may have landed.
    assert_eq!(w.len(), 1);
    assert_eq!(w.values("a").unwrap().len(), 1);
    assert_eq!(w.values("b").unwrap().len(), 1);
    assert_eq!(w.latest_timestamp(), Some(0.0));
}

#[test]
fn unexpected_channel_rejects_the_whole_sample() {
    let mut w = SampleWindow::new(3, ["a"]).unwrap();
    let err = w
        .append(0.0, &sample(&[("a", 1.0), ("extra", 2.0)]))
        .unwrap_err();
    assert!(matches!(err, DashError::UnknownChannel { ref name, .. } if name == "extra"));
    assert!(w.is_empty());
}

#[test]
fn construction_rejects_zero_capacity_and_duplicate_channels() {
    assert!(matches!(
        SampleWindow::new(0, ["a"]).unwrap_err(),
        DashError::ZeroCapacity
    ));
    assert!(matches!(
        SampleWindow::new(4, ["a", "a"]).unwrap_err(),
        DashError::DuplicateChannel(ref name) if name == "a"
    ));
}

#[test]
fn empty_window_reports_no_bound() {
    let w = SampleWindow::new(4, ["a"]).unwrap();
    assert!(w.is_empty());
    assert_eq!(w.latest_timestamp(), None);
    assert_eq!(w.max_abs(), None);
    assert_eq!(w.symmetric_bound(0.1), None);
}

#[test]
fn bound_uses_the_largest_magnitude_across_all_channels() {
    let mut w = SampleWindow::new(4, ["small", "large"]).unwrap();
    w.append(0.0, &sample(&[("small", 0.5), ("large", -6.0)]))
        .unwrap();
    w.append(1.0, &sample(&[("small", -0.25), ("large", 3.0)]))
        .unwrap();
    assert_eq!(w.max_abs(), Some(6.0));
    let bound = w.symmetric_bound(0.5).unwrap();
    assert!((bound - 9.0).abs() < 1e-9);
}

#[test]
fn bound_grows_with_the_margin() {
    let mut w = SampleWindow::new(4, ["a"]).unwrap();
    w.append(0.0, &sample(&[("a", 2.0)])).unwrap();
    let mut last = f64::NEG_INFINITY;
    for margin in [0.0, 0.1, 0.5, 1.0] {
        let bound = w.symmetric_bound(margin).unwrap();
        assert!(bound >= last);
        last = bound;
    }
    assert_eq!(w.symmetric_bound(0.0), Some(2.0));
}

#[test]
fn all_zero_window_yields_a_zero_bound() {
    let mut w = SampleWindow::new(4, ["a"]).unwrap();
    w.append(0.0, &sample(&[("a", 0.0)])).unwrap();
    assert_eq!(w.symmetric_bound(0.1), Some(0.0));
}

#[test]
fn scroll_window_sits_still_then_slides() {
    assert_eq!(scroll_window(0.0, 5.0), (0.0, 5.0));
    assert_eq!(scroll_window(3.0, 5.0), (0.0, 5.0));
    assert_eq!(scroll_window(5.0, 5.0), (0.0, 5.0));
    assert_eq!(scroll_window(7.0, 5.0), (2.0, 7.0));
    assert_eq!(scroll_window(100.5, 5.0), (95.5, 100.5));
}

#[test]
fn scroll_window_span_is_always_the_display_width() {
    for t in [0.0, 1.0, 4.999, 5.0, 5.001, 60.0] {
        let (lo, hi) = scroll_window(t, 5.0);
        assert!((hi - lo - 5.0).abs() < 1e-9);
        assert!(lo >= 0.0);
    }
}
