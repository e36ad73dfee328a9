use forcedash::{channel_telemetry, spawn_polling, SourceError, TelemetryFrame, TelemetrySource};

struct ScriptedSource {
    remaining: u32,
}

impl TelemetrySource for ScriptedSource {
    fn poll(&mut self) -> Result<TelemetryFrame, SourceError> {
        if self.remaining == 0 {
            return Err("script exhausted".into());
        }
        self.remaining -= 1;
        Ok(TelemetryFrame::new().with_value("finalFF", f64::from(self.remaining)))
    }
}

#[test]
fn polling_stops_after_a_source_error_and_stamps_monotonic_timestamps() {
    let (sink, rx) = channel_telemetry();
    let handle = spawn_polling(ScriptedSource { remaining: 5 }, 1000, sink);
    handle.join().unwrap();

    let frames: Vec<TelemetryFrame> = rx.try_iter().collect();
    assert_eq!(frames.len(), 5);
    for pair in frames.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
    assert_eq!(frames[0].values["finalFF"], 4.0);
}

#[test]
fn polling_stops_once_the_receiver_is_gone() {
    let (sink, rx) = channel_telemetry();
    drop(rx);
    // Would loop forever if send failures did not end the loop.
    let handle = spawn_polling(ScriptedSource { remaining: u32::MAX }, 1000, sink);
    handle.join().unwrap();
}

#[test]
fn sink_clones_feed_the_same_receiver() {
    let (sink, rx) = channel_telemetry();
    let clone = sink.clone();
    sink.send_frame(TelemetryFrame::new().with_timestamp(1.0))
        .unwrap();
    clone
        .send_frame(TelemetryFrame::new().with_timestamp(2.0))
        .unwrap();
    drop(sink);
    drop(clone);

    let frames: Vec<TelemetryFrame> = rx.iter().collect();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].timestamp, 1.0);
    assert_eq!(frames[1].timestamp, 2.0);
}

#[test]
fn frame_builder_sets_all_fields() {
    let f = TelemetryFrame::new()
        .with_timestamp(2.5)
        .with_value("finalFF", -3.0)
        .with_value("steerAngle", 90.0)
        .with_acc_g([0.1, 0.0, -1.2]);
    assert_eq!(f.timestamp, 2.5);
    assert_eq!(f.values["finalFF"], -3.0);
    assert_eq!(f.values["steerAngle"], 90.0);
    assert_eq!(f.acc_g, Some([0.1, 0.0, -1.2]));
}
