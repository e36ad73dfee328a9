use eframe::egui::Color32;
use forcedash::look::{alloc_color, global_palette, set_global_palette};
use forcedash::{ChannelSpec, DashboardConfig, WindowSizing};

#[test]
fn capacity_covers_one_display_span_of_samples() {
    assert_eq!(WindowSizing::default().capacity(), 550);

    let sizing = WindowSizing {
        sampling_rate_hz: 60,
        display_seconds: 2.0,
    };
    assert_eq!(sizing.capacity(), 120);

    let degenerate = WindowSizing {
        sampling_rate_hz: 0,
        display_seconds: 5.0,
    };
    assert_eq!(degenerate.capacity(), 0);
}

#[test]
fn channel_spec_builders_override_the_defaults() {
    let spec = ChannelSpec::new("steerAngle", "Steering (deg)");
    assert_eq!(spec.color, None);
    assert_eq!(spec.width, 1.5);

    let spec = spec.with_color(Color32::BLUE).with_width(2.0);
    assert_eq!(spec.color, Some(Color32::BLUE));
    assert_eq!(spec.width, 2.0);
}

#[test]
fn default_config_plots_force_feedback_and_knows_the_pedals() {
    let cfg = DashboardConfig::default();
    assert_eq!(cfg.channels.len(), 1);
    assert_eq!(cfg.channels[0].name, "finalFF");
    assert_eq!(cfg.channels[0].label, "FFB (N)");

    let channels: Vec<&str> = cfg.pedals.iter().map(|p| p.channel.as_str()).collect();
    assert_eq!(channels, vec!["brake", "gas", "clutch", "handbrake"]);
}

#[test]
fn alloc_color_cycles_the_global_palette() {
    let palette = global_palette();
    assert!(!palette.is_empty());
    for i in 0..palette.len() * 2 {
        assert_eq!(alloc_color(i), palette[i % palette.len()]);
    }

    // A replacement palette takes effect immediately.
    set_global_palette(vec![Color32::RED, Color32::GREEN]);
    assert_eq!(alloc_color(0), Color32::RED);
    assert_eq!(alloc_color(3), Color32::GREEN);

    // An empty palette falls back to white instead of panicking.
    set_global_palette(Vec::new());
    assert_eq!(alloc_color(7), Color32::WHITE);

    set_global_palette(palette);
}
