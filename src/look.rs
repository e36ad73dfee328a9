//! Channel styling and the shared trace color palette.

use eframe::egui::Color32;
use once_cell::sync::Lazy;
use std::sync::Mutex;

// Global palette consulted when a channel has no explicit color.  The value
// is cloned out so callers can freely mutate the returned vector.
static GLOBAL_PALETTE: Lazy<Mutex<Vec<Color32>>> = Lazy::new(|| Mutex::new(default_palette()));

fn default_palette() -> Vec<Color32> {
    vec![
        Color32::from_rgb(31, 119, 180),
        Color32::from_rgb(255, 127, 14),
        Color32::from_rgb(44, 160, 44),
        Color32::from_rgb(214, 39, 40),
        Color32::from_rgb(148, 103, 189),
        Color32::from_rgb(140, 86, 75),
        Color32::from_rgb(227, 119, 194),
        Color32::from_rgb(127, 127, 127),
    ]
}

/// Get a copy of the current global trace color palette.
///
/// Exposed primarily for unit tests; most code relies on [`alloc_color`],
/// which consults the same palette.
pub fn global_palette() -> Vec<Color32> {
    GLOBAL_PALETTE.lock().unwrap().clone()
}

/// Replace the global palette, e.g. to match an application theme.
pub fn set_global_palette(new: Vec<Color32>) {
    let mut guard = GLOBAL_PALETTE.lock().unwrap();
    *guard = new;
}

/// Palette color for the channel at `index`, cycling when there are more
/// channels than palette entries.
pub fn alloc_color(index: usize) -> Color32 {
    let palette = global_palette();
    if palette.is_empty() {
        return Color32::WHITE;
    }
    palette[index % palette.len()]
}

/// Resolved drawing style of one scope trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelLook {
    pub color: Color32,
    pub width: f32,
}

impl Default for ChannelLook {
    fn default() -> Self {
        Self {
            color: Color32::WHITE,
            width: 1.5,
        }
    }
}
