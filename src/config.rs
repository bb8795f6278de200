use egui::Color32;
use std::time::Duration;

// Palette
pub const COLOR_BG: Color32 = Color32::from_rgb(0x02, 0x02, 0x02); // Almost pure black
pub const COLOR_CARD: Color32 = Color32::from_rgb(0x0a, 0x0a, 0x0a);
pub const COLOR_TERMINAL: Color32 = Color32::from_rgb(0x08, 0x08, 0x08);
pub const COLOR_TERMINAL_BORDER: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const COLOR_BAR_TRACK: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const COLOR_ACCENT_CPU: Color32 = Color32::from_rgb(0x00, 0xf2, 0xea); // Cyan
pub const COLOR_ACCENT_RAM: Color32 = Color32::from_rgb(0xff, 0x00, 0x55); // Pink
pub const COLOR_ACCENT_DISK: Color32 = Color32::from_rgb(0x00, 0xff, 0x41); // Matrix green
pub const COLOR_TEXT_DIM: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);

// Font sizes, all monospace
pub const FONT_BIG: f32 = 48.0;
pub const FONT_TITLE: f32 = 14.0;
pub const FONT_LOGS: f32 = 10.0;

pub const WINDOW_TITLE: &str = "QUARTZ_CODE // SYSTEM_MONITOR";
pub const HEADER_TEXT: &str = "/// SYSTEM_OVERWATCH_V2 ///";
pub const FEED_HEADER_TEXT: &str = ">> LIVE_PROCESS_FEED";
pub const CREDIT_TEXT: &str = "DEV_BUILD: QUARTZ_CODE © 2025";

/// Filesystem whose usage the disk card reports
pub const DISK_PATH: &str = "/";

/// Snake border parameters shared by every card
#[derive(Debug, Clone)]
pub struct SnakeConfig {
    pub length: f64,
    pub speed: f64,
    pub sample_step: usize,
    pub stroke_width: f32,
    pub tick: Duration,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            length: 150.0,
            speed: 8.0,
            sample_step: 5,
            stroke_width: 3.0,
            tick: Duration::from_millis(20),
        }
    }
}

/// Compiled-in settings for the whole widget
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub window_size: [f32; 2],
    pub card_size: [f32; 2],
    pub bar_width: f32,
    pub stats_interval: Duration,
    pub feed_pace: Duration,
    pub snake: SnakeConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            window_size: [900.0, 650.0],
            card_size: [260.0, 200.0],
            bar_width: 200.0,
            stats_interval: Duration::from_secs(1),
            feed_pace: Duration::from_millis(50), // Typing effect
            snake: SnakeConfig::default(),
        }
    }
}
