use egui::{Align, Color32, Layout, ProgressBar, RichText, Sense, Ui, vec2};

use super::border;
use crate::config::{self, MonitorConfig};
use crate::error::Result;
use crate::perimeter::{Perimeter, Snake};

/// Percentage as shown on a card: at least two digits, so "05" stays as wide as "42".
pub fn percent_digits(value: u8) -> String {
    format!("{:02}", value)
}

/// One utilization meter framed by an animated snake border
pub struct StatCard {
    title: &'static str,
    icon: &'static str,
    accent: Color32,
    value: u8,
    snake: Snake,
}

impl StatCard {
    pub fn new(title: &'static str, icon: &'static str, accent: Color32, config: &MonitorConfig) -> Result<Self> {
        let [width, height] = config.card_size;
        let perimeter = Perimeter::new(width.into(), height.into())?;

        Ok(StatCard {
            title,
            icon,
            accent,
            value: 0,
            snake: Snake::new(perimeter, &config.snake),
        })
    }

    pub fn set_value(&mut self, value: u8) {
        self.value = value.min(100);
    }

    /// Moves the border animation forward one tick
    pub fn tick(&mut self) {
        self.snake.advance();
    }

    pub fn show(&self, ui: &mut Ui, config: &MonitorConfig) {
        let (rect, _) = ui.allocate_exact_size(vec2(config.card_size[0], config.card_size[1]), Sense::hover());
        let inner = rect.shrink(2.0);

        ui.painter().rect_filled(inner, 0.0, config::COLOR_CARD);

        let mut content = ui.child_ui(inner, Layout::top_down(Align::Center));
        content.visuals_mut().extreme_bg_color = config::COLOR_BAR_TRACK;

        content.add_space(25.0);
        content.label(
            RichText::new(format!("{} {}", self.icon, self.title))
                .monospace()
                .strong()
                .size(config::FONT_TITLE)
                .color(self.accent),
        );
        content.add_space(5.0);
        content.label(
            RichText::new(format!("{}%", percent_digits(self.value)))
                .monospace()
                .strong()
                .size(config::FONT_BIG)
                .color(Color32::WHITE),
        );
        content.add_space(15.0);
        content.add(
            ProgressBar::new(self.value as f32 / 100.0)
                .desired_width(config.bar_width)
                .fill(self.accent),
        );

        border::paint_snake(ui.painter(), rect, &self.snake, self.accent, config.snake.stroke_width);
    }
}

/// The CPU, memory and disk cards, in display order
pub fn stat_cards(config: &MonitorConfig) -> Result<[StatCard; 3]> {
    Ok([
        StatCard::new("CPU_THREAD_0", "⚡", config::COLOR_ACCENT_CPU, config)?,
        StatCard::new("MEMORY_ALLOC", "💾", config::COLOR_ACCENT_RAM, config)?,
        StatCard::new("DATA_VOLUME", "💿", config::COLOR_ACCENT_DISK, config)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digits_are_zero_padded() {
        assert_eq!(percent_digits(0), "00");
        assert_eq!(percent_digits(5), "05");
        assert_eq!(percent_digits(9), "09");
    }

    #[test]
    fn two_digit_values_are_unchanged() {
        for value in 10..=99u8 {
            let digits = percent_digits(value);
            assert_eq!(digits.len(), 2);
            assert_eq!(digits, value.to_string());
        }
    }

    #[test]
    fn full_meter_is_three_characters() {
        assert_eq!(percent_digits(100), "100");
        assert_eq!(percent_digits(100).len(), 3);
    }

    #[test]
    fn card_value_is_capped() {
        let mut card = StatCard::new("CPU", "", Color32::WHITE, &MonitorConfig::default()).unwrap();
        card.set_value(250);
        assert_eq!(card.value, 100);
    }

    #[test]
    fn bad_card_size_is_an_error() {
        let config = MonitorConfig { card_size: [0.0, 200.0], ..MonitorConfig::default() };
        assert!(stat_cards(&config).is_err());
    }
}
