use egui::{Align2, Frame, Id, Margin, RichText, ScrollArea, Stroke, vec2};
use std::time::Instant;
use tracing::{debug, info};

use super::card::StatCard;
use crate::config::{self, MonitorConfig};
use crate::feed::FeedLog;
use crate::schedule::{self, Periodic};
use crate::stats::{Sampler, StatsSource, Utilization};

/// Main application state for the system monitor widget
pub struct MonitorApp<S: StatsSource> {
    config: MonitorConfig,
    sampler: Sampler<S>,
    cards: [StatCard; 3],
    feed: FeedLog,
    stats_timer: Periodic,
    animation_timer: Periodic,
}

impl<S: StatsSource> MonitorApp<S> {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: MonitorConfig,
        sampler: Sampler<S>,
        cards: [StatCard; 3],
        feed: FeedLog,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let now = Instant::now();
        let stats_timer = Periodic::new(config.stats_interval, now);
        let animation_timer = Periodic::new(config.snake.tick, now);
        debug!(
            stats_ms = stats_timer.interval().as_millis() as u64,
            animation_ms = animation_timer.interval().as_millis() as u64,
            "timers armed"
        );

        Self {
            config,
            sampler,
            cards,
            feed,
            stats_timer,
            animation_timer,
        }
    }

    fn apply(&mut self, reading: Utilization) {
        let [cpu, memory, disk] = &mut self.cards;
        cpu.set_value(reading.cpu);
        memory.set_value(reading.memory);
        disk.set_value(reading.disk);
    }

    /// Runs whichever periodic tasks are due and pulls new feed lines.
    fn run_due_tasks(&mut self, now: Instant) {
        if self.stats_timer.poll(now) {
            let reading = self.sampler.sample();
            self.apply(reading);
        }

        if self.animation_timer.poll(now) {
            for card in &mut self.cards {
                card.tick();
            }
        }

        let was_open = !self.feed.is_finished();
        self.feed.drain();
        if was_open && self.feed.is_finished() {
            info!(lines = self.feed.lines().len(), "process feed complete");
        }
    }

    fn show_cards(&self, ui: &mut egui::Ui) {
        let gap = 20.0;
        let row_width = self.cards.len() as f32 * self.config.card_size[0] + gap * (self.cards.len() - 1) as f32;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = gap;
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            for card in &self.cards {
                card.show(ui, &self.config);
            }
        });
    }

    fn show_feed(&self, ui: &mut egui::Ui) {
        Frame::none()
            .fill(config::COLOR_TERMINAL)
            .stroke(Stroke::new(1.0, config::COLOR_TERMINAL_BORDER))
            .outer_margin(Margin::symmetric(20.0, 20.0))
            .inner_margin(Margin::symmetric(10.0, 5.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.set_height(ui.available_height());

                ui.label(
                    RichText::new(config::FEED_HEADER_TEXT)
                        .monospace()
                        .strong()
                        .size(config::FONT_LOGS)
                        .color(config::COLOR_TEXT_MUTED),
                );
                ui.add_space(5.0);

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in self.feed.lines() {
                            ui.label(
                                RichText::new(line)
                                    .monospace()
                                    .size(config::FONT_LOGS)
                                    .color(config::COLOR_ACCENT_DISK),
                            );
                        }
                    });
            });
    }
}

impl<S: StatsSource> eframe::App for MonitorApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.run_due_tasks(now);

        // Wake up again for whichever timer comes first
        if let Some(wait) = schedule::next_wakeup([&self.stats_timer, &self.animation_timer], now) {
            ctx.request_repaint_after(wait);
        }

        egui::CentralPanel::default()
            .frame(Frame::none().fill(config::COLOR_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(
                        RichText::new(config::HEADER_TEXT)
                            .monospace()
                            .strong()
                            .size(config::FONT_TITLE)
                            .color(config::COLOR_TEXT_DIM),
                    );
                    ui.add_space(10.0);
                });

                self.show_cards(ui);
                self.show_feed(ui);
            });

        // Credit watermark, bottom right
        egui::Area::new(Id::new("credit"))
            .anchor(Align2::RIGHT_BOTTOM, vec2(-27.0, -13.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(config::CREDIT_TEXT)
                        .monospace()
                        .size(config::FONT_LOGS)
                        .color(config::COLOR_TEXT_DIM),
                );
            });
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::from(config::COLOR_BG).to_array()
    }
}
