mod config;
mod error;
mod feed;
mod gui;
mod perimeter;
mod process;
mod schedule;
mod stats;

use std::sync::{Arc, OnceLock};

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::MonitorConfig;
use error::Result;
use feed::FeedLog;
use gui::MonitorApp;
use stats::{ProcSource, Sampler};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = MonitorConfig::default();
    let cards = gui::stat_cards(&config)?;
    let sampler = Sampler::new(ProcSource::default(), config::DISK_PATH);

    // The feed worker starts before the window exists; it can only ask for a
    // repaint once the egui context has been handed over.
    let repaint: Arc<OnceLock<egui::Context>> = Arc::new(OnceLock::new());
    let (rx, _worker) = feed::spawn(config.feed_pace, {
        let repaint = Arc::clone(&repaint);
        move || {
            if let Some(ctx) = repaint.get() {
                ctx.request_repaint();
            }
        }
    })?;
    let feed = FeedLog::new(rx);

    // Configure native options for the GUI
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_resizable(false)
            .with_title(config::WINDOW_TITLE),
        ..Default::default()
    };

    info!("starting {}", config::WINDOW_TITLE);
    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let _ = repaint.set(cc.egui_ctx.clone());
            Box::new(MonitorApp::new(cc, config, sampler, cards, feed))
        }),
    )?;

    Ok(())
}
