mod app;
mod border;
mod card;

pub use app::MonitorApp;
pub use card::stat_cards;
