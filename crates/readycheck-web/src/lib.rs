pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod media;
pub mod probes;

pub use app::App;
