//! Platform host: wires the pure core to disk, logging, and the terminal.
mod app;
mod effects;
mod logging;
mod persistence;
mod render;

pub use app::run_app;
