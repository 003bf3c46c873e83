//! Terminal front-end: binds stdin commands to the submission controller.
mod app;
mod config;
mod ui;

pub use app::run_app;
