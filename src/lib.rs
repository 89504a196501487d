//! Library exports shared by the desktop UI, the CLI and the tests.
/// Application directory resolution.
pub mod app_dirs;
/// Persisted settings.
pub mod config;
/// egui state, controller and renderer.
pub mod egui_app;
pub(crate) mod http_client;
/// Tracing subscriber setup.
pub mod logging;
/// Prediction endpoint client and verdict types.
pub mod prediction;
/// Built-in sample texts.
pub mod samples;
