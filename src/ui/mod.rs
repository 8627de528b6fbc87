//! Ratatui front-end: a listing form on top, the sortable table below.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
