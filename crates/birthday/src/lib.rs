//! Interactive birthday paradox explorer
//!
//! Terminal front end for `birthday_core`: a trial-count slider drives
//! repeated sweeps on a background worker, and each completed sweep is drawn
//! as a chart of theoretical versus empirical unique-birthday probability.

pub mod app;
pub mod components;
pub mod controller;
pub mod logging;
pub mod plot;
pub mod state;
pub mod util;
pub mod worker;

pub use app::App;
pub use logging::{LogSettings, init_logging};
