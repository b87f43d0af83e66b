//! pt-app: service layer tying catalog, series and chart together.
//!
//! Front ends (the CLI today, anything else tomorrow) talk to this crate:
//! one call resolves a request against the catalog, loads the selected
//! metric files and returns a chart spec plus per-pair failures.

pub mod error;
pub mod plot_service;
pub mod request;

pub use error::{AppError, AppResult};
pub use plot_service::{
    PlotFailure, PlotResponse, compose_plot, compose_plot_from_def, parse_channels,
};
pub use request::{PlotRequestDef, load_request, save_request};
