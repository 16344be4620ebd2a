//! # idf
//!
//! Intensity-duration-frequency (IDF) curves from hourly precipitation.
//!
//! This package ties the workspace crates together behind a TOML run
//! configuration:
//!
//! | Crate | Role |
//! |-------|------|
//! | [`idf_ams`] | annual maxima extraction (sliding / fixed windows) |
//! | [`idf_gev`] | GEV fitting and quantiles |
//! | [`idf_bootstrap`] | bootstrap confidence bounds |
//! | [`idf_curve`] | per-duration assembly into an [`IdfTable`] |
//!
//! ## Quick Start
//!
//! ```ignore
//! idf::logging::init(1);
//! let config = idf::RunConfig::from_toml_str(&text)?;
//! let curves = idf::run(&series, &config)?;
//! for label in curves.table().row_labels() {
//!     println!("{label}: {:?}", curves.table().get(label, 24));
//! }
//! ```

pub mod config;
pub mod convert;
pub mod logging;
mod pipeline;

pub use config::RunConfig;
pub use pipeline::{run, run_from_maxima};

pub use idf_ams::{AnnualMaxima, HourlySeries, WindowStrategy};
pub use idf_bootstrap::BootstrapConfig;
pub use idf_curve::{CiMode, IdfConfig, IdfCurves, IdfTable, ReturnPeriods, RowKind, RunSummary};
pub use idf_gev::{FitConfig, FitMethod, GevParams};
