//! # idf-gev
//!
//! Generalized extreme value (GEV) fitting for annual maxima and
//! return-level evaluation.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["annual maxima sample"] -->|"fit_gev(&sample, &config)?"| B["GevParams"]
//!     B --> C[".quantiles(&probabilities)"]
//!     B --> D[".sf(x) / .cdf(x)"]
//!     B --> E[".return_level(years)"]
//! ```
//!
//! ## Conventions
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | xi | [`GevParams::shape()`] | > 0 heavy tail, 0 Gumbel, < 0 bounded tail |
//! | mu | [`GevParams::location()`] | location |
//! | sigma | [`GevParams::scale()`] | scale, always > 0 |
//!
//! Quantiles are taken from the inverse survival function: for an annual
//! exceedance probability `p` the returned depth `x` satisfies `sf(x) = p`.
//!
//! ## Quick Start
//!
//! ```ignore
//! let params = fit_gev(&maxima, &FitConfig::new())?;
//! let depths = params.quantiles(&[0.5, 0.1, 0.01]);
//! ```

mod config;
mod error;
mod fit;
mod params;

pub(crate) mod optimizer;

pub use config::{FitConfig, FitMethod};
pub use error::GevError;
pub use fit::{fit_gev, validate_sample};
pub use params::GevParams;
