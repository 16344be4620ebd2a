//! # idf-curve
//!
//! Intensity-duration-frequency tables from hourly precipitation.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph TD
//!     A["HourlySeries"] -->|"extract_maxima"| B["AnnualMaxima (year x duration)"]
//!     B -->|"per duration, in parallel"| C{"CiMode"}
//!     C -->|"None"| D["fit_gev + quantiles"]
//!     C -->|"Bootstrap"| E["fit_gev + bootstrap_ci"]
//!     D --> F["IdfTable"]
//!     E --> F
//!     F --> G["IdfCurves (maxima, fits, table, summary)"]
//! ```
//!
//! Without bounds the table has one row per return period (`"2-yr"`,
//! `"5-yr"`, ...). With bootstrap bounds it has three blocks in a fixed
//! order: lower (`"L2-yr"`, ...), median (`"2-yr"`, ...), upper
//! (`"U2-yr"`, ...). A duration whose bounds fail keeps its point estimate
//! in the central block; [`IdfTable::central_estimate`] tells which one a
//! column holds.
//!
//! A duration whose fit fails leaves missing cells and an entry in the
//! [`RunSummary`]; the other durations are unaffected.
//!
//! ## Quick Start
//!
//! ```ignore
//! use idf_curve::{CiMode, IdfConfig, build_idf};
//! use idf_bootstrap::BootstrapConfig;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = IdfConfig::new().with_ci(CiMode::Bootstrap(BootstrapConfig::new()));
//! let curves = build_idf(&series, &config, &mut StdRng::seed_from_u64(42))?;
//! let depth = curves.table().get("U100-yr", 24);
//! ```

mod builder;
mod config;
mod error;
mod return_period;
mod summary;
mod table;

pub use builder::{IdfCurves, build_idf, build_idf_from_maxima};
pub use config::{CiMode, IdfConfig};
pub use error::IdfError;
pub use return_period::{DEFAULT_RETURN_PERIODS, ReturnPeriods};
pub use summary::{DurationIssue, RunSummary};
pub use table::{CentralEstimate, IdfRow, IdfTable, RowKind};
