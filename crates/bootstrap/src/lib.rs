//! # idf-bootstrap
//!
//! Bootstrap confidence intervals for GEV quantiles of annual maxima.
//!
//! ```mermaid
//! graph LR
//!     A["maxima sample"] --> B["seeds drawn from rng"]
//!     B -->|"par_iter"| C["resample + fit_gev + quantiles"]
//!     C -->|"failures discarded"| D["collected quantile vectors"]
//!     D -->|"type-7 percentiles"| E["CiBounds (lower / median / upper)"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use idf_bootstrap::{BootstrapConfig, bootstrap_ci};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let config = BootstrapConfig::new().with_n_bootstrap(200);
//! let ci = bootstrap_ci(&maxima, &[0.5, 0.1, 0.01], &config, &mut rng)?;
//! assert!(ci.lower()[2] <= ci.upper()[2]);
//! ```

mod config;
mod error;
mod resample;
mod result;

pub use config::BootstrapConfig;
pub use error::BootstrapError;
pub use resample::bootstrap_ci;
pub use result::CiBounds;
