//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use idf_ams::{ExtractConfig, WindowStrategy};
use idf_bootstrap::BootstrapConfig;
use idf_curve::{CiMode, IdfConfig, ReturnPeriods};
use idf_gev::{FitConfig, FitMethod};

/// Parses a windowing strategy name (`"sliding"` or `"fixed"`).
pub fn parse_strategy(s: &str) -> Result<WindowStrategy> {
    s.parse::<WindowStrategy>()
        .with_context(|| format!("invalid [extract].strategy: {s:?}"))
}

/// Parses a fitting method name (`"mle"` or `"lmoments"`).
pub fn parse_fit_method(s: &str) -> Result<FitMethod> {
    s.parse::<FitMethod>()
        .with_context(|| format!("invalid [fit].method: {s:?}"))
}

/// Builds an [`ExtractConfig`] from the TOML extract configuration.
pub fn build_extract_config(extract: &ExtractToml) -> Result<ExtractConfig> {
    let strategy = parse_strategy(&extract.strategy)?;
    let cfg = ExtractConfig::new()
        .with_durations(extract.durations.clone())
        .with_strategy(strategy)
        .with_hours_per_year(extract.hours_per_year)
        .with_sliding_padding(extract.sliding_padding);
    cfg.validate().context("invalid [extract] table")?;
    Ok(cfg)
}

/// Builds a [`FitConfig`] from the TOML fit configuration.
pub fn build_fit_config(fit: &FitToml) -> Result<FitConfig> {
    let method = parse_fit_method(&fit.method)?;
    let cfg = FitConfig::new()
        .with_method(method)
        .with_min_sample_size(fit.min_sample_size)
        .with_max_iters(fit.max_iters)
        .with_tolerance(fit.tolerance)
        .with_shape_limit(fit.shape_limit);
    cfg.validate().context("invalid [fit] table")?;
    Ok(cfg)
}

/// Builds the [`ReturnPeriods`] from the TOML curve configuration.
///
/// At most one of `return_periods` and `probabilities` may be set; with
/// neither the default set is used.
pub fn build_return_periods(curve: &CurveToml) -> Result<ReturnPeriods> {
    match (&curve.return_periods, &curve.probabilities) {
        (Some(_), Some(_)) => {
            bail!("[curve] must set at most one of return_periods or probabilities, got both")
        }
        (Some(years), None) => {
            ReturnPeriods::from_years(years).context("invalid [curve].return_periods")
        }
        (None, Some(p)) => {
            ReturnPeriods::from_probabilities(p).context("invalid [curve].probabilities")
        }
        (None, None) => Ok(ReturnPeriods::new()),
    }
}

/// Builds the [`CiMode`]: [`CiMode::None`] when `[bootstrap]` is absent.
pub fn build_ci_mode(bootstrap: Option<&BootstrapToml>) -> Result<CiMode> {
    let Some(b) = bootstrap else {
        return Ok(CiMode::None);
    };
    let mut cfg = BootstrapConfig::new()
        .with_n_bootstrap(b.n_bootstrap)
        .with_confidence_level(b.confidence_level);
    if let Some(n) = b.max_failures {
        cfg = cfg.with_max_failures(n);
    }
    cfg.validate().context("invalid [bootstrap] table")?;
    Ok(CiMode::Bootstrap(cfg))
}

/// Builds the complete [`IdfConfig`] from a [`RunConfig`].
pub fn build_idf_config(config: &RunConfig) -> Result<IdfConfig> {
    Ok(IdfConfig::new()
        .with_extract(build_extract_config(&config.extract)?)
        .with_fit(build_fit_config(&config.fit)?)
        .with_return_periods(build_return_periods(&config.curve)?)
        .with_ci(build_ci_mode(config.bootstrap.as_ref())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names() {
        assert_eq!(parse_strategy("Sliding").unwrap(), WindowStrategy::Sliding);
        assert_eq!(parse_strategy(" fixed ").unwrap(), WindowStrategy::Fixed);
        let err = parse_strategy("rolling").unwrap_err();
        assert!(format!("{err:#}").contains("rolling"));
    }

    #[test]
    fn fit_method_names() {
        assert_eq!(parse_fit_method("MLE").unwrap(), FitMethod::Mle);
        assert_eq!(parse_fit_method("lmoments").unwrap(), FitMethod::LMoments);
        assert_eq!(parse_fit_method("L-Moments").unwrap(), FitMethod::LMoments);
        let err = parse_fit_method("moments").unwrap_err();
        assert!(format!("{err:#}").contains("[fit].method"));
    }

    #[test]
    fn defaults_convert() {
        let cfg = build_idf_config(&RunConfig::default()).unwrap();
        assert_eq!(cfg, IdfConfig::new());
    }

    #[test]
    fn bootstrap_table_enables_ci() {
        let run = RunConfig::from_toml_str("[bootstrap]\nn_bootstrap = 50\n").unwrap();
        let cfg = build_idf_config(&run).unwrap();
        match cfg.ci() {
            CiMode::Bootstrap(b) => assert_eq!(b.n_bootstrap(), 50),
            CiMode::None => panic!("expected bootstrap mode"),
        }
    }

    #[test]
    fn invalid_values_are_configuration_errors() {
        for text in [
            "[extract]\ndurations = []\n",
            "[extract]\ndurations = [0, 1]\n",
            "[extract]\nstrategy = \"rolling\"\n",
            "[fit]\nmethod = \"pwm\"\n",
            "[bootstrap]\nconfidence_level = 1.0\n",
            "[bootstrap]\nn_bootstrap = 0\n",
            "[curve]\nprobabilities = [0.5, 1.5]\n",
            "[curve]\nreturn_periods = [2.0]\nprobabilities = [0.5]\n",
        ] {
            let run = RunConfig::from_toml_str(text).unwrap();
            assert!(build_idf_config(&run).is_err(), "accepted: {text}");
        }
    }

    #[test]
    fn probabilities_keep_order() {
        let curve = CurveToml {
            return_periods: None,
            probabilities: Some(vec![0.1, 0.5]),
        };
        let rp = build_return_periods(&curve).unwrap();
        assert_eq!(rp.labels(), vec!["10-yr", "2-yr"]);
    }
}
