use approx::assert_relative_eq;
use chrono::{NaiveDate, NaiveDateTime};
use idf_ams::{AmsError, ExtractConfig, HourlySeries, WindowStrategy, extract_maxima};

fn jan1(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Sparse pseudo-random hourly rain with some missing readings.
fn synthetic_rain(n: usize, seed: u64) -> Vec<f64> {
    let mut lcg = seed;
    (0..n)
        .map(|_| {
            lcg = lcg.wrapping_mul(6364136223846793005).wrapping_add(1);
            let u = ((lcg >> 33) as f64) / (u32::MAX as f64);
            if u < 0.01 {
                f64::NAN
            } else if u > 0.9 {
                (u - 0.9) * 50.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Two non-leap years; a 24-hour block of `10` in year one and `20` in
/// year two, both aligned to a day boundary.
fn two_year_burst() -> HourlySeries {
    let mut values = vec![0.0; 2 * 8760];
    for h in 240..264 {
        values[h] = 10.0;
    }
    for h in (8760 + 1200)..(8760 + 1224) {
        values[h] = 20.0;
    }
    HourlySeries::hourly_from(jan1(2001), values).unwrap()
}

#[test]
fn burst_scenario_fixed_is_exact() {
    let config = ExtractConfig::new()
        .with_durations(vec![24])
        .with_strategy(WindowStrategy::Fixed);
    let ams = extract_maxima(&two_year_burst(), &config).unwrap();
    assert_eq!(ams.years(), &[2001, 2002]);
    assert_eq!(ams.get(2001, 24), Some(240.0));
    assert_eq!(ams.get(2002, 24), Some(480.0));
}

#[test]
fn burst_scenario_sliding_not_below_fixed() {
    for padding in [0, 2] {
        let config = ExtractConfig::new()
            .with_durations(vec![24])
            .with_sliding_padding(padding);
        let ams = extract_maxima(&two_year_burst(), &config).unwrap();
        assert!(ams.get(2001, 24).unwrap() >= 240.0);
        assert!(ams.get(2002, 24).unwrap() >= 480.0);
    }
}

#[test]
fn sliding_catches_burst_split_by_block_boundary() {
    // 6-hour burst starting at hour 3 straddles two fixed 6-hour blocks.
    let mut values = vec![0.0; 8760];
    for h in 3..9 {
        values[h] = 1.0;
    }
    let series = HourlySeries::hourly_from(jan1(2001), values).unwrap();
    let fixed = ExtractConfig::new()
        .with_durations(vec![6])
        .with_strategy(WindowStrategy::Fixed);
    let sliding = ExtractConfig::new().with_durations(vec![6]);
    assert_eq!(
        extract_maxima(&series, &fixed).unwrap().get(2001, 6),
        Some(3.0)
    );
    assert_eq!(
        extract_maxima(&series, &sliding).unwrap().get(2001, 6),
        Some(6.0)
    );
}

#[test]
fn sliding_dominates_fixed_for_every_cell() {
    let series = HourlySeries::hourly_from(jan1(2003), synthetic_rain(3 * 8760 + 24, 7)).unwrap();
    let durations = vec![1, 2, 3, 6, 12, 24, 48, 72];
    let fixed = extract_maxima(
        &series,
        &ExtractConfig::new()
            .with_durations(durations.clone())
            .with_strategy(WindowStrategy::Fixed),
    )
    .unwrap();

    for padding in [0, 2] {
        let sliding = extract_maxima(
            &series,
            &ExtractConfig::new()
                .with_durations(durations.clone())
                .with_sliding_padding(padding),
        )
        .unwrap();
        for &year in fixed.years() {
            for &d in &durations {
                if let (Some(f), Some(s)) = (fixed.get(year, d), sliding.get(year, d)) {
                    assert!(s >= f, "year {year}, {d}H: sliding {s} < fixed {f}");
                }
            }
        }
    }
}

#[test]
fn fixed_never_exceeds_annual_total() {
    // 2004 is a leap year: 8784 samples, of which only the first 8760 are blocked.
    let series = HourlySeries::hourly_from(jan1(2004), synthetic_rain(2 * 8784, 11)).unwrap();
    let config = ExtractConfig::new().with_strategy(WindowStrategy::Fixed);
    let ams = extract_maxima(&series, &config).unwrap();

    let values = series.values();
    let year_of = |i: usize| {
        use chrono::Datelike;
        series.timestamps()[i].year()
    };
    for &year in ams.years() {
        let total: f64 = (0..values.len())
            .filter(|&i| year_of(i) == year && !values[i].is_nan())
            .map(|i| values[i])
            .sum();
        for &d in ams.durations() {
            if let Some(v) = ams.get(year, d) {
                assert!(v <= total + 1e-9, "year {year}, {d}H: {v} > total {total}");
            }
        }
    }
}

#[test]
fn all_missing_year_gives_gap_for_every_duration() {
    let mut values = synthetic_rain(8760, 3);
    values.extend(std::iter::repeat_n(f64::NAN, 8760));
    let series = HourlySeries::hourly_from(jan1(2001), values).unwrap();

    for strategy in [WindowStrategy::Fixed, WindowStrategy::Sliding] {
        let ams = extract_maxima(&series, &ExtractConfig::new().with_strategy(strategy)).unwrap();
        for &d in ams.durations() {
            assert_eq!(ams.get(2002, d), None, "{strategy} {d}H should be missing");
        }
        assert_eq!(ams.coverage_gaps().len(), ams.n_durations());
    }
}

#[test]
fn partially_missing_block_counts_present_values() {
    let mut values = vec![0.0; 8760];
    values[0] = 4.0;
    values[1] = f64::NAN;
    values[2] = 1.0;
    let series = HourlySeries::hourly_from(jan1(2001), values).unwrap();
    let config = ExtractConfig::new()
        .with_durations(vec![3])
        .with_strategy(WindowStrategy::Fixed);
    let ams = extract_maxima(&series, &config).unwrap();
    assert_relative_eq!(ams.get(2001, 3).unwrap(), 5.0);
}

#[test]
fn short_configured_year() {
    // A 48-hour "year" keeps the test series small.
    let values: Vec<f64> = (0..48).map(|h| if h == 30 { 2.0 } else { 0.0 }).collect();
    let series = HourlySeries::hourly_from(jan1(2001), values).unwrap();
    let config = ExtractConfig::new()
        .with_hours_per_year(48)
        .with_durations(vec![1, 12])
        .with_strategy(WindowStrategy::Fixed);
    let ams = extract_maxima(&series, &config).unwrap();
    assert_eq!(ams.get(2001, 1), Some(2.0));
    assert_eq!(ams.get(2001, 12), Some(2.0));
}

#[test]
fn unknown_strategy_name_is_config_error() {
    let r = "moving".parse::<WindowStrategy>();
    assert!(matches!(r, Err(AmsError::InvalidStrategy { .. })));
}
