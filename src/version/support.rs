//! End-of-life classification of release cycles

use chrono::{Days, NaiveDate};
use tracing::warn;

use crate::config::EOL_WARNING_WINDOW_DAYS;
use crate::version::range::minor_component;
use crate::version::registry::{Eol, ReleaseCycle};

/// Date format the registry uses for EOL dates
const EOL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Release cycles still supported as of the classification date
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupportedReleases {
    /// Supported minor versions, ascending and deduplicated
    pub minors: Vec<u32>,
    /// Supported cycles whose end of life falls inside the warning window
    pub expiring_soon: Vec<ExpiryNotice>,
}

/// A supported cycle that reaches end of life soon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryNotice {
    pub cycle: String,
    pub eol: NaiveDate,
    pub days_left: i64,
}

/// Classify release cycles into the supported set as of `today`.
///
/// A cycle counts as supported when its EOL is unscheduled, flagged false,
/// or a date strictly after `today`. Cycles whose name does not start with
/// `3.<minor>` are ignored. A date in an unrecognized format keeps the
/// cycle supported, so a registry formatting glitch cannot silently drop
/// a release.
pub fn classify_cycles(cycles: &[ReleaseCycle], today: NaiveDate) -> SupportedReleases {
    let warning_threshold = today + Days::new(EOL_WARNING_WINDOW_DAYS);

    let mut minors = Vec::new();
    let mut expiring_soon = Vec::new();

    for record in cycles {
        let Some(minor) = minor_component(&record.cycle) else {
            continue;
        };

        match &record.eol {
            Eol::Unscheduled | Eol::Flag(false) => minors.push(minor),
            Eol::Flag(true) => {}
            Eol::Date(raw) => {
                let Ok(eol) = NaiveDate::parse_from_str(raw, EOL_DATE_FORMAT) else {
                    warn!(
                        "Unrecognized EOL date '{}' for Python {}; treating the cycle as supported",
                        raw, record.cycle
                    );
                    minors.push(minor);
                    continue;
                };

                if today < eol {
                    minors.push(minor);
                    if eol <= warning_threshold {
                        expiring_soon.push(ExpiryNotice {
                            cycle: record.cycle.clone(),
                            eol,
                            days_left: (eol - today).num_days(),
                        });
                    }
                }
            }
        }
    }

    minors.sort_unstable();
    minors.dedup();

    SupportedReleases {
        minors,
        expiring_soon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cycle(name: &str, eol: Eol) -> ReleaseCycle {
        ReleaseCycle {
            cycle: name.to_string(),
            eol,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(Eol::Unscheduled, true)]
    #[case(Eol::Flag(false), true)]
    #[case(Eol::Flag(true), false)]
    #[case(Eol::Date("2027-04-02".to_string()), true)]
    #[case(Eol::Date("2026-04-03".to_string()), true)]
    #[case(Eol::Date("2026-04-02".to_string()), false)]
    #[case(Eol::Date("2025-04-02".to_string()), false)]
    #[case(Eol::Date("someday".to_string()), true)]
    fn classify_cycles_includes_cycle_per_eol_shape(#[case] eol: Eol, #[case] included: bool) {
        let today = date(2026, 4, 2);

        let result = classify_cycles(&[cycle("3.11", eol)], today);

        assert_eq!(result.minors.contains(&11), included);
    }

    #[rstest]
    #[case::before_the_dated_eol(date(2024, 6, 1), vec![9, 10])]
    #[case::after_the_dated_eol(date(2026, 1, 1), vec![10])]
    fn classify_cycles_handles_a_mixed_record_set(
        #[case] today: NaiveDate,
        #[case] expected: Vec<u32>,
    ) {
        let cycles = vec![
            cycle("3.11", Eol::Flag(true)),
            cycle("3.10", Eol::Flag(false)),
            cycle("3.9", Eol::Date("2025-10-31".to_string())),
        ];

        let result = classify_cycles(&cycles, today);

        assert_eq!(result.minors, expected);
        assert!(result.expiring_soon.is_empty());
    }

    #[test]
    fn classify_cycles_sorts_and_dedupes_minors() {
        let today = date(2026, 4, 2);
        let cycles = vec![
            cycle("3.13", Eol::Flag(false)),
            cycle("3.12", Eol::Flag(false)),
            cycle("3.12", Eol::Unscheduled),
            cycle("3.10", Eol::Flag(false)),
        ];

        let result = classify_cycles(&cycles, today);

        assert_eq!(result.minors, vec![10, 12, 13]);
    }

    #[test]
    fn classify_cycles_ignores_cycles_outside_python_3() {
        let today = date(2026, 4, 2);
        let cycles = vec![
            cycle("2.7", Eol::Flag(false)),
            cycle("4.0", Eol::Flag(false)),
            cycle("3.11", Eol::Flag(false)),
        ];

        let result = classify_cycles(&cycles, today);

        assert_eq!(result.minors, vec![11]);
    }

    #[test]
    fn classify_cycles_collects_expiry_notices_inside_window() {
        let today = date(2026, 4, 2);
        let cycles = vec![
            cycle("3.9", Eol::Date("2026-05-02".to_string())),
            cycle("3.10", Eol::Date("2026-05-03".to_string())),
            cycle("3.11", Eol::Flag(false)),
        ];

        let result = classify_cycles(&cycles, today);

        assert_eq!(result.minors, vec![9, 10, 11]);
        assert_eq!(
            result.expiring_soon,
            vec![ExpiryNotice {
                cycle: "3.9".to_string(),
                eol: date(2026, 5, 2),
                days_left: 30,
            }]
        );
    }

    #[test]
    fn classify_cycles_keeps_cycles_with_unrecognized_dates() {
        let today = date(2026, 4, 2);
        let cycles = vec![cycle("3.12", Eol::Date("31/10/2028".to_string()))];

        let result = classify_cycles(&cycles, today);

        assert_eq!(result.minors, vec![12]);
        assert!(result.expiring_soon.is_empty());
    }
}
