//! Display rules shared by every adapter

use spcguard_core::{Classification, ControlZone};

/// Text shown when a positive probability rounds to zero at two decimals
pub const BELOW_RESOLUTION_LABEL: &str = "< 0.01%";

/// Format a defect probability as a two-decimal percentage
///
/// A probability that is positive but too small to survive the rounding is
/// shown as `"< 0.01%"` so a non-zero risk never reads as zero.
///
/// ```rust
/// use spcguard_dashboard::format_defect_percent;
///
/// assert_eq!(format_defect_percent(0.05), "5.00%");
/// assert_eq!(format_defect_percent(0.0), "0.00%");
/// assert_eq!(format_defect_percent(3.0e-7), "< 0.01%");
/// ```
pub fn format_defect_percent(probability: f64) -> String {
    let text = format!("{:.2}", probability * 100.0);
    if probability > 0.0 && text == "0.00" {
        BELOW_RESOLUTION_LABEL.to_string()
    } else {
        format!("{text}%")
    }
}

/// Panel tag for the specification verdict
pub fn spec_tag(classification: &Classification) -> &'static str {
    if classification.in_spec {
        "IN SPEC"
    } else {
        "OUT OF SPEC"
    }
}

/// Panel tag for the control zone
pub fn zone_tag(zone: ControlZone) -> &'static str {
    match zone {
        ControlZone::Stable => "STABLE",
        ControlZone::Warning => "WARNING",
        ControlZone::Critical => "CRITICAL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn regular_percentages() {
        assert_eq!(format_defect_percent(0.05), "5.00%");
        assert_eq!(format_defect_percent(1.0), "100.00%");
        assert_eq!(format_defect_percent(0.000_1), "0.01%");
        assert_eq!(format_defect_percent(0.012_3), "1.23%");
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(format_defect_percent(0.0), "0.00%");
    }

    #[test]
    fn tiny_positive_is_not_shown_as_zero() {
        assert_eq!(format_defect_percent(1.0e-12), BELOW_RESOLUTION_LABEL);
        assert_eq!(format_defect_percent(0.000_04), BELOW_RESOLUTION_LABEL);
    }

    #[test]
    fn tags() {
        let verdict = Classification {
            in_spec: false,
            control_zone: ControlZone::Critical,
        };
        assert_eq!(spec_tag(&verdict), "OUT OF SPEC");
        assert_eq!(zone_tag(verdict.control_zone), "CRITICAL");
        assert_eq!(zone_tag(ControlZone::Stable), "STABLE");
    }

    proptest! {
        #[test]
        fn positive_probability_never_reads_zero(p in 1.0e-300f64..1.0) {
            let text = format_defect_percent(p);
            prop_assert_ne!(text.as_str(), "0.00%");
            prop_assert!(text.ends_with('%'));
        }
    }
}
