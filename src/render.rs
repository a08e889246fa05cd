use crate::models::{FillBar, ProgressKind};

/// Fill text shown once a daily bar reaches its goal.
pub const DONE_MARKER: &str = "DONE";

/// Bars narrower than this (but above zero) carry no text.
const NARROW_BAR_PERCENT: f64 = 15.0;

/// Fixed-point formatting with half-away-from-zero rounding.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return format!("{value:.decimals$}");
    }
    let rounded = scaled.round() / factor;
    format!("{rounded:.decimals$}")
}

pub fn clamp_percentage(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

pub fn general_fill(balance: f64, target: f64) -> FillBar {
    let percentage = clamp_percentage(balance / target * 100.0);
    FillBar {
        percentage,
        width: format!("{percentage}%"),
        text: format!("{}%", to_fixed(percentage, 0)),
    }
}

pub fn daily_percentage(current: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        clamp_percentage(current / goal * 100.0)
    } else {
        0.0
    }
}

pub fn daily_fill(current: f64, goal: f64) -> FillBar {
    let percentage = daily_percentage(current, goal);
    let text = if percentage > 0.0 && percentage < NARROW_BAR_PERCENT {
        String::new()
    } else if percentage >= 100.0 {
        DONE_MARKER.to_owned()
    } else {
        format!("{}%", to_fixed(percentage, 0))
    };

    FillBar {
        percentage,
        width: format!("{percentage}%"),
        text,
    }
}

pub fn kind_label(kind: ProgressKind, value: f64) -> String {
    to_fixed(value, kind.decimals())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_fixed_rounds_half_up() {
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(250.0, 2), "250.00");
        assert_eq!(to_fixed(12.5, 0), "13");
        assert_eq!(to_fixed(33.333333, 0), "33");
        assert_eq!(to_fixed(7.0, 0), "7");
    }

    #[test]
    fn to_fixed_keeps_huge_values_finite() {
        let label = to_fixed(1e307, 2);
        assert!(label.ends_with(".00"), "{label}");
        assert!(!label.contains("inf"));
        assert!(to_fixed(f64::MAX, 2).ends_with(".00"));
    }

    #[test]
    fn general_fill_caps_at_full() {
        let half = general_fill(250.0, 500.0);
        assert_eq!(half.percentage, 50.0);
        assert_eq!(half.width, "50%");
        assert_eq!(half.text, "50%");

        let over = general_fill(600.0, 500.0);
        assert_eq!(over.width, "100%");
        assert_eq!(over.text, "100%");

        let empty = general_fill(0.0, 500.0);
        assert_eq!(empty.width, "0%");
        assert_eq!(empty.text, "0%");
    }

    #[test]
    fn percentages_stay_in_bounds() {
        for value in [0.0, 0.01, 1.0, 499.99, 500.0, 1e9, f64::MAX] {
            let p = general_fill(value, 500.0).percentage;
            assert!((0.0..=100.0).contains(&p), "{value} -> {p}");
            let p = daily_percentage(value, 10.0);
            assert!((0.0..=100.0).contains(&p), "{value} -> {p}");
        }
        assert_eq!(daily_percentage(5.0, 0.0), 0.0);
    }

    #[test]
    fn daily_fill_text_thresholds() {
        assert_eq!(daily_fill(0.0, 10.0).text, "0%");
        assert_eq!(daily_fill(1.0, 10.0).text, "");
        assert_eq!(daily_fill(1.4, 10.0).text, "");
        assert_eq!(daily_fill(1.5, 10.0).text, "15%");
        assert_eq!(daily_fill(9.0, 10.0).text, "90%");
        assert_eq!(daily_fill(10.0, 10.0).text, DONE_MARKER);
        assert_eq!(daily_fill(25.0, 10.0).text, DONE_MARKER);
    }

    #[test]
    fn labels_follow_kind_precision() {
        assert_eq!(kind_label(ProgressKind::Rub, 12.0), "12.00");
        assert_eq!(kind_label(ProgressKind::Tasks, 12.0), "12");
    }
}
