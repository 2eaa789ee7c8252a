pub const AXIS_X_TARGET_SPACING_PX: f64 = 90.0;
pub const AXIS_Y_TARGET_SPACING_PX: f64 = 50.0;

const MIN_TICKS: usize = 2;
const MAX_TICKS: usize = 12;
const TICK_INDEX_EPSILON: f64 = 1e-9;

/// Number of ticks that fits `axis_span_px` at roughly `target_spacing_px`.
#[must_use]
pub fn axis_tick_target_count(axis_span_px: f64, target_spacing_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return MIN_TICKS;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return MIN_TICKS;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(MIN_TICKS, MAX_TICKS)
}

/// Rounds a raw step to 1, 2 or 5 times a power of ten.
#[must_use]
pub fn nice_step(step_abs: f64) -> f64 {
    if !step_abs.is_finite() || step_abs <= 0.0 {
        return 1.0;
    }

    let magnitude = 10.0_f64.powf(step_abs.log10().floor());
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return step_abs;
    }

    let normalized = step_abs / magnitude;
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick positions on multiples of a nice step that fall inside `range`.
///
/// Returns the step alongside the ticks so labels can pick their precision.
#[must_use]
pub fn nice_ticks(range: (f64, f64), target_count: usize) -> (Vec<f64>, f64) {
    let (start, end) = if range.0 <= range.1 {
        range
    } else {
        (range.1, range.0)
    };
    let span = end - start;
    if !span.is_finite() || span <= 0.0 || target_count < 2 {
        return (vec![start], 0.0);
    }

    let step = nice_step(span / (target_count - 1) as f64);
    let first = (start / step - TICK_INDEX_EPSILON).ceil() as i64;
    let last = (end / step + TICK_INDEX_EPSILON).floor() as i64;
    let ticks = (first..=last)
        .map(|index| index as f64 * step)
        .map(|value| if value == 0.0 { 0.0 } else { value })
        .collect();
    (ticks, step)
}

#[must_use]
pub fn precision_from_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 2;
    }
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len().clamp(0, 12)
}

#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let precision = precision_from_step(step);
    let text = format!("{value:.precision$}");
    // avoid "-0" / "-0.00" labels
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_owned()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::{format_tick, nice_step, nice_ticks, precision_from_step};

    #[test]
    fn nice_step_snaps_to_one_two_five() {
        assert_eq!(nice_step(0.0012), 0.001);
        assert_eq!(nice_step(0.0023), 0.002);
        assert_eq!(nice_step(37.0), 50.0);
        assert_eq!(nice_step(80.0), 100.0);
    }

    #[test]
    fn nice_ticks_stay_inside_range() {
        let (ticks, step) = nice_ticks((0.0, 0.02), 6);
        assert!((step - 0.005).abs() < 1e-15);
        assert_eq!(ticks.len(), 5);
        assert!(ticks.iter().all(|t| (0.0..=0.02 + 1e-15).contains(t)));
    }

    #[test]
    fn tick_labels_follow_step_precision() {
        assert_eq!(precision_from_step(0.005), 3);
        assert_eq!(precision_from_step(50.0), 0);
        assert_eq!(format_tick(0.015, 0.005), "0.015");
        assert_eq!(format_tick(-0.0, 0.5), "0.0");
    }
}
