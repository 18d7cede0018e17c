//! Timed interpolation for the counter and chart reveals. These are plain
//! functions of elapsed fractions; the frame loop that drives them lives
//! entirely in the application.

/// Cubic ease-out: fast start, gentle landing
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Value `fraction` of the way from `start` to `end`, clamped to the span
pub fn interpolate(start: f64, end: f64, fraction: f64) -> f64 {
    start + (end - start) * fraction.clamp(0.0, 1.0)
}

/// Eased progress of a timed animation; a zero duration is already done
pub fn eased_progress(elapsed_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    ease_out_cubic(elapsed_ms as f64 / duration_ms as f64)
}
