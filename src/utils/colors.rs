//! ANSI color helpers for terminal output.

use ansi_term::{Colour, Style};
use chrono::Duration;

/// Colors are on unless `NO_COLOR` is set.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Overtime that maps to the most saturated colour.
const FULL_SCALE_MINUTES: f64 = 4.0 * 60.0;

/// Cell background for an overtime value: dark red at -4h or less, through
/// white at zero, to dark blue at +4h or more.
pub fn overtime_colour(overtime: Duration) -> Colour {
    let v = (overtime.num_minutes() as f64 / FULL_SCALE_MINUTES).clamp(-1.0, 1.0);
    let other = (255.0 * (1.0 - v.abs())).round() as u8;

    if v > 0.0 {
        Colour::RGB(other, other, 255)
    } else {
        Colour::RGB(255, other, other)
    }
}

/// Black text on the overtime background.
pub fn overtime_style(overtime: Duration) -> Style {
    Colour::Black.on(overtime_colour(overtime))
}

/// Surplus color: green above zero, red below.
pub fn surplus_style(value: Duration) -> Style {
    if value > Duration::zero() {
        Colour::Green.normal()
    } else if value < Duration::zero() {
        Colour::Red.normal()
    } else {
        Style::new()
    }
}
