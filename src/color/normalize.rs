//! Perceptual brightness correction applied before colors reach a sink.

use super::Color;

/// Rescale a raw gradient color so the LED hardware shows it at a
/// comparable perceived brightness.
///
/// The dominant channel is scaled towards full scale by `sqrt(255 / max)`,
/// every channel truncated to an integer. Channel ratios are preserved up
/// to truncation and the output maximum is `trunc(sqrt(255 * max))`.
/// Black stays black.
pub fn normalize_brightness(color: Color) -> Color {
    let (r, g, b) = (color.r(), color.g(), color.b());
    let max = r.max(g).max(b);
    if max == 0 {
        return Color::OFF;
    }

    let ratio = 255.0 / max as f64;
    let factor = ratio.sqrt();
    let scale = |channel: u8| (channel as f64 * factor) as u8;

    Color::from_rgb(scale(r), scale(g), scale(b))
}
