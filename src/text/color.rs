//! Color math used by animations and log fading.

use super::line::Line;
use super::style::Rgb;

/// Move `color` towards white by `amount` (0.0 keeps it, 1.0 is white).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn lighten(color: Rgb, amount: f32) -> Rgb {
    let amount = amount.clamp(0.0, 1.0);
    let channel = |c: u8| -> u8 {
        let c = f32::from(c);
        (c + (255.0 - c) * amount) as u8
    };
    Rgb::new(channel(color.r), channel(color.g), channel(color.b))
}

/// Blend `color` over `background` at the given brightness.
///
/// Brightness 1.0 keeps `color`, 0.0 collapses onto `background`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend(color: Rgb, background: Rgb, brightness: f32) -> Rgb {
    let brightness = brightness.clamp(0.0, 1.0);
    let channel = |fg: u8, bg: u8| -> u8 {
        let (fg, bg) = (f32::from(fg), f32::from(bg));
        (bg + (fg - bg) * brightness).round() as u8
    };
    Rgb::new(
        channel(color.r, background.r),
        channel(color.g, background.g),
        channel(color.b, background.b),
    )
}

/// Fade every span of a line towards the background.
///
/// Spans without a foreground use `text_color` as their base, so plain
/// log text fades the same way as colored text.
#[must_use]
pub fn fade_line(line: Line, text_color: Rgb, background: Rgb, brightness: f32) -> Line {
    line.map_styles(|mut style| {
        let base = style.fg.unwrap_or(text_color);
        style.fg = Some(blend(base, background, brightness));
        style
    })
}

/// A ramp of `steps` colors, each lighter than the previous by `step`.
pub fn ramp(base: Rgb, steps: usize, step: f32) -> Vec<Rgb> {
    (0..steps)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let amount = step * i as f32;
            lighten(base, amount)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Style;

    #[test]
    fn test_lighten_bounds() {
        assert_eq!(lighten(Rgb::BLACK, 0.0), Rgb::BLACK);
        assert_eq!(lighten(Rgb::BLACK, 1.0), Rgb::WHITE);
        assert_eq!(lighten(Rgb::new(0, 100, 255), 0.5), Rgb::new(127, 177, 255));
    }

    #[test]
    fn test_blend_endpoints() {
        let fg = Rgb::new(200, 100, 50);
        assert_eq!(blend(fg, Rgb::BLACK, 1.0), fg);
        assert_eq!(blend(fg, Rgb::BLACK, 0.0), Rgb::BLACK);
        assert_eq!(blend(Rgb::WHITE, Rgb::BLACK, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_fade_line_defaults_plain_spans() {
        let line = Line::raw("log");
        let faded = fade_line(line, Rgb::WHITE, Rgb::BLACK, 0.4);
        assert_eq!(faded.spans[0].style.fg, Some(Rgb::new(102, 102, 102)));

        let colored = Line::styled("x", Style::fg(Rgb::new(0, 200, 0)));
        let faded = fade_line(colored, Rgb::WHITE, Rgb::BLACK, 0.5);
        assert_eq!(faded.spans[0].style.fg, Some(Rgb::new(0, 100, 0)));
    }

    #[test]
    fn test_ramp_monotonic() {
        let colors = ramp(Rgb::from_u32(0x893AE3), 5, 0.1);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], Rgb::from_u32(0x893AE3));
        for pair in colors.windows(2) {
            assert!(pair[1].r >= pair[0].r);
        }
    }
}
