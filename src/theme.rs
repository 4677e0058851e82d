use ratatui::style::Color;

// Centralized garden palette. RGB values are quantized down to the
// terminal's capabilities at lookup time, so callers can stay in RGB.

pub const STEM_RGB: (u8, u8, u8) = (95, 160, 70);
pub const BLOOM_OUTER_RGB: (u8, u8, u8) = (235, 120, 180);
pub const BLOOM_INNER_RGB: (u8, u8, u8) = (250, 220, 120);
pub const WILT_RGB: (u8, u8, u8) = (150, 120, 60);

pub fn stem() -> Color {
    rgb_to_color(STEM_RGB)
}

pub fn bloom_outer() -> Color {
    rgb_to_color(BLOOM_OUTER_RGB)
}

pub fn bloom_inner() -> Color {
    rgb_to_color(BLOOM_INNER_RGB)
}

pub fn wilt() -> Color {
    rgb_to_color(WILT_RGB)
}

// Tooltip overlay
pub fn tooltip_bg() -> Color {
    Color::DarkGray
}
pub fn tooltip_fg() -> Color {
    Color::White
}
pub fn tooltip_border() -> Color {
    Color::Gray
}

pub fn rgb_to_color(rgb: (u8, u8, u8)) -> Color {
    let (r, g, b) = rgb;
    if truecolor_supported() {
        return Color::Rgb(r, g, b);
    }
    Color::Indexed(nearest_xterm_index(r, g, b))
}

/// Truecolor when `COLORTERM` advertises it; otherwise the nearest
/// xterm-256 index.
fn truecolor_supported() -> bool {
    std::env::var("COLORTERM")
        .map(|value| {
            let value = value.to_lowercase();
            value.contains("truecolor") || value.contains("24bit")
        })
        .unwrap_or(false)
}

fn nearest_xterm_index(r: u8, g: u8, b: u8) -> u8 {
    // candidates: the 6x6x6 color cube (16..=231)...
    let cube = |v: u8| ((u16::from(v) * 5 + 127) / 255) as u8;
    let cube_level = |c: u8| -> u8 {
        match c {
            0 => 0,
            1 => 95,
            _ => 95 + 40 * (c - 1),
        }
    };
    let (r6, g6, b6) = (cube(r), cube(g), cube(b));
    let cube_index = 16 + 36 * u16::from(r6) + 6 * u16::from(g6) + u16::from(b6);
    let cube_rgb = (cube_level(r6), cube_level(g6), cube_level(b6));

    // ...and the 24-step gray ramp (232..=255)
    let avg = ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8;
    let gray_step = ((u16::from(avg) * 23 + 127) / 255) as u8;
    let gray_value = (8 + u16::from(gray_step) * 10).min(255) as u8;

    let dist = |(cr, cg, cb): (u8, u8, u8)| -> u32 {
        let dr = i32::from(r) - i32::from(cr);
        let dg = i32::from(g) - i32::from(cg);
        let db = i32::from(b) - i32::from(cb);
        (dr * dr + dg * dg + db * db) as u32
    };

    if dist((gray_value, gray_value, gray_value)) < dist(cube_rgb) {
        232 + gray_step
    } else {
        cube_index as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_index_stays_in_extended_range() {
        for rgb in [(0, 0, 0), (255, 255, 255), (95, 160, 70), (10, 200, 30)] {
            let idx = nearest_xterm_index(rgb.0, rgb.1, rgb.2);
            assert!(idx >= 16);
        }
    }

    #[test]
    fn grays_prefer_the_gray_ramp() {
        let idx = nearest_xterm_index(120, 120, 120);
        assert!((232..=255).contains(&idx));
    }

    #[test]
    fn saturated_colors_prefer_the_cube() {
        let idx = nearest_xterm_index(255, 0, 0);
        assert!((16..=231).contains(&idx));
    }

    #[test]
    fn palette_lookups_produce_usable_colors() {
        for color in [stem(), bloom_outer(), bloom_inner(), wilt()] {
            match color {
                Color::Rgb(..) | Color::Indexed(_) => {}
                other => panic!("unexpected color variant {other:?}"),
            }
        }
    }
}
