use egui::{Color32, Pos2, Rect};

// Common constants for all element types
pub const TEXT_WIDTH_FACTOR: f32 = 0.6;
pub const BINARY_CELL_SIZE: f32 = 2.0;
pub const STROKE_TENSION: f32 = 0.3;
pub const MIN_SHAPE_STROKE_WIDTH: f32 = 2.0;

/// Calculate the bounding box for a set of points
pub(crate) fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}

/// True when `pos` lies strictly inside `rect` (edges excluded).
pub fn strictly_contains(rect: Rect, pos: Pos2) -> bool {
    pos.x > rect.min.x && pos.x < rect.max.x && pos.y > rect.min.y && pos.y < rect.max.y
}

/// Format a color the way drawings store it: `#rrggbb`, or `#rrggbbaa` when translucent.
pub fn color_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn color_from_hex(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match digits.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|v| v * 17);
            Some(Color32::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => Some(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(color_from_hex("#ff0000"), Some(Color32::RED));
        assert_eq!(color_from_hex("#fff"), Some(Color32::WHITE));
        assert_eq!(color_to_hex(Color32::from_rgb(0xf5, 0xf4, 0xf2)), "#f5f4f2");
        assert_eq!(color_from_hex("red"), None);
        assert_eq!(color_from_hex("#12345"), None);
        assert_eq!(color_from_hex("#gg0000"), None);
    }

    #[test]
    fn test_strictly_contains_excludes_edges() {
        let rect = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));
        assert!(strictly_contains(rect, Pos2::new(5.0, 5.0)));
        assert!(!strictly_contains(rect, Pos2::new(0.0, 5.0)));
        assert!(!strictly_contains(rect, Pos2::new(10.0, 10.0)));
    }
}
