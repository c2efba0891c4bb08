use super::bitmap::{Bitmap, Point};
use super::color::Color;

/// Round half up, the way the dashboard server has always rounded.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Draw from `from` towards `to` inclusive, clipped to the canvas.
///
/// Only the on-canvas stretch is walked, so arbitrarily distant endpoints
/// cost no more than a line across the canvas.
pub fn draw_line(bitmap: &mut Bitmap, from: Point, to: Point, color: Color) {
    if from.x == to.x {
        fill_column(bitmap, from.x as i64, from.y as i64, to.y as i64, color);
    } else if from.y == to.y {
        fill_row(bitmap, from.y as i64, from.x as i64, to.x as i64, color);
    } else {
        dda_line(bitmap, from, to, color);
    }
}

/// Paint column `x` between `y0` and `y1` inclusive, in either order.
pub(crate) fn fill_column(bitmap: &mut Bitmap, x: i64, y0: i64, y1: i64, color: Color) {
    if x < 0 || x >= bitmap.width() as i64 {
        return;
    }
    let top = y0.min(y1).max(0);
    let bottom = y0.max(y1).min(bitmap.height() as i64 - 1);
    for y in top..=bottom {
        bitmap.plot(x, y, color);
    }
}

fn fill_row(bitmap: &mut Bitmap, y: i64, x0: i64, x1: i64, color: Color) {
    if y < 0 || y >= bitmap.height() as i64 {
        return;
    }
    let left = x0.min(x1).max(0);
    let right = x0.max(x1).min(bitmap.width() as i64 - 1);
    for x in left..=right {
        bitmap.plot(x, y, color);
    }
}

/// Step `x` by one towards `to.x`, accumulating the slope into a float `y`.
///
/// Steps before the canvas are skipped in one jump; the walk ends once `x`
/// leaves the canvas. Requires `from.x != to.x`.
pub(crate) fn dda_line(bitmap: &mut Bitmap, from: Point, to: Point, color: Color) {
    let (from_x, to_x) = (from.x as i64, to.x as i64);
    let width = bitmap.width() as i64;
    let slope = (to.y as i64 - from.y as i64) as f64 / (to_x - from_x) as f64;
    let step: i64 = if to_x >= from_x { 1 } else { -1 };

    let skip = if step == 1 {
        (-from_x).max(0)
    } else {
        (from_x - (width - 1)).max(0)
    };
    if skip > (to_x - from_x).abs() {
        return;
    }

    let mut x = from_x + step * skip;
    let mut float_y = from.y as f64 + slope * (step * skip) as f64;

    loop {
        if x < 0 || x >= width {
            break;
        }
        bitmap.plot(x, round_half_up(float_y), color);
        if x == to_x {
            break;
        }
        x += step;
        float_y += slope * step as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(bitmap: &Bitmap) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        for y in 0..bitmap.height() as i32 {
            for x in 0..bitmap.width() as i32 {
                if bitmap.pixel(x, y).map_or(false, |c| !c.is_transparent()) {
                    points.push((x, y));
                }
            }
        }
        points
    }

    #[test]
    fn test_degenerate_line_is_one_pixel() {
        let mut bitmap = Bitmap::new(5, 5);
        draw_line(&mut bitmap, Point::new(2, 3), Point::new(2, 3), Color::WHITE);
        assert_eq!(painted(&bitmap), vec![(2, 3)]);
    }

    #[test]
    fn test_vertical_line_either_direction() {
        let mut down = Bitmap::new(4, 6);
        draw_line(&mut down, Point::new(1, 1), Point::new(1, 4), Color::WHITE);
        let mut up = Bitmap::new(4, 6);
        draw_line(&mut up, Point::new(1, 4), Point::new(1, 1), Color::WHITE);

        assert_eq!(painted(&down), vec![(1, 1), (1, 2), (1, 3), (1, 4)]);
        assert_eq!(painted(&down), painted(&up));
    }

    #[test]
    fn test_horizontal_fast_path_matches_dda() {
        for (from, to) in [
            (Point::new(0, 2), Point::new(5, 2)),
            (Point::new(5, 1), Point::new(1, 1)),
        ] {
            let mut fast = Bitmap::new(6, 4);
            draw_line(&mut fast, from, to, Color::WHITE);
            let mut dda = Bitmap::new(6, 4);
            dda_line(&mut dda, from, to, Color::WHITE);
            assert_eq!(painted(&fast), painted(&dda));
        }
    }

    #[test]
    fn test_dda_rounds_half_up() {
        let mut bitmap = Bitmap::new(5, 3);
        draw_line(&mut bitmap, Point::new(0, 0), Point::new(4, 2), Color::WHITE);
        // y = 0, 0.5, 1, 1.5, 2
        assert_eq!(painted(&bitmap), vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_dda_walks_from_start_when_reversed() {
        let mut bitmap = Bitmap::new(5, 3);
        draw_line(&mut bitmap, Point::new(4, 2), Point::new(0, 0), Color::WHITE);
        // y = 2, 1.5, 1, 0.5, 0 walking leftwards
        assert_eq!(painted(&bitmap), vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_steep_line_leaves_gaps() {
        let mut bitmap = Bitmap::new(3, 7);
        draw_line(&mut bitmap, Point::new(0, 0), Point::new(2, 6), Color::WHITE);
        assert_eq!(painted(&bitmap), vec![(0, 0), (1, 3), (2, 6)]);
    }

    #[test]
    fn test_line_clips_off_canvas() {
        let mut bitmap = Bitmap::new(3, 3);
        draw_line(&mut bitmap, Point::new(-2, 1), Point::new(5, 1), Color::WHITE);
        assert_eq!(painted(&bitmap), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_far_off_canvas_lines_are_clipped() {
        let mut bitmap = Bitmap::new(4, 4);
        draw_line(&mut bitmap, Point::new(-2_000_000_000, 1), Point::new(2_000_000_000, 1), Color::WHITE);
        draw_line(&mut bitmap, Point::new(2, i32::MAX), Point::new(2, i32::MIN), Color::WHITE);
        assert_eq!(
            painted(&bitmap),
            vec![(2, 0), (0, 1), (1, 1), (2, 1), (3, 1), (2, 2), (2, 3)]
        );
    }

    #[test]
    fn test_dda_with_extreme_endpoints() {
        let mut bitmap = Bitmap::new(4, 4);
        draw_line(&mut bitmap, Point::new(i32::MIN, 0), Point::new(i32::MAX, 1), Color::WHITE);
        // y is just past 0.5 by the time x reaches the canvas
        assert_eq!(painted(&bitmap), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);

        let mut bitmap = Bitmap::new(4, 4);
        draw_line(&mut bitmap, Point::new(i32::MAX, 3), Point::new(i32::MAX - 5, 0), Color::WHITE);
        assert!(painted(&bitmap).is_empty());
    }

    #[test]
    fn test_dda_entering_from_the_left_keeps_its_slope() {
        let mut full = Bitmap::new(12, 12);
        draw_line(&mut full, Point::new(0, 0), Point::new(8, 4), Color::WHITE);

        let mut clipped = Bitmap::new(12, 12);
        draw_line(&mut clipped, Point::new(-4, -2), Point::new(8, 4), Color::WHITE);
        assert_eq!(painted(&clipped), painted(&full));
    }

    #[test]
    fn test_dda_leaving_to_the_left() {
        let mut bitmap = Bitmap::new(3, 3);
        draw_line(&mut bitmap, Point::new(2, 0), Point::new(-1_000_000, 1), Color::WHITE);
        assert_eq!(painted(&bitmap), vec![(0, 0), (1, 0), (2, 0)]);
    }
}
