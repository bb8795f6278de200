use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, vec2};

use crate::perimeter::Snake;

/// Maps the snake's body from box coordinates onto `rect`, scaling if the
/// rect is not the size the perimeter was built for.
pub fn screen_points(snake: &Snake, rect: Rect) -> Vec<Pos2> {
    let perimeter = snake.perimeter();
    let sx = f64::from(rect.width()) / perimeter.width();
    let sy = f64::from(rect.height()) / perimeter.height();

    snake
        .body()
        .into_iter()
        .map(|(x, y)| rect.min + vec2((x * sx) as f32, (y * sy) as f32))
        .collect()
}

/// Draws the snake along the edge of `rect` as a polyline with round caps.
pub fn paint_snake(painter: &Painter, rect: Rect, snake: &Snake, color: Color32, width: f32) {
    let points = screen_points(snake, rect);
    if points.len() < 2 {
        return;
    }

    let (first, last) = (points[0], points[points.len() - 1]);
    painter.add(Shape::line(points, Stroke::new(width, color)));
    painter.circle_filled(first, width / 2.0, color);
    painter.circle_filled(last, width / 2.0, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SnakeConfig;
    use crate::perimeter::Perimeter;

    #[test]
    fn points_are_offset_into_the_rect() {
        let snake = Snake::new(Perimeter::new(260.0, 200.0).unwrap(), &SnakeConfig::default());
        let rect = Rect::from_min_size(Pos2::new(10.0, 50.0), vec2(260.0, 200.0));

        let points = screen_points(&snake, rect);
        assert_eq!(points[0], Pos2::new(10.0, 200.0));
        assert_eq!(*points.last().unwrap(), Pos2::new(10.0, 50.0));
    }

    #[test]
    fn points_scale_with_the_rect() {
        let mut snake = Snake::new(Perimeter::new(100.0, 100.0).unwrap(), &SnakeConfig::default());
        for _ in 0..25 {
            snake.advance();
        }
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(200.0, 50.0));

        // head at distance 200 is the bottom-right corner
        assert_eq!(*screen_points(&snake, rect).last().unwrap(), Pos2::new(200.0, 50.0));
    }
}
