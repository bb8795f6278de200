use crate::config::SnakeConfig;
use crate::error::{Error, Result};

/// Boundary of a `width` x `height` box, walked clockwise from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perimeter {
    width: f64,
    height: f64,
}

impl Perimeter {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |side: f64| side.is_finite() && side > 0.0;
        if valid(width) && valid(height) {
            Ok(Perimeter { width, height })
        } else {
            Err(Error::InvalidDimensions { width, height })
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Total boundary length, `2 * (width + height)`
    pub fn length(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Point reached after walking `distance` clockwise from (0, 0).
    ///
    /// Any distance is accepted. Negative distances and distances past one lap
    /// wrap around the boundary.
    pub fn point_at(&self, distance: f64) -> (f64, f64) {
        let (w, h) = (self.width, self.height);
        let d = distance.rem_euclid(self.length());

        if d < w {
            (d, 0.0) // Top
        } else if d < w + h {
            (w, d - w) // Right
        } else if d < 2.0 * w + h {
            (w - (d - (w + h)), h) // Bottom
        } else {
            (0.0, (h - (d - (2.0 * w + h))).max(0.0)) // Left
        }
    }
}

/// A fixed-length segment chasing its own tail around a [`Perimeter`].
#[derive(Debug, Clone)]
pub struct Snake {
    perimeter: Perimeter,
    length: f64,
    speed: f64,
    sample_step: usize,
    /// Distance of the head from the top-left corner, always in `[0, P)`
    pos: f64,
}

impl Snake {
    pub fn new(perimeter: Perimeter, config: &SnakeConfig) -> Self {
        Snake {
            perimeter,
            length: config.length,
            speed: config.speed,
            sample_step: config.sample_step.max(1),
            pos: 0.0,
        }
    }

    pub fn perimeter(&self) -> &Perimeter {
        &self.perimeter
    }

    /// Moves the head forward by one tick, wrapping past the end of the lap.
    pub fn advance(&mut self) {
        self.pos = (self.pos + self.speed).rem_euclid(self.perimeter.length());
    }

    /// Polyline of the visible body, tail first, ending at the exact head.
    pub fn body(&self) -> Vec<(f64, f64)> {
        // Both ends round toward zero
        let tail = (self.pos - self.length).trunc() as i64;
        let head = self.pos.trunc() as i64;

        let mut points: Vec<(f64, f64)> = (tail..head)
            .step_by(self.sample_step)
            .map(|d| self.perimeter.point_at(d as f64))
            .collect();
        points.push(self.perimeter.point_at(self.pos));
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Perimeter {
        Perimeter::new(260.0, 200.0).unwrap()
    }

    fn on_boundary(p: &Perimeter, (x, y): (f64, f64)) -> bool {
        let (w, h) = (p.width(), p.height());
        let in_box = (0.0..=w).contains(&x) && (0.0..=h).contains(&y);
        let on_edge = x == 0.0 || x == w || y == 0.0 || y == h;
        in_box && on_edge
    }

    #[test]
    fn corners_of_card() {
        let p = card();
        assert_eq!(p.length(), 920.0);
        assert_eq!(p.point_at(0.0), (0.0, 0.0));
        assert_eq!(p.point_at(260.0), (260.0, 0.0));
        assert_eq!(p.point_at(460.0), (260.0, 200.0));
        assert_eq!(p.point_at(720.0), (0.0, 200.0));
        assert_eq!(p.point_at(920.0), (0.0, 0.0));
    }

    #[test]
    fn midpoints_interpolate_along_each_side() {
        let p = card();
        assert_eq!(p.point_at(130.0), (130.0, 0.0));
        assert_eq!(p.point_at(360.0), (260.0, 100.0));
        assert_eq!(p.point_at(590.0), (130.0, 200.0));
        assert_eq!(p.point_at(820.0), (0.0, 100.0));
    }

    #[test]
    fn negative_distance_walks_backwards() {
        let p = card();
        assert_eq!(p.point_at(-100.0), (0.0, 100.0));
        assert_eq!(p.point_at(-920.0), (0.0, 0.0));
    }

    #[test]
    fn every_point_lies_on_the_boundary() {
        let boxes = [card(), Perimeter::new(1.0, 1.0).unwrap(), Perimeter::new(37.5, 3.25).unwrap()];
        for p in &boxes {
            let mut d = -2000.0_f64;
            while d < 2000.0 {
                let point = p.point_at(d);
                assert!(on_boundary(p, point), "{:?} at {} is off {:?}", point, d, p);
                d += 0.75;
            }
        }
    }

    #[test]
    fn point_is_periodic() {
        let p = card();
        for d in [0.0_f64, 12.0, 259.0, 260.0, 461.0, 719.5, 900.0, -35.0] {
            assert_eq!(p.point_at(d), p.point_at(d + p.length()), "distance {}", d);
        }
    }

    #[test]
    fn point_is_periodic_for_fractional_distances() {
        let p = card();
        for d in [0.1_f64, 33.3, 259.99, 460.05, 719.7, 919.9, -0.25, -612.4, 2760.3] {
            let (x0, y0) = p.point_at(d);
            let (x1, y1) = p.point_at(d + p.length());
            assert!((x0 - x1).abs() < 1e-9 && (y0 - y1).abs() < 1e-9, "distance {}: {:?} vs {:?}", d, (x0, y0), (x1, y1));
        }
        let (x, y) = p.point_at(0.1 + 920.0);
        assert!((x - 0.1).abs() < 1e-9 && y == 0.0);
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        assert!(matches!(Perimeter::new(0.0, 10.0), Err(Error::InvalidDimensions { .. })));
        assert!(matches!(Perimeter::new(10.0, -1.0), Err(Error::InvalidDimensions { .. })));
        assert!(matches!(Perimeter::new(f64::NAN, 10.0), Err(Error::InvalidDimensions { .. })));
        assert!(matches!(Perimeter::new(f64::INFINITY, 10.0), Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn snake_body_samples_every_step_and_ends_at_head() {
        let mut snake = Snake::new(card(), &SnakeConfig::default());
        for _ in 0..25 {
            snake.advance();
        }
        assert_eq!(snake.pos, 200.0);

        let body = snake.body();
        // 50..200 every 5 units, then the head
        assert_eq!(body.len(), 31);
        assert_eq!(body[0], (50.0, 0.0));
        assert_eq!(body[1], (55.0, 0.0));
        assert_eq!(body[29], (195.0, 0.0));
        assert_eq!(*body.last().unwrap(), (200.0, 0.0));
    }

    #[test]
    fn fresh_snake_trails_behind_the_origin() {
        let snake = Snake::new(card(), &SnakeConfig::default());
        let body = snake.body();
        // tail sits 150 units before the origin, on the left edge
        assert_eq!(body[0], (0.0, 150.0));
        assert_eq!(*body.last().unwrap(), (0.0, 0.0));
        assert!(body.iter().all(|&point| on_boundary(&card(), point)));
    }

    #[test]
    fn fractional_tail_rounds_toward_zero() {
        let config = SnakeConfig { length: 150.5, ..SnakeConfig::default() };
        let snake = Snake::new(card(), &config);
        // tail at -150.5 starts sampling at -150, not -151
        assert_eq!(snake.body()[0], (0.0, 150.0));

        let config = SnakeConfig { speed: 0.5, ..SnakeConfig::default() };
        let mut snake = Snake::new(card(), &config);
        snake.advance();
        assert_eq!(snake.pos, 0.5);
        let body = snake.body();
        assert_eq!(body[0], (0.0, 149.0));
        assert_eq!(*body.last().unwrap(), (0.5, 0.0));
    }

    #[test]
    fn snake_bends_around_the_corner() {
        let mut snake = Snake::new(card(), &SnakeConfig::default());
        while snake.pos < 300.0 {
            snake.advance();
        }
        let body = snake.body();
        assert!(body.iter().any(|&(x, y)| y == 0.0 && x < 260.0));
        assert!(body.iter().any(|&(x, y)| x == 260.0 && y > 0.0));
        assert!(body.iter().all(|&point| on_boundary(&card(), point)));
    }

    #[test]
    fn snake_position_stays_within_one_lap() {
        let mut snake = Snake::new(card(), &SnakeConfig::default());
        let lap = snake.perimeter().length();
        for _ in 0..10_000 {
            snake.advance();
            assert!((0.0..lap).contains(&snake.pos));
        }
    }

    #[test]
    fn snake_position_wraps_back_around() {
        let config = SnakeConfig { speed: 100.0, ..SnakeConfig::default() };
        let mut snake = Snake::new(card(), &config);
        for _ in 0..10 {
            snake.advance();
        }
        assert_eq!(snake.pos, 80.0);
    }
}
