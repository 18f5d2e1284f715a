// Math utilities and helper functions

use glam::Vec2;

/// Axis-aligned rectangle, anchored at its top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner in world units
    pub position: Vec2,
    /// Width and height in world units
    pub size: Vec2,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(width, height))
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Check if two rectangles overlap.
    /// Rectangles that only share an edge do not count as overlapping.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Horizontal direction of input or motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1.0 for left, 1.0 for right
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Wrap a value into `[0, width)`
pub fn wrap(value: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return value;
    }
    value.rem_euclid(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(5.0, 5.0, 10.0, 10.0);
        let c = Rect::from_xywh(20.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let right = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);
        let below = Rect::from_xywh(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Left.sign(), -1.0);
        assert_eq!(Direction::Right.sign(), 1.0);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(810.0, 800.0), 10.0);
        assert_eq!(wrap(-10.0, 800.0), 790.0);
        assert_eq!(wrap(400.0, 800.0), 400.0);
        assert_eq!(wrap(5.0, 0.0), 5.0);
    }
}
