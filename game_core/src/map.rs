use glam::Vec2;

/// Integer axis-aligned rectangle, top-left anchored, y grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Round a continuous top-left position to the pixel grid
    pub fn from_pos(pos: Vec2, size: Vec2) -> Self {
        Self {
            x: pos.x.round() as i32,
            y: pos.y.round() as i32,
            w: size.x as i32,
            h: size.y as i32,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// True when the overlap has positive area. Rects that only share an edge
    /// do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// The playing area, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.bottom(), 60);
        assert_eq!(rect.center(), (25, 40));
    }

    #[test]
    fn test_rect_from_pos_rounds() {
        let rect = Rect::from_pos(Vec2::new(10.4, 10.6), Vec2::new(20.0, 20.0));
        assert_eq!(rect, Rect::new(10, 11, 20, 20));

        let rect = Rect::from_pos(Vec2::new(-0.4, -0.6), Vec2::new(20.0, 20.0));
        assert_eq!(rect, Rect::new(0, -1, 20, 20));
    }

    #[test]
    fn test_rect_overlap_intersects() {
        let a = Rect::new(0, 0, 20, 20);
        let b = Rect::new(10, 10, 20, 20);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 20, 20);
        let right = Rect::new(20, 0, 20, 20);
        let below = Rect::new(0, 20, 20, 20);
        assert!(!a.intersects(&right), "Shared vertical edge is not an overlap");
        assert!(!a.intersects(&below), "Shared horizontal edge is not an overlap");
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 0, 20);
        let b = Rect::new(0, 0, 20, 20);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_playfield_center() {
        let field = Playfield::new(1280, 720);
        assert_eq!(field.center(), Vec2::new(640.0, 360.0));
    }
}
