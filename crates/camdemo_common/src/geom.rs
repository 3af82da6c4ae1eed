/// Axis-aligned rectangle in integer pixel space.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Overlap of two rectangles, or `None` when they do not touch.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
    }
}

/// Translation-only geometry matrix applied when drawing one surface onto another.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Transform {
    pub tx: i32,
    pub ty: i32,
}

impl Transform {
    pub fn reset(&mut self) {
        *self = Transform::default();
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.tx += dx;
        self.ty += dy;
    }

    #[inline]
    pub const fn apply(&self, x: i32, y: i32) -> (i32, i32) {
        (x + self.tx, y + self.ty)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Blend {
    /// Straight-alpha source-over.
    #[default]
    SourceOver,
    /// Replace destination pixels, alpha included.
    Copy,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DrawOptions {
    pub transform: Transform,
    pub blend: Blend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_clips_to_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, -3, 10, 6);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 0, 5, 3)));
        assert_eq!(a.intersect(&Rect::new(10, 0, 4, 4)), None);
    }

    #[test]
    fn transform_reset_after_translate() {
        let mut t = Transform::default();
        t.translate(3, 4);
        t.translate(1, 1);
        assert_eq!(t.apply(0, 0), (4, 5));
        t.reset();
        assert_eq!(t.apply(7, 8), (7, 8));
    }

    #[test]
    fn center_of_origin_anchored_rect() {
        assert_eq!(Rect::new(0, 0, 300, 240).center(), (150, 120));
    }
}
