/// Axis-aligned rectangle in playfield pixels (origin top-left, y down).
///
/// Edge setters move the rectangle without resizing it, the way sprite
/// rectangles are usually handled in 2D games.  Intersection is strict:
/// rectangles that only share an edge do not collide.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn from_center(center: (f32, f32), w: f32, h: f32) -> Self {
        Rect {
            x: center.0 - w / 2.0,
            y: center.1 - h / 2.0,
            w,
            h,
        }
    }

    // ── Edges ────────────────────────────────────────────────────────────────

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn center(&self) -> (f32, f32) {
        (self.center_x(), self.center_y())
    }

    pub fn set_left(&mut self, v: f32) {
        self.x = v;
    }

    pub fn set_right(&mut self, v: f32) {
        self.x = v - self.w;
    }

    pub fn set_top(&mut self, v: f32) {
        self.y = v;
    }

    pub fn set_bottom(&mut self, v: f32) {
        self.y = v - self.h;
    }

    pub fn set_center_y(&mut self, v: f32) {
        self.y = v - self.h / 2.0;
    }

    pub fn set_center(&mut self, center: (f32, f32)) {
        self.x = center.0 - self.w / 2.0;
        self.y = center.1 - self.h / 2.0;
    }

    // ── Derived rectangles ───────────────────────────────────────────────────

    /// Same centre, each side multiplied by its factor.
    pub fn scaled(&self, sx: f32, sy: f32) -> Rect {
        Rect::from_center(self.center(), self.w * sx, self.h * sy)
    }

    /// Same centre, grown (or shrunk, for negative values) by `dw` × `dh`.
    pub fn inflated(&self, dw: f32, dh: f32) -> Rect {
        Rect::from_center(self.center(), (self.w + dw).max(0.0), (self.h + dh).max(0.0))
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Bounding box of this rectangle rotated by `degrees` about its centre.
    pub fn rotated_bounds(&self, degrees: f32) -> Rect {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let w = (self.w * cos).abs() + (self.h * sin).abs();
        let h = (self.w * sin).abs() + (self.h * cos).abs();
        Rect::from_center(self.center(), w, h)
    }
}

