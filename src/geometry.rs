use ultraviolet::Vec2;

/// Axis-aligned rectangle in logical canvas units, origin at top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Left and top edges inclusive, right and bottom exclusive.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Shrink by `amount` on every side. Never produces a negative size.
    pub fn inset(&self, amount: f32) -> Rect {
        let dx = amount.min(self.w * 0.5);
        let dy = amount.min(self.h * 0.5);
        Rect::new(self.x + dx, self.y + dy, self.w - 2.0 * dx, self.h - 2.0 * dy)
    }
}

/// How pointer hits are resolved against UI elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum HitShape {
    /// Point-in-rectangle.
    #[default]
    Rect,
    /// Point-in-circle, circle inscribed in the element's rectangle.
    Circle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitRegion {
    Rect(Rect),
    Circle { center: Vec2, radius: f32 },
}

impl HitRegion {
    pub fn from_rect(rect: Rect, shape: HitShape) -> Self {
        match shape {
            HitShape::Rect => HitRegion::Rect(rect),
            HitShape::Circle => HitRegion::Circle {
                center: rect.center(),
                radius: rect.w.min(rect.h) * 0.5,
            },
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        match *self {
            HitRegion::Rect(rect) => rect.contains(p),
            HitRegion::Circle { center, radius } => (p - center).mag_sq() <= radius * radius,
        }
    }
}
