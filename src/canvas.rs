use ultraviolet::Vec2;

use crate::geometry::Rect;

/// Immediate-mode fills over an RGBA8 framebuffer.
pub struct Canvas<'a> {
    pixels: &'a mut [[u8; 4]],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    /// `frame` must hold at least `width * height` RGBA pixels and its length
    /// must be a multiple of 4, as the `Pixels` frame always is.
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(frame);
        debug_assert!(pixels.len() >= (width * height) as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        &mut *self.pixels
    }

    pub fn blend(&mut self, x: u32, y: u32, rgb: [u8; 3], alpha: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let pixel = &mut self.pixels[(x + y * self.width) as usize];
        for c in 0..3 {
            let src = rgb[c] as f32;
            let dst = pixel[c] as f32;
            pixel[c] = (dst + (src - dst) * alpha).round() as u8;
        }
        pixel[3] = 0xFF;
    }

    pub fn fill_rect(&mut self, rect: Rect, rgb: [u8; 3]) {
        self.blend_rounded_rect(rect, 0.0, rgb, 1.0);
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, rgb: [u8; 3]) {
        self.blend_rounded_rect(rect, radius, rgb, 1.0);
    }

    /// Fill `rect` with its corners cut to quarter circles of `radius`.
    pub fn blend_rounded_rect(&mut self, rect: Rect, radius: f32, rgb: [u8; 3], alpha: f32) {
        let radius = radius.min(rect.w * 0.5).min(rect.h * 0.5).max(0.0);
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                // nearest point of the inner rectangle the corners are rounded around
                let cx = p.x.clamp(rect.x + radius, rect.right() - radius);
                let cy = p.y.clamp(rect.y + radius, rect.bottom() - radius);
                if (p - Vec2::new(cx, cy)).mag_sq() <= radius * radius {
                    self.blend(x, y, rgb, alpha);
                }
            }
        }
    }

    /// Outline drawn outside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, rgb: [u8; 3]) {
        let outer = Rect::new(
            rect.x - width,
            rect.y - width,
            rect.w + 2.0 * width,
            rect.h + 2.0 * width,
        );
        let (x0, y0, x1, y1) = self.clip(outer);
        for y in y0..y1 {
            for x in x0..x1 {
                if !rect.contains(Vec2::new(x as f32 + 0.5, y as f32 + 0.5)) {
                    self.blend(x, y, rgb, 1.0);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3]) {
        let bounds = Rect::new(center.x - radius, center.y - radius, 2.0 * radius, 2.0 * radius);
        self.fill_rounded_rect(bounds, radius, rgb);
    }

    fn clip(&self, rect: Rect) -> (u32, u32, u32, u32) {
        let clamp_x = |v: f32| v.round().clamp(0.0, self.width as f32) as u32;
        let clamp_y = |v: f32| v.round().clamp(0.0, self.height as f32) as u32;
        (
            clamp_x(rect.x),
            clamp_y(rect.y),
            clamp_x(rect.right()),
            clamp_y(rect.bottom()),
        )
    }
}
