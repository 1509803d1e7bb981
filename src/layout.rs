//! Static placement and colors of everything drawn on the 720x1280 canvas.

use crate::band::NUM_BANDS;
use crate::geometry::{HitRegion, HitShape, Rect};
use crate::swatch::NUM_SWATCHES;
use crate::{HEIGHT, WIDTH};

/// Translucent panel behind the resistor and the swatches.
pub const PANEL: Rect = Rect::new(10.0, 0.0, WIDTH as f32 - 20.0, HEIGHT as f32);
pub const PANEL_RADIUS: f32 = 52.5;
pub const PANEL_COLOR: [u8; 3] = [16, 20, 44];
pub const PANEL_ALPHA: f32 = 0.9;

/// Wire running through the resistor body.
pub const LEAD: Rect = Rect::new(35.0, 194.0, 650.0, 12.0);
pub const LEAD_COLOR: [u8; 3] = [170, 170, 170];

pub const BODY: Rect = Rect::new(130.0, 120.0, 460.0, 160.0);
pub const BODY_RADIUS: f32 = 40.0;
pub const BODY_COLOR: [u8; 3] = [214, 185, 140];

pub const BAND_WIDTH: f32 = 45.0;
/// Left edges of digit1, digit2, multiplier, tolerance. The tolerance band
/// stands apart from the others like on a real resistor.
pub const BAND_XS: [f32; NUM_BANDS] = [185.0, 255.0, 325.0, 480.0];
pub const UNASSIGNED_BAND_COLOR: [u8; 3] = [186, 160, 118];
pub const FOCUS_BORDER: f32 = 6.0;
pub const FOCUS_COLOR: [u8; 3] = [255, 215, 0];

pub const SWATCH_SIZE: f32 = 110.0;
pub const SWATCH_GAP: f32 = 22.5;
pub const SWATCH_COLUMNS: usize = 5;
pub const SWATCH_ORIGIN: (f32, f32) = (40.0, 520.0);
/// How much a swatch shrinks on each side while held.
pub const SWATCH_PRESS_INSET: f32 = 8.0;
pub const SWATCH_OUTLINE: [u8; 3] = [60, 64, 90];

pub fn band_rect(band: usize) -> Rect {
    Rect::new(BAND_XS[band], BODY.y, BAND_WIDTH, BODY.h)
}

pub fn swatch_rect(swatch: usize) -> Rect {
    let col = (swatch % SWATCH_COLUMNS) as f32;
    let row = (swatch / SWATCH_COLUMNS) as f32;
    Rect::new(
        SWATCH_ORIGIN.0 + col * (SWATCH_SIZE + SWATCH_GAP),
        SWATCH_ORIGIN.1 + row * (SWATCH_SIZE + SWATCH_GAP),
        SWATCH_SIZE,
        SWATCH_SIZE,
    )
}

/// Hit regions for a pointer, one per band and one per swatch.
///
/// Bands are tall stripes and always hit as rectangles; `shape` only applies
/// to the swatches.
#[derive(Clone, Debug)]
pub struct HitRegions {
    pub bands: [HitRegion; NUM_BANDS],
    pub swatches: [HitRegion; NUM_SWATCHES],
}

impl HitRegions {
    pub fn new(shape: HitShape) -> Self {
        Self {
            bands: std::array::from_fn(|i| HitRegion::from_rect(band_rect(i), HitShape::Rect)),
            swatches: std::array::from_fn(|i| HitRegion::from_rect(swatch_rect(i), shape)),
        }
    }
}
