use log::{debug, info};
use rand::Rng;
use ultraviolet::Vec2;

use crate::geometry::HitRegion;
use crate::swatch::{Swatch, NUM_SWATCHES};

pub const NUM_BANDS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    Digit1 = 0,
    Digit2,
    Multiplier,
    Tolerance,
}

impl SlotKind {
    pub const ALL: [SlotKind; NUM_BANDS] = [
        SlotKind::Digit1,
        SlotKind::Digit2,
        SlotKind::Multiplier,
        SlotKind::Tolerance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SlotKind::Digit1 => "1st digit",
            SlotKind::Digit2 => "2nd digit",
            SlotKind::Multiplier => "Multiplier",
            SlotKind::Tolerance => "Tolerance",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub slot: SlotKind,
    // None == unassigned, drawn in the neutral band color
    pub assigned: Option<Swatch>,
    pub focused: bool,
}

/// The four bands of the resistor and which of them, if any, the next
/// swatch press goes to.
///
/// The `focused` flag on each band is authoritative; `focused` here only
/// caches its position and is rewritten every time a flag changes.
#[derive(Clone, Debug)]
pub struct BandSelector {
    bands: [Band; NUM_BANDS],
    focused: Option<usize>,
}

impl Default for BandSelector {
    fn default() -> Self {
        Self {
            bands: SlotKind::ALL.map(|slot| Band {
                slot,
                assigned: None,
                focused: false,
            }),
            focused: None,
        }
    }
}

impl BandSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bands(&self) -> &[Band; NUM_BANDS] {
        &self.bands
    }

    pub fn band(&self, slot: SlotKind) -> &Band {
        &self.bands[slot as usize]
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Toggle focus of the band under `pointer`. Focusing a band defocuses
    /// every other one; pressing the focused band again only drops focus.
    ///
    /// Returns the toggled band, or `None` if the press missed every band.
    pub fn handle_pointer_press(
        &mut self,
        pointer: Vec2,
        regions: &[HitRegion; NUM_BANDS],
    ) -> Option<usize> {
        let hit = regions.iter().position(|region| region.contains(pointer))?;

        if self.bands[hit].focused {
            self.bands[hit].focused = false;
            debug!("{} band lost focus", self.bands[hit].slot.name());
        } else {
            for (i, band) in self.bands.iter_mut().enumerate() {
                band.focused = i == hit;
            }
            debug!("{} band focused", self.bands[hit].slot.name());
        }

        self.sync_focus();
        Some(hit)
    }

    /// Assign the swatch under `pointer` to the focused band. Focus stays
    /// where it is. Does nothing when no band is focused.
    pub fn handle_swatch_press(
        &mut self,
        pointer: Vec2,
        regions: &[HitRegion; NUM_SWATCHES],
    ) -> Option<Swatch> {
        let band = self.focused?;
        let hit = regions.iter().position(|region| region.contains(pointer))?;
        let swatch = Swatch::ALL[hit];

        self.bands[band].assigned = Some(swatch);
        info!("{} band set to {}", self.bands[band].slot.name(), swatch.name());
        Some(swatch)
    }

    pub fn assign(&mut self, slot: SlotKind, swatch: Option<Swatch>) {
        self.bands[slot as usize].assigned = swatch;
    }

    /// Unassign and defocus every band.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Give every band a random swatch. Focus is left alone.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for band in &mut self.bands {
            band.assigned = Some(Swatch::ALL[rng.gen_range(0..NUM_SWATCHES)]);
        }
    }

    fn sync_focus(&mut self) {
        self.focused = self.bands.iter().position(|band| band.focused);
    }
}
