use std::time::Instant;

use egui::RichText;
use log::info;
use pixels::Pixels;
use ultraviolet::Vec2;
use winit_input_helper::WinitInputHelper;

use crate::band::{BandSelector, SlotKind};
use crate::canvas::Canvas;
use crate::config::Cli;
use crate::geometry::HitShape;
use crate::layout::HitRegions;
use crate::swatch::Swatch;
use crate::{background, decode, draw, App, HEIGHT, WIDTH};

pub struct Simulator {
    selector: BandSelector,
    shape: HitShape,
    regions: HitRegions,
    show_message: bool,
    started: Instant,
    // swatch under a held pointer, drawn shrunk
    held: Option<Swatch>,
}

impl Simulator {
    pub fn new(cli: &Cli) -> Self {
        Self {
            selector: BandSelector::new(),
            shape: cli.hit_shape,
            regions: HitRegions::new(cli.hit_shape),
            show_message: !cli.hide_message,
            started: Instant::now(),
            held: None,
        }
    }

    pub fn selector(&self) -> &BandSelector {
        &self.selector
    }

    /// A press in canvas coordinates. Bands and swatches never overlap, so at
    /// most one of the two handlers does anything.
    pub fn press(&mut self, pointer: Vec2) {
        self.selector
            .handle_pointer_press(pointer, &self.regions.bands);
        self.selector
            .handle_swatch_press(pointer, &self.regions.swatches);
    }

    pub fn swatch_at(&self, pointer: Vec2) -> Option<Swatch> {
        let i = self
            .regions
            .swatches
            .iter()
            .position(|region| region.contains(pointer))?;
        Swatch::from_index(i)
    }

    pub fn current_text(&self) -> String {
        let bands = self.selector.bands();
        decode::compute_resistance(
            &bands[SlotKind::Digit1 as usize],
            &bands[SlotKind::Digit2 as usize],
            &bands[SlotKind::Multiplier as usize],
        )
    }

    pub fn tolerance_text(&self) -> String {
        decode::compute_tolerance(self.selector.band(SlotKind::Tolerance))
    }

    fn readout(&mut self, ctx: &egui::Context) {
        let current = self.current_text();
        let tolerance = self.tolerance_text();

        egui::Window::new("Resistor")
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label(RichText::new(format!("{} Ω", current)).size(36.0).strong());
                ui.label(RichText::new(format!("± {}", tolerance)).size(22.0));

                ui.separator();

                egui::Grid::new("Bands").show(ui, |ui| {
                    for band in self.selector.bands() {
                        let name = RichText::new(band.slot.name());
                        ui.label(if band.focused { name.strong() } else { name });
                        ui.label(band.assigned.map_or("-", Swatch::name));
                        ui.end_row();
                    }
                });

                ui.horizontal(|ui| {
                    if ui.button("Randomize").clicked() {
                        self.selector.randomize(&mut rand::thread_rng());
                        info!("Bands randomized");
                    }
                    if ui.button("Clear").clicked() {
                        self.selector.clear();
                        info!("Bands cleared");
                    }
                });
            });
    }
}

impl App for Simulator {
    fn init(&mut self, _pixels: &mut Pixels, ctx: &egui::Context) {
        // make the windows slightly transparent
        let mut visuals = egui::Visuals::dark();
        visuals.widgets.noninteractive.bg_fill =
            egui::Color32::from_rgba_premultiplied(27, 27, 27, 245);
        ctx.set_visuals(visuals);

        info!("Hit shape: {:?}", self.shape);
    }

    fn input(&mut self, input: &WinitInputHelper, pixels: &Pixels) {
        // outside the letterboxed canvas counts as no pointer at all
        let pointer = input
            .mouse()
            .and_then(|pos| pixels.window_pos_to_pixel(pos).ok())
            .map(|(x, y)| Vec2::new(x as f32 + 0.5, y as f32 + 0.5));

        if input.mouse_pressed(0) {
            if let Some(pointer) = pointer {
                self.press(pointer);
            }
        }

        self.held = if input.mouse_held(0) {
            pointer.and_then(|p| self.swatch_at(p))
        } else {
            None
        };
    }

    fn pointer_lost(&mut self) {
        self.held = None;
    }

    fn update(&mut self, pixels: &mut Pixels, ctx: &egui::Context) {
        let time = self.started.elapsed().as_secs_f32();

        let mut canvas = Canvas::new(pixels.get_frame(), WIDTH, HEIGHT);
        background::paint(&mut canvas, time, self.show_message);
        draw::scene(&mut canvas, &self.selector, self.shape, self.held);

        self.readout(ctx);
    }
}
