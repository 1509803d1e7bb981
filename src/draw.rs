use crate::band::BandSelector;
use crate::canvas::Canvas;
use crate::geometry::HitShape;
use crate::layout::*;
use crate::swatch::Swatch;

/// Color a band is drawn with. Unassigned bands get the neutral color.
pub fn band_color(assigned: Option<Swatch>) -> [u8; 3] {
    assigned.map_or(UNASSIGNED_BAND_COLOR, Swatch::rgb)
}

pub fn panel(canvas: &mut Canvas) {
    canvas.blend_rounded_rect(PANEL, PANEL_RADIUS, PANEL_COLOR, PANEL_ALPHA);
}

pub fn resistor(canvas: &mut Canvas, selector: &BandSelector) {
    canvas.fill_rect(LEAD, LEAD_COLOR);
    canvas.fill_rounded_rect(BODY, BODY_RADIUS, BODY_COLOR);

    for (i, band) in selector.bands().iter().enumerate() {
        let rect = band_rect(i);
        if band.focused {
            canvas.stroke_rect(rect, FOCUS_BORDER, FOCUS_COLOR);
        }
        canvas.fill_rect(rect, band_color(band.assigned));
    }
}

/// `pressed` is the swatch currently held down, drawn shrunk.
pub fn swatches(canvas: &mut Canvas, shape: HitShape, pressed: Option<Swatch>) {
    for swatch in Swatch::ALL {
        let full = swatch_rect(swatch.index());
        let rect = if pressed == Some(swatch) {
            full.inset(SWATCH_PRESS_INSET)
        } else {
            full
        };

        match shape {
            HitShape::Rect => {
                canvas.fill_rect(full.inset(-2.0), SWATCH_OUTLINE);
                canvas.fill_rect(rect, swatch.rgb());
            }
            HitShape::Circle => {
                canvas.fill_circle(full.center(), full.w * 0.5 + 2.0, SWATCH_OUTLINE);
                canvas.fill_circle(rect.center(), rect.w * 0.5, swatch.rgb());
            }
        }
    }
}

pub fn scene(
    canvas: &mut Canvas,
    selector: &BandSelector,
    shape: HitShape,
    pressed: Option<Swatch>,
) {
    panel(canvas);
    resistor(canvas, selector);
    swatches(canvas, shape, pressed);
}

#[cfg(test)]
pub mod tests {
    use crate::band::NUM_BANDS;
    use crate::draw::*;
    use crate::{HEIGHT, WIDTH};

    fn rgb_at(frame: &[u8], x: f32, y: f32) -> [u8; 3] {
        let i = (x as usize + y as usize * WIDTH as usize) * 4;
        [frame[i], frame[i + 1], frame[i + 2]]
    }

    #[test]
    fn test_band_colors_follow_assignment() {
        let mut selector = BandSelector::new();
        selector.assign(crate::band::SlotKind::Multiplier, Some(Swatch::Green));

        let mut frame = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
        resistor(&mut Canvas::new(&mut frame, WIDTH, HEIGHT), &selector);

        for i in 0..NUM_BANDS {
            let c = band_rect(i).center();
            let expected = if i == 2 { Swatch::Green.rgb() } else { UNASSIGNED_BAND_COLOR };
            assert!(rgb_at(&frame, c.x, c.y) == expected, "Band {} drawn in the wrong color!", i);
        }
    }

    #[test]
    fn test_focus_border_only_on_focused_band() {
        let mut selector = BandSelector::new();
        let regions = HitRegions::new(HitShape::Rect);
        selector.handle_pointer_press(band_rect(1).center(), &regions.bands);

        let mut frame = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
        resistor(&mut Canvas::new(&mut frame, WIDTH, HEIGHT), &selector);

        for i in 0..NUM_BANDS {
            let rect = band_rect(i);
            let border = rgb_at(&frame, rect.x - 2.0, rect.center().y);
            assert!(
                (border == FOCUS_COLOR) == (i == 1),
                "Band {} border is {:?}!",
                i,
                border
            );
        }
    }

    #[test]
    fn test_pressed_swatch_shrinks() {
        let mut frame = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
        swatches(
            &mut Canvas::new(&mut frame, WIDTH, HEIGHT),
            HitShape::Rect,
            Some(Swatch::Red),
        );

        let red = swatch_rect(Swatch::Red.index());
        let blue = swatch_rect(Swatch::Blue.index());
        assert!(rgb_at(&frame, red.x + 2.0, red.y + 2.0) == SWATCH_OUTLINE, "Pressed swatch not shrunk!");
        assert!(rgb_at(&frame, blue.x + 2.0, blue.y + 2.0) == Swatch::Blue.rgb());
        assert!(rgb_at(&frame, red.center().x, red.center().y) == Swatch::Red.rgb());
    }
}
