use clap::Parser;

use crate::geometry::HitShape;

/// Resistor color-code simulator
#[derive(Parser, Debug, Clone)]
#[command(name = "resistorr")]
pub struct Cli {
    /// How presses are matched against swatches. Bands always hit as rectangles
    #[arg(long, value_enum, default_value_t = HitShape::Rect)]
    pub hit_shape: HitShape,

    /// Initial window size relative to the 720x1280 canvas
    #[arg(long, short, default_value_t = 0.5, value_parser = parse_scale)]
    pub scale: f64,

    /// Don't draw the message hidden in the background
    #[arg(long)]
    pub hide_message: bool,
}

fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s.parse().map_err(|_| format!("`{s}` isn't a number"))?;
    if scale > 0.0 && scale.is_finite() {
        Ok(scale)
    } else {
        Err(format!("scale must be positive, got {scale}"))
    }
}
