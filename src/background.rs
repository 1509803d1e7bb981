use crate::canvas::Canvas;

/// 32x3 bitmap hidden in the lower left corner. Bottom row first, most
/// significant bit leftmost.
pub const MESSAGE: [u32; 3] = [1735745872, 626348112, 928473456];

/// Bottom-left pixel of the message, counted from the bottom of the canvas.
pub const MESSAGE_ORIGIN: (u32, u32) = (1, 10);

/// Message pixel at canvas position `(x, y)` (y measured from the bottom):
/// `Some(true)` for a set bit, `Some(false)` for a clear one, `None` outside.
pub fn message_bit(x: u32, y_up: u32) -> Option<bool> {
    let col = x.checked_sub(MESSAGE_ORIGIN.0)?;
    let row = y_up.checked_sub(MESSAGE_ORIGIN.1)? as usize;
    if col >= 32 || row >= MESSAGE.len() {
        return None;
    }
    Some((MESSAGE[row] >> (31 - col)) & 1 == 1)
}

/// Horizontal red ramp, vertical green ramp and blue pulsing with `time`.
pub fn gradient(u: f32, v: f32, time: f32) -> [u8; 3] {
    let b = 0.5 + 0.5 * time.sin();
    [to_byte(u), to_byte(v), to_byte(b)]
}

fn to_byte(f: f32) -> u8 {
    (f.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Overwrite the whole canvas with the animated background.
pub fn paint(canvas: &mut Canvas, time: f32, show_message: bool) {
    let (width, height) = (canvas.width(), canvas.height());
    let rows = canvas.pixels_mut().chunks_exact_mut(width as usize);

    for (y, row) in rows.take(height as usize).enumerate() {
        let y_up = height - 1 - y as u32;
        let v = (y_up as f32 + 0.5) / height as f32;

        for (x, pixel) in row.iter_mut().enumerate() {
            let x = x as u32;
            let rgb = match message_bit(x, y_up).filter(|_| show_message) {
                Some(true) => [0xFF; 3],
                Some(false) => [0x00; 3],
                None => gradient((x as f32 + 0.5) / width as f32, v, time),
            };
            *pixel = [rgb[0], rgb[1], rgb[2], 0xFF];
        }
    }
}
