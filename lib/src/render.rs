use crate::geometry::{BoundingBox, Point};
use crate::screen::Screen;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    const BUTTON: Color = Color::rgb(0, 122, 255);
    const SWITCH_ON: Color = Color::rgb(76, 217, 100);
    const SWITCH_OFF: Color = Color::rgb(200, 200, 200);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// 3x5 digit glyphs, one row per byte, high bit on the left
static DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];
const GLYPH_W: i64 = 3;
const GLYPH_H: i64 = 5;

/// ARGB8888 pixel buffer as handed out by a locked streaming texture.
pub struct Canvas<'a> {
    buffer: &'a mut [u8],
    width: i64,
    height: i64,
    pitch: i64,
}

impl<'a> Canvas<'a> {
    pub fn new(buffer: &'a mut [u8], width: usize, height: usize, pitch: usize) -> Self {
        Self {
            buffer,
            width: width as i64,
            height: height as i64,
            pitch: pitch as i64,
        }
    }

    pub fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let offset = (y * self.pitch + x * 4) as usize;
        if offset + 3 < self.buffer.len() {
            self.buffer[offset] = color.b;
            self.buffer[offset + 1] = color.g;
            self.buffer[offset + 2] = color.r;
            self.buffer[offset + 3] = 255;
        }
    }

    pub fn pixel(&self, x: i64, y: i64) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.pitch + x * 4) as usize;
        let px = self.buffer.get(offset..offset + 4)?;
        Some(Color::rgb(px[2], px[1], px[0]))
    }

    pub fn clear(&mut self, color: Color) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.put_pixel(x, y, color);
            }
        }
    }

    pub fn fill_rect(&mut self, frame: BoundingBox, color: Color) {
        let x_start = (frame.x as i64).max(0);
        let y_start = (frame.y as i64).max(0);
        let x_end = ((frame.x + frame.width) as i64).min(self.width);
        let y_end = ((frame.y + frame.height) as i64).min(self.height);
        for y in y_start..y_end {
            for x in x_start..x_end {
                self.put_pixel(x, y, color);
            }
        }
    }

    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let x_start = ((center.x - radius) as i64).max(0);
        let y_start = ((center.y - radius) as i64).max(0);
        let x_end = ((center.x + radius).ceil() as i64).min(self.width);
        let y_end = ((center.y + radius).ceil() as i64).min(self.height);
        let r2 = radius * radius;
        for y in y_start..y_end {
            for x in x_start..x_end {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    fn fill_cell(&mut self, x: i64, y: i64, size: i64, color: Color) {
        let x_start = x.max(0);
        let y_start = y.max(0);
        let x_end = x.saturating_add(size).min(self.width);
        let y_end = y.saturating_add(size).min(self.height);
        for py in y_start..y_end {
            for px in x_start..x_end {
                self.put_pixel(px, py, color);
            }
        }
    }

    /// Draws decimal `text` centered on `center`. Non-digit characters are
    /// skipped.
    pub fn draw_label(&mut self, text: &str, center: Point, scale: i64, color: Color) {
        let glyphs: Vec<&[u8; 5]> = text
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| &DIGITS[d as usize])
            .collect();
        if glyphs.is_empty() {
            return;
        }
        // a glyph cell taller than the canvas can't show anything useful
        let scale = scale.clamp(1, self.height.max(1));
        let n = glyphs.len() as i64;
        let total_w = n
            .saturating_mul(GLYPH_W + 1)
            .saturating_sub(1)
            .saturating_mul(scale);
        let left = (center.x.round() as i64).saturating_sub(total_w / 2);
        let top = (center.y.round() as i64).saturating_sub(GLYPH_H * scale / 2);

        for (i, rows) in glyphs.into_iter().enumerate() {
            let gx = left.saturating_add((i as i64).saturating_mul((GLYPH_W + 1) * scale));
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_W {
                    if (*bits >> (GLYPH_W - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    let px = gx.saturating_add(col * scale);
                    let py = top.saturating_add(row as i64 * scale);
                    self.fill_cell(px, py, scale, color);
                }
            }
        }
    }
}

/// Paints the whole screen: background, circles bottom to top, then the
/// controls.
pub fn render_screen(screen: &Screen, canvas: &mut Canvas) {
    let style = screen.style();
    canvas.clear(style.background);

    let board = screen.board();
    for &index in board.draw_order() {
        let circle = &board.circles()[index];
        let region = circle.region();
        canvas.fill_circle(region.center, region.radius(), circle.fill());
        let scale = ((region.radius() * 0.8) / GLYPH_H as f64) as i64;
        canvas.draw_label(circle.label(), region.center, scale, style.label);
    }

    let button = screen.add_button().frame;
    canvas.fill_rect(button, Color::BUTTON);
    let c = button.center();
    let arm = button.width.min(button.height) * 0.3;
    let thick = (arm / 3.0).max(1.0);
    canvas.fill_rect(
        BoundingBox::new(c.x - arm, c.y - thick / 2.0, arm * 2.0, thick),
        Color::WHITE,
    );
    canvas.fill_rect(
        BoundingBox::new(c.x - thick / 2.0, c.y - arm, thick, arm * 2.0),
        Color::WHITE,
    );

    let switch = screen.moveable_switch();
    let frame = switch.frame;
    let track = if switch.is_on() { Color::SWITCH_ON } else { Color::SWITCH_OFF };
    canvas.fill_rect(frame, track);
    let knob = frame.height - 4.0;
    let knob_x = if switch.is_on() {
        frame.x + frame.width - knob - 2.0
    } else {
        frame.x + 2.0
    };
    canvas.fill_rect(BoundingBox::new(knob_x, frame.y + 2.0, knob, knob), Color::WHITE);
}
