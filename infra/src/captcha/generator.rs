//! CAPTCHA challenge generation
//!
//! Renders random challenge text into a JPEG without any font assets:
//! glyphs come from a built-in bitmap table, scaled up and jittered per
//! character, with noise lines and speckles over a light background.

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use rand::rngs::OsRng;
use rand::Rng;

use pw_core::errors::{DomainError, DomainResult};
use pw_core::services::{ChallengeGenerator, GeneratedChallenge};

use super::glyphs;

const NOISE_LINES: u32 = 4;
const NOISE_DOTS: u32 = 40;

/// Renders challenge images for the image-code endpoint
pub struct CaptchaGenerator {
    width: u32,
    height: u32,
    jpeg_quality: u8,
}

impl CaptchaGenerator {
    pub fn new() -> Self {
        Self {
            width: 160,
            height: 60,
            jpeg_quality: 70,
        }
    }

    /// Random challenge text over digits and uppercase letters.
    fn random_text(length: usize) -> String {
        let mut rng = OsRng;
        (0..length)
            .map(|_| {
                let idx = rng.gen_range(0..36u8);
                if idx < 10 {
                    char::from(b'0' + idx)
                } else {
                    char::from(b'A' + idx - 10)
                }
            })
            .collect()
    }

    fn render(&self, text: &str) -> RgbImage {
        let mut rng = rand::thread_rng();

        let background = Rgb([
            rng.gen_range(215..=245),
            rng.gen_range(215..=245),
            rng.gen_range(215..=245),
        ]);
        let mut image = RgbImage::from_pixel(self.width, self.height, background);

        // Noise lines go under the text so they cannot mask it entirely.
        for _ in 0..NOISE_LINES {
            let start = (
                rng.gen_range(0.0..self.width as f32),
                rng.gen_range(0.0..self.height as f32),
            );
            let end = (
                rng.gen_range(0.0..self.width as f32),
                rng.gen_range(0.0..self.height as f32),
            );
            draw_line_segment_mut(&mut image, start, end, random_ink(&mut rng));
        }

        let scale = (self.height / 12).max(2);
        let glyph_height = glyphs::GLYPH_HEIGHT * scale;
        let cell = self.width as f32 / (text.chars().count() as f32 + 1.0);
        let base_y = (self.height.saturating_sub(glyph_height) / 2) as i32;

        for (i, c) in text.chars().enumerate() {
            let origin_x = (cell * (i as f32 + 0.5)) as i32 + rng.gen_range(-3..=3);
            let origin_y = base_y + rng.gen_range(-5..=5);
            draw_glyph(&mut image, c, origin_x, origin_y, scale, random_ink(&mut rng));
        }

        for _ in 0..NOISE_DOTS {
            let center = (
                rng.gen_range(0..self.width as i32),
                rng.gen_range(0..self.height as i32),
            );
            draw_filled_circle_mut(&mut image, center, 1, random_ink(&mut rng));
        }

        image
    }
}

impl Default for CaptchaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeGenerator for CaptchaGenerator {
    fn generate(&self, length: usize) -> DomainResult<GeneratedChallenge> {
        let text = Self::random_text(length);
        let image = self.render(&text);

        let mut bytes = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut bytes, self.jpeg_quality);
        encoder
            .encode_image(&image)
            .map_err(|e| DomainError::Internal {
                message: format!("captcha render failed: {}", e),
            })?;

        Ok(GeneratedChallenge { text, image: bytes })
    }
}

/// Draw one glyph as scaled filled rectangles; drawing clips at the
/// image edge.
fn draw_glyph(
    image: &mut RgbImage,
    c: char,
    origin_x: i32,
    origin_y: i32,
    scale: u32,
    color: Rgb<u8>,
) {
    for (row_idx, row) in glyphs::rows(c).iter().enumerate() {
        for col in 0..glyphs::GLYPH_WIDTH {
            let mask = 1u8 << (glyphs::GLYPH_WIDTH - 1 - col);
            if row & mask == 0 {
                continue;
            }
            let x = origin_x + (col * scale) as i32;
            let y = origin_y + (row_idx as u32 * scale) as i32;
            draw_filled_rect_mut(image, Rect::at(x, y).of_size(scale, scale), color);
        }
    }
}

/// Dark color readable against the light background.
fn random_ink(rng: &mut impl Rng) -> Rgb<u8> {
    Rgb([
        rng.gen_range(0..=130),
        rng.gen_range(0..=130),
        rng.gen_range(0..=130),
    ])
}
