//! Utility Functions
//!
//! Helpers for building frames.

use egui::{Color32, ColorImage, Vec2};

/// Converts packed RGB pixel data to an egui ColorImage.
pub fn rgb_to_color_image(width: usize, height: usize, rgb_pixels: Vec<u8>) -> ColorImage {
    let pixels: Vec<Color32> = rgb_pixels
        .chunks_exact(3)
        .map(|rgb| Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        .collect();

    ColorImage {
        size: [width, height],
        pixels,
        source_size: Vec2::new(width as f32, height as f32),
    }
}

/// Renders a moving gradient with a vertical bar sweeping across it.
/// `seed` picks the base colour so different streams are easy to tell apart.
pub fn test_pattern(width: usize, height: usize, seed: u64, tick: u64) -> ColorImage {
    let base = [
        (seed.wrapping_mul(67) % 200) as u8 + 40,
        (seed.wrapping_mul(131) % 200) as u8 + 40,
        (seed.wrapping_mul(199) % 200) as u8 + 40,
    ];
    let bar_x = if width == 0 {
        0
    } else {
        (tick as usize * 4) % width
    };

    let mut rgb = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        let shade = if height == 0 { 0 } else { (y * 64 / height) as u8 };
        for x in 0..width {
            if x.abs_diff(bar_x) < 6 {
                rgb.extend_from_slice(&[240, 240, 240]);
            } else {
                rgb.extend(base.iter().map(|c| c.saturating_sub(shade)));
            }
        }
    }

    rgb_to_color_image(width, height, rgb)
}
