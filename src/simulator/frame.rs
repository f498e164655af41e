//! RGBA preview bitmap.

use bytemuck::{Pod, Zeroable};
use std::path::Path;

use crate::color::Color;

/// One RGBA8 pixel, laid out for direct upload or PNG encoding
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel {
        r: 0,
        g: 0,
        b: 0,
        a: 0xFF,
    };
}

impl From<Color> for Pixel {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.to_rgba();
        Pixel { r, g, b, a }
    }
}

/// Square-or-not bitmap, row-major, starting opaque black
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PreviewFrame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::BLACK; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y); `None` outside the bitmap
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Write a pixel; coordinates outside the bitmap are ignored
    pub fn put(&mut self, x: u32, y: u32, pixel: Pixel) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = pixel;
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Encode as PNG at `path`
    pub fn save_png(&self, path: &Path) -> Result<(), String> {
        image::save_buffer(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
        .map_err(|e| format!("Failed to save preview {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_black_and_opaque() {
        let frame = PreviewFrame::new(4, 3);
        assert_eq!(frame.get(3, 2), Some(Pixel::BLACK));
        assert_eq!(frame.get(4, 0), None);
        assert_eq!(frame.as_bytes().len(), 4 * 3 * 4);
        assert_eq!(&frame.as_bytes()[..4], &[0, 0, 0, 0xFF]);
    }

    #[test]
    fn test_put_ignores_out_of_bounds() {
        let mut frame = PreviewFrame::new(2, 2);
        frame.put(5, 5, Pixel::from(Color::WHITE));
        frame.put(1, 0, Pixel::from(Color::from_rgb(1, 2, 3)));
        assert_eq!(frame.get(1, 0), Some(Pixel { r: 1, g: 2, b: 3, a: 0xFF }));
        // Row-major layout
        assert_eq!(&frame.as_bytes()[4..8], &[1, 2, 3, 0xFF]);
    }
}
