//! Packed RGB colors, gradient palettes and brightness normalization.

mod gradient;
mod normalize;

pub use gradient::{Gradient, Palettes};
pub use normalize::normalize_brightness;

/// 24-bit packed RGB color (`0xRRGGBB`).
///
/// Alpha is implicit and only added at the sink boundary by [`Color::to_rgba`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Fully dark / transparent LED
    pub const OFF: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_off(self) -> bool {
        self.0 & 0xFFFFFF == 0
    }

    /// Byte order used by PNG output, with the implicit alpha made opaque
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), 0xFF]
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value & 0xFFFFFF)
    }
}
