//! Packed RGB pixels and channel extraction

use image::Rgba;
use std::fmt;

/// Mask selecting one 8-bit channel
pub const LOW_8_BITS: u32 = 0xFF;

/// Color channel of a packed pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Bits 0..8
    Red,
    /// Bits 8..16
    Green,
    /// Bits 16..24
    Blue,
}

impl Channel {
    /// All channels in comparison order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Bit offset within a packed pixel
    #[inline]
    #[must_use]
    pub fn shift(self) -> u32 {
        match self {
            Channel::Red => 0,
            Channel::Green => 8,
            Channel::Blue => 16,
        }
    }

    /// Get human-readable name
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pixel packed into an integer, red in the low byte; alpha is dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedRgb(pub u32);

impl PackedRgb {
    /// Pack from channel values
    #[inline]
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        // `u32::from` is not const
        Self((red as u32) | ((green as u32) << 8) | ((blue as u32) << 16))
    }

    /// Pack from an RGBA pixel
    #[inline]
    #[must_use]
    pub fn from_rgba(pixel: Rgba<u8>) -> Self {
        let [red, green, blue, _] = pixel.0;
        Self::new(red, green, blue)
    }

    /// Extract one channel
    #[inline]
    #[must_use]
    pub fn channel(self, channel: Channel) -> u8 {
        // Masked to 8 bits, so the cast is lossless.
        ((self.0 >> channel.shift()) & LOW_8_BITS) as u8
    }

    /// Get `[red, green, blue]`
    #[inline]
    #[must_use]
    pub fn rgb(self) -> [u8; 3] {
        [
            self.channel(Channel::Red),
            self.channel(Channel::Green),
            self.channel(Channel::Blue),
        ]
    }

    /// Convert to an opaque RGBA pixel
    #[inline]
    #[must_use]
    pub fn to_rgba(self) -> Rgba<u8> {
        let [red, green, blue] = self.rgb();
        Rgba([red, green, blue, u8::MAX])
    }
}

impl fmt::Display for PackedRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue] = self.rgb();
        write!(f, "({red}, {green}, {blue})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_come_from_consecutive_bytes() {
        let pixel = PackedRgb(0x00_30_20_10);
        assert_eq!(pixel.channel(Channel::Red), 0x10);
        assert_eq!(pixel.channel(Channel::Green), 0x20);
        assert_eq!(pixel.channel(Channel::Blue), 0x30);
        assert_eq!(PackedRgb::new(0x10, 0x20, 0x30), pixel);
    }

    #[test]
    fn new_is_usable_in_consts() {
        const TEAL: PackedRgb = PackedRgb::new(0x30, 0x90, 0xD0);
        assert_eq!(TEAL, PackedRgb(0x00_D0_90_30));
        assert_eq!(TEAL.channel(Channel::Red), 0x30);
        assert_eq!(TEAL.channel(Channel::Blue), 0xD0);
    }

    #[test]
    fn high_byte_is_ignored() {
        let pixel = PackedRgb(0xFF_01_02_03);
        assert_eq!(pixel.rgb(), [3, 2, 1]);
    }

    #[test]
    fn alpha_is_dropped() {
        let pixel = PackedRgb::from_rgba(Rgba([9, 8, 7, 0]));
        assert_eq!(pixel, PackedRgb::new(9, 8, 7));
        assert_eq!(pixel.to_rgba(), Rgba([9, 8, 7, 255]));
    }

    #[test]
    fn display() {
        assert_eq!(PackedRgb::new(1, 22, 255).to_string(), "(1, 22, 255)");
        assert_eq!(Channel::Green.to_string(), "green");
    }
}
