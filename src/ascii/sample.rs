//! Per-cell color readings.

/// One color reading per output cell, channels normalized to 0-255.
///
/// Alpha is carried along but does not take part in brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Sample {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a sample from 16-bit straight-alpha channels.
    ///
    /// Color channels are premultiplied by alpha (compositing over a
    /// transparent cell), then every channel is divided by 257.
    pub fn from_rgba16([r, g, b, a]: [u16; 4]) -> Self {
        let alpha = a as u32;
        let premul = |c: u16| (c as u32 * alpha / 0xffff) as u16;
        Self {
            r: to_8bit(premul(r)),
            g: to_8bit(premul(g)),
            b: to_8bit(premul(b)),
            a: to_8bit(a),
        }
    }

    /// Build a sample from 8-bit straight-alpha channels.
    ///
    /// Each channel is widened to 16 bits (`c * 0x101`) and premultiplied by
    /// alpha, then narrowed with `>> 8`, as an 8-bit RGBA surface stores a
    /// pixel drawn over it. Opaque pixels come back unchanged.
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        let alpha = a as u32;
        let premul = |c: u8| ((c as u32 * 0x101 * alpha / 0xff) >> 8) as u8;
        Self {
            r: premul(r),
            g: premul(g),
            b: premul(b),
            a,
        }
    }

    /// Opaque sample from an RGB triplet (camera frames carry no alpha).
    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Averaged brightness: `(r + g + b) / 3`, truncated.
    #[inline]
    pub fn brightness(&self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }
}

#[inline]
fn to_8bit(channel: u16) -> u8 {
    (channel / 257) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_truncates() {
        // (1 + 1 + 0) / 3 = 0.66 -> 0
        assert_eq!(Sample::new(1, 1, 0, 255).brightness(), 0);
        // (100 + 101 + 102) / 3 = 101
        assert_eq!(Sample::new(100, 101, 102, 255).brightness(), 101);
        assert_eq!(Sample::new(255, 255, 255, 255).brightness(), 255);
    }

    #[test]
    fn test_brightness_ignores_alpha() {
        let opaque = Sample::new(90, 90, 90, 255);
        let clear = Sample::new(90, 90, 90, 0);
        assert_eq!(opaque.brightness(), clear.brightness());
    }

    #[test]
    fn test_from_rgba8_opaque_is_exact() {
        for v in [0u8, 1, 127, 128, 254, 255] {
            let s = Sample::from_rgba8([v, v, v, 255]);
            assert_eq!(s, Sample::new(v, v, v, 255));
        }
    }

    #[test]
    fn test_from_rgba16_divides_by_257() {
        let s = Sample::from_rgba16([0xffff, 0x8080, 256, 0xffff]);
        assert_eq!(s, Sample::new(255, 128, 0, 255));
    }

    #[test]
    fn test_transparent_pixel_is_black() {
        let s = Sample::from_rgba8([255, 255, 255, 0]);
        assert_eq!(s, Sample::new(0, 0, 0, 0));
    }

    #[test]
    fn test_partial_alpha_narrows_by_shift() {
        // 4 * 0x101 * 191 / 0xff = 769, 769 >> 8 = 3 (dividing by 257 gives 2)
        assert_eq!(Sample::from_rgba8([4, 4, 4, 191]).r, 3);
        assert_eq!(Sample::from_rgba8([255, 255, 255, 128]).r, 128);
    }

    #[test]
    fn test_from_rgba8_matches_shift_narrowing_everywhere() {
        for a in 0..=255u32 {
            for c in 0..=255u32 {
                let expected = ((c * 0x101 * a / 0xff) >> 8) as u8;
                let s = Sample::from_rgba8([c as u8, c as u8, c as u8, a as u8]);
                assert_eq!(s.r, expected, "c={} a={}", c, a);
                assert_eq!(s.a, a as u8);
            }
        }
    }

    #[test]
    fn test_half_alpha_premultiplies() {
        let s = Sample::from_rgba8([200, 100, 0, 128]);
        assert_eq!(s.a, 128);
        assert!(s.r < 101 && s.r > 98);
        assert!(s.g < 51 && s.g > 48);
        assert_eq!(s.b, 0);
    }
}
