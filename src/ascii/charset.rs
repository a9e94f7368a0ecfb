//! Density ramps used to map brightness to glyphs.

/// Reference density ramp (35 levels), sparsest first.
///
/// The leading run of spaces keeps dark regions empty on dark terminals.
pub const CLASSIC_CHARSET: &[char] = &[
    ' ', ' ', ' ', ' ', ' ', ' ', ' ', '_', '.', ',', '-', '=', '+', ':', ';', 'c', 'b', 'a', '!',
    '?', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '$', 'W', '#', '@', 'Ñ',
];

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Block character set (5 levels).
/// Uses Unicode block characters for higher perceived resolution.
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Minimal character set (4 levels).
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '#'];

/// Built-in density ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Reference ramp (35 levels)
    #[default]
    Classic,
    /// Standard ASCII density ramp (10 levels)
    Standard,
    /// Unicode blocks (5 levels)
    Blocks,
    /// Minimal ramp (4 levels)
    Minimal,
}

impl CharSet {
    /// Get the character slice for this charset.
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Classic => CLASSIC_CHARSET,
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
            CharSet::Minimal => MINIMAL_CHARSET,
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Classic => "classic",
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }

    /// Build an owned ramp from this charset.
    pub fn ramp(&self) -> DensityRamp {
        DensityRamp {
            glyphs: self.chars().to_vec(),
        }
    }
}

/// Errors raised when building a density ramp.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RampError {
    #[error("density ramp must contain at least one character")]
    Empty,
    #[error("density ramp must not contain control characters (found {0:?})")]
    ControlCharacter(char),
}

/// An ordered, immutable lookup table from brightness bucket to glyph.
///
/// Glyphs are ordered sparsest first, so brightness 0 selects the first glyph
/// and brightness 255 the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityRamp {
    glyphs: Vec<char>,
}

impl DensityRamp {
    /// Build a ramp from a string, one glyph per `char`.
    ///
    /// # Errors
    /// * `RampError::Empty` - If the string has no characters
    /// * `RampError::ControlCharacter` - If a glyph would break the grid layout
    pub fn new(glyphs: &str) -> Result<Self, RampError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(RampError::Empty);
        }
        if let Some(&c) = glyphs.iter().find(|c| c.is_control()) {
            return Err(RampError::ControlCharacter(c));
        }
        Ok(Self { glyphs })
    }

    /// Number of brightness levels.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; a ramp holds at least one glyph.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// The same ramp with the opposite polarity (densest first).
    pub fn reversed(&self) -> Self {
        let mut glyphs = self.glyphs.clone();
        glyphs.reverse();
        Self { glyphs }
    }

    /// Ramp index for a brightness value: `brightness * (len - 1) / 255`, truncated.
    #[inline]
    pub fn index_for(&self, brightness: u8) -> usize {
        (brightness as usize * (self.glyphs.len() - 1)) / 255
    }

    /// Glyph for a brightness value.
    #[inline]
    pub fn glyph_for(&self, brightness: u8) -> char {
        self.glyphs[self.index_for(brightness)]
    }
}

impl Default for DensityRamp {
    fn default() -> Self {
        CharSet::default().ramp()
    }
}

impl std::fmt::Display for DensityRamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.glyphs {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
