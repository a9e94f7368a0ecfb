//! The output character grid.

/// ASCII-rendered frame: one glyph per terminal cell.
///
/// Characters are stored row-major. A grid is built fresh for every frame and
/// never resized in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsciiFrame {
    /// Character data for the frame (row-major order)
    pub chars: Vec<char>,
    /// Width in characters
    pub width: u16,
    /// Height in characters
    pub height: u16,
}

impl AsciiFrame {
    /// Create a frame from a character vector.
    pub fn from_chars(chars: Vec<char>, width: u16, height: u16) -> Self {
        Self {
            chars,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks() panics on zero
        self.chars.chunks(self.width.max(1) as usize).take(self.height as usize)
    }

    /// Render for printing: every row terminated by a newline.
    pub fn to_printed(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(self.chars.len() + self.height as usize);
        for row in self.rows() {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

}
