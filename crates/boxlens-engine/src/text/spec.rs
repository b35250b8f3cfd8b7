/// Font description attached to text commands, in CSS `font` terms.
///
/// `family` is kept verbatim (e.g. `'Courier New', Courier, monospace`). The
/// rasteriser does not do family matching; it draws with whichever face the
/// caller loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font size in logical pixels.
    pub size: f32,
    pub family: String,
}

impl FontSpec {
    pub fn new(size: f32, family: impl Into<String>) -> Self {
        Self { size, family: family.into() }
    }

    /// Monospace stack used by the overlays.
    pub fn monospace(size: f32) -> Self {
        Self::new(size, "'Courier New', Courier, monospace")
    }

    /// CSS shorthand, e.g. `14px 'Courier New', Courier, monospace`.
    pub fn css(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }
}

impl Default for FontSpec {
    /// The 2D canvas default, `10px sans-serif`.
    fn default() -> Self {
        Self::new(10.0, "sans-serif")
    }
}
