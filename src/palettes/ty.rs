pub(crate) use rgb::RGBA;

/// Key colors of a palette, components in \[0, 1\].
pub(crate) struct PaletteData {
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 2
    pub(crate) typ: PaletteType,
}

/// Piecewise linear channels, each given by `(x, value)` stops sorted
/// by `x`, from `x = 0` to `x = 1`.
pub(crate) struct SegmentData {
    pub(crate) red: &'static [(f64, f64)],
    pub(crate) green: &'static [(f64, f64)],
    pub(crate) blue: &'static [(f64, f64)],
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high. Lightness steps dominate the look of these
    /// schemes, with light colors for low data values to dark colors
    /// for high data values.
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data
    /// range.
    Div,
    /// Qualitative color scheme.  They do not imply magnitude
    /// differences between classes; their colors are never blended.
    Qual
}

/// Color from its `0xRRGGBB` code.
pub(crate) fn hex(code: u32) -> RGBA<f64> {
    let c = |shift: u32| ((code >> shift) & 0xff) as f64 / 255.;
    RGBA { r: c(16), g: c(8), b: c(0), a: 1. }
}

/// Color from components in \[0, 1\].
pub(crate) fn rgb01(r: f64, g: f64, b: f64) -> RGBA<f64> {
    RGBA { r, g, b, a: 1. }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_components() {
        let c = hex(0xff8000);
        assert_eq!(c.r, 1.);
        assert!((c.g - 128. / 255.).abs() < 1e-15);
        assert_eq!(c.b, 0.);
        assert_eq!(c.a, 1.);
    }
}
