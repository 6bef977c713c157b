//! Quantization and rendering of a [`Table`] as a C++ declaration.
//!
//! The bit depth decides both the quantization and the literal
//! syntax:
//!
//! | depth | element type                  | row                     |
//! |-------|-------------------------------|-------------------------|
//! | 8     | `ImU32`                       | `IM_COL32(r, g, b, a)`  |
//! | 16    | `std::array<uint16_t, K>`     | `{r, g, b, a}`          |
//! | 32    | `floatK`                      | `{rf, gf, bf, af}`      |
//!
//! where `K` is the number of channels (the alpha column is optional).

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::sample::Table;

/// Name of the declared variable when none is given.
pub const DEFAULT_VAR_NAME: &str = "data";

/// Macro packing 8-bit channels into a 32-bit integer.
const PACK_MACRO: &str = "IM_COL32";

/// Storage of each channel in the generated table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BitDepth {
    /// 8-bit integers packed into a 32-bit word.
    Eight,
    /// 16-bit unsigned integers.
    Sixteen,
    /// 32-bit floats, not quantized.
    #[default]
    Float32,
}

impl BitDepth {
    pub fn bits(self) -> u32 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::Float32 => 32,
        }
    }

    /// Largest integer value of a channel, `None` for floats.
    pub fn max(self) -> Option<u32> {
        match self {
            BitDepth::Eight => Some(u8::MAX as u32),
            BitDepth::Sixteen => Some(u16::MAX as u32),
            BitDepth::Float32 => None,
        }
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Error> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            32 => Ok(BitDepth::Float32),
            _ => Err(Error::InvalidBitDepth(bits.to_string())),
        }
    }
}

impl FromStr for BitDepth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        s.trim().parse::<u32>()
            .map_err(|_| Error::InvalidBitDepth(s.to_string()))
            .and_then(BitDepth::try_from)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// How scaled channel values are brought to integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Round to the nearest integer (halves away from zero).
    #[default]
    Nearest,
    /// Drop the fractional part, as a C cast does.
    Truncate,
}

/// Scale `v` ∈ \[0, 1\] to `0 ..= max` and round it.  Values out of
/// range are clamped.
pub fn quantize(v: f64, max: u32, rounding: Rounding) -> u32 {
    let max = max as f64;
    let x = v * max;
    let x = match rounding {
        Rounding::Nearest => x.round(),
        Rounding::Truncate => x.trunc(),
    };
    x.clamp(0., max) as u32
}

/// Whether `s` can be used as a C/C++ identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' =>
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}

/// `v` with 6 decimals.  Values rounding to zero print as `0.000000`
/// whatever their sign.
struct FixedSix(f64);

impl fmt::Display for FixedSix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = format!("{:.6}", self.0);
        match s.strip_prefix('-') {
            Some(digits) if digits.bytes().all(|b| b == b'0' || b == b'.') =>
                f.write_str(digits),
            _ => f.write_str(&s),
        }
    }
}

/// A `static const std::vector<…>` declaration holding a [`Table`].
///
/// Each row sits on its own line and is followed by a comma, the last
/// one included.
pub struct Declaration<'a> {
    table: &'a Table,
    depth: BitDepth,
    rounding: Rounding,
    var_name: &'a str,
}

impl<'a> Declaration<'a> {
    pub fn new(table: &'a Table, depth: BitDepth) -> Self {
        Declaration { table, depth, rounding: Rounding::default(),
                      var_name: DEFAULT_VAR_NAME }
    }

    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn var_name(mut self, var_name: &'a str) -> Self {
        self.var_name = var_name;
        self
    }

    /// C++ type of one row.
    pub fn element_type(&self) -> String {
        let k = self.table.channels().count();
        match self.depth {
            BitDepth::Eight => "ImU32".to_string(),
            BitDepth::Sixteen => format!("std::array<uint16_t, {k}>"),
            BitDepth::Float32 => format!("float{k}"),
        }
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, row: &[f64]) -> fmt::Result {
        let packed = self.depth == BitDepth::Eight;
        if packed { write!(f, "{PACK_MACRO}(")? } else { f.write_str("{")? }
        for (i, &v) in row.iter().enumerate() {
            if i > 0 { f.write_str(", ")? }
            match self.depth.max() {
                Some(max) => write!(f, "{}", quantize(v, max, self.rounding))?,
                None => write!(f, "{}f", FixedSix(v))?,
            }
        }
        f.write_str(if packed { ")" } else { "}" })
    }
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "static const std::vector<{}> {} = {{",
                 self.element_type(), self.var_name)?;
        for row in self.table.rows() {
            f.write_str("    ")?;
            self.write_row(f, row)?;
            f.write_str(",\n")?;
        }
        writeln!(f, "}};")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{sample, Channels, Samples};
    use crate::ColorRange;
    use pretty_assertions::assert_eq;
    use rgb::RGBA;

    struct Ramp;

    impl ColorRange<RGBA<f64>> for Ramp {
        fn rgb(&self, t: f64) -> RGBA<f64> { RGBA::new(t, t, t, 1.) }
    }

    fn gray_table(n: usize, channels: Channels) -> Table {
        let s = sample(Ramp, n).unwrap();
        Table::new(&s, false, channels)
    }

    fn float_row(values: [f64; 3]) -> String {
        let s = Samples {
            xs: vec![0., 1.],
            colors: vec![RGBA::new(values[0], values[1], values[2], 1.); 2],
        };
        let t = Table::new(&s, false, Channels::Rgb);
        let out = Declaration::new(&t, BitDepth::Float32).to_string();
        out.lines().nth(1).unwrap_or_default().to_string()
    }

    #[test]
    fn quantize_bounds() {
        for rounding in [Rounding::Nearest, Rounding::Truncate] {
            assert_eq!(quantize(0., 255, rounding), 0);
            assert_eq!(quantize(1., 255, rounding), 255);
            assert_eq!(quantize(0., 65535, rounding), 0);
            assert_eq!(quantize(1., 65535, rounding), 65535);
            assert_eq!(quantize(1.5, 255, rounding), 255);
            assert_eq!(quantize(-0.2, 65535, rounding), 0);
        }
    }

    #[test]
    fn quantize_rounding() {
        assert_eq!(quantize(0.5, 255, Rounding::Nearest), 128);
        assert_eq!(quantize(0.5, 255, Rounding::Truncate), 127);
        assert_eq!(quantize(0.999, 255, Rounding::Nearest), 255);
        assert_eq!(quantize(0.999, 255, Rounding::Truncate), 254);
        assert_eq!(quantize(f64::NAN, 255, Rounding::Nearest), 0);
    }

    #[test]
    fn bit_depth_parsing() {
        assert_eq!("8".parse::<BitDepth>().unwrap(), BitDepth::Eight);
        assert_eq!("16".parse::<BitDepth>().unwrap(), BitDepth::Sixteen);
        assert_eq!("32".parse::<BitDepth>().unwrap(), BitDepth::Float32);
        assert!(matches!("24".parse::<BitDepth>(),
                         Err(Error::InvalidBitDepth(s)) if s == "24"));
        assert!("eight".parse::<BitDepth>().is_err());
        assert_eq!(BitDepth::Sixteen.to_string(), "16");
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("data"));
        assert!(is_identifier("_viridis2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2data"));
        assert!(!is_identifier("my-data"));
    }

    #[test]
    fn eight_bit_rgb() {
        let t = gray_table(3, Channels::Rgb);
        assert_eq!(Declaration::new(&t, BitDepth::Eight).to_string(),
                   "static const std::vector<ImU32> data = {\n\
                   \x20   IM_COL32(0, 0, 0),\n\
                   \x20   IM_COL32(128, 128, 128),\n\
                   \x20   IM_COL32(255, 255, 255),\n\
                    };\n");
    }

    #[test]
    fn eight_bit_truncated_rgba() {
        let t = gray_table(3, Channels::Rgba);
        let d = Declaration::new(&t, BitDepth::Eight)
            .rounding(Rounding::Truncate);
        assert_eq!(d.to_string(),
                   "static const std::vector<ImU32> data = {\n\
                   \x20   IM_COL32(0, 0, 0, 255),\n\
                   \x20   IM_COL32(127, 127, 127, 255),\n\
                   \x20   IM_COL32(255, 255, 255, 255),\n\
                    };\n");
    }

    #[test]
    fn sixteen_bit() {
        let t = gray_table(3, Channels::Rgba);
        let d = Declaration::new(&t, BitDepth::Sixteen).var_name("ramp");
        assert_eq!(d.to_string(),
                   "static const std::vector<std::array<uint16_t, 4>> ramp = {\n\
                   \x20   {0, 0, 0, 65535},\n\
                   \x20   {32768, 32768, 32768, 65535},\n\
                   \x20   {65535, 65535, 65535, 65535},\n\
                    };\n");
    }

    #[test]
    fn float_rows() {
        let t = gray_table(5, Channels::Rgb);
        assert_eq!(Declaration::new(&t, BitDepth::Float32).to_string(),
                   "static const std::vector<float3> data = {\n\
                   \x20   {0.000000f, 0.000000f, 0.000000f},\n\
                   \x20   {0.250000f, 0.250000f, 0.250000f},\n\
                   \x20   {0.500000f, 0.500000f, 0.500000f},\n\
                   \x20   {0.750000f, 0.750000f, 0.750000f},\n\
                   \x20   {1.000000f, 1.000000f, 1.000000f},\n\
                    };\n");
    }

    #[test]
    fn negative_zero_is_printed_as_zero() {
        assert_eq!(float_row([-0., 0., 0.]),
                   "    {0.000000f, 0.000000f, 0.000000f},");
    }

    #[test]
    fn tiny_negatives_are_printed_as_zero() {
        assert_eq!(float_row([-1e-9, -4.9e-7, -1e-300]),
                   "    {0.000000f, 0.000000f, 0.000000f},");
        assert_eq!(float_row([-6e-7, -0.25, 1e-9]),
                   "    {-0.000001f, -0.250000f, 0.000000f},");
    }
}
