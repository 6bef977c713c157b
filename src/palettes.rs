// Built-in colormap data.
//
// Brewer schemes come from http://colorbrewer2.org/, the `hsv`
// segments from Matplotlib.  The 256-entry tables are in `tables`.

use lazy_static::lazy_static;
pub(crate) mod ty;
mod tables;
use ty::*;

fn palette(typ: PaletteType, rgb: Vec<RGBA<f64>>) -> PaletteData {
    PaletteData { rgb, typ }
}

fn floats(typ: PaletteType, rows: &[[f64; 3]]) -> PaletteData {
    palette(typ, rows.iter().map(|&[r, g, b]| rgb01(r, g, b)).collect())
}

fn codes(typ: PaletteType, codes: &[u32]) -> PaletteData {
    palette(typ, codes.iter().map(|&c| hex(c)).collect())
}

// Reference tables
lazy_static! {
  pub(crate) static ref VIRIDIS: PaletteData =
    floats(PaletteType::Seq, &tables::VIRIDIS);
  pub(crate) static ref PLASMA: PaletteData =
    floats(PaletteType::Seq, &tables::PLASMA);
  pub(crate) static ref MAGMA: PaletteData =
    floats(PaletteType::Seq, &tables::MAGMA);
  pub(crate) static ref INFERNO: PaletteData =
    floats(PaletteType::Seq, &tables::INFERNO);
  pub(crate) static ref CIVIDIS: PaletteData =
    floats(PaletteType::Seq, &tables::CIVIDIS);
  pub(crate) static ref TURBO: PaletteData =
    floats(PaletteType::Seq, &tables::TURBO);

  pub(crate) static ref ROCKET: PaletteData =
    codes(PaletteType::Seq, &tables::ROCKET);
  pub(crate) static ref MAKO: PaletteData =
    codes(PaletteType::Seq, &tables::MAKO);
  pub(crate) static ref FLARE: PaletteData =
    codes(PaletteType::Seq, &tables::FLARE);
  pub(crate) static ref CREST: PaletteData =
    codes(PaletteType::Seq, &tables::CREST);
  pub(crate) static ref VLAG: PaletteData =
    codes(PaletteType::Div, &tables::VLAG);
  pub(crate) static ref ICEFIRE: PaletteData =
    codes(PaletteType::Div, &tables::ICEFIRE);
}

// Key-color palettes
lazy_static! {
  pub(crate) static ref GRAY: PaletteData = palette(PaletteType::Seq, vec![
    hex(0x000000), hex(0xffffff)]);

  pub(crate) static ref COOLWARM: PaletteData =
    floats(PaletteType::Div, &tables::COOLWARM);

  pub(crate) static ref BLUES: PaletteData = palette(PaletteType::Seq, vec![
    hex(0xf7fbff), hex(0xdeebf7), hex(0xc6dbef), hex(0x9ecae1), hex(0x6baed6),
    hex(0x4292c6), hex(0x2171b5), hex(0x08519c), hex(0x08306b)]);

  pub(crate) static ref GREENS: PaletteData = palette(PaletteType::Seq, vec![
    hex(0xf7fcf5), hex(0xe5f5e0), hex(0xc7e9c0), hex(0xa1d99b), hex(0x74c476),
    hex(0x41ab5d), hex(0x238b45), hex(0x006d2c), hex(0x00441b)]);

  pub(crate) static ref GREYS: PaletteData = palette(PaletteType::Seq, vec![
    hex(0xffffff), hex(0xf0f0f0), hex(0xd9d9d9), hex(0xbdbdbd), hex(0x969696),
    hex(0x737373), hex(0x525252), hex(0x252525), hex(0x000000)]);

  pub(crate) static ref ORANGES: PaletteData = palette(PaletteType::Seq, vec![
    hex(0xfff5eb), hex(0xfee6ce), hex(0xfdd0a2), hex(0xfdae6b), hex(0xfd8d3c),
    hex(0xf16913), hex(0xd94801), hex(0xa63603), hex(0x7f2704)]);

  pub(crate) static ref PURPLES: PaletteData = palette(PaletteType::Seq, vec![
    hex(0xfcfbfd), hex(0xefedf5), hex(0xdadaeb), hex(0xbcbddc), hex(0x9e9ac8),
    hex(0x807dba), hex(0x6a51a3), hex(0x54278f), hex(0x3f007d)]);

  pub(crate) static ref REDS: PaletteData = palette(PaletteType::Seq, vec![
    hex(0xfff5f0), hex(0xfee0d2), hex(0xfcbba1), hex(0xfc9272), hex(0xfb6a4a),
    hex(0xef3b2c), hex(0xcb181d), hex(0xa50f15), hex(0x67000d)]);

  pub(crate) static ref BRBG: PaletteData = palette(PaletteType::Div, vec![
    hex(0x543005), hex(0x8c510a), hex(0xbf812d), hex(0xdfc27d), hex(0xf6e8c3),
    hex(0xf5f5f5), hex(0xc7eae5), hex(0x80cdc1), hex(0x35978f), hex(0x01665e),
    hex(0x003c30)]);

  pub(crate) static ref PIYG: PaletteData = palette(PaletteType::Div, vec![
    hex(0x8e0152), hex(0xc51b7d), hex(0xde77ae), hex(0xf1b6da), hex(0xfde0ef),
    hex(0xf7f7f7), hex(0xe6f5d0), hex(0xb8e186), hex(0x7fbc41), hex(0x4d9221),
    hex(0x276419)]);

  pub(crate) static ref PRGN: PaletteData = palette(PaletteType::Div, vec![
    hex(0x40004b), hex(0x762a83), hex(0x9970ab), hex(0xc2a5cf), hex(0xe7d4e8),
    hex(0xf7f7f7), hex(0xd9f0d3), hex(0xa6dba0), hex(0x5aae61), hex(0x1b7837),
    hex(0x00441b)]);

  pub(crate) static ref RDBU: PaletteData = palette(PaletteType::Div, vec![
    hex(0x67001f), hex(0xb2182b), hex(0xd6604d), hex(0xf4a582), hex(0xfddbc7),
    hex(0xf7f7f7), hex(0xd1e5f0), hex(0x92c5de), hex(0x4393c3), hex(0x2166ac),
    hex(0x053061)]);

  pub(crate) static ref RDYLBU: PaletteData = palette(PaletteType::Div, vec![
    hex(0xa50026), hex(0xd73027), hex(0xf46d43), hex(0xfdae61), hex(0xfee090),
    hex(0xffffbf), hex(0xe0f3f8), hex(0xabd9e9), hex(0x74add1), hex(0x4575b4),
    hex(0x313695)]);

  pub(crate) static ref RDYLGN: PaletteData = palette(PaletteType::Div, vec![
    hex(0xa50026), hex(0xd73027), hex(0xf46d43), hex(0xfdae61), hex(0xfee08b),
    hex(0xffffbf), hex(0xd9ef8b), hex(0xa6d96a), hex(0x66bd63), hex(0x1a9850),
    hex(0x006837)]);

  pub(crate) static ref SPECTRAL: PaletteData = palette(PaletteType::Div, vec![
    hex(0x9e0142), hex(0xd53e4f), hex(0xf46d43), hex(0xfdae61), hex(0xfee08b),
    hex(0xffffbf), hex(0xe6f598), hex(0xabdda4), hex(0x66c2a5), hex(0x3288bd),
    hex(0x5e4fa2)]);
}

// Qualitative palettes
lazy_static! {
  pub(crate) static ref ACCENT: PaletteData = palette(PaletteType::Qual, vec![
    hex(0x7fc97f), hex(0xbeaed4), hex(0xfdc086), hex(0xffff99), hex(0x386cb0),
    hex(0xf0027f), hex(0xbf5b17), hex(0x666666)]);

  pub(crate) static ref DARK2: PaletteData = palette(PaletteType::Qual, vec![
    hex(0x1b9e77), hex(0xd95f02), hex(0x7570b3), hex(0xe7298a), hex(0x66a61e),
    hex(0xe6ab02), hex(0xa6761d), hex(0x666666)]);

  pub(crate) static ref PAIRED: PaletteData = palette(PaletteType::Qual, vec![
    hex(0xa6cee3), hex(0x1f78b4), hex(0xb2df8a), hex(0x33a02c), hex(0xfb9a99),
    hex(0xe31a1c), hex(0xfdbf6f), hex(0xff7f00), hex(0xcab2d6), hex(0x6a3d9a),
    hex(0xffff99), hex(0xb15928)]);

  pub(crate) static ref PASTEL1: PaletteData = palette(PaletteType::Qual, vec![
    hex(0xfbb4ae), hex(0xb3cde3), hex(0xccebc5), hex(0xdecbe4), hex(0xfed9a6),
    hex(0xffffcc), hex(0xe5d8bd), hex(0xfddaec), hex(0xf2f2f2)]);

  pub(crate) static ref PASTEL2: PaletteData = palette(PaletteType::Qual, vec![
    hex(0xb3e2cd), hex(0xfdcdac), hex(0xcbd5e8), hex(0xf4cae4), hex(0xe6f5c9),
    hex(0xfff2ae), hex(0xf1e2cc), hex(0xcccccc)]);

  pub(crate) static ref SET1: PaletteData = palette(PaletteType::Qual, vec![
    hex(0xe41a1c), hex(0x377eb8), hex(0x4daf4a), hex(0x984ea3), hex(0xff7f00),
    hex(0xffff33), hex(0xa65628), hex(0xf781bf), hex(0x999999)]);

  pub(crate) static ref SET2: PaletteData = palette(PaletteType::Qual, vec![
    hex(0x66c2a5), hex(0xfc8d62), hex(0x8da0cb), hex(0xe78ac3), hex(0xa6d854),
    hex(0xffd92f), hex(0xe5c494), hex(0xb3b3b3)]);

  pub(crate) static ref SET3: PaletteData = palette(PaletteType::Qual, vec![
    hex(0x8dd3c7), hex(0xffffb3), hex(0xbebada), hex(0xfb8072), hex(0x80b1d3),
    hex(0xfdb462), hex(0xb3de69), hex(0xfccde5), hex(0xd9d9d9), hex(0xbc80bd),
    hex(0xccebc5), hex(0xffed6f)]);

  pub(crate) static ref TAB10: PaletteData = palette(PaletteType::Qual, vec![
    hex(0x1f77b4), hex(0xff7f0e), hex(0x2ca02c), hex(0xd62728), hex(0x9467bd),
    hex(0x8c564b), hex(0xe377c2), hex(0x7f7f7f), hex(0xbcbd22), hex(0x17becf)]);
}

/// Matplotlib `hsv`.  The breakpoints are close to, but not exactly,
/// multiples of 1/6.
pub(crate) static HSV: SegmentData = SegmentData {
    red: &[(0., 1.), (0.158730, 1.), (0.174603, 0.96875),
           (0.333333, 0.03125), (0.349206, 0.), (0.666667, 0.),
           (0.682540, 0.03125), (0.841270, 0.96875), (0.857143, 1.),
           (1., 1.)],
    green: &[(0., 0.), (0.158730, 0.9375), (0.174603, 1.),
             (0.507937, 1.), (0.666667, 0.0625), (0.682540, 0.),
             (1., 0.)],
    blue: &[(0., 0.), (0.333333, 0.), (0.349206, 0.0625),
            (0.507937, 1.), (0.841270, 1.), (0.857143, 0.9375),
            (1., 0.09375)],
};
