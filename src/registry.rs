//! Named colormaps.
//!
//! A [`ColormapSource`] resolves names to [`Colormap`]s; the rest of
//! the crate never depends on where the palettes come from.
//! [`BuiltinColormaps`] is the registry compiled into the crate.  As
//! in Matplotlib, every builtin is a [`LookupTable`] and appending
//! `_r` to a name reverses its entries.

use std::collections::BTreeMap;
use lazy_static::lazy_static;
use log::debug;
use rgb::RGBA;

use crate::error::{Error, Result};
use crate::palettes::{self, ty::{PaletteData, SegmentData}};
use crate::{ColorRange, LookupTable, Palette, PaletteType, Segmented};

/// A continuous function from \[0, 1\] to RGBA colors with
/// components in \[0, 1\].
pub type Colormap = Box<dyn ColorRange<RGBA<f64>>>;

/// Suffix selecting the reversed version of a colormap.
pub const REVERSED_SUFFIX: &str = "_r";

/// Number of entries of the tables built from key colors or segments.
pub const LUT_SIZE: usize = 256;

/// Capability to look colormaps up by name.
pub trait ColormapSource {
    /// Return the colormap called `name`.  Names match exactly.
    fn resolve(&self, name: &str) -> Result<Colormap>;

    /// Names this source knows about, sorted.
    fn names(&self) -> Vec<&str>;
}

impl<S: ColormapSource + ?Sized> ColormapSource for &S {
    fn resolve(&self, name: &str) -> Result<Colormap> { S::resolve(self, name) }

    fn names(&self) -> Vec<&str> { S::names(self) }
}

/// How the key colors of sequential and diverging palettes are
/// blended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Each RGB component separately, as Matplotlib does.
    #[default]
    Rgb,
    /// Along straight paths of the CIE LCh space.
    Lch,
}

enum Builtin {
    /// Reference table, used entry by entry.
    Table(&'static PaletteData),
    /// Key colors, blended unless the palette is qualitative.
    Palette(&'static PaletteData),
    Segments(&'static SegmentData),
}

impl Builtin {
    fn table(&self, interpolation: Interpolation) -> LookupTable<RGBA<f64>> {
        match self {
            Builtin::Table(data) => Palette::new(*data).table(),
            Builtin::Palette(data) => {
                let p: Palette<RGBA<f64>> = Palette::new(*data);
                match (p.typ(), interpolation) {
                    (PaletteType::Qual, _) => p.table(),
                    (_, Interpolation::Rgb) =>
                        LookupTable::sample(p.linear(), LUT_SIZE),
                    (_, Interpolation::Lch) =>
                        LookupTable::sample(p.gradient(), LUT_SIZE),
                }
            }
            Builtin::Segments(data) =>
                LookupTable::sample(Segmented::new(*data), LUT_SIZE),
        }
    }
}

lazy_static! {
    static ref BUILTINS: BTreeMap<&'static str, Builtin> = {
        use Builtin as B;
        BTreeMap::from([
            // Matplotlib
            ("viridis", B::Table(&palettes::VIRIDIS)),
            ("plasma", B::Table(&palettes::PLASMA)),
            ("magma", B::Table(&palettes::MAGMA)),
            ("inferno", B::Table(&palettes::INFERNO)),
            ("cividis", B::Table(&palettes::CIVIDIS)),
            ("turbo", B::Table(&palettes::TURBO)),
            ("coolwarm", B::Palette(&palettes::COOLWARM)),
            ("gray", B::Palette(&palettes::GRAY)),
            ("hsv", B::Segments(&palettes::HSV)),
            ("tab10", B::Palette(&palettes::TAB10)),
            // seaborn
            ("rocket", B::Table(&palettes::ROCKET)),
            ("mako", B::Table(&palettes::MAKO)),
            ("flare", B::Table(&palettes::FLARE)),
            ("crest", B::Table(&palettes::CREST)),
            ("vlag", B::Table(&palettes::VLAG)),
            ("icefire", B::Table(&palettes::ICEFIRE)),
            // Brewer sequential
            ("Blues", B::Palette(&palettes::BLUES)),
            ("Greens", B::Palette(&palettes::GREENS)),
            ("Greys", B::Palette(&palettes::GREYS)),
            ("Oranges", B::Palette(&palettes::ORANGES)),
            ("Purples", B::Palette(&palettes::PURPLES)),
            ("Reds", B::Palette(&palettes::REDS)),
            // Brewer diverging
            ("BrBG", B::Palette(&palettes::BRBG)),
            ("PiYG", B::Palette(&palettes::PIYG)),
            ("PRGn", B::Palette(&palettes::PRGN)),
            ("RdBu", B::Palette(&palettes::RDBU)),
            ("RdYlBu", B::Palette(&palettes::RDYLBU)),
            ("RdYlGn", B::Palette(&palettes::RDYLGN)),
            ("Spectral", B::Palette(&palettes::SPECTRAL)),
            // Brewer qualitative
            ("Accent", B::Palette(&palettes::ACCENT)),
            ("Dark2", B::Palette(&palettes::DARK2)),
            ("Paired", B::Palette(&palettes::PAIRED)),
            ("Pastel1", B::Palette(&palettes::PASTEL1)),
            ("Pastel2", B::Palette(&palettes::PASTEL2)),
            ("Set1", B::Palette(&palettes::SET1)),
            ("Set2", B::Palette(&palettes::SET2)),
            ("Set3", B::Palette(&palettes::SET3)),
        ])
    };
}

/// The colormaps compiled into this crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinColormaps {
    interpolation: Interpolation,
}

impl BuiltinColormaps {
    pub fn new() -> Self { Self::default() }

    /// Blend the key colors of palettes with `interpolation`.
    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }
}

impl ColormapSource for BuiltinColormaps {
    fn resolve(&self, name: &str) -> Result<Colormap> {
        if let Some(b) = BUILTINS.get(name) {
            debug!("resolved colormap {name}");
            return Ok(Box::new(b.table(self.interpolation)))
        }
        if let Some(b) = name.strip_suffix(REVERSED_SUFFIX)
            .and_then(|base| BUILTINS.get(base)) {
            debug!("resolved reversed colormap {name}");
            return Ok(Box::new(b.table(self.interpolation).reversed()))
        }
        Err(Error::unknown_colormap(name, self.names()))
    }

    fn names(&self) -> Vec<&str> {
        BUILTINS.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palettes::ty::{hex, rgb01};

    fn at(c: &Colormap, t: f64) -> RGBA<f64> { c.rgb(t) }

    fn resolve(name: &str) -> Colormap {
        BuiltinColormaps::new().resolve(name).unwrap()
    }

    #[test]
    fn every_name_resolves() {
        for interpolation in [Interpolation::Rgb, Interpolation::Lch] {
            let src = BuiltinColormaps::new().interpolation(interpolation);
            for name in src.names() {
                let c = src.resolve(name).unwrap();
                for t in [0., 0.3, 1.] {
                    let rgba = at(&c, t);
                    for v in [rgba.r, rgba.g, rgba.b, rgba.a] {
                        assert!((0. ..= 1.).contains(&v),
                                "{name}({t}) = {rgba:?}");
                    }
                    assert_eq!(rgba.a, 1.);
                }
            }
        }
    }

    #[test]
    fn seaborn_maps_are_registered() {
        let src = BuiltinColormaps::new();
        let names = src.names();
        for name in ["rocket", "mako", "flare", "crest", "vlag", "icefire"] {
            assert!(names.contains(&name), "{name}");
        }
        assert_eq!(at(&resolve("rocket"), 0.), hex(0x03051a));
        assert_eq!(at(&resolve("mako"), 1.), hex(0xdef5e5));
        assert_eq!(at(&resolve("icefire"), 1.), hex(0xffd4ac));
    }

    #[test]
    fn names_are_sorted() {
        let src = BuiltinColormaps::new();
        let names = src.names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"viridis"));
    }

    #[test]
    fn unknown_name_is_reported() {
        match BuiltinColormaps::new().resolve("not_a_colormap") {
            Err(Error::UnknownColormap { name, .. }) =>
                assert_eq!(name, "not_a_colormap"),
            Err(e) => panic!("unexpected error {e}"),
            Ok(_) => panic!("not_a_colormap resolved"),
        }
    }

    #[test]
    fn lookup_is_exact() {
        let src = BuiltinColormaps::new();
        assert!(src.resolve("Viridis").is_err());
        assert!(src.resolve("viri").is_err());
        assert!(src.resolve("blues").is_err());
        assert!(src.resolve("viridis_r_r").is_err());
    }

    #[test]
    fn reference_tables_are_exact() {
        let viridis = resolve("viridis");
        assert_eq!(at(&viridis, 0.), rgb01(0.267004, 0.004874, 0.329415));
        assert_eq!(at(&viridis, 0.5), rgb01(0.127568, 0.566949, 0.550556));
        let turbo = resolve("turbo");
        assert_eq!(at(&turbo, 0.), rgb01(0.18995, 0.07176, 0.23217));
        assert_eq!(at(&turbo, 1.), rgb01(0.47960, 0.01583, 0.01055));
        let cividis = resolve("cividis");
        assert_eq!(at(&cividis, 0.), rgb01(0., 0.135112, 0.304751));
        assert_eq!(at(&cividis, 1.), rgb01(0.995737, 0.909344, 0.217772));
    }

    #[test]
    fn reversed_names() {
        let c = resolve("viridis");
        let r = resolve("viridis_r");
        assert_eq!(at(&c, 1.), at(&r, 0.));
        assert_eq!(at(&c, 0.), at(&r, 1.));
        // Entry `i` of the reversed table is entry `255 - i`.
        for i in [0, 1, 100, 254, 255] {
            let t = (i as f64 + 0.5) / 256.;
            assert_eq!(at(&r, t), at(&c, 1. - t));
        }
        let set1_r = resolve("Set1_r");
        assert_eq!(at(&set1_r, 0.), hex(0x999999));
        assert_eq!(at(&set1_r, 0.5), hex(0xff7f00));
    }

    #[test]
    fn gray_is_a_256_entry_ramp() {
        let c = resolve("gray");
        let v = 128. / 255.;
        assert_eq!(at(&c, 0.5), RGBA::new(v, v, v, 1.));
        assert_eq!(at(&c, 0.), RGBA::new(0., 0., 0., 1.));
        assert_eq!(at(&c, 1.), RGBA::new(1., 1., 1., 1.));
    }

    #[test]
    fn rdbu_is_interpolated_in_rgb() {
        // t = 0.45 picks entry ⌊0.45 × 256⌋ = 115, sampled at 115/255,
        // between the key colors 4 (at 0.4) and 5 (at 0.5).
        let (c0, c1) = (hex(0xfddbc7), hex(0xf7f7f7));
        let s = 115. / 255. * 10. - 4.;
        let want = RGBA::new(c0.r + s * (c1.r - c0.r),
                             c0.g + s * (c1.g - c0.g),
                             c0.b + s * (c1.b - c0.b), 1.);
        let got = at(&resolve("RdBu"), 0.45);
        for (g, w) in [(got.r, want.r), (got.g, want.g), (got.b, want.b)] {
            assert!((g - w).abs() < 1e-12, "{got:?} ≠ {want:?}");
        }
        let lch = BuiltinColormaps::new().interpolation(Interpolation::Lch)
            .resolve("RdBu").unwrap();
        assert_ne!(at(&lch, 0.45), got);
    }

    #[test]
    fn coolwarm_control_points() {
        let c = resolve("coolwarm");
        assert_eq!(at(&c, 0.), rgb01(0.2298057, 0.298717966, 0.753683153));
        assert_eq!(at(&c, 1.), rgb01(0.705673158, 0.01555616, 0.150232812));
    }

    #[test]
    fn hsv_ends() {
        let c = resolve("hsv");
        assert_eq!(at(&c, 0.), RGBA::new(1., 0., 0., 1.));
        assert_eq!(at(&c, 1.), RGBA::new(1., 0., 0.09375, 1.));
    }

    #[test]
    fn qualitative_palettes_ignore_interpolation() {
        let lch = BuiltinColormaps::new().interpolation(Interpolation::Lch);
        for t in [0., 0.3, 0.55, 1.] {
            assert_eq!(at(&lch.resolve("Set2").unwrap(), t),
                       at(&resolve("Set2"), t));
        }
    }
}
