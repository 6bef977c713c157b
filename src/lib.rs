//! Colormaps, sampling and code generation of color tables.
//!
//! A colormap is a “continuous” range of colors parametrized by reals
//! in \[0, 1\] (see [`ColorRange`]).  Colormaps are looked up by name
//! through a [`ColormapSource`]; [`BuiltinColormaps`] knows the
//! Matplotlib maps `viridis`, `plasma`, `magma`, `inferno`, `turbo`
//! and `cividis`, the seaborn ones, the [schemes by Cynthia
//! Brewer](https://colorbrewer2.org/) and a few others.  Like in
//! Matplotlib, each of them is a [`LookupTable`].
//!
//! A colormap is [sampled](sample::sample) at regularly spaced
//! points, optionally [linearized](sample::linearize), and the
//! resulting [`Table`](sample::Table) is rendered as a C++ literal by
//! [`encode::Declaration`] at the chosen [`BitDepth`](encode::BitDepth).

use std::f64::consts::PI;
use std::marker::PhantomData;
use rgb::{RGB, RGBA};

mod palettes;
use palettes::ty::{PaletteData, SegmentData};
pub use palettes::ty::PaletteType;

pub mod cli;
pub mod encode;
pub mod error;
pub mod registry;
pub mod sample;

pub use error::{Error, Result};
pub use registry::{BuiltinColormaps, Colormap, ColormapSource, Interpolation};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

impl<Color, R> ColorRange<Color> for &R
where R: ColorRange<Color> + ?Sized {
    #[inline]
    fn rgb(&self, t: f64) -> Color { R::rgb(*self, t) }
}

impl<Color, R> ColorRange<Color> for Box<R>
where R: ColorRange<Color> + ?Sized {
    #[inline]
    fn rgb(&self, t: f64) -> Color { R::rgb(self, t) }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }

    fn remaining(&self) -> usize {
        if self.i <= self.j { self.j - self.i + 1 } else { 0 }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 1\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 1\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return a gradient from color `c0` to color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGBA;
    /// use colormap_sampler::{RGBColor, ColorRange};
    /// let red = RGBA::new(1., 0., 0., 1.);
    /// let blue = RGBA::new(0., 0., 1., 1.);
    /// let grad = red.gradient(&blue);
    /// let rgb = grad.rgb(0.5);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let lch0 = Lch::from_rgb(Self::to_rgba(self));
        let lch1 = Lch::from_rgb(Self::to_rgba(c1));
        let h0 = lch0.h;
        let h1 = lch1.h;
        let dh = {
            if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
            else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
            else { h1 - h0 } };
        Gradient { c0: lch0,
                   dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c,
                             h: dh, a: lch1.a - lch0.a },
                   color: PhantomData }
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

/// Colors without an alpha channel are fully opaque.
impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r, g: self.g, b: self.b, a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { RGB { r: c.r, g: c.g, b: c.b } }
}

/// Clamp the color components to \[0, 1\].
fn clamp01(c: RGBA<f64>) -> RGBA<f64> {
    RGBA { r: c.r.clamp(0., 1.), g: c.g.clamp(0., 1.),
           b: c.b.clamp(0., 1.), a: c.a.clamp(0., 1.) }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy)]
struct Lch {
    /// The lightness in the range 0. to 100.
    l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    c: f64,
    /// The hue in radians in the range 0. to 2π.
    h: f64,
    /// Alpha component
    a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0 ;
const TWO_PI: f64 = 2. * PI;

impl Lch {
    fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let xr = 0.4522795 * c.r + 0.3993744 * c.g + 0.1483460 * c.b;
        let yr = 0.2225105 * c.r + 0.7168863 * c.g + 0.0606032 * c.b;
        let zr = 0.0168820 * c.r + 0.1176865 * c.g + 0.8654315 * c.b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h, a: c.a }
    }

    fn to_rgb(&self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b =  self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        RGBA { r, g, b, a: self.a }
    }
}

/// Linear interpolation between `c0` (`s = 0`) and `c1` (`s = 1`).
fn lerp(c0: RGBA<f64>, c1: RGBA<f64>, s: f64) -> RGBA<f64> {
    RGBA { r: c0.r + s * (c1.r - c0.r), g: c0.g + s * (c1.g - c0.g),
           b: c0.b + s * (c1.b - c0.b), a: c0.a + s * (c1.a - c0.a) }
}

/// Gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
pub struct Gradient<Color> {
    c0: Lch, // first color
    dc: Lch, // last - fist color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    fn rgb_unsafe(&self, t: f64) -> Color {
        let lhc = Lch { l: self.c0.l + t * self.dc.l,
              c: self.c0.c + t * self.dc.c,
              h: self.c0.h + t * self.dc.h,
              a: self.c0.a + t * self.dc.a };
        // Interpolation in Lch may leave the RGB gamut.
        Color::from_rgba(clamp01(lhc.to_rgb()))
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color { self.rgb_unsafe(t.clamp(0., 1.)) }
}


/// A palette given by its key colors.
#[derive(Clone, Copy)]
pub struct Palette<Color> {
    palette: &'static PaletteData,
    color: PhantomData<Color>,
}

impl<Color: RGBColor> Palette<Color> {
    pub(crate) fn new(palette: &'static PaletteData) -> Self {
        Self { palette, color: PhantomData }
    }
}

/// # Color palettes
///
/// The key colors of a palette are evenly spread over \[0, 1\].
/// Sequential and diverging palettes are turned into colormaps by
/// blending consecutive colors, either componentwise
/// ([`linear`][Palette::linear]) or in CIE LCh
/// ([`gradient`][Palette::gradient]).  Qualitative ones are used as
/// they are ([`table`][Palette::table]).
impl<Color> Palette<Color>
where Color: RGBColor {
    /// Says whether the palette is `Seq`uential, `Div`ergent or
    /// `Qual`itative.
    pub fn typ(&self) -> PaletteType { self.palette.typ }

    /// Returns the RGB colors of the palette.
    pub fn colors(&self) -> Vec<Color> {
        self.palette.rgb.iter().map(|&c| Color::from_rgba(c)).collect()
    }

    /// Returns a gradient constructed from the palette, interpolating
    /// in CIE LCh between consecutive colors.
    /// It only makes sense for sequential and diverging palettes.
    pub fn gradient(&self) -> PaletteGradient<Color> {
        PaletteGradient {
            gradients: self.palette.rgb.windows(2)
                .map(|c| { let c0 = Color::from_rgba(c[0]);
                           let c1 = Color::from_rgba(c[1]);
                           c0.gradient(&c1) })
                .collect() }
    }

    /// Returns the colormap interpolating linearly each RGBA component
    /// between consecutive colors (Matplotlib's
    /// `LinearSegmentedColormap.from_list`).
    pub fn linear(&self) -> PaletteLinear<Color> {
        PaletteLinear { palette: self.palette, color: PhantomData }
    }

    /// Returns the palette as a lookup table, one entry per color.
    pub fn table(&self) -> LookupTable<Color> {
        LookupTable { colors: self.colors() }
    }
}

/// A gradient based on a [`Palette`].
pub struct PaletteGradient<Color> {
    gradients: Vec<Gradient<Color>>,
}

impl<Color> ColorRange<Color> for PaletteGradient<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let n = self.gradients.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb_unsafe(tn.fract()) }
        else { self.gradients[n-1].rgb_unsafe(1.) }
    }
}

/// Componentwise interpolation of the colors of a [`Palette`].
pub struct PaletteLinear<Color> {
    palette: &'static PaletteData,
    color: PhantomData<Color>,
}

impl<Color> ColorRange<Color> for PaletteLinear<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let colors = &self.palette.rgb;
        let n = colors.len() - 1;
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { Color::from_rgba(lerp(colors[i], colors[i + 1], tn.fract())) }
        else { Color::from_rgba(colors[n]) }
    }
}

/// Colormap with one piecewise linear function per channel.
pub struct Segmented<Color> {
    data: &'static SegmentData,
    color: PhantomData<Color>,
}

impl<Color> Segmented<Color> {
    pub(crate) fn new(data: &'static SegmentData) -> Self {
        Segmented { data, color: PhantomData }
    }
}

/// Value at `x` of the piecewise linear function through `stops`.
fn interpolate(stops: &[(f64, f64)], x: f64) -> f64 {
    // First stop at or after `x`.
    let j = stops.partition_point(|&(xj, _)| xj < x);
    match (j, stops.get(j)) {
        (0, Some(&(_, y))) => y,
        (_, Some(&(x1, y1))) => {
            let (x0, y0) = stops[j - 1];
            y0 + (x - x0) / (x1 - x0) * (y1 - y0)
        }
        (_, None) => stops.last().map_or(0., |&(_, y)| y),
    }
}

impl<Color> ColorRange<Color> for Segmented<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let t = t.clamp(0., 1.);
        let d = self.data;
        Color::from_rgba(clamp01(RGBA {
            r: interpolate(d.red, t), g: interpolate(d.green, t),
            b: interpolate(d.blue, t), a: 1. }))
    }
}

/// Colormap given by a table of `N` colors.
///
/// As in Matplotlib, `t` selects the entry `⌊t N⌋` (the last one for
/// `t = 1`) and no interpolation takes place.  Continuous colormaps
/// become tables through [`LookupTable::sample`].
#[derive(Clone, Debug, PartialEq)]
pub struct LookupTable<Color> {
    colors: Vec<Color>, // Invariant: non-empty
}

impl<Color> LookupTable<Color> {
    /// Table of the colors of `range` at `n` evenly spaced points of
    /// \[0, 1\], both ends included.  The table has at least one entry.
    pub fn sample<R>(range: R, n: usize) -> Self
    where R: ColorRange<Color> {
        LookupTable { colors: range.range(0., 1., n.max(1))
                          .map(|(_, c)| c).collect() }
    }

    /// The entries of the table.
    pub fn colors(&self) -> &[Color] { &self.colors }

    /// The same table, last entry first.
    pub fn reversed(mut self) -> Self {
        self.colors.reverse();
        self
    }
}

impl<Color> ColorRange<Color> for LookupTable<Color>
where Color: Clone {
    fn rgb(&self, t: f64) -> Color {
        let n = self.colors.len();
        let i = (t.clamp(0., 1.) * n as f64) as usize;
        self.colors[i.min(n - 1)].clone()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::palettes::{BLUES, HSV, SET1, VIRIDIS};
    use crate::palettes::ty::{hex, rgb01};

    /// Black to white, linearly.
    struct Ramp;

    impl ColorRange<RGBA<f64>> for Ramp {
        fn rgb(&self, t: f64) -> RGBA<f64> { RGBA::new(t, t, t, 1.) }
    }

    fn close(c: RGBA<f64>, d: RGBA<f64>, eps: f64) -> bool {
        (c.r - d.r).abs() <= eps && (c.g - d.g).abs() <= eps
            && (c.b - d.b).abs() <= eps && (c.a - d.a).abs() <= eps
    }

    #[test]
    fn range_endpoints_are_exact() {
        let xs: Vec<f64> = Ramp.range(0., 1., 7).map(|(x, _)| x).collect();
        assert_eq!(xs.len(), 7);
        assert_eq!(xs[0], 0.);
        assert_eq!(xs[6], 1.);
        for (i, x) in xs.iter().enumerate() {
            assert!((x - i as f64 / 6.).abs() <= 1e-15);
        }
    }

    #[test]
    fn range_len_and_back() {
        let mut r = Ramp.range(0., 1., 5);
        assert_eq!(r.len(), 5);
        let (x, c) = r.next_back().unwrap();
        assert_eq!((x, c.r), (1., 1.));
        r.next();
        assert_eq!(r.len(), 3);
        assert_eq!(Ramp.range(0., 1., 0).len(), 0);
    }

    #[test]
    fn viridis_table_ends() {
        let t: LookupTable<RGBA<f64>> = Palette::new(&VIRIDIS).table();
        assert_eq!(t.colors().len(), 256);
        assert_eq!(t.rgb(0.), rgb01(0.267004, 0.004874, 0.329415));
        assert_eq!(t.rgb(1.), rgb01(0.993248, 0.906157, 0.143936));
        assert!(close(t.rgb(0.), hex(0x440154), 0.5 / 255.));
        assert!(close(t.rgb(1.), hex(0xfde725), 0.5 / 255.));
    }

    #[test]
    fn lookup_picks_entries_without_blending() {
        let t: LookupTable<RGBA<f64>> = Palette::new(&SET1).table();
        let colors = t.colors().to_vec();
        assert_eq!(colors.len(), 9);
        for (i, &c) in colors.iter().enumerate() {
            assert_eq!(t.rgb((i as f64 + 0.01) / 9.), c);
            assert_eq!(t.rgb((i as f64 + 0.99) / 9.), c);
        }
        assert_eq!(t.rgb(0.5), hex(0xff7f00));
        assert_eq!(t.rgb(1.), hex(0x999999));
        assert_eq!(t.rgb(-1.), hex(0xe41a1c));
    }

    #[test]
    fn sampling_a_table_at_its_size_reproduces_it() {
        let t: LookupTable<RGBA<f64>> = Palette::new(&VIRIDIS).table();
        assert_eq!(LookupTable::sample(&t, 256), t);
    }

    #[test]
    fn sampled_table_of_ramp() {
        let t = LookupTable::sample(Ramp, 256);
        for (i, c) in t.colors().iter().enumerate() {
            assert_eq!(c.r, i as f64 / 255.);
        }
        assert_eq!(t.rgb(0.5).r, 128. / 255.);
        assert_eq!(LookupTable::sample(Ramp, 0).colors().len(), 1);
    }

    #[test]
    fn reversed_table() {
        let t = LookupTable::sample(Ramp, 4);
        let r = t.clone().reversed();
        assert_eq!(r.colors()[0], t.colors()[3]);
        assert_eq!(r.rgb(0.), t.rgb(1.));
        assert_eq!(r.rgb(0.3), t.rgb(0.7));
    }

    #[test]
    fn linear_is_componentwise() {
        let p: PaletteLinear<RGBA<f64>> = Palette::new(&BLUES).linear();
        let (c0, c1) = (hex(0xf7fbff), hex(0xdeebf7));
        let mid = RGBA::new((c0.r + c1.r) / 2., (c0.g + c1.g) / 2.,
                            (c0.b + c1.b) / 2., 1.);
        assert_eq!(p.rgb(0.), c0);
        assert!(close(p.rgb(1. / 16.), mid, 1e-15));
        assert!(close(p.rgb(0.5), hex(0x6baed6), 1e-15));
        assert_eq!(p.rgb(1.), hex(0x08306b));
    }

    #[test]
    fn gradient_hits_key_colors() {
        let g: PaletteGradient<RGBA<f64>> = Palette::new(&BLUES).gradient();
        assert!(close(g.rgb(0.), hex(0xf7fbff), 1e-4));
        assert!(close(g.rgb(0.5), hex(0x6baed6), 1e-4));
        assert!(close(g.rgb(1.), hex(0x08306b), 1e-4));
    }

    #[test]
    fn gradient_differs_from_linear() {
        let p: Palette<RGBA<f64>> = Palette::new(&BLUES);
        let (g, l) = (p.gradient(), p.linear());
        assert!(!close(g.rgb(1. / 16.), l.rgb(1. / 16.), 1e-6));
    }

    #[test]
    fn hsv_segments() {
        let hsv: Segmented<RGBA<f64>> = Segmented::new(&HSV);
        assert_eq!(hsv.rgb(0.), RGBA::new(1., 0., 0., 1.));
        assert_eq!(hsv.rgb(0.158730), RGBA::new(1., 0.9375, 0., 1.));
        assert_eq!(hsv.rgb(0.507937), RGBA::new(0., 1., 1., 1.));
        assert_eq!(hsv.rgb(1.), RGBA::new(1., 0., 0.09375, 1.));
        // Not a hue wheel with breakpoints at multiples of 1/6.
        assert!(hsv.rgb(1. / 6.).r < 1.);
    }

    #[test]
    fn interpolate_outside_stops() {
        let stops = [(0.25, 0.5), (0.75, 1.)];
        assert_eq!(interpolate(&stops, 0.), 0.5);
        assert_eq!(interpolate(&stops, 0.5), 0.75);
        assert_eq!(interpolate(&stops, 1.), 1.);
        assert_eq!(interpolate(&[], 0.5), 0.);
    }

    #[test]
    fn rgb_has_opaque_alpha() {
        let c = RGB { r: 0.1, g: 0.2, b: 0.3 };
        assert_eq!(c.to_rgba().a, 1.);
    }
}
