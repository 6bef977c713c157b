//! Sampling, linearization and channel composition.

use log::debug;
use rgb::{RGB, RGBA};

use crate::error::{Error, Result};
use crate::ColorRange;

/// Number of samples taken when none is specified.
pub const DEFAULT_SAMPLES: usize = 256;

/// Colors of a colormap at regularly spaced positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Samples {
    /// Positions `i / (n - 1)`, `i = 0, …, n - 1`.
    pub xs: Vec<f64>,
    pub colors: Vec<RGBA<f64>>,
}

/// Sample `colormap` at `n` regularly spaced points of \[0, 1\], both
/// ends included.  At least 2 samples are required.
pub fn sample<R>(colormap: R, n: usize) -> Result<Samples>
where R: ColorRange<RGBA<f64>> {
    if n < 2 { return Err(Error::TooFewSamples(n)) }
    let (xs, colors) = colormap.range(0., 1., n).unzip();
    debug!("sampled {n} colors");
    Ok(Samples { xs, colors })
}

/// Convert an sRGB encoded value to linear light.
#[inline]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// Apply [`srgb_to_linear`] to each channel if `enabled`.
pub fn linearize(c: RGB<f64>, enabled: bool) -> RGB<f64> {
    if !enabled { return c }
    RGB { r: srgb_to_linear(c.r), g: srgb_to_linear(c.g),
          b: srgb_to_linear(c.b) }
}

/// Channels written for every sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Channels {
    #[default]
    Rgb,
    Rgba,
}

impl Channels {
    pub fn new(include_alpha: bool) -> Self {
        if include_alpha { Channels::Rgba } else { Channels::Rgb }
    }

    /// Number of channels, 3 or 4.
    pub fn count(self) -> usize {
        match self { Channels::Rgb => 3, Channels::Rgba => 4 }
    }
}

/// Channel values of one sample, possibly linearized.  Alpha is kept
/// as is.  Only the first [`Channels::count`] entries are meaningful.
pub fn compose(c: RGBA<f64>, linear: bool, channels: Channels) -> [f64; 4] {
    let RGB { r, g, b } = linearize(c.rgb(), linear);
    match channels {
        Channels::Rgb => [r, g, b, 0.],
        Channels::Rgba => [r, g, b, c.a],
    }
}

/// Rows of channel values, all with the same number of channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    channels: Channels,
    rows: Vec<[f64; 4]>,
}

impl Table {
    pub fn new(samples: &Samples, linear: bool, channels: Channels) -> Self {
        let rows = samples.colors.iter()
            .map(|&c| compose(c, linear, channels))
            .collect();
        Table { channels, rows }
    }

    pub fn channels(&self) -> Channels { self.channels }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Iterate on the rows, each of length `self.channels().count()`.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        let k = self.channels.count();
        self.rows.iter().map(move |row| &row[.. k])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Black to white, linearly.
    struct Ramp;

    impl ColorRange<RGBA<f64>> for Ramp {
        fn rgb(&self, t: f64) -> RGBA<f64> { RGBA::new(t, t, t, 1.) }
    }

    #[test]
    fn sample_count_and_ends() {
        for n in [2, 3, 10, 256] {
            let s = sample(Ramp, n).unwrap();
            assert_eq!(s.xs.len(), n);
            assert_eq!(s.colors.len(), n);
            assert_eq!(s.xs[0], 0.);
            assert_eq!(s.xs[n - 1], 1.);
            assert_eq!(s.colors[0].r, 0.);
            assert_eq!(s.colors[n - 1].r, 1.);
        }
    }

    #[test]
    fn sample_positions() {
        let s = sample(Ramp, 5).unwrap();
        assert_eq!(s.xs, vec![0., 0.25, 0.5, 0.75, 1.]);
    }

    #[test]
    fn too_few_samples() {
        assert!(matches!(sample(Ramp, 1), Err(Error::TooFewSamples(1))));
        assert!(matches!(sample(Ramp, 0), Err(Error::TooFewSamples(0))));
    }

    #[test]
    fn sampling_is_deterministic() {
        assert_eq!(sample(Ramp, 17).unwrap(), sample(Ramp, 17).unwrap());
    }

    #[test]
    fn srgb_fixed_points() {
        assert_eq!(srgb_to_linear(0.), 0.);
        assert_eq!(srgb_to_linear(1.), 1.);
        assert_eq!(srgb_to_linear(0.04045), 0.04045 / 12.92);
        assert!((srgb_to_linear(0.5) - 0.21404114).abs() < 1e-8);
    }

    #[test]
    fn linearize_disabled_is_identity() {
        for i in 0 ..= 20 {
            let v = i as f64 / 20.;
            let c = RGB { r: v, g: 1. - v, b: v * v };
            assert_eq!(linearize(c, false), c);
        }
    }

    #[test]
    fn alpha_is_never_linearized() {
        let c = RGBA { r: 0.5, g: 0.5, b: 0.5, a: 0.5 };
        let row = compose(c, true, Channels::Rgba);
        assert_eq!(row[3], 0.5);
        assert!(row[0] < 0.25);
    }

    #[test]
    fn table_arity_is_uniform() {
        let s = sample(Ramp, 9).unwrap();
        for (channels, k) in [(Channels::Rgb, 3), (Channels::Rgba, 4)] {
            let t = Table::new(&s, false, channels);
            assert_eq!(t.len(), 9);
            assert!(t.rows().all(|row| row.len() == k));
        }
    }

    #[test]
    fn opaque_alpha_by_default() {
        let s = sample(Ramp, 4).unwrap();
        let t = Table::new(&s, true, Channels::Rgba);
        assert!(t.rows().all(|row| row[3] == 1.));
    }
}
