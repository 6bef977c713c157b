//! Command line interface of `sample-colormap`.
//!
//! Standard output receives the sampled positions (unless `--quiet`)
//! followed by the generated declaration; logs go to stderr.

use std::io::Write;

use clap::Parser;
use log::debug;

use crate::encode::{self, BitDepth, Declaration, Rounding};
use crate::error::{Error, Result};
use crate::registry::{ColormapSource, Interpolation};
use crate::sample::{self, Channels, Table, DEFAULT_SAMPLES};

/// sample-colormap - Sample a colormap at regularly spaced intervals
#[derive(Parser, Debug)]
#[command(name = "sample-colormap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Name of the colormap to sample (append `_r` to reverse it)
    #[arg(required_unless_present = "list")]
    pub name: Option<String>,

    /// Number of samples to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES,
          value_parser = parse_num_samples)]
    pub num_samples: usize,

    /// Include the alpha channel in the output
    #[arg(short = 'a', long)]
    pub include_alpha: bool,

    /// Output linear (instead of sRGB encoded) values
    #[arg(short = 'l', long)]
    pub linearize: bool,

    /// Bit depth of each channel: 8, 16 or 32 (float)
    #[arg(short = 'b', long, default_value_t = BitDepth::Float32,
          value_parser = parse_bit_depth)]
    pub bit_depth: BitDepth,

    /// Blend the key colors of palettes in CIE LCh instead of RGB
    #[arg(long)]
    pub lch: bool,

    /// Truncate instead of rounding when quantizing to 8 or 16 bits
    #[arg(short = 't', long)]
    pub truncate: bool,

    /// Name of the declared C++ variable
    #[arg(long, default_value = encode::DEFAULT_VAR_NAME,
          value_parser = parse_var_name)]
    pub var_name: String,

    /// Do not echo the sampled positions before the table
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// List the available colormaps and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Blending of the key colors requested on the command line.
    pub fn interpolation(&self) -> Interpolation {
        if self.lch { Interpolation::Lch } else { Interpolation::Rgb }
    }
}

fn parse_num_samples(s: &str) -> Result<usize> {
    let n = s.trim().parse::<usize>()
        .map_err(|_| Error::InvalidSampleCount(s.to_string()))?;
    if n < 2 { return Err(Error::TooFewSamples(n)) }
    Ok(n)
}

fn parse_bit_depth(s: &str) -> Result<BitDepth> { s.parse() }

fn parse_var_name(s: &str) -> Result<String> {
    if encode::is_identifier(s) { Ok(s.to_string()) }
    else { Err(Error::InvalidVarName(s.to_string())) }
}

/// Settings of one table generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub num_samples: usize,
    pub channels: Channels,
    pub linearize: bool,
    pub depth: BitDepth,
    pub rounding: Rounding,
    pub var_name: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            num_samples: DEFAULT_SAMPLES,
            channels: Channels::Rgb,
            linearize: false,
            depth: BitDepth::Float32,
            rounding: Rounding::Nearest,
            var_name: encode::DEFAULT_VAR_NAME.to_string(),
        }
    }
}

impl From<&Cli> for Options {
    fn from(cli: &Cli) -> Self {
        Options {
            num_samples: cli.num_samples,
            channels: Channels::new(cli.include_alpha),
            linearize: cli.linearize,
            depth: cli.bit_depth,
            rounding: if cli.truncate { Rounding::Truncate }
                      else { Rounding::Nearest },
            var_name: cli.var_name.clone(),
        }
    }
}

/// A generated table together with the positions it was sampled at.
#[derive(Clone, Debug, PartialEq)]
pub struct Generated {
    pub xs: Vec<f64>,
    pub code: String,
}

/// Resolve `name` in `source`, sample it and render the declaration.
pub fn generate(source: impl ColormapSource, name: &str, opts: &Options)
                -> Result<Generated> {
    let colormap = source.resolve(name)?;
    let samples = sample::sample(&*colormap, opts.num_samples)?;
    let table = Table::new(&samples, opts.linearize, opts.channels);
    debug!("encoding {} rows of {} channels at {} bits",
           table.len(), opts.channels.count(), opts.depth);
    let code = Declaration::new(&table, opts.depth)
        .rounding(opts.rounding)
        .var_name(&opts.var_name)
        .to_string();
    Ok(Generated { xs: samples.xs, code })
}

/// Run the command described by `cli`, writing to `out`.  Nothing is
/// written if the table cannot be generated.
pub fn run(cli: &Cli, source: impl ColormapSource, out: &mut impl Write)
           -> Result<()> {
    let name = match &cli.name {
        Some(name) if !cli.list => name,
        _ => {
            for name in source.names() {
                writeln!(out, "{name}")?;
            }
            return Ok(())
        }
    };
    let generated = generate(source, name, &Options::from(cli))?;
    if !cli.quiet {
        writeln!(out, "{:?}", generated.xs)?;
    }
    out.write_all(generated.code.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{BuiltinColormaps, Colormap};
    use crate::ColorRange;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rgb::RGBA;

    /// Fades from opaque black to half transparent white.
    struct Fade;

    impl ColorRange<RGBA<f64>> for Fade {
        fn rgb(&self, t: f64) -> RGBA<f64> { RGBA::new(t, t, t, 1. - t / 2.) }
    }

    struct FadeSource;

    impl ColormapSource for FadeSource {
        fn resolve(&self, name: &str) -> Result<Colormap> {
            if name == "fade" { Ok(Box::new(Fade)) }
            else { Err(Error::unknown_colormap(name, self.names())) }
        }

        fn names(&self) -> Vec<&str> { vec!["fade"] }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(
            std::iter::once("sample-colormap").chain(args.iter().copied()))
            .unwrap()
    }

    fn output(cli: &Cli, source: impl ColormapSource) -> Result<String> {
        let mut out = Vec::new();
        run(cli, source, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&["viridis"]);
        assert_eq!(cli.name.as_deref(), Some("viridis"));
        assert_eq!(Options::from(&cli), Options::default());
        assert!(!cli.quiet && !cli.list);
    }

    #[test]
    fn short_flags() {
        let cli = parse(&["-n", "16", "-a", "-l", "-b", "8", "-t", "magma"]);
        let opts = Options::from(&cli);
        assert_eq!(opts.num_samples, 16);
        assert_eq!(opts.channels, Channels::Rgba);
        assert!(opts.linearize);
        assert_eq!(opts.depth, BitDepth::Eight);
        assert_eq!(opts.rounding, Rounding::Truncate);
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        let parse = |args: &[&str]| Cli::try_parse_from(
            std::iter::once("sample-colormap").chain(args.iter().copied()));
        assert!(parse(&["viridis", "-b", "12"]).is_err());
        assert!(parse(&["viridis", "-n", "1"]).is_err());
        assert!(parse(&["viridis", "-n", "many"]).is_err());
        assert!(parse(&["viridis", "--var-name", "1x"]).is_err());
        assert!(parse(&[]).is_err());
        assert!(parse(&["--list"]).is_ok());
    }

    #[test]
    fn viridis_four_float_rows() {
        let g = generate(BuiltinColormaps::new(), "viridis",
                         &Options { num_samples: 4, ..Options::default() })
            .unwrap();
        let lines: Vec<_> = g.code.lines().collect();
        assert_eq!(lines[0], "static const std::vector<float3> data = {");
        assert_eq!(lines.len(), 4 + 2);
        for row in &lines[1 .. 5] {
            assert!(row.starts_with("    {") && row.ends_with("},"), "{row}");
            assert_eq!(row.matches('f').count(), 3);
        }
        assert_eq!(lines[5], "};");
        assert_eq!(g.xs.len(), 4);
        assert_eq!((g.xs[0], g.xs[3]), (0., 1.));
    }

    #[test]
    fn viridis_rows_are_table_entries() {
        let cli = parse(&["viridis", "-n", "4", "-q"]);
        assert_eq!(output(&cli, BuiltinColormaps::new()).unwrap(),
                   "static const std::vector<float3> data = {\n\
                   \x20   {0.267004f, 0.004874f, 0.329415f},\n\
                   \x20   {0.190631f, 0.407061f, 0.556089f},\n\
                   \x20   {0.208030f, 0.718701f, 0.472873f},\n\
                   \x20   {0.993248f, 0.906157f, 0.143936f},\n\
                    };\n");
    }

    #[test]
    fn lch_flag() {
        assert_eq!(parse(&["RdBu"]).interpolation(), Interpolation::Rgb);
        let cli = parse(&["RdBu", "--lch", "-n", "5", "-q"]);
        assert_eq!(cli.interpolation(), Interpolation::Lch);
        let source = BuiltinColormaps::new()
            .interpolation(cli.interpolation());
        let lch = output(&cli, source).unwrap();
        let rgb = output(&cli, BuiltinColormaps::new()).unwrap();
        assert_eq!(lch.lines().count(), rgb.lines().count());
        assert_ne!(lch, rgb);
    }

    #[test]
    fn row_count_matches_samples() {
        for n in [2, 5, 100] {
            let opts = Options { num_samples: n, ..Options::default() };
            let g = generate(BuiltinColormaps::new(), "Spectral", &opts)
                .unwrap();
            assert_eq!(g.code.lines().count(), n + 2);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let opts = Options { num_samples: 33, linearize: true,
                             ..Options::default() };
        let source = BuiltinColormaps::new();
        for name in source.names() {
            assert_eq!(generate(source, name, &opts).unwrap(),
                       generate(source, name, &opts).unwrap());
        }
    }

    #[test]
    fn unknown_colormap_prints_nothing() {
        let cli = parse(&["not_a_colormap"]);
        let mut out = Vec::new();
        match run(&cli, BuiltinColormaps::new(), &mut out) {
            Err(Error::UnknownColormap { name, .. }) =>
                assert_eq!(name, "not_a_colormap"),
            r => panic!("unexpected {r:?}"),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn eight_bit_with_alpha() {
        let cli = parse(&["fade", "-n", "3", "-a", "-b", "8"]);
        assert_eq!(output(&cli, &FadeSource).unwrap(),
                   "[0.0, 0.5, 1.0]\n\
                    static const std::vector<ImU32> data = {\n\
                   \x20   IM_COL32(0, 0, 0, 255),\n\
                   \x20   IM_COL32(128, 128, 128, 191),\n\
                   \x20   IM_COL32(255, 255, 255, 128),\n\
                    };\n");
    }

    #[test]
    fn alpha_dropped_and_quiet() {
        let cli = parse(&["fade", "-n", "2", "-b", "16", "-q",
                          "--var-name", "fade16"]);
        assert_eq!(output(&cli, FadeSource).unwrap(),
                   "static const std::vector<std::array<uint16_t, 3>> fade16 = {\n\
                   \x20   {0, 0, 0},\n\
                   \x20   {65535, 65535, 65535},\n\
                    };\n");
    }

    #[test]
    fn linearized_floats_keep_alpha() {
        let cli = parse(&["fade", "-n", "3", "-a", "-l", "-q"]);
        assert_eq!(output(&cli, FadeSource).unwrap(),
                   "static const std::vector<float4> data = {\n\
                   \x20   {0.000000f, 0.000000f, 0.000000f, 1.000000f},\n\
                   \x20   {0.214041f, 0.214041f, 0.214041f, 0.750000f},\n\
                   \x20   {1.000000f, 1.000000f, 1.000000f, 0.500000f},\n\
                    };\n");
    }

    #[test]
    fn list_names() {
        let cli = parse(&["--list"]);
        assert_eq!(output(&cli, FadeSource).unwrap(), "fade\n");
        let source = BuiltinColormaps::new();
        let all = output(&cli, source).unwrap();
        assert!(all.lines().any(|l| l == "viridis"));
        assert_eq!(all.lines().count(), source.names().len());
    }
}
