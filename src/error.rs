use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while resolving, sampling or encoding a colormap.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("unknown colormap “{name}”")]
    #[diagnostic(code(colormap::unknown))]
    UnknownColormap {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("at least 2 samples are required, got {0}")]
    #[diagnostic(code(colormap::samples))]
    TooFewSamples(usize),

    #[error("invalid sample count “{0}”")]
    #[diagnostic(code(colormap::samples), help("expected an integer ≥ 2"))]
    InvalidSampleCount(String),

    #[error("unsupported bit depth “{0}”")]
    #[diagnostic(code(colormap::bit_depth),
                 help("supported bit depths are 8, 16 and 32"))]
    InvalidBitDepth(String),

    #[error("“{0}” is not a valid C identifier")]
    #[diagnostic(code(colormap::var_name))]
    InvalidVarName(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(colormap::io))]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Resolution failure for `name`, listing the `known` names in
    /// the help message.
    pub fn unknown_colormap<'a>(
        name: &str, known: impl IntoIterator<Item = &'a str>) -> Self {
        let known: Vec<_> = known.into_iter().collect();
        let help = if known.is_empty() { None } else {
            Some(format!("known colormaps: {} (append “_r” to reverse one)",
                         known.join(", ")))
        };
        Error::UnknownColormap { name: name.to_string(), help }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_colormap_names_offender() {
        let e = Error::unknown_colormap("not_a_colormap", ["gray", "hsv"]);
        assert_eq!(e.to_string(), "unknown colormap “not_a_colormap”");
        match e {
            Error::UnknownColormap { help: Some(help), .. } => {
                assert!(help.contains("gray, hsv"));
            }
            e => panic!("unexpected {e:?}"),
        }
    }

    #[test]
    fn unknown_colormap_without_registry() {
        let e = Error::unknown_colormap("x", []);
        assert!(matches!(e, Error::UnknownColormap { help: None, .. }));
    }
}
