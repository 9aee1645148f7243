use thiserror::Error;

/// Everything that can go wrong while turning hierarchy definitions into source.
///
/// Every variant is fatal for the hierarchy being generated. Nothing is emitted
/// once one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A spec line did not contain exactly one `:`.
    #[error("malformed spec line {line:?}: expected exactly one ':', found {colons}")]
    SpecFormat { line: String, colons: usize },

    /// A variant or base name was empty, or not an identifier in strict mode.
    #[error("invalid name {name:?} in {line:?}")]
    InvalidName { name: String, line: String },

    /// A field clause did not split into `<type> <name>`.
    #[error("malformed field {clause:?} in {line:?}: expected `<type> <name>`")]
    FieldFormat { clause: String, line: String },

    #[error("duplicate field `{field}` in variant `{variant}`")]
    DuplicateField { variant: String, field: String },

    #[error("duplicate variant `{variant}` in hierarchy `{base}`")]
    DuplicateVariant { base: String, variant: String },

    /// The definitions file itself is malformed. `line` is 1-based.
    #[error("line {line}: {message}")]
    Definitions { line: usize, message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[inline]
pub(crate) fn definitions<T>(line: usize, message: impl Into<String>) -> Result<T> {
    Err(Error::Definitions {
        line,
        message: message.into(),
    })
}
