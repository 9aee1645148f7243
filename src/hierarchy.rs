use std::{fmt::Display, str::FromStr};

use hashbrown::HashSet;
use rustc_hash::FxBuildHasher;

use crate::{
    error::{Error, Result},
    spec::{self, Variant},
};

/// What visitor methods return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnMode {
    /// Visitor methods return a caller-chosen type parameter.
    Generic,
    /// Visitor methods return nothing.
    Void,
}

impl ReturnMode {
    pub const TYPE_PARAM: &'static str = "T";

    /// Return type of visitor methods and of the dispatch entry point.
    #[inline]
    pub fn return_type(self) -> &'static str {
        match self {
            ReturnMode::Generic => Self::TYPE_PARAM,
            ReturnMode::Void => "void",
        }
    }

    /// Generic parameter list attached to the visitor interface and the
    /// dispatch entry point.
    #[inline]
    pub fn type_params(self) -> &'static str {
        match self {
            ReturnMode::Generic => "<T>",
            ReturnMode::Void => "",
        }
    }

    #[inline]
    pub fn returns_value(self) -> bool {
        matches!(self, ReturnMode::Generic)
    }
}

impl Display for ReturnMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnMode::Generic => f.write_str("generic"),
            ReturnMode::Void => f.write_str("void"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid return mode {0:?}, expected `generic` or `void`")]
pub struct ReturnModeParseError(String);

impl FromStr for ReturnMode {
    type Err = ReturnModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v = match s.to_ascii_lowercase().as_str() {
            "generic" => ReturnMode::Generic,
            "void" => ReturnMode::Void,
            _ => return Err(ReturnModeParseError(s.to_owned())),
        };
        Ok(v)
    }
}

/// Collects the variants of one hierarchy, in registration order.
#[derive(Debug)]
pub struct VariantRegistry {
    base: String,
    mode: ReturnMode,
    variants: Vec<Variant>,
    names: HashSet<String, FxBuildHasher>,
}

impl VariantRegistry {
    pub fn new(base: impl Into<String>, mode: ReturnMode) -> Result<Self> {
        let base = base.into();
        if base.is_empty() || base.contains(char::is_whitespace) {
            return Err(Error::InvalidName {
                line: base.clone(),
                name: base,
            });
        }

        Ok(Self {
            base,
            mode,
            variants: Vec::new(),
            names: HashSet::default(),
        })
    }

    pub fn register(&mut self, variant: Variant) -> Result<()> {
        if !self.names.insert(variant.name().to_owned()) {
            return Err(Error::DuplicateVariant {
                base: self.base.clone(),
                variant: variant.name().to_owned(),
            });
        }
        self.variants.push(variant);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn finish(self) -> Hierarchy {
        Hierarchy {
            base: self.base,
            mode: self.mode,
            variants: self.variants,
        }
    }
}

/// A finalized family of variants sharing one root type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy {
    base: String,
    mode: ReturnMode,
    variants: Vec<Variant>,
}

impl Hierarchy {
    /// Parse and register every line, stopping at the first error.
    pub fn from_lines<'a>(
        base: impl Into<String>,
        mode: ReturnMode,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        Self::build(base.into(), mode, lines, false)
    }

    /// [`Hierarchy::from_lines`] with identifier validation.
    pub fn from_lines_strict<'a>(
        base: impl Into<String>,
        mode: ReturnMode,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        Self::build(base.into(), mode, lines, true)
    }

    pub(crate) fn build<'a>(
        base: String,
        mode: ReturnMode,
        lines: impl IntoIterator<Item = &'a str>,
        strict: bool,
    ) -> Result<Self> {
        if strict && !spec::is_ident(&base) {
            return Err(Error::InvalidName {
                line: base.clone(),
                name: base,
            });
        }

        let mut registry = VariantRegistry::new(base, mode)?;
        for line in lines {
            registry.register(spec::parse(line, strict)?)?;
        }
        Ok(registry.finish())
    }

    #[inline]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[inline]
    pub fn mode(&self) -> ReturnMode {
        self.mode
    }

    #[inline]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name() == name)
    }
}
