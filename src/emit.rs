//! C# source emission.
//!
//! Output shape for a generic hierarchy:
//!
//! ```text
//! public abstract class Expr {
//!     public interface Visitor<T> {
//!         T visitBinaryExpr(Binary expr);
//!     }
//!
//!     public abstract T accept<T>(Visitor<T> visitor);
//!
//!     public class Binary : Expr {
//!         public readonly Expr _left;
//!         ...
//!     }
//! }
//! ```
//!
//! Blocks are written at column zero and indented when they are nested
//! into their parent, so no emitter needs to know its own depth.

use std::fmt::Write as _;

use crate::{
    contract::{Style, VisitorContract},
    hierarchy::Hierarchy,
};

macro_rules! ln {
    ($f:ident, $($tt:tt)*) => (writeln!($f, $($tt)*).unwrap());
    ($f:ident) => (writeln!($f).unwrap());
}

macro_rules! ml {
    ($f:ident, $($tt:tt)*) => (indoc::writedoc!($f, $($tt)*).unwrap());
}

mod base;
mod variant;

pub const INDENT: &str = "    ";

/// Extension of emitted files.
pub const EXTENSION: &str = "cs";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub style: Style,
    /// File-scoped namespace declared at the top of each file.
    pub namespace: Option<String>,
    /// Reject names and type tokens that are not identifier-shaped.
    pub strict: bool,
}

impl EmitOptions {
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

/// Emit the full source of `hierarchy`.
pub fn emit(
    hierarchy: &Hierarchy,
    contract: &VisitorContract<'_>,
    options: &EmitOptions,
) -> String {
    let mut out = String::new();

    base::emit_prelude(&mut out, options);
    base::emit_root_open(&mut out, hierarchy, contract);
    for method in contract.methods() {
        ln!(out);
        variant::emit_variant(&mut out, hierarchy.base(), contract, method);
    }
    base::emit_root_close(&mut out);

    out
}

/// Append `block` to `out`, each non-empty line prefixed with `level` indents.
fn push_indented(out: &mut String, block: &str, level: usize) {
    for line in block.lines() {
        if !line.is_empty() {
            for _ in 0..level {
                out.push_str(INDENT);
            }
            out.push_str(line);
        }
        out.push('\n');
    }
}

pub struct Join<Iter, Sep>
where
    Iter: Iterator,
{
    iter: Iter,
    sep: Sep,
}

impl<Iter, Sep> std::fmt::Display for Join<Iter, Sep>
where
    Iter: Iterator + Clone,
    <Iter as Iterator>::Item: std::fmt::Display,
    Sep: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter.clone().peekable();
        while let Some(item) = iter.next() {
            write!(f, "{item}")?;
            if iter.peek().is_some() {
                write!(f, "{}", self.sep)?;
            }
        }
        Ok(())
    }
}

pub trait JoinIter: Sized + Iterator {
    fn join<Sep>(self, sep: Sep) -> Join<Self, Sep>;
}

impl<Iter> JoinIter for Iter
where
    Iter: Sized + Iterator + Clone,
{
    fn join<Sep>(self, sep: Sep) -> Join<Self, Sep> {
        Join { iter: self, sep }
    }
}

#[cfg(test)]
mod tests;
