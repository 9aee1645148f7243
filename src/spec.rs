//! Parsing of single spec lines:
//!
//! ```text
//! Binary : Expr left, Token op, Expr right
//! Empty  :
//! ```
//!
//! The text left of the colon is the variant name, the text right of it
//! is a comma-separated list of `<type> <name>` field clauses.
//!
//! Type and name tokens are opaque: they are emitted as-is, and only
//! checked for shape in strict mode.

use std::fmt::Display;

use hashbrown::HashSet;
use rustc_hash::FxBuildHasher;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    ty: String,
    name: String,
}

impl Field {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    #[inline]
    pub fn ty(&self) -> &str {
        &self.ty
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the storage slot backing this field.
    ///
    /// Prefixed so it never collides with the constructor parameter.
    #[inline]
    pub fn slot(&self) -> impl Display + '_ {
        Slot(&self.name)
    }
}

/// `<type> <name>`, as it appears in a parameter list.
impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

struct Slot<'a>(&'a str);

impl Display for Slot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    name: String,
    fields: Vec<Field>,
}

impl Variant {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

/// Parse one spec line into a [`Variant`].
///
/// Names and type tokens are accepted as long as they are non-empty.
pub fn parse_variant(line: &str) -> Result<Variant> {
    parse(line, false)
}

/// Like [`parse_variant`], but also requires the variant name and field
/// names to be identifiers, and type tokens to look like type expressions.
pub fn parse_variant_strict(line: &str) -> Result<Variant> {
    parse(line, true)
}

pub(crate) fn parse(line: &str, strict: bool) -> Result<Variant> {
    let colons = line.matches(':').count();
    let Some((name, rest)) = line.split_once(':').filter(|_| colons == 1) else {
        return Err(Error::SpecFormat {
            line: line.to_owned(),
            colons,
        });
    };

    let name = name.trim();
    if name.is_empty() || (strict && !is_ident(name)) {
        return Err(Error::InvalidName {
            name: name.to_owned(),
            line: line.to_owned(),
        });
    }

    let mut fields = Vec::new();
    let mut seen: HashSet<&str, FxBuildHasher> = HashSet::default();

    for clause in rest.trim().split(',') {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }

        let field_format = || Error::FieldFormat {
            clause: clause.to_owned(),
            line: line.to_owned(),
        };

        let Some((ty, field_name)) = clause.split_once(char::is_whitespace) else {
            return Err(field_format());
        };
        let field_name = field_name.trim_start();
        if field_name.is_empty() || field_name.contains(char::is_whitespace) {
            return Err(field_format());
        }
        if strict && !(is_type(ty) && is_ident(field_name)) {
            return Err(field_format());
        }

        // `x` is stored in `_x`, so a field named `_x` would shadow it in the constructor
        let shadows = field_name
            .strip_prefix('_')
            .is_some_and(|stored| seen.contains(stored))
            || seen.contains(format!("_{field_name}").as_str());
        if shadows || !seen.insert(field_name) {
            return Err(Error::DuplicateField {
                variant: name.to_owned(),
                field: field_name.to_owned(),
            });
        }
        fields.push(Field::new(ty, field_name));
    }

    tracing::trace!(variant = name, arity = fields.len(), "parsed variant");

    Ok(Variant {
        name: name.to_owned(),
        fields,
    })
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub(crate) fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Identifier characters plus the punctuation that shows up in
/// generic, array, nullable and qualified type names. Commas never reach
/// here, so multi-parameter generics are not representable.
fn is_type(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '<' | '>' | '[' | ']' | '?' | '.')
    })
}
