//! Definitions files: hierarchies as blocks of spec lines.
//!
//! ```text
//! // comment
//! generic Expr {
//!     Binary : Expr left, Token op, Expr right
//!     Empty  :
//! }
//!
//! void Stmt {}
//! ```
//!
//! Spec lines are kept verbatim; they are only parsed during generation.

use hashbrown::HashSet;
use rustc_hash::FxBuildHasher;

use crate::{
    error::{Result, definitions},
    generate::HierarchyDef,
    hierarchy::ReturnMode,
};

/// Definitions of the Lox `Expr` and `Stmt` families.
pub const LOX: &str = include_str!("../defs/lox.ast");

pub fn lox() -> Result<Vec<HierarchyDef>> {
    parse_defs(LOX)
}

pub fn parse_defs(s: &str) -> Result<Vec<HierarchyDef>> {
    let mut defs = Vec::new();
    let mut bases: HashSet<String, FxBuildHasher> = HashSet::default();
    // (line the block was opened on, definition being filled)
    let mut open: Option<(usize, HierarchyDef)> = None;

    for (i, line) in s.lines().enumerate() {
        let n = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if open.is_some() && line == "}" {
            defs.extend(open.take().map(|(_, def)| def));
            continue;
        }

        if let Some((_, def)) = &mut open {
            if line.ends_with('{') || line.ends_with("{}") {
                return definitions(n, format!("`{}` is still open", def.base));
            }
            def.lines.push(line.to_owned());
            continue;
        }

        if line == "}" {
            return definitions(n, "unmatched `}`");
        }

        let (header, closed) = if let Some(header) = line.strip_suffix("{}") {
            (header, true)
        } else if let Some(header) = line.strip_suffix('{') {
            (header, false)
        } else {
            return definitions(n, format!("expected `<mode> <Base> {{`, found {line:?}"));
        };

        let def = parse_header(n, header)?;
        if !bases.insert(def.base.clone()) {
            return definitions(n, format!("duplicate hierarchy `{}`", def.base));
        }

        if closed {
            defs.push(def);
        } else {
            open = Some((n, def));
        }
    }

    if let Some((n, def)) = open {
        return definitions(n, format!("unterminated block for `{}`", def.base));
    }

    tracing::debug!(hierarchies = defs.len(), "parsed definitions");

    Ok(defs)
}

fn parse_header(n: usize, header: &str) -> Result<HierarchyDef> {
    let Some((mode, base)) = header.trim().split_once(char::is_whitespace) else {
        return definitions(n, format!("expected `<mode> <Base>`, found {:?}", header.trim()));
    };
    let base = base.trim();
    if base.is_empty() || base.contains(char::is_whitespace) {
        return definitions(n, format!("invalid base name {base:?}"));
    }

    let mode = match mode.parse::<ReturnMode>() {
        Ok(mode) => mode,
        Err(err) => return definitions(n, err.to_string()),
    };

    Ok(HierarchyDef {
        base: base.to_owned(),
        mode,
        lines: Vec::new(),
    })
}

#[cfg(test)]
mod tests;
