use crate::{
    contract::VisitorContract,
    emit::{self, EXTENSION, EmitOptions},
    error::Result,
    hierarchy::{Hierarchy, ReturnMode},
};

/// Raw input for one hierarchy: a base name, a return mode, and spec lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyDef {
    pub base: String,
    pub mode: ReturnMode,
    pub lines: Vec<String>,
}

impl HierarchyDef {
    pub fn new<I, S>(base: impl Into<String>, mode: ReturnMode, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base: base.into(),
            mode,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub text: String,
    /// `<base>.cs`
    pub file_name: String,
}

/// Generate the source for one hierarchy.
///
/// Fails on the first malformed line or duplicate name, without producing
/// any output.
pub fn generate(def: &HierarchyDef, options: &EmitOptions) -> Result<Generated> {
    let hierarchy = Hierarchy::build(
        def.base.clone(),
        def.mode,
        def.lines.iter().map(String::as_str),
        options.strict,
    )?;
    let contract = VisitorContract::build(&hierarchy, options.style);
    let text = emit::emit(&hierarchy, &contract, options);

    tracing::debug!(
        base = hierarchy.base(),
        mode = %hierarchy.mode(),
        variants = hierarchy.variants().len(),
        bytes = text.len(),
        "generated hierarchy"
    );

    Ok(Generated {
        text,
        file_name: format!("{}.{EXTENSION}", hierarchy.base()),
    })
}

/// [`generate`] every definition, in order. Fails if any of them fails.
pub fn generate_all<'a>(
    defs: impl IntoIterator<Item = &'a HierarchyDef>,
    options: &EmitOptions,
) -> Result<Vec<Generated>> {
    defs.into_iter().map(|def| generate(def, options)).collect()
}
