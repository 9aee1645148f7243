use std::fmt::Write as _;

use super::{EmitOptions, push_indented};
use crate::{contract::VisitorContract, hierarchy::Hierarchy};

pub(super) fn emit_prelude(out: &mut String, options: &EmitOptions) {
    if let Some(namespace) = &options.namespace {
        ln!(out, "namespace {namespace};");
        ln!(out);
    }
}

/// Root class header, visitor interface, and the abstract dispatch entry point.
///
/// Leaves the root class open for the variants.
pub(super) fn emit_root_open(
    out: &mut String,
    hierarchy: &Hierarchy,
    contract: &VisitorContract<'_>,
) {
    ln!(out, "public abstract class {} {{", hierarchy.base());

    let mut body = String::new();
    emit_visitor(&mut body, contract);
    ln!(body);
    ln!(body, "public abstract {};", contract.dispatch_signature());

    push_indented(out, &body, 1);
}

fn emit_visitor(out: &mut String, contract: &VisitorContract<'_>) {
    ln!(out, "public interface {} {{", contract.interface());
    for method in contract.methods() {
        ln!(out, "    {};", method.signature());
    }
    ln!(out, "}}");
}

pub(super) fn emit_root_close(out: &mut String) {
    ln!(out, "}}");
}
