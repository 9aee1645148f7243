use std::fmt::Write as _;

use super::{JoinIter as _, push_indented};
use crate::{
    contract::{VisitMethod, VisitorContract},
    spec::Variant,
};

/// One concrete class, nested one level into the root class.
pub(super) fn emit_variant(
    out: &mut String,
    base: &str,
    contract: &VisitorContract<'_>,
    method: &VisitMethod<'_>,
) {
    let variant = method.variant;

    let mut members = String::new();
    emit_storage(&mut members, variant);
    emit_constructor(&mut members, variant);
    emit_dispatch(&mut members, contract, method);

    let mut class = String::new();
    ln!(class, "public class {} : {base} {{", variant.name());
    push_indented(&mut class, &members, 1);
    ln!(class, "}}");

    push_indented(out, &class, 1);
}

fn emit_storage(out: &mut String, variant: &Variant) {
    if variant.fields().is_empty() {
        return;
    }

    for field in variant.fields() {
        ln!(out, "public readonly {} {};", field.ty(), field.slot());
    }
    ln!(out);
}

fn emit_constructor(out: &mut String, variant: &Variant) {
    ln!(
        out,
        "public {}({}) {{",
        variant.name(),
        variant.fields().iter().join(", ")
    );
    for field in variant.fields() {
        ln!(out, "    {} = {};", field.slot(), field.name());
    }
    ln!(out, "}}");
    ln!(out);
}

fn emit_dispatch(out: &mut String, contract: &VisitorContract<'_>, method: &VisitMethod<'_>) {
    let ret = if method.returns.returns_value() {
        "return "
    } else {
        ""
    };
    ml!(
        out,
        "
        public override {signature} {{
            {ret}visitor.{name}(this);
        }}
        ",
        signature = contract.dispatch_signature(),
        name = method.name,
    );
}
