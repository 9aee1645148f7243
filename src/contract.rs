//! The visitor interface a hierarchy exposes.
//!
//! Both the root type and every variant render their visitor-related names
//! from the same [`VisitorContract`], so the dispatch calls always resolve.

use std::{fmt::Display, str::FromStr};

use heck::AsLowerCamelCase;

use crate::{
    hierarchy::{Hierarchy, ReturnMode},
    spec::Variant,
};

/// Naming convention for visitor members.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// `Visitor`, `accept`, `visitBinaryExpr`
    #[default]
    Camel,
    /// `IVisitor`, `Accept`, `VisitBinaryExpr`
    Pascal,
}

impl Style {
    #[inline]
    pub fn interface(self) -> &'static str {
        match self {
            Style::Camel => "Visitor",
            Style::Pascal => "IVisitor",
        }
    }

    #[inline]
    pub fn accept(self) -> &'static str {
        match self {
            Style::Camel => "accept",
            Style::Pascal => "Accept",
        }
    }

    #[inline]
    pub fn visit_prefix(self) -> &'static str {
        match self {
            Style::Camel => "visit",
            Style::Pascal => "Visit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid style {0:?}, expected `camel` or `pascal`")]
pub struct StyleParseError(String);

impl FromStr for Style {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v = match s.to_ascii_lowercase().as_str() {
            "camel" => Style::Camel,
            "pascal" => Style::Pascal,
            _ => return Err(StyleParseError(s.to_owned())),
        };
        Ok(v)
    }
}

/// One dispatch method of the visitor interface.
#[derive(Debug, Clone)]
pub struct VisitMethod<'h> {
    pub name: String,
    pub variant: &'h Variant,
    pub param: String,
    pub returns: ReturnMode,
}

impl VisitMethod<'_> {
    /// `T visitBinaryExpr(Binary expr)`
    pub fn signature(&self) -> impl Display + '_ {
        Signature(self)
    }
}

struct Signature<'a, 'h>(&'a VisitMethod<'h>);

impl Display for Signature<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = self.0;
        write!(
            f,
            "{} {}({} {})",
            m.returns.return_type(),
            m.name,
            m.variant.name(),
            m.param
        )
    }
}

#[derive(Debug, Clone)]
pub struct VisitorContract<'h> {
    style: Style,
    mode: ReturnMode,
    methods: Vec<VisitMethod<'h>>,
}

impl<'h> VisitorContract<'h> {
    pub fn build(hierarchy: &'h Hierarchy, style: Style) -> Self {
        let base = hierarchy.base();
        let mode = hierarchy.mode();
        let param = AsLowerCamelCase(base).to_string();

        let methods = hierarchy
            .variants()
            .iter()
            .map(|variant| VisitMethod {
                name: format!("{}{}{base}", style.visit_prefix(), variant.name()),
                variant,
                param: param.clone(),
                returns: mode,
            })
            .collect();

        Self {
            style,
            mode,
            methods,
        }
    }

    #[inline]
    pub fn methods(&self) -> &[VisitMethod<'h>] {
        &self.methods
    }

    /// `Visitor<T>` / `IVisitor`
    pub fn interface(&self) -> String {
        format!("{}{}", self.style.interface(), self.mode.type_params())
    }

    /// `T accept<T>(Visitor<T> visitor)` / `void Accept(IVisitor visitor)`
    pub fn dispatch_signature(&self) -> String {
        format!(
            "{ret} {accept}{params}({interface} visitor)",
            ret = self.mode.return_type(),
            accept = self.style.accept(),
            params = self.mode.type_params(),
            interface = self.interface(),
        )
    }
}
