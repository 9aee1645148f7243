//! Generates C# AST node hierarchies with visitor-based double dispatch
//! from compact spec lines such as `Binary : Expr left, Token op, Expr right`.
//!
//! ```
//! use visitgen::{EmitOptions, HierarchyDef, ReturnMode, generate};
//!
//! let def = HierarchyDef::new("Expr", ReturnMode::Generic, ["Grouping : Expr expression"]);
//! let out = generate(&def, &EmitOptions::default()).unwrap();
//! assert_eq!(out.file_name, "Expr.cs");
//! assert!(out.text.contains("return visitor.visitGroupingExpr(this);"));
//! ```

pub mod error;

pub mod spec;
pub mod hierarchy;
pub mod contract;
pub mod emit;
pub mod generate;

pub mod defs;
pub mod writer;

pub use contract::Style;
pub use emit::EmitOptions;
pub use error::{Error, Result};
pub use generate::{Generated, HierarchyDef, generate, generate_all};
pub use hierarchy::{Hierarchy, ReturnMode};
