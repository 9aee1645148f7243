use super::{EmitOptions, JoinIter as _, emit};
use crate::{
    contract::{Style, VisitorContract},
    hierarchy::{Hierarchy, ReturnMode},
};

fn render<'a>(
    base: &str,
    mode: ReturnMode,
    lines: impl IntoIterator<Item = &'a str>,
    options: &EmitOptions,
) -> String {
    let hierarchy = Hierarchy::from_lines(base, mode, lines).unwrap();
    let contract = VisitorContract::build(&hierarchy, options.style);
    emit(&hierarchy, &contract, options)
}

#[test]
fn generic_binary() {
    let out = render(
        "Expr",
        ReturnMode::Generic,
        ["Binary : Expr left, Token op, Expr right"],
        &EmitOptions::default(),
    );

    insta::assert_snapshot!(out, @r"
    public abstract class Expr {
        public interface Visitor<T> {
            T visitBinaryExpr(Binary expr);
        }

        public abstract T accept<T>(Visitor<T> visitor);

        public class Binary : Expr {
            public readonly Expr _left;
            public readonly Token _op;
            public readonly Expr _right;

            public Binary(Expr left, Token op, Expr right) {
                _left = left;
                _op = op;
                _right = right;
            }

            public override T accept<T>(Visitor<T> visitor) {
                return visitor.visitBinaryExpr(this);
            }
        }
    }
    ");
}

#[test]
fn void_pascal_with_namespace() {
    let options = EmitOptions::default()
        .with_style(Style::Pascal)
        .with_namespace("Lib");
    let out = render(
        "Stmt",
        ReturnMode::Void,
        ["Print : Expr expression", "Empty :"],
        &options,
    );

    insta::assert_snapshot!(out, @r"
    namespace Lib;

    public abstract class Stmt {
        public interface IVisitor {
            void VisitPrintStmt(Print stmt);
            void VisitEmptyStmt(Empty stmt);
        }

        public abstract void Accept(IVisitor visitor);

        public class Print : Stmt {
            public readonly Expr _expression;

            public Print(Expr expression) {
                _expression = expression;
            }

            public override void Accept(IVisitor visitor) {
                visitor.VisitPrintStmt(this);
            }
        }

        public class Empty : Stmt {
            public Empty() {
            }

            public override void Accept(IVisitor visitor) {
                visitor.VisitEmptyStmt(this);
            }
        }
    }
    ");
}

#[test]
fn no_variants() {
    let out = render("Pattern", ReturnMode::Void, Vec::<&str>::new(), &EmitOptions::default());

    insta::assert_snapshot!(out, @r"
    public abstract class Pattern {
        public interface Visitor {
        }

        public abstract void accept(Visitor visitor);
    }
    ");
}

#[test]
fn no_trailing_whitespace() {
    let out = render(
        "Expr",
        ReturnMode::Generic,
        ["Literal : object? value", "Empty :", "Unary : Token op, Expr right"],
        &EmitOptions::default(),
    );

    assert!(out.ends_with("}\n"));
    assert!(!out.ends_with("\n\n"));
    for line in out.lines() {
        assert_eq!(line, line.trim_end(), "trailing whitespace in {line:?}");
    }
}

#[test]
fn style_only_changes_names() {
    let lines = ["Get : Expr instance, Token name", "This : Token keyword"];
    let camel = render("Expr", ReturnMode::Generic, lines, &EmitOptions::default());
    let pascal = render(
        "Expr",
        ReturnMode::Generic,
        lines,
        &EmitOptions::default().with_style(Style::Pascal),
    );

    assert_eq!(camel.lines().count(), pascal.lines().count());
    let renamed = camel
        .replace("visitor.visit", "visitor.Visit")
        .replace("T visit", "T Visit")
        .replace(" accept<", " Accept<")
        .replace("Visitor<T>", "IVisitor<T>");
    assert_eq!(renamed, pascal);
    assert!(pascal.contains("return visitor.VisitGetExpr(this);"));
}

#[test]
fn join() {
    assert_eq!(["a", "b", "c"].iter().join(", ").to_string(), "a, b, c");
    assert_eq!(["a"].iter().join(", ").to_string(), "a");
    assert_eq!(Vec::<&str>::new().iter().join(", ").to_string(), "");
}
