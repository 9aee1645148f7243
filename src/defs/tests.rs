use super::{lox, parse_defs};
use crate::{error::Error, generate::HierarchyDef, hierarchy::ReturnMode};

#[test]
fn blocks_in_file_order() {
    let defs = parse_defs(
        "
        // leading comment
        generic Expr {
            Binary : Expr left, Token op, Expr right

            // comments inside blocks are skipped too
            Empty :
        }

        void Stmt {
            Print : Expr expression
        }
        ",
    )
    .unwrap();

    assert_eq!(
        defs,
        vec![
            HierarchyDef::new(
                "Expr",
                ReturnMode::Generic,
                ["Binary : Expr left, Token op, Expr right", "Empty :"]
            ),
            HierarchyDef::new("Stmt", ReturnMode::Void, ["Print : Expr expression"]),
        ]
    );
}

#[test]
fn one_line_empty_block() {
    let defs = parse_defs("void Pattern {}\ngeneric Type {\n}").unwrap();
    assert_eq!(defs.len(), 2);
    assert!(defs.iter().all(|def| def.lines.is_empty()));
    assert_eq!(defs[0].base, "Pattern");
    assert_eq!(defs[1].mode, ReturnMode::Generic);
}

#[test]
fn spec_lines_are_not_validated() {
    let defs = parse_defs("void Stmt {\n  not a spec line\n}").unwrap();
    assert_eq!(defs[0].lines, ["not a spec line"]);
}

#[test]
fn builtin_lox() {
    let defs = lox().unwrap();
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].base, "Expr");
    assert_eq!(defs[0].mode, ReturnMode::Generic);
    assert_eq!(defs[0].lines.len(), 13);
    assert_eq!(defs[1].base, "Stmt");
    assert_eq!(defs[1].mode, ReturnMode::Void);
    assert_eq!(defs[1].lines.len(), 9);
}

fn error_line(s: &str) -> (usize, String) {
    match parse_defs(s).unwrap_err() {
        Error::Definitions { line, message } => (line, message),
        err => panic!("unexpected error: {err}"),
    }
}

#[test]
fn unknown_mode() {
    let (line, message) = error_line("\nasync Expr {\n}");
    assert_eq!(line, 2);
    assert!(message.contains("\"async\""), "{message}");
}

#[test]
fn missing_brace() {
    let (line, _) = error_line("generic Expr\n  Empty :\n}");
    assert_eq!(line, 1);
}

#[test]
fn missing_base() {
    let (line, _) = error_line("generic {\n}");
    assert_eq!(line, 1);
}

#[test]
fn unmatched_close() {
    let (line, message) = error_line("void Stmt {}\n}");
    assert_eq!(line, 2);
    assert_eq!(message, "unmatched `}`");
}

#[test]
fn unterminated_block() {
    let (line, message) = error_line("void Stmt {\n  Print : Expr e\n\ngeneric Expr {\n}");
    assert_eq!(line, 4);
    assert_eq!(message, "`Stmt` is still open");

    let (line, message) = error_line("// x\nvoid Stmt {\n  Print : Expr e\n");
    assert_eq!(line, 2);
    assert_eq!(message, "unterminated block for `Stmt`");
}

#[test]
fn duplicate_hierarchy() {
    let (line, message) = error_line("void Stmt {}\ngeneric Stmt {}");
    assert_eq!(line, 2);
    assert_eq!(message, "duplicate hierarchy `Stmt`");
}
