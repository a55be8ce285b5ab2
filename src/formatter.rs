//! Pretty-printer that serializes an expression tree back into
//! canonical text.
//!
//! Produces single-spaced output with parentheses only where the
//! tree shape requires them.

use crate::ast::Expr;

/// Format an expression tree into canonical source text.
///
/// Binary operators get one space on each side. Parentheses appear
/// only where omitting them would change the tree: around a child of
/// lower precedence than its parent, and around a right child of
/// equal precedence. Parsing the output reproduces the tree.
///
/// Literals produced by the parser are never negative. A hand-built
/// negative literal prints with its sign, and that text does not
/// re-lex because the grammar has no unary minus.
#[must_use]
pub fn format(expr: &Expr) -> String {
    let mut out = String::new();
    format_expr(&mut out, expr);
    out
}

fn format_expr(out: &mut String, expr: &Expr) {
    use std::fmt::Write as _;

    match expr {
        Expr::Literal { value } => {
            let _ = write!(out, "{value}");
        }
        Expr::Binary { op, left, right } => {
            format_child(out, left, op.precedence(), false);
            let _ = write!(out, " {op} ");
            format_child(out, right, op.precedence(), true);
        }
    }
}

/// Wrap `child` in parentheses when printing it bare would bind it
/// differently than the tree does.
fn format_child(out: &mut String, child: &Expr, parent_prec: u8, is_right: bool) {
    let needs_parens = match child {
        Expr::Literal { .. } => false,
        Expr::Binary { op, .. } => {
            let prec = op.precedence();
            prec < parent_prec || (is_right && prec == parent_prec)
        }
    };

    if needs_parens {
        out.push('(');
        format_expr(out, child);
        out.push(')');
    } else {
        format_expr(out, child);
    }
}
