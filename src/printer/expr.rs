// src/printer/expr.rs
//! Expression printing, including parenthesization and string escaping.

use pretty::{Arena, DocAllocator, DocBuilder};

use crate::ast::*;
use crate::ops::OpTable;

use super::types::print_annotations;
use super::{print_item, BODY_INDENT, LET_INDENT};

/// Print an annotated expression: the naked expression followed by its
/// space-joined annotations.
pub fn print_expr<'a>(
    arena: &'a Arena<'a>,
    expr: &Expr,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    let doc = print_naked_expr(arena, &expr.expr, ops);
    if expr.annotations.is_empty() {
        doc
    } else {
        doc.append(arena.text(" "))
            .append(print_annotations(arena, &expr.annotations, ops))
    }
}

/// Print an expression without annotations.
pub fn print_naked_expr<'a>(
    arena: &'a Arena<'a>,
    expr: &NakedExpr,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    match expr {
        NakedExpr::AnonVar => arena.text("_"),
        NakedExpr::Var(name) => arena.text(name.clone()),
        NakedExpr::BoolLit(b) => arena.text(if *b { "true" } else { "false" }),
        NakedExpr::IntLit(n) => arena.text(n.to_string()),
        NakedExpr::FloatLit(f) => print_float_literal(arena, *f),
        NakedExpr::StringLit(s) => print_string_literal(arena, s),
        NakedExpr::Range(lo, hi) => print_parens_expr(arena, 0, lo, ops)
            .append(arena.text(".."))
            .append(print_parens_expr(arena, 0, hi, ops)),
        NakedExpr::SetLit(elems) => arena
            .text("{")
            .append(comma_sep(arena, elems, ops))
            .append(arena.text("}")),
        NakedExpr::SetComp(elem, tail) => arena
            .text("{")
            .append(print_expr(arena, elem, ops))
            .append(arena.text(" | "))
            .append(print_comp_tail(arena, tail, ops))
            .append(arena.text("}")),
        NakedExpr::ArrayLit(elems) => arena
            .text("[")
            .append(comma_sep(arena, elems, ops))
            .append(arena.text("]")),
        NakedExpr::ArrayLit2d(rows) => print_array_2d(arena, rows, ops),
        NakedExpr::ArrayComp(elem, tail) => arena
            .text("[")
            .append(print_expr(arena, elem, ops))
            .append(arena.text(" | "))
            .append(print_comp_tail(arena, tail, ops))
            .append(arena.text("]")),
        NakedExpr::ArrayElem { name, indices } => arena
            .text(name.clone())
            .append(arena.text("["))
            .append(comma_sep(arena, indices, ops))
            .append(arena.text("]")),
        NakedExpr::UnOp(op, operand) => {
            let operand_doc = if is_atomic(&operand.expr) {
                print_expr(arena, operand, ops)
            } else {
                parens(arena, print_expr(arena, operand, ops))
            };
            arena
                .text(ops.unary_display(*op))
                .append(arena.text(" "))
                .append(operand_doc)
        }
        NakedExpr::BinOp(op, lhs, rhs) => {
            let prec = ops.precedence(*op);
            print_parens_expr(arena, prec, lhs, ops)
                .append(arena.text(" "))
                .append(arena.text(ops.display(*op)))
                .append(arena.text(" "))
                .append(print_parens_expr(arena, prec, rhs, ops))
        }
        NakedExpr::Call(func, args) => print_func(arena, func, ops)
            .append(arena.text("("))
            .append(comma_sep(arena, args, ops))
            .append(arena.text(")")),
        NakedExpr::If {
            branches,
            else_branch,
        } => print_if(arena, branches, else_branch, ops),
        NakedExpr::Let { items, body } => print_let(arena, items, body, ops),
        NakedExpr::GenCall { func, tail, body } => print_func(arena, func, ops)
            .append(arena.text("("))
            .append(print_comp_tail(arena, tail, ops))
            .append(arena.text(")"))
            .append(
                arena
                    .hardline()
                    .append(parens(arena, print_expr(arena, body, ops)))
                    .nest(BODY_INDENT),
            ),
    }
}

/// Print a sub-expression at an operand position requiring precedence level
/// at most `min_prec`.
///
/// A binary operation is parenthesized when its operator binds looser than
/// the context allows. A unary operation keeps its operator and is always
/// parenthesized, which re-parses unambiguously without needing unary
/// precedence metadata. Everything else renders bare.
fn print_parens_expr<'a>(
    arena: &'a Arena<'a>,
    min_prec: u32,
    expr: &Expr,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    match &expr.expr {
        NakedExpr::BinOp(op, _, _) if ops.precedence(*op) > min_prec => {
            parens(arena, print_expr(arena, expr, ops))
        }
        NakedExpr::UnOp(..) => parens(arena, print_expr(arena, expr, ops)),
        _ => print_expr(arena, expr, ops),
    }
}

/// Atomic expressions never need parentheses as a unary operand.
fn is_atomic(expr: &NakedExpr) -> bool {
    matches!(
        expr,
        NakedExpr::AnonVar
            | NakedExpr::Var(_)
            | NakedExpr::BoolLit(_)
            | NakedExpr::IntLit(_)
            | NakedExpr::FloatLit(_)
            | NakedExpr::StringLit(_)
            | NakedExpr::SetLit(_)
    )
}

/// Print a conditional, one clause per line.
fn print_if<'a>(
    arena: &'a Arena<'a>,
    branches: &[(Expr, Expr)],
    else_branch: &Expr,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    let mut clauses = Vec::with_capacity(branches.len() + 2);
    for (i, (cond, then)) in branches.iter().enumerate() {
        let keyword = if i == 0 { "if " } else { "elseif " };
        clauses.push(
            arena
                .text(keyword)
                .append(print_expr(arena, cond, ops))
                .append(arena.text(" then "))
                .append(print_expr(arena, then, ops)),
        );
    }
    clauses.push(arena.text("else ").append(print_expr(arena, else_branch, ops)));
    clauses.push(arena.text("endif"));

    arena.intersperse(clauses, arena.hardline())
}

/// Print a `let` block: bound items one per line indented four columns, the
/// closing brace, then `in <body>` on the next line.
fn print_let<'a>(
    arena: &'a Arena<'a>,
    items: &[Item],
    body: &Expr,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    let items_doc = arena.intersperse(
        items.iter().map(|item| print_item(arena, item, ops)),
        arena.hardline(),
    );

    arena
        .text("let {")
        .append(arena.hardline().append(items_doc).nest(LET_INDENT))
        .append(arena.hardline())
        .append(arena.text("}"))
        .append(arena.hardline())
        .append(arena.text("in "))
        .append(print_expr(arena, body, ops))
}

/// Print a 2-D array literal: one `| ...` line per row, a trailing `|`
/// closing the last row, wrapped in brackets.
fn print_array_2d<'a>(
    arena: &'a Arena<'a>,
    rows: &[Vec<Expr>],
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    let row_docs: Vec<_> = rows
        .iter()
        .map(|row| arena.text("| ").append(comma_sep(arena, row, ops)))
        .collect();

    arena
        .text("[")
        .append(arena.intersperse(row_docs, arena.hardline()))
        .append(arena.hardline())
        .append(arena.text("|]"))
}

/// Print comprehension generators and the optional `where` filter.
fn print_comp_tail<'a>(
    arena: &'a Arena<'a>,
    tail: &CompTail,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    let generators = arena.intersperse(
        tail.generators
            .iter()
            .map(|g| print_generator(arena, g, ops)),
        arena.text(", "),
    );

    match &tail.filter {
        None => generators,
        Some(filter) => generators
            .append(arena.text(" where "))
            .append(print_expr(arena, filter, ops)),
    }
}

/// Print one generator: comma-joined bound names, `in`, the source.
fn print_generator<'a>(
    arena: &'a Arena<'a>,
    generator: &Generator,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    arena
        .text(generator.vars.join(", "))
        .append(arena.text(" in "))
        .append(print_expr(arena, &generator.source, ops))
}

/// Print a callee: plain identifier, or quoted operator for infix operators
/// used in prefix position.
fn print_func<'a>(arena: &'a Arena<'a>, func: &Func, ops: &OpTable) -> DocBuilder<'a, Arena<'a>> {
    match func {
        Func::Name(name) => arena.text(name.clone()),
        Func::Op(op) => arena.text(format!("'{}'", ops.display(*op))),
    }
}

/// Print a float literal, ensuring it has a decimal point.
fn print_float_literal<'a>(arena: &'a Arena<'a>, f: f64) -> DocBuilder<'a, Arena<'a>> {
    let s = f.to_string();
    if s.contains('.') || s.contains('e') || s.contains('E') {
        arena.text(s)
    } else {
        arena.text(format!("{}.0", s))
    }
}

/// Print a double-quoted string literal.
///
/// Exactly six characters are escaped; everything else passes through
/// unchanged.
fn print_string_literal<'a>(arena: &'a Arena<'a>, s: &str) -> DocBuilder<'a, Arena<'a>> {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '\u{c}' => result.push_str("\\f"),
            '\u{7}' => result.push_str("\\a"),
            c => result.push(c),
        }
    }
    result.push('"');
    arena.text(result)
}

/// Comma-joined expression list.
pub(super) fn comma_sep<'a>(
    arena: &'a Arena<'a>,
    exprs: &[Expr],
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    arena.intersperse(
        exprs.iter().map(|e| print_expr(arena, e, ops)),
        arena.text(", "),
    )
}

fn parens<'a>(arena: &'a Arena<'a>, doc: DocBuilder<'a, Arena<'a>>) -> DocBuilder<'a, Arena<'a>> {
    arena.text("(").append(doc).append(arena.text(")"))
}
