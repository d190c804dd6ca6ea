// src/printer/mod.rs
//! AST to pretty::Doc conversion for MiniZinc output.

mod expr;
mod types;

use pretty::{Arena, DocAllocator, DocBuilder};
use thiserror::Error;

use crate::ast::*;
use crate::ops::OpTable;

pub use expr::{print_expr, print_naked_expr};

use types::{print_annotations, print_params, print_type_inst};

/// Indent for item and generator-call bodies (2 spaces).
pub(crate) const BODY_INDENT: isize = 2;

/// Indent for items bound inside a `let` block (4 spaces).
pub(crate) const LET_INDENT: isize = 4;

/// Error type for printing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    /// A model must contain at least one item.
    #[error("model contains no items")]
    EmptyModel,
}

/// Pretty-print a whole model to a Doc, one item per line.
///
/// Items are stacked directly with no blank lines in between. An empty item
/// sequence is a precondition violation and fails with
/// [`PrintError::EmptyModel`].
pub fn print_model<'a>(
    arena: &'a Arena<'a>,
    items: &[Item],
    ops: &OpTable,
) -> Result<DocBuilder<'a, Arena<'a>>, PrintError> {
    if items.is_empty() {
        return Err(PrintError::EmptyModel);
    }

    let docs: Vec<_> = items
        .iter()
        .map(|item| print_item(arena, item, ops))
        .collect();

    Ok(arena.intersperse(docs, arena.hardline()))
}

/// Print a top-level item.
pub fn print_item<'a>(
    arena: &'a Arena<'a>,
    item: &Item,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    match item {
        Item::Empty => arena.nil(),
        Item::Comment(text) => arena.text("% ").append(arena.text(text.clone())),
        Item::Include(file) => arena.text(format!("include \"{}\";", file)),
        Item::Declare { ty, name, body } => print_type_inst(arena, ty, ops)
            .append(arena.text(": "))
            .append(arena.text(name.clone()))
            .append(print_body(arena, body.as_ref(), ops))
            .append(arena.text(";")),
        Item::Constraint(expr) => arena
            .text("constraint ")
            .append(print_expr(arena, expr, ops))
            .append(arena.text(";")),
        Item::Assign { name, body } => arena
            .text(name.clone())
            .append(print_body(arena, Some(body), ops))
            .append(arena.text(";")),
        Item::Output(expr) => arena
            .text("output ")
            .append(print_naked_expr(arena, expr, ops))
            .append(arena.text(";")),
        Item::AnnotationDecl { name, params } => arena
            .text("annotation ")
            .append(arena.text(name.clone()))
            .append(print_params(arena, params, ops))
            .append(arena.text(";")),
        Item::Solve { annotations, goal } => arena
            .text("solve")
            .append(print_annotation_segment(arena, annotations, ops))
            .append(arena.text(" "))
            .append(print_solve_goal(arena, goal, ops))
            .append(arena.text(";")),
        Item::Predicate(decl) => print_pred_like(arena, "predicate", decl, ops),
        Item::Test(decl) => print_pred_like(arena, "test", decl, ops),
        Item::Function(decl) => arena
            .text("function ")
            .append(print_type_inst(arena, &decl.ty, ops))
            .append(arena.text(": "))
            .append(arena.text(decl.name.clone()))
            .append(print_params(arena, &decl.params, ops))
            .append(print_annotation_segment(arena, &decl.annotations, ops))
            .append(print_body(arena, decl.body.as_ref(), ops))
            .append(arena.text(";")),
    }
}

/// Print the goal of a solve item.
fn print_solve_goal<'a>(
    arena: &'a Arena<'a>,
    goal: &SolveGoal,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    match goal {
        SolveGoal::Satisfy => arena.text("satisfy"),
        SolveGoal::Minimize(expr) => arena
            .text("minimize ")
            .append(print_expr(arena, expr, ops)),
        SolveGoal::Maximize(expr) => arena
            .text("maximize ")
            .append(print_expr(arena, expr, ops)),
    }
}

/// Print a predicate or test definition; the two differ only in keyword.
fn print_pred_like<'a>(
    arena: &'a Arena<'a>,
    keyword: &'static str,
    decl: &PredicateDecl,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    arena
        .text(keyword)
        .append(arena.text(" "))
        .append(arena.text(decl.name.clone()))
        .append(print_params(arena, &decl.params, ops))
        .append(print_annotation_segment(arena, &decl.annotations, ops))
        .append(print_body(arena, decl.body.as_ref(), ops))
        .append(arena.text(";"))
}

/// Print an optional item body: ` =` followed by the expression on its own
/// line, indented two columns. Absent bodies print as nothing.
fn print_body<'a>(
    arena: &'a Arena<'a>,
    body: Option<&Expr>,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    match body {
        None => arena.nil(),
        Some(expr) => arena.text(" =").append(
            arena
                .hardline()
                .append(print_expr(arena, expr, ops))
                .nest(BODY_INDENT),
        ),
    }
}

/// Space-prefixed annotation list, or nothing when there are none.
fn print_annotation_segment<'a>(
    arena: &'a Arena<'a>,
    annotations: &[Annotation],
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    if annotations.is_empty() {
        arena.nil()
    } else {
        arena
            .text(" ")
            .append(print_annotations(arena, annotations, ops))
    }
}
