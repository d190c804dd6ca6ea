// src/render.rs
//! String-level rendering entry points.
//!
//! Each function sets up a Doc arena, runs the printer and renders the
//! result. Models get a trailing newline; single nodes do not.

use pretty::{Arena, DocBuilder};

use crate::ast::{Expr, Item, NakedExpr};
use crate::ops::OpTable;
use crate::printer::{self, PrintError};

/// Width passed to the renderer. The printer emits hard line breaks only,
/// so this never influences layout.
const RENDER_WIDTH: usize = 80;

/// Render a full model, one item per line, with a trailing newline.
///
/// Fails with [`PrintError::EmptyModel`] when `items` is empty.
pub fn render_model(items: &[Item], ops: &OpTable) -> Result<String, PrintError> {
    let arena = Arena::new();
    let doc = printer::print_model(&arena, items, ops)?;
    let mut output = render_doc(doc);
    output.push('\n');
    Ok(output)
}

/// Render one top-level item.
pub fn render_item(item: &Item, ops: &OpTable) -> String {
    let arena = Arena::new();
    render_doc(printer::print_item(&arena, item, ops))
}

/// Render an annotated expression.
pub fn render_expr(expr: &Expr, ops: &OpTable) -> String {
    let arena = Arena::new();
    render_doc(printer::print_expr(&arena, expr, ops))
}

/// Render an expression without annotations.
pub fn render_naked_expr(expr: &NakedExpr, ops: &OpTable) -> String {
    let arena = Arena::new();
    render_doc(printer::print_naked_expr(&arena, expr, ops))
}

fn render_doc<'a>(doc: DocBuilder<'a, Arena<'a>>) -> String {
    let mut output = String::new();
    doc.render_fmt(RENDER_WIDTH, &mut output)
        .expect("render to string cannot fail");

    // Remove trailing whitespace left on lines by nesting with hardlines.
    output
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
