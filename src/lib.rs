// src/lib.rs
//! Pretty-printer for MiniZinc models.
//!
//! Consumers build a model as a tree of [`ast`] nodes and render it to
//! concrete MiniZinc syntax. There is no parser and no validation here;
//! the crate is a pure tree-to-text printer.

pub mod ast;
pub mod ops;
pub mod printer;

mod render;

pub use printer::PrintError;
pub use render::{render_expr, render_item, render_model, render_naked_expr};
