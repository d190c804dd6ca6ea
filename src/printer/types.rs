// src/printer/types.rs
//! Type, parameter and annotation printing.

use pretty::{Arena, DocAllocator, DocBuilder};

use crate::ast::*;
use crate::ops::OpTable;

use super::expr::{comma_sep, print_expr};

/// Print a type in its keyword form.
pub(super) fn print_type<'a>(
    arena: &'a Arena<'a>,
    ty: &Type,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    match ty {
        Type::Bool => arena.text("bool"),
        Type::Int => arena.text("int"),
        Type::Float => arena.text("float"),
        Type::Str => arena.text("string"),
        Type::Set(inner) => arena.text("set of ").append(print_type(arena, inner, ops)),
        Type::Array { dims, elem } => arena
            .text("array[")
            .append(arena.intersperse(
                dims.iter().map(|dim| print_type(arena, dim, ops)),
                arena.text(", "),
            ))
            .append(arena.text("] of "))
            .append(print_type_inst(arena, elem, ops)),
        Type::List(elem) => arena
            .text("list of ")
            .append(print_type_inst(arena, elem, ops)),
        Type::Opt(inner) => arena.text("opt ").append(print_type(arena, inner, ops)),
        Type::Ann => arena.text("ann"),
        Type::Interval(lo, hi) => print_expr(arena, lo, ops)
            .append(arena.text(".."))
            .append(print_expr(arena, hi, ops)),
        Type::Elems(elems) => arena
            .text("{")
            .append(comma_sep(arena, elems, ops))
            .append(arena.text("}")),
        Type::Named(name) => arena.text(name.clone()),
        Type::TypeVar(name) => arena.text(format!("${}", name)),
    }
}

/// Print a type-inst: the instantiation keyword followed by the type.
pub(super) fn print_type_inst<'a>(
    arena: &'a Arena<'a>,
    ty: &TypeInst,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    print_inst_type(arena, ty.inst, &ty.ty, ops)
}

fn print_inst_type<'a>(
    arena: &'a Arena<'a>,
    inst: Inst,
    ty: &Type,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    // Arrays, strings and `ann` are inst-less by convention.
    match ty {
        Type::Array { .. } | Type::Str | Type::Ann => print_type(arena, ty, ops),
        _ => {
            let keyword = match inst {
                Inst::Var => "var ",
                Inst::Par => "par ",
            };
            arena.text(keyword).append(print_type(arena, ty, ops))
        }
    }
}

/// Print a parenthesized, comma-joined parameter list.
pub(super) fn print_params<'a>(
    arena: &'a Arena<'a>,
    params: &[Param],
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    arena
        .text("(")
        .append(arena.intersperse(
            params.iter().map(|p| print_param(arena, p, ops)),
            arena.text(", "),
        ))
        .append(arena.text(")"))
}

/// Print one parameter: `<type-inst>: <name>`.
fn print_param<'a>(
    arena: &'a Arena<'a>,
    param: &Param,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    print_inst_type(arena, param.inst, &param.ty, ops)
        .append(arena.text(": "))
        .append(arena.text(param.name.clone()))
}

/// Print a space-joined annotation list.
pub(super) fn print_annotations<'a>(
    arena: &'a Arena<'a>,
    annotations: &[Annotation],
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    arena.intersperse(
        annotations.iter().map(|a| print_annotation(arena, a, ops)),
        arena.text(" "),
    )
}

/// Print one annotation: `::name` or `::name(args)`.
fn print_annotation<'a>(
    arena: &'a Arena<'a>,
    annotation: &Annotation,
    ops: &OpTable,
) -> DocBuilder<'a, Arena<'a>> {
    let doc = arena.text("::").append(arena.text(annotation.name.clone()));
    if annotation.args.is_empty() {
        doc
    } else {
        doc.append(arena.text("("))
            .append(comma_sep(arena, &annotation.args, ops))
            .append(arena.text(")"))
    }
}
