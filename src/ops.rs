// src/ops.rs
//! Operator metadata consulted during printing.
//!
//! Display text and precedence are deliberately kept out of the syntax tree:
//! the printer receives a read-only table, so tests can run against a
//! controlled operator set and the standard table stays in one place.

use rustc_hash::FxHashMap;

use crate::ast::{Bop, Uop};

/// Display text plus precedence level for one binary operator.
///
/// Precedence follows the MiniZinc convention: larger numbers bind looser.
#[derive(Debug, Clone, Copy)]
pub struct OpInfo {
    pub display: &'static str,
    pub prec: u32,
}

/// Read-only operator table.
///
/// Build one with [`OpTable::minizinc`] (or [`Default`]) and override single
/// entries with [`set_binary`](OpTable::set_binary) /
/// [`set_unary`](OpTable::set_unary) where a test needs a controlled set.
/// Tables built this way are total over [`Bop`] and [`Uop`]; the printer
/// treats a missing entry as a violated invariant.
#[derive(Debug, Clone)]
pub struct OpTable {
    binary: FxHashMap<Bop, OpInfo>,
    unary: FxHashMap<Uop, &'static str>,
}

impl OpTable {
    /// The standard MiniZinc operator table.
    pub fn minizinc() -> Self {
        let entries: [(Bop, &'static str, u32); 26] = [
            (Bop::Equiv, "<->", 1200),
            (Bop::Impl, "->", 1100),
            (Bop::RImpl, "<-", 1100),
            (Bop::Or, "\\/", 1000),
            (Bop::Xor, "xor", 1000),
            (Bop::And, "/\\", 900),
            (Bop::Lt, "<", 800),
            (Bop::Gt, ">", 800),
            (Bop::Le, "<=", 800),
            (Bop::Ge, ">=", 800),
            (Bop::Eq, "=", 800),
            (Bop::Ne, "!=", 800),
            (Bop::In, "in", 700),
            (Bop::Subset, "subset", 700),
            (Bop::Superset, "superset", 700),
            (Bop::Union, "union", 600),
            (Bop::Diff, "diff", 600),
            (Bop::SymDiff, "symdiff", 600),
            (Bop::Add, "+", 400),
            (Bop::Sub, "-", 400),
            (Bop::Mul, "*", 300),
            (Bop::Div, "div", 300),
            (Bop::FDiv, "/", 300),
            (Bop::Mod, "mod", 300),
            (Bop::Intersect, "intersect", 300),
            (Bop::Concat, "++", 200),
        ];

        let mut binary = FxHashMap::default();
        for (op, display, prec) in entries {
            binary.insert(op, OpInfo { display, prec });
        }

        let mut unary = FxHashMap::default();
        unary.insert(Uop::Not, "not");
        unary.insert(Uop::Neg, "-");

        OpTable { binary, unary }
    }

    /// Override one binary operator entry.
    pub fn set_binary(&mut self, op: Bop, display: &'static str, prec: u32) {
        self.binary.insert(op, OpInfo { display, prec });
    }

    /// Override one unary operator entry.
    pub fn set_unary(&mut self, op: Uop, display: &'static str) {
        self.unary.insert(op, display);
    }

    /// Precedence level of a binary operator.
    pub fn precedence(&self, op: Bop) -> u32 {
        self.info(op).prec
    }

    /// Display text of a binary operator.
    pub fn display(&self, op: Bop) -> &'static str {
        self.info(op).display
    }

    /// Display text of a unary operator.
    pub fn unary_display(&self, op: Uop) -> &'static str {
        self.unary
            .get(&op)
            .copied()
            .expect("operator table covers every unary operator")
    }

    fn info(&self, op: Bop) -> OpInfo {
        self.binary
            .get(&op)
            .copied()
            .expect("operator table covers every binary operator")
    }
}

impl Default for OpTable {
    fn default() -> Self {
        OpTable::minizinc()
    }
}
