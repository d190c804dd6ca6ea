// src/ast.rs
//! Syntax tree for MiniZinc models.
//!
//! These types are plain owned data produced by a construction layer and
//! consumed by the printer. The printer only borrows them; nothing here is
//! mutated after construction.

/// A top-level item in a model.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// No-op item, prints as nothing.
    Empty,
    /// `% <text>` line comment. The text is emitted verbatim.
    Comment(String),
    /// `include "<file>";`
    Include(String),
    /// Variable or parameter declaration, optionally with a body.
    Declare {
        ty: TypeInst,
        name: String,
        body: Option<Expr>,
    },
    /// `constraint <expr>;`
    Constraint(Expr),
    /// Assignment to a previously declared name.
    Assign { name: String, body: Expr },
    /// `output <expr>;`
    Output(NakedExpr),
    /// `annotation <name>(<params>);`
    AnnotationDecl { name: String, params: Vec<Param> },
    /// `solve <annotations> <goal>;`
    Solve {
        annotations: Vec<Annotation>,
        goal: SolveGoal,
    },
    Predicate(PredicateDecl),
    Test(PredicateDecl),
    Function(FunctionDecl),
}

/// Goal of a solve item.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveGoal {
    Satisfy,
    Minimize(Expr),
    Maximize(Expr),
}

/// Predicate or test definition (the two share a shape).
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub annotations: Vec<Annotation>,
    pub body: Option<Expr>,
}

/// Function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub ty: TypeInst,
    pub name: String,
    pub params: Vec<Param>,
    pub annotations: Vec<Annotation>,
    pub body: Option<Expr>,
}

/// An expression together with its annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub expr: NakedExpr,
    pub annotations: Vec<Annotation>,
}

impl Expr {
    pub fn new(expr: NakedExpr, annotations: Vec<Annotation>) -> Self {
        Expr { expr, annotations }
    }
}

impl From<NakedExpr> for Expr {
    fn from(expr: NakedExpr) -> Self {
        Expr {
            expr,
            annotations: Vec::new(),
        }
    }
}

/// An expression without its annotation list.
#[derive(Debug, Clone, PartialEq)]
pub enum NakedExpr {
    /// The anonymous variable `_`.
    AnonVar,
    /// Reference to a declared name.
    Var(String),
    BoolLit(bool),
    IntLit(i64),
    FloatLit(f64),
    StringLit(String),
    /// `e1..e2`
    Range(Box<Expr>, Box<Expr>),
    /// `{e1, e2, ...}`
    SetLit(Vec<Expr>),
    /// `{e | generators where filter}`
    SetComp(Box<Expr>, CompTail),
    /// `[e1, e2, ...]`
    ArrayLit(Vec<Expr>),
    /// `[| row | row |]`, one inner vector per row.
    ArrayLit2d(Vec<Vec<Expr>>),
    /// `[e | generators where filter]`
    ArrayComp(Box<Expr>, CompTail),
    /// `name[i1, i2, ...]`
    ArrayElem { name: String, indices: Vec<Expr> },
    UnOp(Uop, Box<Expr>),
    BinOp(Bop, Box<Expr>, Box<Expr>),
    Call(Func, Vec<Expr>),
    /// `if c then t elseif c2 then t2 ... else e endif`.
    ///
    /// The first branch is the `if`, the rest are `elseif`. Invariant:
    /// `branches` is non-empty.
    If {
        branches: Vec<(Expr, Expr)>,
        else_branch: Box<Expr>,
    },
    /// `let { items } in body`
    Let { items: Vec<Item>, body: Box<Expr> },
    /// Aggregate call over a comprehension tail, e.g. `sum(i in 1..n) (x[i])`.
    GenCall {
        func: Func,
        tail: CompTail,
        body: Box<Expr>,
    },
}

/// A type together with its instantiation marker.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInst {
    pub inst: Inst,
    pub ty: Type,
}

/// Whether a value is a decision variable or a fixed parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    Var,
    Par,
}

/// A MiniZinc type.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Bool,
    Int,
    Float,
    Str,
    /// `set of T`
    Set(Box<Type>),
    /// `array[dims] of elem`
    Array {
        dims: Vec<Type>,
        elem: Box<TypeInst>,
    },
    /// `list of T`
    List(Box<TypeInst>),
    /// `opt T`
    Opt(Box<Type>),
    /// The annotation type `ann`.
    Ann,
    /// Numeric or enum interval `e1..e2`.
    Interval(Box<Expr>, Box<Expr>),
    /// Explicit element set `{e1, e2, ...}`.
    Elems(Vec<Expr>),
    /// A named (user-declared) type.
    Named(String),
    /// Type variable `$name`.
    TypeVar(String),
}

/// Parameter of a predicate, test, function or annotation signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub inst: Inst,
    pub ty: Type,
    pub name: String,
}

/// `::name(args)` attached to expressions, solve items and definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub name: String,
    pub args: Vec<Expr>,
}

/// One comprehension generator: `v1, v2 in source`.
#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    pub vars: Vec<String>,
    pub source: Expr,
}

/// Generators plus optional `where` filter, shared by comprehensions and
/// generator calls.
#[derive(Debug, Clone, PartialEq)]
pub struct CompTail {
    pub generators: Vec<Generator>,
    pub filter: Option<Box<Expr>>,
}

/// Callee of a call or generator call: a plain identifier, or an infix
/// operator used in prefix position (rendered in quoted form).
#[derive(Debug, Clone, PartialEq)]
pub enum Func {
    Name(String),
    Op(Bop),
}

/// Binary operator symbols. Display text and precedence come from an
/// [`OpTable`](crate::ops::OpTable), not from the symbol itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bop {
    Equiv,
    Impl,
    RImpl,
    Or,
    Xor,
    And,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    In,
    Subset,
    Superset,
    Union,
    Diff,
    SymDiff,
    Add,
    Sub,
    Mul,
    Div,
    FDiv,
    Mod,
    Intersect,
    Concat,
}

/// Unary operator symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uop {
    Not,
    Neg,
}
