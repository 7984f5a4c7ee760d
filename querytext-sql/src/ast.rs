//! SQL AST types.
//!
//! All types are serializable/deserializable via serde so ASTs can be
//! exchanged as JSON or YAML documents. Rendering lives in [`crate::format`].

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// An identifier: column, table, alias or function name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident(pub String);

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// `[qualifier.]name` for a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<Ident>,
    pub name: Ident,
}

impl ColName {
    pub fn new(name: impl Into<Ident>) -> Self {
        Self { qualifier: None, name: name.into() }
    }

    pub fn qualified(qualifier: impl Into<Ident>, name: impl Into<Ident>) -> Self {
        Self { qualifier: Some(qualifier.into()), name: name.into() }
    }
}

/// `[qualifier.]name` for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<Ident>,
    pub name: Ident,
}

impl TableName {
    pub fn new(name: impl Into<Ident>) -> Self {
        Self { qualifier: None, name: name.into() }
    }
}

/// A table in a `FROM` list, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableExpr {
    pub table: TableName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<Ident>,
}

impl From<TableName> for TableExpr {
    fn from(table: TableName) -> Self {
        Self { table, alias: None }
    }
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A literal value. Rendered as a tracked literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Str(String),
    Int(i64),
    Float(f64),
}

/// A named bind variable, rendered as `:name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindVar(pub String);

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    GtEq,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "not_like")]
    NotLike,
}

impl ComparisonOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::NotEq => "!=",
            ComparisonOp::Lt => "<",
            ComparisonOp::LtEq => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::GtEq => ">=",
            ComparisonOp::Like => "LIKE",
            ComparisonOp::NotLike => "NOT LIKE",
        }
    }
}

/// A function call such as `count(DISTINCT id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncExpr {
    pub name: Ident,
    #[serde(default)]
    pub distinct: bool,
    #[serde(default)]
    pub args: Vec<SelectExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Column(ColName),
    Literal(Literal),
    Bind(BindVar),
    Null,
    Comparison {
        left: Box<Expr>,
        op: ComparisonOp,
        right: Box<Expr>,
    },
    And {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Or {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Not(Box<Expr>),
    Paren(Box<Expr>),
    Func(FuncExpr),
    In {
        expr: Box<Expr>,
        #[serde(default)]
        negated: bool,
        list: Vec<Expr>,
    },
    IsNull {
        expr: Box<Expr>,
        #[serde(default)]
        negated: bool,
    },
}

impl Expr {
    pub fn column(name: impl Into<Ident>) -> Self {
        Expr::Column(ColName::new(name))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::Str(value.into()))
    }

    pub fn int(value: i64) -> Self {
        Expr::Literal(Literal::Int(value))
    }

    pub fn bind(name: impl Into<String>) -> Self {
        Expr::Bind(BindVar(name.into()))
    }

    pub fn compare(left: Expr, op: ComparisonOp, right: Expr) -> Self {
        Expr::Comparison { left: Box::new(left), op, right: Box::new(right) }
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And { left: Box::new(left), right: Box::new(right) }
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Or { left: Box::new(left), right: Box::new(right) }
    }
}

// ---------------------------------------------------------------------------
// Clauses
// ---------------------------------------------------------------------------

/// One entry of a select list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectExpr {
    /// `*`
    Star,
    /// `table.*`
    QualifiedStar(Ident),
    Expr {
        expr: Expr,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alias: Option<Ident>,
    },
}

impl From<Expr> for SelectExpr {
    fn from(expr: Expr) -> Self {
        SelectExpr::Expr { expr, alias: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub expr: Expr,
    #[serde(default)]
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub rowcount: Expr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Expr>,
}

/// `column = value` in an `UPDATE ... SET` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub column: ColName,
    pub value: Expr,
}

/// One parenthesized tuple of an `INSERT ... VALUES` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row(pub Vec<Expr>);

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Select {
    #[serde(default)]
    pub distinct: bool,
    pub columns: Vec<SelectExpr>,
    #[serde(default)]
    pub from: Vec<TableExpr>,
    #[serde(default, rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<Expr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub having: Option<Expr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Limit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    pub table: TableName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Ident>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub table: TableName,
    pub set: Vec<Assignment>,
    #[serde(default, rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub table: TableName,
    #[serde(default, rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<Expr>,
}

/// Root of an AST document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}
