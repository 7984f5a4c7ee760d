//! `Node` implementations: every AST type writes its own SQL.
//!
//! Keywords are uppercase. Identifiers are backtick-quoted only when needed.
//! Literals and bind variables go through `%a` so their positions can be
//! tracked. Operands that bind looser than their operator are wrapped in
//! parentheses, so the text parses back to the same tree.

use std::fmt;

use querytext_renderer::{to_text, write_list, Arg, Node, TrackedBuffer};

use crate::ast::{
    Assignment, BindVar, ColName, Delete, Direction, Expr, FuncExpr, Ident, Insert, Limit,
    Literal, OrderBy, Row, Select, SelectExpr, Statement, TableExpr, TableName, Update,
};

/// Words that must be quoted when used as identifiers.
const RESERVED: &[&str] = &[
    "all", "and", "as", "asc", "between", "by", "case", "delete", "desc", "distinct", "else",
    "end", "exists", "from", "group", "having", "in", "insert", "into", "is", "join", "like",
    "limit", "not", "null", "offset", "on", "or", "order", "select", "set", "table", "then",
    "union", "update", "values", "when", "where",
];

/// ASCII letter or `_`, then letters, digits or `_`.
pub(crate) fn is_word(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_plain_ident(name: &str) -> bool {
    is_word(name) && !RESERVED.contains(&name.to_ascii_lowercase().as_str())
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

impl Node for Ident {
    fn format(&self, buf: &mut TrackedBuffer) {
        if is_plain_ident(&self.0) {
            buf.interpret("%s", &[Arg::from(&self.0)]);
            return;
        }
        let escaped = self.0.replace('`', "``");
        buf.interpret("%c%s%c", &[Arg::Byte(b'`'), Arg::from(&escaped), Arg::Byte(b'`')]);
    }
}

impl Node for ColName {
    fn format(&self, buf: &mut TrackedBuffer) {
        if let Some(qualifier) = &self.qualifier {
            buf.interpret("%v.", &[Arg::node(qualifier)]);
        }
        buf.interpret("%v", &[Arg::node(&self.name)]);
    }
}

impl Node for TableName {
    fn format(&self, buf: &mut TrackedBuffer) {
        if let Some(qualifier) = &self.qualifier {
            buf.interpret("%v.", &[Arg::node(qualifier)]);
        }
        buf.interpret("%v", &[Arg::node(&self.name)]);
    }
}

impl Node for TableExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.interpret("%v", &[Arg::node(&self.table)]);
        if let Some(alias) = &self.alias {
            buf.interpret(" AS %v", &[Arg::node(alias)]);
        }
    }
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

impl Node for Literal {
    fn format(&self, buf: &mut TrackedBuffer) {
        let text = match self {
            Literal::Str(s) => format!("'{}'", s.replace('\'', "''")),
            Literal::Int(n) => n.to_string(),
            Literal::Float(x) => format!("{x:?}"),
        };
        buf.interpret("%a", &[Arg::from(&text)]);
    }
}

impl Node for BindVar {
    fn format(&self, buf: &mut TrackedBuffer) {
        let text = format!(":{}", self.0);
        buf.interpret("%a", &[Arg::from(&text)]);
    }
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

impl Node for FuncExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.interpret("%v(", &[Arg::node(&self.name)]);
        if self.distinct {
            buf.interpret("DISTINCT ", &[]);
        }
        write_list(buf, &self.args);
        buf.interpret("%c", &[Arg::Byte(b')')]);
    }
}

/// Binding strength of an expression, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Or,
    And,
    Not,
    Predicate,
    Atom,
}

impl Expr {
    fn precedence(&self) -> Precedence {
        match self {
            Expr::Or { .. } => Precedence::Or,
            Expr::And { .. } => Precedence::And,
            Expr::Not(_) => Precedence::Not,
            Expr::Comparison { .. } | Expr::In { .. } | Expr::IsNull { .. } => Precedence::Predicate,
            Expr::Column(_)
            | Expr::Literal(_)
            | Expr::Bind(_)
            | Expr::Null
            | Expr::Paren(_)
            | Expr::Func(_) => Precedence::Atom,
        }
    }
}

/// Writes `expr`, parenthesized when it binds looser than `min`.
fn write_operand(buf: &mut TrackedBuffer, expr: &Expr, min: Precedence) {
    let template = if expr.precedence() < min { "(%v)" } else { "%v" };
    buf.interpret(template, &[Arg::node(expr)]);
}

impl Node for Expr {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            Expr::Column(col) => buf.interpret("%v", &[Arg::node(col)]),
            Expr::Literal(lit) => buf.interpret("%v", &[Arg::node(lit)]),
            Expr::Bind(var) => buf.interpret("%v", &[Arg::node(var)]),
            Expr::Null => buf.interpret("NULL", &[]),
            Expr::Comparison { left, op, right } => {
                write_operand(buf, left, Precedence::Atom);
                buf.interpret(" %s ", &[Arg::Str(op.as_str())]);
                write_operand(buf, right, Precedence::Atom);
            }
            Expr::And { left, right } => {
                write_operand(buf, left, Precedence::And);
                buf.interpret(" AND ", &[]);
                write_operand(buf, right, Precedence::And);
            }
            Expr::Or { left, right } => {
                write_operand(buf, left, Precedence::Or);
                buf.interpret(" OR ", &[]);
                write_operand(buf, right, Precedence::Or);
            }
            Expr::Not(inner) => {
                buf.interpret("NOT ", &[]);
                write_operand(buf, inner, Precedence::Not);
            }
            Expr::Paren(inner) => buf.interpret("(%v)", &[Arg::node(inner)]),
            Expr::Func(func) => buf.interpret("%v", &[Arg::node(func)]),
            Expr::In { expr, negated, list } => {
                let keyword = if *negated { " NOT IN (" } else { " IN (" };
                write_operand(buf, expr, Precedence::Atom);
                buf.interpret("%s", &[Arg::Str(keyword)]);
                write_list(buf, list);
                buf.interpret(")", &[]);
            }
            Expr::IsNull { expr, negated } => {
                let keyword = if *negated { " IS NOT NULL" } else { " IS NULL" };
                write_operand(buf, expr, Precedence::Atom);
                buf.interpret("%s", &[Arg::Str(keyword)]);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_text(self))
    }
}

// ---------------------------------------------------------------------------
// Clauses
// ---------------------------------------------------------------------------

impl Node for SelectExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            SelectExpr::Star => buf.interpret("%c", &[Arg::Char('*')]),
            SelectExpr::QualifiedStar(table) => buf.interpret("%v.*", &[Arg::node(table)]),
            SelectExpr::Expr { expr, alias } => {
                buf.interpret("%v", &[Arg::node(expr)]);
                if let Some(alias) = alias {
                    buf.interpret(" AS %v", &[Arg::node(alias)]);
                }
            }
        }
    }
}

impl Node for OrderBy {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.interpret("%v", &[Arg::node(&self.expr)]);
        if self.direction == Direction::Desc {
            buf.interpret(" DESC", &[]);
        }
    }
}

impl Node for Limit {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.interpret("LIMIT %v", &[Arg::node(&self.rowcount)]);
        if let Some(offset) = &self.offset {
            buf.interpret(" OFFSET %v", &[Arg::node(offset)]);
        }
    }
}

impl Node for Assignment {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.interpret("%v = %v", &[Arg::node(&self.column), Arg::node(&self.value)]);
    }
}

impl Node for Row {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.interpret("(", &[]);
        write_list(buf, &self.0);
        buf.interpret(")", &[]);
    }
}

fn write_where(buf: &mut TrackedBuffer, where_clause: &Option<Expr>) {
    if let Some(expr) = where_clause {
        buf.interpret(" WHERE %v", &[Arg::node(expr)]);
    }
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

impl Node for Select {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.interpret("SELECT ", &[]);
        if self.distinct {
            buf.interpret("DISTINCT ", &[]);
        }
        write_list(buf, &self.columns);
        if !self.from.is_empty() {
            buf.interpret(" FROM ", &[]);
            write_list(buf, &self.from);
        }
        write_where(buf, &self.where_clause);
        if !self.group_by.is_empty() {
            buf.interpret(" GROUP BY ", &[]);
            write_list(buf, &self.group_by);
        }
        if let Some(having) = &self.having {
            buf.interpret(" HAVING %v", &[Arg::node(having)]);
        }
        if !self.order_by.is_empty() {
            buf.interpret(" ORDER BY ", &[]);
            write_list(buf, &self.order_by);
        }
        if let Some(limit) = &self.limit {
            buf.interpret(" %v", &[Arg::node(limit)]);
        }
    }
}

impl Node for Insert {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.interpret("INSERT INTO %v", &[Arg::node(&self.table)]);
        if !self.columns.is_empty() {
            buf.interpret(" (", &[]);
            write_list(buf, &self.columns);
            buf.interpret(")", &[]);
        }
        buf.interpret(" VALUES ", &[]);
        write_list(buf, &self.rows);
    }
}

impl Node for Update {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.interpret("UPDATE %v SET ", &[Arg::node(&self.table)]);
        write_list(buf, &self.set);
        write_where(buf, &self.where_clause);
    }
}

impl Node for Delete {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.interpret("DELETE FROM %v", &[Arg::node(&self.table)]);
        write_where(buf, &self.where_clause);
    }
}

impl Node for Statement {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            Statement::Select(stmt) => buf.interpret("%v", &[Arg::node(stmt)]),
            Statement::Insert(stmt) => buf.interpret("%v", &[Arg::node(stmt)]),
            Statement::Update(stmt) => buf.interpret("%v", &[Arg::node(stmt)]),
            Statement::Delete(stmt) => buf.interpret("%v", &[Arg::node(stmt)]),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_text(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers_are_left_alone() {
        for name in ["id", "user_id", "_tmp", "Col2"] {
            assert!(is_plain_ident(name), "{name}");
        }
    }

    #[test]
    fn unusual_identifiers_need_quoting() {
        for name in ["", "2fast", "first name", "select", "ORDER", "a-b", "naïve"] {
            assert!(!is_plain_ident(name), "{name}");
        }
    }

    #[test]
    fn backticks_inside_identifiers_are_doubled() {
        assert_eq!(to_text(&Ident::from("we`ird")), "`we``ird`");
    }

    #[test]
    fn string_literal_quotes_are_doubled() {
        assert_eq!(to_text(&Literal::Str("O'Brien".into())), "'O''Brien'");
    }

    #[test]
    fn float_literal_keeps_fraction() {
        assert_eq!(to_text(&Literal::Float(3.0)), "3.0");
        assert_eq!(to_text(&Literal::Float(0.25)), "0.25");
    }
}
