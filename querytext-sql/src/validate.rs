//! Structural checks for ASTs that deserialize fine but would render as
//! invalid SQL: empty lists where SQL requires at least one item, bind
//! names that are not plain words, non-finite floats.

use crate::ast::{
    BindVar, Delete, Expr, FuncExpr, Insert, Literal, Select, SelectExpr, Statement, Update,
};
use crate::error::AstViolation;
use crate::format::is_word;

type Checked = Result<(), AstViolation>;

impl Statement {
    /// Reject statements whose rendered text would not be valid SQL.
    ///
    /// [`crate::load_statement`] runs this on every document. ASTs built in
    /// code should call it before rendering.
    pub fn validate(&self) -> Checked {
        match self {
            Statement::Select(stmt) => check_select(stmt),
            Statement::Insert(stmt) => check_insert(stmt),
            Statement::Update(stmt) => check_update(stmt),
            Statement::Delete(stmt) => check_delete(stmt),
        }
    }
}

impl Expr {
    /// Same checks as [`Statement::validate`], for a single expression tree.
    pub fn validate(&self) -> Checked {
        match self {
            Expr::Column(_) | Expr::Null => Ok(()),
            Expr::Literal(lit) => check_literal(lit),
            Expr::Bind(var) => check_bind(var),
            Expr::Comparison { left, right, .. }
            | Expr::And { left, right }
            | Expr::Or { left, right } => {
                left.validate()?;
                right.validate()
            }
            Expr::Not(inner) | Expr::Paren(inner) => inner.validate(),
            Expr::Func(func) => check_func(func),
            Expr::In { expr, list, .. } => {
                expr.validate()?;
                non_empty(list, "IN list")?;
                check_all(list)
            }
            Expr::IsNull { expr, .. } => expr.validate(),
        }
    }
}

fn non_empty<T>(items: &[T], what: &'static str) -> Checked {
    if items.is_empty() {
        return Err(AstViolation::EmptyList(what));
    }
    Ok(())
}

fn check_all(exprs: &[Expr]) -> Checked {
    exprs.iter().try_for_each(Expr::validate)
}

fn check_opt(expr: &Option<Expr>) -> Checked {
    expr.as_ref().map_or(Ok(()), Expr::validate)
}

fn check_literal(lit: &Literal) -> Checked {
    match lit {
        Literal::Float(x) if !x.is_finite() => Err(AstViolation::NonFiniteFloat(*x)),
        _ => Ok(()),
    }
}

fn check_bind(var: &BindVar) -> Checked {
    if is_word(&var.0) {
        Ok(())
    } else {
        Err(AstViolation::BindName(var.0.clone()))
    }
}

fn check_select_exprs(items: &[SelectExpr]) -> Checked {
    items.iter().try_for_each(|item| match item {
        SelectExpr::Star | SelectExpr::QualifiedStar(_) => Ok(()),
        SelectExpr::Expr { expr, .. } => expr.validate(),
    })
}

fn check_func(func: &FuncExpr) -> Checked {
    check_select_exprs(&func.args)
}

fn check_select(stmt: &Select) -> Checked {
    non_empty(&stmt.columns, "SELECT column list")?;
    check_select_exprs(&stmt.columns)?;
    check_opt(&stmt.where_clause)?;
    check_all(&stmt.group_by)?;
    check_opt(&stmt.having)?;
    stmt.order_by.iter().try_for_each(|order| order.expr.validate())?;
    if let Some(limit) = &stmt.limit {
        limit.rowcount.validate()?;
        check_opt(&limit.offset)?;
    }
    Ok(())
}

fn check_insert(stmt: &Insert) -> Checked {
    non_empty(&stmt.rows, "INSERT VALUES list")?;
    for row in &stmt.rows {
        non_empty(&row.0, "VALUES row")?;
        check_all(&row.0)?;
    }
    Ok(())
}

fn check_update(stmt: &Update) -> Checked {
    non_empty(&stmt.set, "UPDATE SET list")?;
    stmt.set.iter().try_for_each(|assignment| assignment.value.validate())?;
    check_opt(&stmt.where_clause)
}

fn check_delete(stmt: &Delete) -> Checked {
    check_opt(&stmt.where_clause)
}
