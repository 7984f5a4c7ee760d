//! # querytext-sql
//!
//! A compact SQL AST whose nodes render themselves through
//! [`querytext_renderer::TrackedBuffer`], plus loading of AST documents
//! from JSON or YAML files.
//!
//! ## Usage
//!
//! ```rust
//! use querytext_sql::ast::{ComparisonOp, Expr, Select, SelectExpr, Statement, TableName};
//!
//! let stmt = Statement::Select(Select {
//!     distinct: false,
//!     columns: vec![SelectExpr::from(Expr::column("id"))],
//!     from: vec![TableName::new("users").into()],
//!     where_clause: Some(Expr::compare(
//!         Expr::column("name"),
//!         ComparisonOp::Eq,
//!         Expr::string("O'Brien"),
//!     )),
//!     group_by: vec![],
//!     having: None,
//!     order_by: vec![],
//!     limit: None,
//! });
//! assert_eq!(stmt.to_string(), "SELECT id FROM users WHERE name = 'O''Brien'");
//! ```

pub mod ast;
pub mod error;
pub mod format;
pub mod load;
pub mod validate;

pub use ast::Statement;
pub use error::{AstError, AstViolation};
pub use load::{load_statement, parse_statement, DocumentFormat};
