//! SQL statements rendered through the directive interpreter.

use querytext_renderer::{to_text, TrackedBuffer};
use querytext_sql::ast::{
    Assignment, ColName, ComparisonOp, Delete, Direction, Expr, FuncExpr, Ident, Insert, Limit,
    Literal, OrderBy, Row, Select, SelectExpr, Statement, TableExpr, TableName, Update,
};
use rstest::rstest;

fn select(columns: Vec<SelectExpr>, table: &str) -> Select {
    Select {
        distinct: false,
        columns,
        from: vec![TableName::new(table).into()],
        where_clause: None,
        group_by: vec![],
        having: None,
        order_by: vec![],
        limit: None,
    }
}

// ---------------------------------------------------------------------------
// 1. SELECT
// ---------------------------------------------------------------------------

#[test]
fn simple_select() {
    let stmt = Statement::Select(select(vec![Expr::column("id").into()], "users"));
    assert_eq!(stmt.to_string(), "SELECT id FROM users");
}

#[test]
fn select_with_every_clause() {
    let stmt = Statement::Select(Select {
        distinct: true,
        columns: vec![
            SelectExpr::Expr {
                expr: Expr::Column(ColName::qualified("u", "id")),
                alias: Some(Ident::from("user_id")),
            },
            SelectExpr::Expr {
                expr: Expr::Func(FuncExpr {
                    name: Ident::from("count"),
                    distinct: true,
                    args: vec![Expr::column("order_id").into()],
                }),
                alias: Some(Ident::from("orders")),
            },
        ],
        from: vec![TableExpr {
            table: TableName::new("users"),
            alias: Some(Ident::from("u")),
        }],
        where_clause: Some(Expr::and(
            Expr::compare(Expr::column("status"), ComparisonOp::Eq, Expr::string("active")),
            Expr::Paren(Box::new(Expr::or(
                Expr::compare(Expr::column("age"), ComparisonOp::GtEq, Expr::int(18)),
                Expr::IsNull { expr: Box::new(Expr::column("age")), negated: false },
            ))),
        )),
        group_by: vec![Expr::Column(ColName::qualified("u", "id"))],
        having: Some(Expr::compare(
            Expr::Func(FuncExpr {
                name: Ident::from("count"),
                distinct: false,
                args: vec![SelectExpr::Star],
            }),
            ComparisonOp::Gt,
            Expr::int(1),
        )),
        order_by: vec![
            OrderBy { expr: Expr::column("orders"), direction: Direction::Desc },
            OrderBy { expr: Expr::column("user_id"), direction: Direction::Asc },
        ],
        limit: Some(Limit { rowcount: Expr::int(10), offset: Some(Expr::int(20)) }),
    });

    assert_eq!(
        stmt.to_string(),
        "SELECT DISTINCT u.id AS user_id, count(DISTINCT order_id) AS orders \
         FROM users AS u \
         WHERE status = 'active' AND (age >= 18 OR age IS NULL) \
         GROUP BY u.id HAVING count(*) > 1 \
         ORDER BY orders DESC, user_id \
         LIMIT 10 OFFSET 20"
    );
}

#[test]
fn select_without_from() {
    let mut stmt = select(vec![Expr::int(1).into()], "unused");
    stmt.from.clear();
    assert_eq!(to_text(&stmt), "SELECT 1");
}

#[test]
fn qualified_star_and_in_list() {
    let mut stmt = select(vec![SelectExpr::QualifiedStar(Ident::from("t"))], "t");
    stmt.where_clause = Some(Expr::In {
        expr: Box::new(Expr::column("id")),
        negated: true,
        list: vec![Expr::int(1), Expr::int(2), Expr::bind("v1")],
    });
    assert_eq!(to_text(&stmt), "SELECT t.* FROM t WHERE id NOT IN (1, 2, :v1)");
}

#[rstest]
#[case(ComparisonOp::Eq, "a = 1")]
#[case(ComparisonOp::NotEq, "a != 1")]
#[case(ComparisonOp::Lt, "a < 1")]
#[case(ComparisonOp::LtEq, "a <= 1")]
#[case(ComparisonOp::Gt, "a > 1")]
#[case(ComparisonOp::GtEq, "a >= 1")]
#[case(ComparisonOp::Like, "a LIKE 1")]
#[case(ComparisonOp::NotLike, "a NOT LIKE 1")]
fn comparison_operators(#[case] op: ComparisonOp, #[case] expected: &str) {
    let expr = Expr::compare(Expr::column("a"), op, Expr::int(1));
    assert_eq!(expr.to_string(), expected);
}

#[rstest]
#[case(Expr::Null, "NULL")]
#[case(Expr::Not(Box::new(Expr::column("flag"))), "NOT flag")]
#[case(Expr::IsNull { expr: Box::new(Expr::column("x")), negated: true }, "x IS NOT NULL")]
#[case(Expr::Literal(Literal::Float(2.5)), "2.5")]
#[case(Expr::string("it's"), "'it''s'")]
#[case(Expr::bind("name"), ":name")]
fn expressions(#[case] expr: Expr, #[case] expected: &str) {
    assert_eq!(expr.to_string(), expected);
}

fn eq(name: &str, value: i64) -> Expr {
    Expr::compare(Expr::column(name), ComparisonOp::Eq, Expr::int(value))
}

#[rstest]
#[case(Expr::and(Expr::or(eq("a", 1), eq("b", 2)), eq("c", 3)), "(a = 1 OR b = 2) AND c = 3")]
#[case(Expr::and(eq("a", 1), Expr::or(eq("b", 2), eq("c", 3))), "a = 1 AND (b = 2 OR c = 3)")]
#[case(Expr::or(Expr::and(eq("a", 1), eq("b", 2)), eq("c", 3)), "a = 1 AND b = 2 OR c = 3")]
#[case(Expr::and(Expr::and(eq("a", 1), eq("b", 2)), eq("c", 3)), "a = 1 AND b = 2 AND c = 3")]
#[case(Expr::Not(Box::new(Expr::and(eq("a", 1), eq("b", 2)))), "NOT (a = 1 AND b = 2)")]
#[case(Expr::Not(Box::new(Expr::or(eq("a", 1), eq("b", 2)))), "NOT (a = 1 OR b = 2)")]
#[case(Expr::Not(Box::new(eq("a", 1))), "NOT a = 1")]
#[case(Expr::and(Expr::Not(Box::new(eq("a", 1))), eq("b", 2)), "NOT a = 1 AND b = 2")]
#[case(
    Expr::compare(eq("a", 1), ComparisonOp::Eq, Expr::bind("flag")),
    "(a = 1) = :flag"
)]
#[case(
    Expr::IsNull { expr: Box::new(Expr::or(eq("a", 1), eq("b", 2))), negated: false },
    "(a = 1 OR b = 2) IS NULL"
)]
#[case(
    Expr::In { expr: Box::new(Expr::Not(Box::new(Expr::column("x")))), negated: false, list: vec![Expr::int(1)] },
    "(NOT x) IN (1)"
)]
#[case(Expr::and(Expr::Paren(Box::new(eq("a", 1))), eq("b", 2)), "(a = 1) AND b = 2")]
fn looser_operands_are_parenthesized(#[case] expr: Expr, #[case] expected: &str) {
    assert_eq!(expr.to_string(), expected);
}

#[rstest]
#[case("id", "id")]
#[case("order", "`order`")]
#[case("first name", "`first name`")]
#[case("9lives", "`9lives`")]
fn identifiers_are_quoted_when_needed(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(Expr::column(name).to_string(), expected);
}

// ---------------------------------------------------------------------------
// 2. INSERT / UPDATE / DELETE
// ---------------------------------------------------------------------------

#[test]
fn insert_multiple_rows() {
    let stmt = Statement::Insert(Insert {
        table: TableName::new("users"),
        columns: vec![Ident::from("id"), Ident::from("name")],
        rows: vec![
            Row(vec![Expr::int(1), Expr::string("ann")]),
            Row(vec![Expr::int(2), Expr::Null]),
        ],
    });
    assert_eq!(
        stmt.to_string(),
        "INSERT INTO users (id, name) VALUES (1, 'ann'), (2, NULL)"
    );
}

#[test]
fn insert_without_column_list() {
    let stmt = Insert {
        table: TableName { qualifier: Some(Ident::from("app")), name: Ident::from("logs") },
        columns: vec![],
        rows: vec![Row(vec![Expr::bind("msg")])],
    };
    assert_eq!(to_text(&stmt), "INSERT INTO app.logs VALUES (:msg)");
}

#[test]
fn update_with_where() {
    let stmt = Statement::Update(Update {
        table: TableName::new("users"),
        set: vec![
            Assignment { column: ColName::new("name"), value: Expr::string("O'Brien") },
            Assignment { column: ColName::new("visits"), value: Expr::int(0) },
        ],
        where_clause: Some(Expr::compare(Expr::column("id"), ComparisonOp::Eq, Expr::int(7))),
    });
    assert_eq!(
        stmt.to_string(),
        "UPDATE users SET name = 'O''Brien', visits = 0 WHERE id = 7"
    );
}

#[test]
fn delete_without_where() {
    let stmt = Statement::Delete(Delete { table: TableName::new("sessions"), where_clause: None });
    assert_eq!(stmt.to_string(), "DELETE FROM sessions");
}

// ---------------------------------------------------------------------------
// 3. Tracked literals
// ---------------------------------------------------------------------------

#[test]
fn literals_and_binds_are_tracked() {
    let mut stmt = select(vec![SelectExpr::Star], "users");
    stmt.where_clause = Some(Expr::and(
        Expr::compare(Expr::column("name"), ComparisonOp::Eq, Expr::string("O'Brien")),
        Expr::compare(Expr::column("id"), ComparisonOp::Gt, Expr::bind("min_id")),
    ));
    stmt.limit = Some(Limit { rowcount: Expr::int(5), offset: None });

    let mut buf = TrackedBuffer::with_tracking();
    buf.write_node(&stmt);
    let text = buf.to_string();
    assert_eq!(
        text,
        "SELECT * FROM users WHERE name = 'O''Brien' AND id > :min_id LIMIT 5"
    );

    let spans: Vec<&str> = buf.substitutions().iter().map(|s| &text[s.range()]).collect();
    assert_eq!(spans, vec!["'O''Brien'", ":min_id", "5"]);
}

#[test]
fn identifiers_are_never_tracked() {
    let stmt = select(vec![Expr::column("order").into()], "t");
    let mut buf = TrackedBuffer::with_tracking();
    buf.write_node(&stmt);
    assert_eq!(buf.to_string(), "SELECT `order` FROM t");
    assert!(buf.substitutions().is_empty());
}

// ---------------------------------------------------------------------------
// 4. Serde round trip
// ---------------------------------------------------------------------------

#[test]
fn json_roundtrip_renders_identically() {
    let mut stmt = select(
        vec![Expr::column("id").into(), SelectExpr::Expr {
            expr: Expr::Literal(Literal::Float(1.5)),
            alias: Some(Ident::from("ratio")),
        }],
        "users",
    );
    stmt.where_clause = Some(Expr::compare(Expr::column("id"), ComparisonOp::NotEq, Expr::Null));
    let stmt = Statement::Select(stmt);

    let json = serde_json::to_string(&stmt).expect("serialize");
    let back: Statement = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, stmt);
    assert_eq!(back.to_string(), stmt.to_string());
}
