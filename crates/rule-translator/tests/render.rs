//! Rendering translated predicates for concrete SQL dialects.

mod common;

use common::{group, rule};
use rule_translator::{
    FieldAllowList, FilterQuery, RenderError, RuleTranslator, Value,
    query::dialect::{MySql, Postgres},
};
use serde_json::json;

fn translated() -> FilterQuery {
    let payload = group(
        "AND",
        vec![
            rule("users.age", "integer", "between", json!("18,65")),
            group(
                "OR",
                vec![
                    rule("users.name", "string", "begins_with", json!("Jo")),
                    rule("users.email", "string", "is_null", json!(null)),
                ],
            ),
            rule("users.role", "string", "in", json!(["admin", "staff"])),
        ],
    );
    let fields = FieldAllowList::new(["users.age", "users.name", "users.email", "users.role"]);

    RuleTranslator::default()
        .translate_json(&payload, FilterQuery::new(), Some(&fields))
        .unwrap()
}

#[test]
fn test_named_form() {
    assert_eq!(
        translated().to_sql(),
        " WHERE users.age BETWEEN :p0 AND :p1 AND (users.name LIKE :p2 OR users.email IS NULL) AND users.role IN (:p3, :p4)"
    );
}

#[test]
fn test_postgres_form() {
    let (sql, params) = translated().render(&Postgres).unwrap();
    assert_eq!(
        sql,
        r#""users"."age" BETWEEN $1 AND $2 AND ("users"."name" LIKE $3 OR "users"."email" IS NULL) AND "users"."role" IN ($4, $5)"#
    );
    assert_eq!(
        params,
        vec![
            Value::Int(18),
            Value::Int(65),
            Value::from("Jo%"),
            Value::from("admin"),
            Value::from("staff"),
        ]
    );
}

#[test]
fn test_mysql_form() {
    let (sql, params) = translated().render(&MySql).unwrap();
    assert_eq!(
        sql,
        "`users`.`age` BETWEEN ? AND ? AND (`users`.`name` LIKE ? OR `users`.`email` IS NULL) AND `users`.`role` IN (?, ?)"
    );
    assert_eq!(params.len(), 5);
}

#[test]
fn test_render_fails_for_unbound_placeholder() {
    let mut query = translated();
    query.params.retain(|(name, _)| name != "p3");

    assert_eq!(
        query.render(&Postgres).unwrap_err(),
        RenderError::UnboundParameter("p3".into())
    );
}
