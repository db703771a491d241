//! End-to-end wiring tests against a scripted executor.
//!
//! No real engine is involved: the executor plays back canned metadata and
//! query results so the full introspection and execution paths can be
//! exercised the way the host drives them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clickzetta_dialect::{
    ClickZettaDialect, ColumnInfo, DialectError, DialectRegistry, DialectResult,
    IntrospectionConfig, LogicalType, QueryExecutionAdapter, QueryResult, Row, SchemaIntrospector,
    SqlDialectAdapter, SqlExecutor, Value,
};

struct ScriptedExecutor {
    responses: HashMap<String, QueryResult>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    fn new() -> Self {
        Self {
            responses: HashMap::new(),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn with_response(mut self, sql: &str, result: QueryResult) -> Self {
        self.responses.insert(sql.to_string(), result);
        self
    }

    fn statements(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl SqlExecutor for ScriptedExecutor {
    async fn query(&self, sql: &str, _row_limit: Option<u64>) -> DialectResult<QueryResult> {
        self.seen
            .lock()
            .map_err(|_| DialectError::execution("mutex poisoned"))?
            .push(sql.to_string());
        self.responses
            .get(sql)
            .cloned()
            .ok_or_else(|| DialectError::execution(format!("unexpected statement: {sql}")))
    }
}

fn result(columns: &[&str], rows: &[&[&str]]) -> QueryResult {
    QueryResult {
        columns: columns
            .iter()
            .map(|name| ColumnInfo {
                name: name.to_string(),
                native_type: "string".to_string(),
            })
            .collect(),
        rows: rows
            .iter()
            .map(|values| Row {
                values: values.iter().map(|v| Value::Text(v.to_string())).collect(),
            })
            .collect(),
        affected_rows: None,
    }
}

#[test]
fn registry_resolves_the_clickzetta_adapter() {
    let mut registry = DialectRegistry::new();
    registry.register(Arc::new(ClickZettaDialect::default()));

    assert_eq!(registry.list(), vec!["clickzetta"]);
    let adapter = registry.get("clickzetta").expect("adapter registered");
    assert_eq!(adapter.dialect_name(), "ClickZetta");
    assert_eq!(adapter.map_type("TIMESTAMP_LTZ"), LogicalType::DateTime);
}

#[tokio::test]
async fn full_catalog_enumeration_filters_system_schemas() {
    let executor = Arc::new(ScriptedExecutor::new().with_response(
        "SHOW SCHEMAS",
        result(
            &["schema_name"],
            &[&["sales"], &["information_schema"], &["marketing"], &["sys"]],
        ),
    ));
    let introspector = SchemaIntrospector::new(executor, IntrospectionConfig::default());

    let schemas = introspector.list_schemas().await.unwrap();
    assert_eq!(schemas, vec!["sales", "marketing"]);
}

#[tokio::test]
async fn pinned_schema_skips_catalog_enumeration() {
    let executor = Arc::new(ScriptedExecutor::new());
    let config = IntrospectionConfig {
        schema: Some("sales".to_string()),
        ..IntrospectionConfig::default()
    };
    let introspector = SchemaIntrospector::new(executor.clone(), config);

    let schemas = introspector.list_schemas().await.unwrap();
    assert_eq!(schemas, vec!["sales"]);
    assert!(executor.statements().is_empty(), "no catalog query expected");
}

#[tokio::test]
async fn describe_skips_partition_pseudo_columns() {
    let executor = Arc::new(ScriptedExecutor::new().with_response(
        "DESCRIBE `sales`.`orders`",
        result(
            &["column_name", "data_type", "comment"],
            &[
                &["id", "bigint", ""],
                &["amount", "decimal(18,2)", ""],
                &["", "", ""],
                &["# Partition Information", "", ""],
                &["# col_name", "data_type", "comment"],
                &["order_date", "date", ""],
            ],
        ),
    ));
    let introspector = SchemaIntrospector::new(executor, IntrospectionConfig::default());

    let table = introspector.describe_table("sales", "orders").await.unwrap();
    assert_eq!(table.name, "orders");
    assert_eq!(table.schema.as_deref(), Some("sales"));

    let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "amount", "order_date"]);

    let amount = &table.columns[1];
    assert_eq!(amount.native_type, "decimal");
    assert_eq!(amount.logical_type, LogicalType::Decimal);
    assert_eq!(amount.position, 1);
    assert_eq!(table.columns[2].logical_type, LogicalType::Date);
    assert_eq!(table.columns[2].position, 2);
}

#[tokio::test]
async fn table_enumeration_quotes_identifiers() {
    let executor = Arc::new(ScriptedExecutor::new().with_response(
        "SHOW TABLES IN `sales`",
        result(
            &["schema_name", "table_name", "is_view"],
            &[&["sales", "orders", "false"], &["sales", "customers", "false"]],
        ),
    ));
    let introspector = SchemaIntrospector::new(executor.clone(), IntrospectionConfig::default());

    let tables = introspector.list_tables("sales").await.unwrap();
    let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["orders", "customers"]);
    assert!(tables.iter().all(|t| t.schema.as_deref() == Some("sales")));
    assert_eq!(executor.statements(), vec!["SHOW TABLES IN `sales`"]);
}

#[tokio::test]
async fn foreign_keys_are_reported_empty() {
    let executor = Arc::new(ScriptedExecutor::new());
    let introspector = SchemaIntrospector::new(executor.clone(), IntrospectionConfig::default());

    let fks = introspector.list_foreign_keys("sales", "orders").await.unwrap();
    assert!(fks.is_empty());
    assert!(executor.statements().is_empty(), "no statement should be issued");
}

#[tokio::test]
async fn execution_rewrites_and_coerces_to_utc() {
    let tagged =
        "set query_tag='jane@example.com';\nSELECT id, created_at FROM orders";
    let mut response = result(&["id", "created_at"], &[]);
    response.columns[0].native_type = "bigint".to_string();
    response.columns[1].native_type = "timestamp".to_string();
    response.rows.push(Row {
        values: vec![
            Value::Int(1),
            Value::Text("2024-06-05 08:30:00".to_string()),
        ],
    });

    let executor = Arc::new(ScriptedExecutor::new().with_response(tagged, response));
    let adapter = QueryExecutionAdapter::new(executor.clone(), Some("analytics"));

    let result = adapter
        .execute(
            "SELECT id, created_at FROM `analytics`.orders",
            Some(1000),
            Some("jane@example.com"),
            None,
        )
        .await
        .unwrap();

    assert_eq!(executor.statements(), vec![tagged]);
    assert_eq!(
        result.rows[0].values[1],
        Value::Text("2024-06-05T08:30:00Z".to_string())
    );
    // Non-temporal columns pass through untouched.
    assert_eq!(result.rows[0].values[0], Value::Int(1));
}
