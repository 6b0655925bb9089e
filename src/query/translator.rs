use chrono::{DateTime, Utc};
use sea_orm::{DbBackend, Statement, Value};

use super::descriptor::{EntityDescriptor, MatchStyle, ValueKind};
use super::filter::{RecordFilter, SortOrder};

const LIKE_ESCAPE: char = '!';

/// Builds a parameterized `SELECT` for one entity.
///
/// Placeholders are numbered in the order predicates are appended and the
/// bound values are kept in a separate list of the same order.
#[derive(Debug)]
pub struct QueryTranslator {
    backend: DbBackend,
    descriptor: &'static EntityDescriptor,
    sql: String,
    values: Vec<Value>,
}

impl QueryTranslator {
    pub fn new(backend: DbBackend, descriptor: &'static EntityDescriptor) -> Self {
        Self {
            backend,
            descriptor,
            sql: descriptor.base_query(),
            values: Vec::new(),
        }
    }

    /// One predicate per recognized, non-empty filter key, joined with AND.
    pub fn apply_filter(mut self, filter: &RecordFilter) -> Self {
        for field in self.descriptor.filter_fields {
            let Some(raw) = filter.value(field.name) else {
                continue;
            };

            match field.style {
                MatchStyle::Exact => match bind_value(field.kind, raw) {
                    Some(value) => self.push_predicate(field.name, "=", value, None),
                    None => self.sql.push_str(" AND 1=0"),
                },
                MatchStyle::Contains => {
                    let pattern = format!("%{}%", escape_like(raw));
                    self.push_predicate(
                        field.name,
                        "LIKE",
                        Value::from(pattern),
                        Some(LIKE_ESCAPE),
                    );
                }
            }
        }
        self
    }

    pub fn where_eq(mut self, column: &'static str, value: Value) -> Self {
        self.push_predicate(column, "=", value, None);
        self
    }

    pub fn order_by(mut self, column: &'static str, order: SortOrder) -> Self {
        let column = self.quote(column);
        self.sql
            .push_str(&format!(" ORDER BY {} {}", column, order.as_sql()));
        self
    }

    pub fn limit_one(mut self) -> Self {
        self.sql.push_str(" LIMIT 1");
        self
    }

    pub fn build(self) -> Statement {
        Statement::from_sql_and_values(self.backend, &self.sql, self.values)
    }

    fn push_predicate(&mut self, column: &str, op: &str, value: Value, escape: Option<char>) {
        self.values.push(value);
        let placeholder = self.placeholder(self.values.len());
        let column = self.quote(column);
        self.sql
            .push_str(&format!(" AND {} {} {}", column, op, placeholder));
        if let Some(escape) = escape {
            self.sql.push_str(&format!(" ESCAPE '{}'", escape));
        }
    }

    fn placeholder(&self, position: usize) -> String {
        match self.backend {
            DbBackend::Postgres => format!("${}", position),
            DbBackend::MySql | DbBackend::Sqlite => "?".to_string(),
        }
    }

    fn quote(&self, column: &str) -> String {
        match self.backend {
            DbBackend::MySql => format!("`{}`", column),
            DbBackend::Postgres | DbBackend::Sqlite => format!("\"{}\"", column),
        }
    }
}

/// Filtered, sorted listing for one entity.
pub fn translate(
    backend: DbBackend,
    descriptor: &'static EntityDescriptor,
    filter: &RecordFilter,
) -> Statement {
    let sort_field = descriptor.resolve_sort_field(filter.requested_sort_by());
    QueryTranslator::new(backend, descriptor)
        .apply_filter(filter)
        .order_by(sort_field, filter.requested_sort_order())
        .build()
}

/// Typed value for a column, or `None` when the input can never equal a
/// value of that type.
fn bind_value(kind: ValueKind, raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    match kind {
        ValueKind::Integer => trimmed.parse::<i64>().ok().map(Value::from),
        ValueKind::Decimal => trimmed.parse::<f64>().ok().map(Value::from),
        ValueKind::Timestamp => DateTime::parse_from_rfc3339(trimmed)
            .ok()
            .map(|at| Value::from(at.with_timezone(&Utc))),
        ValueKind::Text => Some(Value::from(raw.to_string())),
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == '%' || ch == '_' || ch == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}
