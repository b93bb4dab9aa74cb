//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for a fixed table.

use super::params::BindValue;

/// Static description of a table. Identifiers come from here only, never from requests.
#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub pk: &'static str,
    /// Writable columns, in the order values are supplied to `insert` and `update`.
    pub columns: &'static [&'static str],
}

/// Quote identifier for SQLite.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> &'static str {
        self.params.push(v);
        "?"
    }
}

fn select_column_list(table: &TableDef) -> String {
    std::iter::once(table.pk)
        .chain(table.columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row, storage order.
pub fn select_all(table: &TableDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {}", select_column_list(table), quoted(table.name));
    q
}

/// SELECT by primary key.
pub fn select_by_id(table: &TableDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let p = q.push_param(id.into());
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk),
        p
    );
    q
}

/// INSERT one row. `values` must line up with `table.columns`.
pub fn insert(table: &TableDef, values: Vec<BindValue>) -> QueryBuf {
    debug_assert_eq!(values.len(), table.columns.len());
    let mut q = QueryBuf::new();
    let cols: Vec<String> = table.columns.iter().map(|c| quoted(c)).collect();
    let placeholders: Vec<&str> = values.into_iter().map(|v| q.push_param(v)).collect();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(table.name),
        cols.join(", "),
        placeholders.join(", ")
    );
    q
}

/// UPDATE every writable column of the row with the given id (full replace).
pub fn update(table: &TableDef, id: i64, values: Vec<BindValue>) -> QueryBuf {
    debug_assert_eq!(values.len(), table.columns.len());
    let mut q = QueryBuf::new();
    let sets: Vec<String> = table
        .columns
        .iter()
        .zip(values)
        .map(|(c, v)| format!("{} = {}", quoted(c), q.push_param(v)))
        .collect();
    let p = q.push_param(id.into());
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {}",
        quoted(table.name),
        sets.join(", "),
        quoted(table.pk),
        p
    );
    q
}

/// DELETE by primary key.
pub fn delete(table: &TableDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let p = q.push_param(id.into());
    q.sql = format!("DELETE FROM {} WHERE {} = {}", quoted(table.name), quoted(table.pk), p);
    q
}
