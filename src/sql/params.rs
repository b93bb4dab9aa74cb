//! Values that can be bound to a SQLite statement.

use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// A single positional parameter. Statements never carry values inline; everything goes through this.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Null,
    I64(i64),
    F64(f64),
    Text(String),
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::I64(v)
    }
}

impl From<f64> for BindValue {
    fn from(v: f64) -> Self {
        BindValue::F64(v)
    }
}

impl From<String> for BindValue {
    fn from(v: String) -> Self {
        BindValue::Text(v)
    }
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        BindValue::Text(v.to_string())
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(BindValue::Null)
    }
}

impl<'q> Encode<'q, Sqlite> for BindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            BindValue::Null => <Option<i64> as Encode<Sqlite>>::encode_by_ref(&None, buf)?,
            BindValue::I64(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf)?,
            BindValue::F64(n) => <f64 as Encode<Sqlite>>::encode_by_ref(n, buf)?,
            BindValue::Text(s) => <String as Encode<Sqlite>>::encode_by_ref(s, buf)?,
        })
    }
}

impl sqlx::Type<Sqlite> for BindValue {
    fn type_info() -> SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }

    // SQLite is dynamically typed; the column affinity decides storage.
    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(BindValue::from(None::<String>), BindValue::Null);
        assert_eq!(BindValue::from(Some("teclado")), BindValue::Text("teclado".into()));
        assert_eq!(BindValue::from(Some(3_i64)), BindValue::I64(3));
    }
}
