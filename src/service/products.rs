//! Product CRUD against the `productos` table.

use crate::error::RepositoryError;
use crate::model::{NewProduct, Product, ProductUpdate};
use crate::sql::{delete, insert, select_all, select_by_id, update, BindValue, TableDef};
use crate::store::Store;

pub const PRODUCTOS: TableDef = TableDef {
    name: "productos",
    pk: "id",
    columns: &["nombre", "descripcion", "precio", "stock"],
};

#[derive(Clone, Debug)]
pub struct ProductRepository {
    store: Store,
}

impl ProductRepository {
    pub fn new(store: Store) -> Self {
        ProductRepository { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Every row in storage order.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let q = select_all(&PRODUCTOS);
        self.store
            .query_all(&q.sql, &q.params)
            .await
            .map_err(RepositoryError::storage("Error al obtener productos"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let q = select_by_id(&PRODUCTOS, id);
        self.store
            .query_one(&q.sql, &q.params)
            .await
            .map_err(RepositoryError::storage("Error al obtener producto"))
    }

    /// Insert and return the stored record with its assigned id.
    pub async fn create(&self, fields: NewProduct) -> Result<Product, RepositoryError> {
        let values: Vec<BindValue> = vec![
            fields.nombre.clone().into(),
            fields.descripcion.clone().into(),
            fields.precio.into(),
            fields.stock.into(),
        ];
        let q = insert(&PRODUCTOS, values);
        let outcome = self
            .store
            .execute(&q.sql, &q.params)
            .await
            .map_err(RepositoryError::storage("Error al crear producto"))?;
        Ok(fields.into_product(outcome.inserted_id))
    }

    /// Replace every writable column. Returns whether a row changed; existence is the caller's concern.
    pub async fn update(&self, id: i64, fields: ProductUpdate) -> Result<bool, RepositoryError> {
        let values: Vec<BindValue> = vec![
            fields.nombre.into(),
            fields.descripcion.into(),
            fields.precio.into(),
            fields.stock.into(),
        ];
        let q = update(&PRODUCTOS, id, values);
        let outcome = self
            .store
            .execute(&q.sql, &q.params)
            .await
            .map_err(RepositoryError::storage("Error al actualizar producto"))?;
        Ok(outcome.rows_affected > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let q = delete(&PRODUCTOS, id);
        let outcome = self
            .store
            .execute(&q.sql, &q.params)
            .await
            .map_err(RepositoryError::storage("Error al eliminar producto"))?;
        Ok(outcome.rows_affected > 0)
    }
}
