use productos_api::{NewProduct, ProductRepository, Store, StoreError};

#[tokio::test]
async fn products_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tienda_api.sqlite");

    let store = Store::open(&path).await.unwrap();
    store.ensure_schema().await.unwrap();
    let repo = ProductRepository::new(store.clone());
    let created = repo
        .create(NewProduct {
            nombre: "Monitor".into(),
            descripcion: Some("27 pulgadas".into()),
            precio: 199.99,
            stock: 2,
        })
        .await
        .unwrap();
    store.close().await;
    assert!(path.exists());

    let reopened = Store::open(&path).await.unwrap();
    reopened.ensure_schema().await.unwrap();
    let repo = ProductRepository::new(reopened);
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn open_fails_when_parent_directory_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("tienda_api.sqlite");
    let err = Store::open(&path).await.unwrap_err();
    assert!(matches!(err, StoreError::Open { .. }));
    assert!(err.to_string().contains("missing"));
}
