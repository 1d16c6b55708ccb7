use crate::{
    db::{Database, DbError},
    models::{ModerationStatus, NewProduct, Product},
};

/// Approved products, oldest id first.
pub async fn list_approved(db: &Database) -> Result<Vec<Product>, DbError> {
    db.query(
        r#"
        SELECT id, name, note, image_url, user_id, status
        FROM products
        WHERE status = $1
        ORDER BY id
        "#,
        vec![ModerationStatus::Approved.as_str().into()],
    )
    .await
}

pub async fn create(db: &Database, product: NewProduct) -> Result<Product, DbError> {
    db.query_one(
        r#"
        INSERT INTO products (name, note, image_url, user_id, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, note, image_url, user_id, status
        "#,
        vec![
            product.name.into(),
            product.note.into(),
            product.image_url.into(),
            product.user_id.into(),
            product.status.as_str().into(),
        ],
    )
    .await
}
