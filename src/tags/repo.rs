use crate::{
    db::{Database, DbError},
    models::{ItemKind, Tag},
};

const LIST_MEAL_TAGS: &str = r#"
    SELECT t.id, t.name, t.color_code
    FROM meal_tags mt
    JOIN tags t ON mt.tag_id = t.id
    WHERE mt.meal_id = $1
"#;

const LIST_PRODUCT_TAGS: &str = r#"
    SELECT t.id, t.name, t.color_code
    FROM product_tags pt
    JOIN tags t ON pt.tag_id = t.id
    WHERE pt.product_id = $1
"#;

/// Tags linked to one item. Duplicate links come back as duplicate rows.
pub async fn list_for_item(db: &Database, kind: ItemKind, item_id: i32) -> Result<Vec<Tag>, DbError> {
    let sql = match kind {
        ItemKind::Meal => LIST_MEAL_TAGS,
        ItemKind::Product => LIST_PRODUCT_TAGS,
    };
    db.query(sql, vec![item_id.into()]).await
}

pub async fn link(
    db: &Database,
    kind: ItemKind,
    item_id: i32,
    tag_id: Option<i32>,
) -> Result<(), DbError> {
    let sql = match kind {
        ItemKind::Meal => "INSERT INTO meal_tags (meal_id, tag_id) VALUES ($1, $2)",
        ItemKind::Product => "INSERT INTO product_tags (product_id, tag_id) VALUES ($1, $2)",
    };
    db.execute(sql, vec![item_id.into(), tag_id.into()]).await?;
    Ok(())
}
