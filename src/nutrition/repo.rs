use crate::{
    db::{Database, DbError},
    models::{ItemKind, NutritionFact},
};

pub async fn list_for_item(
    db: &Database,
    kind: ItemKind,
    item_id: i32,
) -> Result<Vec<NutritionFact>, DbError> {
    db.query(
        r#"
        SELECT key, value
        FROM nutritional_facts
        WHERE item_type = $1 AND item_id = $2
        "#,
        vec![kind.item_type().into(), item_id.into()],
    )
    .await
}

pub async fn insert(
    db: &Database,
    kind: ItemKind,
    item_id: i32,
    fact: NutritionFact,
) -> Result<(), DbError> {
    db.execute(
        r#"
        INSERT INTO nutritional_facts (item_type, item_id, key, value)
        VALUES ($1, $2, $3, $4)
        "#,
        vec![
            kind.item_type().into(),
            item_id.into(),
            fact.key.into(),
            fact.value.into(),
        ],
    )
    .await?;
    Ok(())
}
