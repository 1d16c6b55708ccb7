use crate::{
    db::{Database, DbError},
    models::{Meal, ModerationStatus, NewMeal},
};

/// Approved meals, oldest id first.
pub async fn list_approved(db: &Database) -> Result<Vec<Meal>, DbError> {
    db.query(
        r#"
        SELECT id, name, preparation_description, note, image_url, user_id, status
        FROM meals
        WHERE status = $1
        ORDER BY id
        "#,
        vec![ModerationStatus::Approved.as_str().into()],
    )
    .await
}

pub async fn create(db: &Database, meal: NewMeal) -> Result<Meal, DbError> {
    db.query_one(
        r#"
        INSERT INTO meals (name, preparation_description, note, image_url, user_id, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, preparation_description, note, image_url, user_id, status
        "#,
        vec![
            meal.name.into(),
            meal.preparation_description.into(),
            meal.note.into(),
            meal.image_url.into(),
            meal.user_id.into(),
            meal.status.as_str().into(),
        ],
    )
    .await
}
