use serde::Deserialize;

use crate::coerce;

#[derive(Debug, Default, Deserialize)]
pub struct AddTagRequest {
    #[serde(default, deserialize_with = "coerce::int")]
    pub tag_id: Option<i32>,
}
