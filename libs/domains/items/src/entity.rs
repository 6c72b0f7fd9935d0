use sea_orm::entity::prelude::*;

use crate::models::Item;

/// Sea-ORM Entity for the `items` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// JSONB array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A `tags` value that is not a string array is reported as a store fault.
impl TryFrom<Model> for Item {
    type Error = DbErr;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let tags: Vec<String> = serde_json::from_value(model.tags)
            .map_err(|e| DbErr::Json(format!("items.tags for id {}: {}", model.id, e)))?;

        Ok(Self {
            id: model.id,
            name: model.name,
            description: model.description,
            tags,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

/// JSONB encoding of a tag list
pub fn tags_to_json(tags: Vec<String>) -> Json {
    Json::from(tags)
}
