use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, FromQueryResult,
    Statement, Value,
};
use tracing::instrument;

use crate::{
    entity::{self, tags_to_json},
    error::ItemResult,
    gateway::DataGateway,
    listing::ListQuery,
    models::{CreateItem, Item, ItemFilter, ItemId, ItemPage, UpdateItem},
};

/// PostgreSQL implementation of DataGateway using SeaORM
#[derive(Clone)]
pub struct PgDataGateway {
    db: DatabaseConnection,
}

impl PgDataGateway {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl DataGateway for PgDataGateway {
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn insert_item(&self, input: CreateItem) -> ItemResult<Item> {
        let now = Utc::now().fixed_offset();

        let model = entity::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            tags: Set(tags_to_json(input.tags)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.try_into()?)
    }

    #[instrument(skip(self))]
    async fn get_item_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Item::try_from).transpose()?)
    }

    #[instrument(skip(self, input))]
    async fn update_item(&self, id: ItemId, input: UpdateItem) -> ItemResult<Option<Item>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::ActiveModel = model.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(description) = input.description.into_change() {
            active.description = Set(description);
        }
        if let Some(tags) = input.tags {
            active.tags = Set(tags_to_json(tags));
        }
        active.updated_at = Set(Utc::now().fixed_offset());

        // The row can vanish between the read and the write
        let updated = match active.update(&self.db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(item_id = id, "Updated item");
        Ok(Some(updated.try_into()?))
    }

    #[instrument(skip(self))]
    async fn delete_item(&self, id: ItemId) -> ItemResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(item_id = id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    #[instrument(skip(self))]
    async fn list_items(&self, filter: ItemFilter) -> ItemResult<ItemPage> {
        let query = ListQuery::from(filter);
        let (where_sql, mut values) = where_clause(&query);

        let count_sql = format!("SELECT COUNT(*) AS count FROM items{}", where_sql);
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, count_sql, values.clone());

        #[derive(FromQueryResult)]
        struct CountResult {
            count: i64,
        }

        let total = CountResult::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .map_or(0, |r| r.count.max(0) as u64);

        let limit_at = values.len() + 1;
        let page_sql = format!(
            "SELECT id, name, description, tags, created_at, updated_at FROM items{} \
             ORDER BY created_at DESC, id DESC LIMIT ${} OFFSET ${}",
            where_sql,
            limit_at,
            limit_at + 1
        );
        values.push(Value::from(query.limit as i64));
        values.push(Value::from(i64::try_from(query.offset).unwrap_or(i64::MAX)));

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, page_sql, values);
        let models = entity::Entity::find()
            .from_raw_sql(stmt)
            .all(&self.db)
            .await?;

        let items = models
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ItemPage { total, items })
    }
}

/// ` WHERE ...` (or an empty string) plus its positional values.
fn where_clause(query: &ListQuery) -> (String, Vec<Value>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(q) = &query.q {
        values.push(Value::from(format!("%{}%", escape_like(q))));
        conditions.push(format!(r"name ILIKE ${} ESCAPE '\'", values.len()));
    }
    if let Some(after) = query.created_after {
        values.push(Value::from(after));
        conditions.push(format!("created_at > ${}", values.len()));
    }
    if let Some(before) = query.created_before {
        values.push(Value::from(before));
        conditions.push(format!("created_at < ${}", values.len()));
    }
    if let Some(tag) = &query.tag {
        values.push(Value::from(tags_to_json(vec![tag.clone()])));
        conditions.push(format!("tags @> ${}::jsonb", values.len()));
    }

    if conditions.is_empty() {
        (String::new(), values)
    } else {
        (format!(" WHERE {}", conditions.join(" AND ")), values)
    }
}

/// Make `%`, `_` and `\` match literally in a LIKE pattern.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
