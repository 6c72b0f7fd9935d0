use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, QueryParams, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestQueryResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemFilter, ItemPage, UpdateItem};
use crate::usecases::ItemUseCases;

pub const TAG: &str = "Items";

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(Item, CreateItem, UpdateItem, ItemPage),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestQueryResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the item router with all HTTP endpoints
pub fn router(use_cases: ItemUseCases) -> Router {
    let shared = Arc::new(use_cases);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(shared)
}

/// List items with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ItemFilter),
    responses(
        (status = 200, description = "One page of matching items", body = ItemPage),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items(
    State(use_cases): State<Arc<ItemUseCases>>,
    QueryParams(filter): QueryParams<ItemFilter>,
) -> ItemResult<Json<ItemPage>> {
    let page = use_cases.list.execute(filter).await?;
    Ok(Json(page))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item(
    State(use_cases): State<Arc<ItemUseCases>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = use_cases.create.execute(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item(
    State(use_cases): State<Arc<ItemUseCases>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Item>> {
    let item = use_cases
        .get
        .execute(id)
        .await?
        .ok_or(ItemError::NotFound(id))?;
    Ok(Json(item))
}

/// Update an item
///
/// Only the fields present in the body change. `description: null` clears it.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item(
    State(use_cases): State<Arc<ItemUseCases>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<Item>> {
    let item = use_cases
        .update
        .execute(id, input)
        .await?
        .ok_or(ItemError::NotFound(id))?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item(
    State(use_cases): State<Arc<ItemUseCases>>,
    IdPath(id): IdPath,
) -> ItemResult<StatusCode> {
    if use_cases.delete.execute(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ItemError::NotFound(id))
    }
}
