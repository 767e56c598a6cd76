//! Route handlers. Each one decodes its input, makes exactly one [`ProductClient`] call and
//! shapes the answer.

use crate::clients::ProductClient;
use crate::model::ProductId;
use crate::web::dto::{
    CategoryResponse, CreateProductRequest, HealthResponse, ListParams, MessageResponse,
    ProductListResponse, UpdateProductRequest,
};
use crate::web::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId)
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// `GET /api/v1/products[?category=C]`
pub async fn list_products(
    State(client): State<ProductClient>,
    Query(params): Query<ListParams>,
) -> Json<ProductListResponse> {
    let products = match params.category.filter(|c| !c.is_empty()) {
        Some(category) => client.search_products(&category).await,
        None => client.list_products().await,
    };
    Json(ProductListResponse::single_page(products))
}

/// `GET /api/v1/products/{id}`
pub async fn get_product(
    State(client): State<ProductClient>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(client.get_product(id).await?))
}

/// `POST /api/v1/products`
pub async fn create_product(
    State(client): State<ProductClient>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let draft = request.validate()?;
    let product = client.create_product(draft).await;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/v1/products/{id}`
pub async fn update_product(
    State(client): State<ProductClient>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = payload?;
    let patch = request.validate()?;
    Ok(Json(client.update_product(id, patch).await?))
}

/// `DELETE /api/v1/products/{id}`
pub async fn delete_product(
    State(client): State<ProductClient>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    client.delete_product(id).await?;
    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_string(),
    }))
}

/// `GET /api/v1/products/category/{category}`
pub async fn products_by_category(
    State(client): State<ProductClient>,
    Path(category): Path<String>,
) -> Json<CategoryResponse> {
    let products = client.search_products(&category).await;
    Json(CategoryResponse {
        category,
        total: products.len(),
        products,
    })
}
