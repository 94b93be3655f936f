//! Seller handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{
    CreateSeller, SellerDetailResponse, SellerListResponse, SellerResponse, UpdateSeller,
};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create seller routes
pub fn seller_routes() -> Router<AppState> {
    Router::new()
        .route("/seller", get(list_sellers).post(create_seller))
        .route("/seller/", get(list_sellers).post(create_seller))
        .route(
            "/seller/:id",
            get(get_seller).put(update_seller).delete(delete_seller),
        )
}

/// Register a new seller
#[utoipa::path(
    post,
    path = "/api/v1/seller/",
    tag = "Sellers",
    request_body = CreateSeller,
    responses(
        (status = 201, description = "Seller created", body = SellerResponse),
        (status = 422, description = "Malformed body or incorrect email")
    )
)]
pub async fn create_seller(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSeller>,
) -> AppResult<Created<SellerResponse>> {
    let seller = state.seller_service.create_seller(payload).await?;
    Ok(Created(SellerResponse::from(seller)))
}

/// List all sellers (without their books)
#[utoipa::path(
    get,
    path = "/api/v1/seller/",
    tag = "Sellers",
    responses(
        (status = 200, description = "All sellers", body = SellerListResponse)
    )
)]
pub async fn list_sellers(State(state): State<AppState>) -> AppResult<Json<SellerListResponse>> {
    let sellers = state.seller_service.list_sellers().await?;
    Ok(Json(SellerListResponse::from(sellers)))
}

/// Get a seller with its books
#[utoipa::path(
    get,
    path = "/api/v1/seller/{id}",
    tag = "Sellers",
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Seller with books", body = SellerDetailResponse),
        (status = 404, description = "Seller not found")
    )
)]
pub async fn get_seller(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<SellerDetailResponse>> {
    let seller = state.seller_service.get_seller(id).await?;
    Ok(Json(SellerDetailResponse::from(seller)))
}

/// Overwrite a seller's name and email
#[utoipa::path(
    put,
    path = "/api/v1/seller/{id}",
    tag = "Sellers",
    params(("id" = i32, Path, description = "Seller ID")),
    request_body = UpdateSeller,
    responses(
        (status = 200, description = "Seller updated", body = SellerResponse),
        (status = 404, description = "Seller not found"),
        (status = 422, description = "Malformed body or incorrect email")
    )
)]
pub async fn update_seller(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateSeller>,
) -> AppResult<Json<SellerResponse>> {
    let seller = state
        .seller_service
        .update_seller(id, payload.into())
        .await?;
    Ok(Json(SellerResponse::from(seller)))
}

/// Delete a seller together with its books
#[utoipa::path(
    delete,
    path = "/api/v1/seller/{id}",
    tag = "Sellers",
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 204, description = "Seller deleted or already absent")
    )
)]
pub async fn delete_seller(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.seller_service.delete_seller(id).await?;
    Ok(NoContent)
}
