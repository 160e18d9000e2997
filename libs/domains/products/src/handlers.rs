use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{ErrorResponse, UuidPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{InfoProductDto, ProductDto, ProductFilter};
use crate::repository::ProductRepository;
use crate::service::ProductService;

const TAG: &str = "products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
        product_pdf,
    ),
    components(schemas(InfoProductDto, ProductDto, ProductFilter, ErrorResponse)),
    tags(
        (name = TAG, description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all CRUD endpoints
pub fn router<R: ProductRepository + 'static>(service: Arc<ProductService<R>>) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(service)
}

/// Router serving rendered PDF documents for single products
pub fn pdf_router<R: ProductRepository + 'static>(service: Arc<ProductService<R>>) -> Router {
    Router::new()
        .route("/{id}", get(product_pdf))
        .with_state(service)
}

/// List one page of products
#[utoipa::path(
    get,
    path = "/products",
    tag = TAG,
    params(ProductFilter),
    responses(
        (status = 200, description = "One page of products", body = Vec<InfoProductDto>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(filter): Query<ProductFilter>,
) -> ProductResult<Json<Vec<InfoProductDto>>> {
    let products = service.get_all_products(filter).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = TAG,
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created, body is the new id", body = Uuid),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> ProductResult<impl IntoResponse> {
    let id = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = InfoProductDto),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Unknown product", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<InfoProductDto>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Update an existing product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated, body is the id", body = Uuid),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 404, description = "Unknown product", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> ProductResult<Json<Uuid>> {
    let id = service.update_product(id, input).await?;
    Ok(Json(id))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Unknown product", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Render a product as a downloadable PDF document
#[utoipa::path(
    get,
    path = "/pdf/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "PDF document", content_type = "application/pdf"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Unknown product", body = ErrorResponse),
        (status = 500, description = "Document rendering failure", body = ErrorResponse)
    )
)]
async fn product_pdf<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse> {
    let path = service.product_to_pdf(id).await?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| ProductError::Document(e.into()))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.pdf")
        .to_string();

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        ),
    ];

    Ok((headers, bytes))
}
