//! OpenAPI documentation configuration

use utoipa::openapi::{InfoBuilder, ServerBuilder};
use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API.
///
/// The domain document already carries absolute paths, so it is reused
/// wholesale with the app-level info and servers swapped in.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = domain_products::handlers::ApiDoc::openapi();

        doc.info = InfoBuilder::new()
            .title("Products API")
            .version(env!("CARGO_PKG_VERSION"))
            .description(Some(
                "Product catalog API with PDF document rendering",
            ))
            .build();
        doc.servers = Some(vec![ServerBuilder::new()
            .url("http://localhost:8080")
            .description(Some("Local development server"))
            .build()]);

        doc
    }
}
