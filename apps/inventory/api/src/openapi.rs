use utoipa::OpenApi;

/// Combined API documentation served at `/api-docs/openapi.json`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        description = "Create and list uniquely named inventory items"
    ),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    )
)]
pub struct ApiDoc;
