use axum::Json;
use utoipa::OpenApi;

use crate::handlers::wallets;
use crate::models::{ErrorMessage, Wallet};

#[derive(OpenApi)]
#[openapi(
    info(title = "Wallet API", version = "1.0", description = "Sophisticated Wallet API"),
    paths(
        wallets::list_wallets,
        wallets::list_wallets_by_type,
        wallets::list_user_wallets,
        wallets::create_wallet,
        wallets::update_wallet,
        wallets::delete_wallet,
    ),
    components(schemas(Wallet, ErrorMessage)),
    tags(
        (name = "wallet", description = "Wallet records"),
        (name = "wallet_type", description = "Filter by wallet type"),
        (name = "user_id", description = "Filter by owning user")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
