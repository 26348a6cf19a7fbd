//! Wallet routes. Each handler makes exactly one `Storer` call.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::models::Wallet;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WalletTypeQuery {
    /// Exact wallet type, e.g. "Savings", "Credit Card", "Crypto Wallet". Absent means "".
    #[serde(default)]
    pub wallet_type: String,
}

/// Get all wallets
#[utoipa::path(
    get,
    path = "/api/v1/wallets",
    responses(
        (status = 200, description = "All wallets", body = [Wallet]),
        (status = 500, description = "Store failure", body = crate::models::ErrorMessage)
    ),
    tag = "wallet"
)]
pub async fn list_wallets(State(state): State<AppState>) -> Result<Json<Vec<Wallet>>, ApiError> {
    let wallets = state.store.list_all().await?;
    tracing::debug!(count = wallets.len(), "Listed wallets");
    Ok(Json(wallets))
}

/// Get wallets of one type
#[utoipa::path(
    get,
    path = "/api/v1/wallets/query",
    params(WalletTypeQuery),
    responses(
        (status = 200, description = "Wallets with exactly this type", body = [Wallet]),
        (status = 500, description = "Store failure", body = crate::models::ErrorMessage)
    ),
    tag = "wallet_type"
)]
pub async fn list_wallets_by_type(
    State(state): State<AppState>,
    Query(query): Query<WalletTypeQuery>,
) -> Result<Json<Vec<Wallet>>, ApiError> {
    let wallets = state.store.list_by_type(&query.wallet_type).await?;
    tracing::debug!(
        wallet_type = %query.wallet_type,
        count = wallets.len(),
        "Listed wallets by type"
    );
    Ok(Json(wallets))
}

/// Get wallets owned by a user
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/wallets",
    params(("id" = String, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Wallets owned by the user", body = [Wallet]),
        (status = 500, description = "Store failure", body = crate::models::ErrorMessage)
    ),
    tag = "user_id"
)]
pub async fn list_user_wallets(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Wallet>>, ApiError> {
    let wallets = state.store.list_by_user(&user_id).await?;
    tracing::debug!(user_id = %user_id, count = wallets.len(), "Listed user wallets");
    Ok(Json(wallets))
}

/// Create a wallet
#[utoipa::path(
    post,
    path = "/api/v1/wallets",
    request_body = Wallet,
    responses(
        (status = 200, description = "Created wallet with its assigned id", body = Wallet),
        (status = 400, description = "Malformed body", body = crate::models::ErrorMessage),
        (status = 500, description = "Store failure", body = crate::models::ErrorMessage)
    ),
    tag = "wallet"
)]
pub async fn create_wallet(
    State(state): State<AppState>,
    payload: Result<Json<Wallet>, JsonRejection>,
) -> Result<Json<Wallet>, ApiError> {
    let Json(wallet) = payload?;
    let created = state.store.create(wallet).await?;
    tracing::info!(wallet_id = %created.id, user_id = %created.user_id, "Wallet created");
    Ok(Json(created))
}

/// Replace a wallet, matched by `id`
#[utoipa::path(
    put,
    path = "/api/v1/wallets",
    request_body = Wallet,
    responses(
        (status = 200, description = "Updated wallet", body = Wallet),
        (status = 400, description = "Malformed body", body = crate::models::ErrorMessage),
        (status = 500, description = "Store failure, including unknown id", body = crate::models::ErrorMessage)
    ),
    tag = "wallet"
)]
pub async fn update_wallet(
    State(state): State<AppState>,
    payload: Result<Json<Wallet>, JsonRejection>,
) -> Result<Json<Wallet>, ApiError> {
    let Json(wallet) = payload?;
    let updated = state.store.update_by_id(wallet).await?;
    tracing::info!(wallet_id = %updated.id, "Wallet updated");
    Ok(Json(updated))
}

/// Delete a wallet
///
/// The path segment is the wallet id even though the route sits under `/users`.
/// The body is a plain JSON string, kept for existing clients.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}/wallets",
    params(("id" = String, Path, description = "Wallet id")),
    responses(
        (
            status = 200,
            description = "Confirmation text",
            body = String,
            example = json!("ID : w1 deleted")
        ),
        (status = 500, description = "Store failure, including unknown id", body = crate::models::ErrorMessage)
    ),
    tag = "wallet"
)]
pub async fn delete_wallet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<String>, ApiError> {
    let deleted = state.store.delete_by_id(&id).await?;
    tracing::info!(wallet_id = %deleted, "Wallet deleted");
    Ok(Json(format!("ID : {} deleted", deleted)))
}
