//! This crate contains all shared fullstack server functions.

pub mod client_prefs;
pub mod envelope;
pub mod order_counts;
pub mod order_totals;
pub mod stall_endpoint;

use dioxus::prelude::*;

use client_prefs::ClientPrefs;
use envelope::RpcMethod;
use order_counts::OrderCounts;
use order_totals::AllOrderTotals;
use order_totals::OrderTotals;
use order_totals::UndeliveredTotals;
use stall_endpoint::StallEndpoint;

pub type ApiError = anyhow::Error;

/// Resolves the client settings and verifies the stall endpoint is
/// configured. Runs once while the initial page is prepared, so a
/// missing `STALL_API_URL` shows up on the start screen instead of as a
/// silent polling stall.
#[post("/api/client_prefs")]
pub async fn client_prefs() -> Result<ClientPrefs, ApiError> {
    StallEndpoint::from_env()?;
    Ok(ClientPrefs::from_env())
}

/// Combined lifetime and undelivered totals, via `GET_ORDER`.
#[post("/api/order_totals")]
pub async fn order_totals() -> Result<OrderTotals, ApiError> {
    let totals: OrderTotals = stall_rpc::call(RpcMethod::GetOrder, None).await?;
    dioxus_logger::tracing::info!("fetched totals: {:?}", totals);
    Ok(totals)
}

/// Lifetime totals only, via the older `GET_ALL_ORDER` query.
#[post("/api/all_order_totals")]
pub async fn all_order_totals() -> Result<AllOrderTotals, ApiError> {
    let totals = stall_rpc::call(RpcMethod::GetAllOrder, None).await?;
    Ok(totals)
}

/// Undelivered counts only, via the older `GET_UNDELIVERED_ORDER` query.
#[post("/api/undelivered_totals")]
pub async fn undelivered_totals() -> Result<UndeliveredTotals, ApiError> {
    let totals = stall_rpc::call(RpcMethod::GetUndeliveredOrder, None).await?;
    Ok(totals)
}

/// Registers a new order for the given counts.
#[post("/api/add_order")]
pub async fn add_order(counts: OrderCounts) -> Result<(), ApiError> {
    stall_rpc::submit(RpcMethod::AddOrder, counts).await
}

/// Marks the given counts as handed out, decrementing the undelivered
/// totals on the backend.
#[post("/api/deliver_order")]
pub async fn deliver_order(counts: OrderCounts) -> Result<(), ApiError> {
    stall_rpc::submit(RpcMethod::DeliverOrder, counts).await
}

#[cfg(not(target_arch = "wasm32"))]
mod stall_rpc {
    //! The gateway to the stall backend: one statically configured POST
    //! endpoint serving every method through the shared envelope.

    use serde::de::DeserializeOwned;

    use super::ApiError;
    use crate::envelope::RpcEnvelope;
    use crate::envelope::RpcMethod;
    use crate::order_counts::OrderCounts;
    use crate::stall_endpoint::StallEndpoint;

    /// Issues one envelope POST and decodes the JSON response.
    ///
    /// No retry, no timeout: a transport or decode failure propagates to
    /// the caller unchanged. Callers must tolerate missing data until a
    /// call completes.
    pub async fn call<T: DeserializeOwned>(
        method: RpcMethod,
        params: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let endpoint = StallEndpoint::from_env()?;
        let envelope = RpcEnvelope::new(endpoint.auth_token, method, params);

        let client = reqwest::Client::new();
        let response = client
            .post(&endpoint.url)
            .json(&envelope)
            .send()
            .await?
            .json::<T>()
            .await?;

        Ok(response)
    }

    /// Sends a mutation and discards the method-specific response body.
    pub async fn submit(method: RpcMethod, counts: OrderCounts) -> Result<(), ApiError> {
        let params = serde_json::to_value(counts)?;
        let _response: serde_json::Value = call(method, Some(params)).await?;
        dioxus_logger::tracing::info!("{} accepted for {:?}", method.name(), counts);
        Ok(())
    }
}
