//! HTTP layer - request routing and response shaping only.
//!
//! Handlers are thin: resolve the chain, check the allowlist, run one
//! engine computation, map the outcome to a status code. Figures go out as
//! decimal strings; 256-bit integers do not survive JSON numbers.

use std::sync::Arc;

use alloy_primitives::Address;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Config;
use crate::error::MetricsError;
use crate::registry::{self, ChainContext};
use crate::rpc::HttpTransport;
use crate::valuation::ValuationEngine;

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
}

/// Build the service router.
pub fn router(config: Config) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };
    Router::new()
        .route("/apr/{address}/{chain_id}", get(get_apr))
        .route("/apr/b/{address}/{chain_id}", get(get_boosted_apr))
        .route("/supply/total/{chain_id}", get(get_total_supply))
        .route("/supply/circulating/{chain_id}", get(get_circulating_supply))
        .route("/locked/{chain_id}", get(get_locked_stats))
        .with_state(state)
}

/// One engine per request: computations are stateless read-and-compute
/// cycles, and the transport is chain-specific.
fn engine_for(state: &AppState, ctx: &ChainContext) -> ValuationEngine<HttpTransport> {
    ValuationEngine::new(HttpTransport::new(state.config.rpc_url_for(ctx)))
}

fn status_of(err: &MetricsError) -> StatusCode {
    match err {
        MetricsError::NodeRead(_) | MetricsError::EmptyReferencePool => StatusCode::BAD_GATEWAY,
        MetricsError::UnsupportedPoolComposition => StatusCode::UNPROCESSABLE_ENTITY,
        MetricsError::Arithmetic(_) | MetricsError::DivisionByZero => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

// ============================================
// APR
// ============================================

async fn get_apr(
    Path((address, chain_id)): Path<(String, u64)>,
    State(state): State<AppState>,
) -> Result<String, StatusCode> {
    apr_response(&state, &address, chain_id, false).await
}

async fn get_boosted_apr(
    Path((address, chain_id)): Path<(String, u64)>,
    State(state): State<AppState>,
) -> Result<String, StatusCode> {
    apr_response(&state, &address, chain_id, true).await
}

async fn apr_response(
    state: &AppState,
    address: &str,
    chain_id: u64,
    boosted: bool,
) -> Result<String, StatusCode> {
    let ctx = registry::resolve(chain_id).ok_or(StatusCode::NOT_FOUND)?;
    let staking: Address = address.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    if !ctx.allows_staking_contract(staking, boosted) {
        return Err(StatusCode::NOT_FOUND);
    }

    engine_for(state, ctx)
        .compute_apr(staking, ctx, boosted)
        .await
        .map(|apr| apr.to_string())
        .map_err(|e| {
            warn!("apr {staking} on chain {chain_id} failed: {e}");
            status_of(&e)
        })
}

// ============================================
// SUPPLY
// ============================================

#[derive(Debug, Deserialize)]
struct SupplyQuery {
    /// Return the raw 18-decimal integer instead of the whole-token figure.
    #[serde(default)]
    raw: bool,
}

async fn get_total_supply(
    Path(chain_id): Path<u64>,
    State(state): State<AppState>,
) -> Result<String, StatusCode> {
    let ctx = registry::resolve(chain_id).ok_or(StatusCode::NOT_FOUND)?;

    engine_for(&state, ctx)
        .accessor()
        .total_supply_of(ctx.reward_token)
        .await
        .map(|supply| supply.to_string())
        .map_err(|e| {
            warn!("total supply on chain {chain_id} failed: {e}");
            status_of(&e)
        })
}

async fn get_circulating_supply(
    Path(chain_id): Path<u64>,
    Query(query): Query<SupplyQuery>,
    State(state): State<AppState>,
) -> Result<String, StatusCode> {
    let ctx = registry::resolve(chain_id).ok_or(StatusCode::NOT_FOUND)?;

    engine_for(&state, ctx)
        .compute_circulating_supply(ctx, !query.raw)
        .await
        .map(|supply| supply.to_string())
        .map_err(|e| {
            warn!("circulating supply on chain {chain_id} failed: {e}");
            status_of(&e)
        })
}

// ============================================
// LOCKED VALUE
// ============================================

#[derive(Debug, Serialize)]
struct LockedResponse {
    locked: String,
    locked_in_native: String,
    locked_in_stable: String,
}

async fn get_locked_stats(
    Path(chain_id): Path<u64>,
    State(state): State<AppState>,
) -> Result<Json<LockedResponse>, StatusCode> {
    let ctx = registry::resolve(chain_id).ok_or(StatusCode::NOT_FOUND)?;

    let stats = engine_for(&state, ctx)
        .compute_locked_stats(ctx.lock_account, ctx)
        .await
        .map_err(|e| {
            warn!("locked stats on chain {chain_id} failed: {e}");
            status_of(&e)
        })?;

    Ok(Json(LockedResponse {
        locked: stats.locked_raw.to_string(),
        locked_in_native: stats.locked_in_native.to_string(),
        locked_in_stable: stats.locked_in_stable.to_string(),
    }))
}
