//! Error taxonomy for the valuation engine.
//!
//! Every variant is terminal for the request that produced it: the engine
//! performs no retries and returns no partial results.

use thiserror::Error;

/// Errors produced by the contract accessor and the valuation engine.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The RPC transport failed or the node returned a malformed or empty
    /// result. Retry policy, if any, belongs to the transport.
    #[error("node read failed: {0}")]
    NodeRead(String),

    /// The staking pool's two tokens match none of the recognized base
    /// assets (wrapped native, reward token, reference stablecoin).
    /// Permanent for a given registry configuration.
    #[error("pool holds none of the recognized base assets")]
    UnsupportedPoolComposition,

    /// A reference pair has a zero reserve on the denominator side of a
    /// ratio conversion. A hard failure, never a silent zero.
    #[error("reference pool has zero reserve on the denominator side")]
    EmptyReferencePool,

    /// Checked 256-bit arithmetic left the representable range. Cannot
    /// occur for realistic on-chain values.
    #[error("integer arithmetic out of range in {0}")]
    Arithmetic(&'static str),

    /// Division by zero outside the recognized reference-pool cases.
    #[error("division by zero")]
    DivisionByZero,
}

impl MetricsError {
    /// Reinterpret a zero denominator as an empty reference pool. Applied
    /// at the call sites where the divisor is a pair reserve.
    pub fn surface_empty_pool(self) -> Self {
        match self {
            MetricsError::DivisionByZero => MetricsError::EmptyReferencePool,
            other => other,
        }
    }
}
