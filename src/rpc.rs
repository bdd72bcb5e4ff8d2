//! RPC transport - the engine's sole I/O primitive
//!
//! A single capability: an `eth_call`-equivalent read against a contract
//! address with pre-encoded calldata, returning the raw result bytes. The
//! trait seam keeps the valuation engine testable without a node; the
//! production implementation goes through an HTTP JSON-RPC provider.
//!
//! No retries and no timeouts here: a failed read fails the whole request,
//! and deadlines belong to the caller.

use alloy_primitives::{Address, Bytes};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;
use tracing::trace;

use crate::error::MetricsError;

/// Read-only contract-call capability.
#[async_trait]
pub trait ReadTransport: Send + Sync {
    /// Execute one `eth_call` against `to` with ABI-encoded `calldata`.
    async fn call(&self, to: Address, calldata: Vec<u8>) -> Result<Bytes, MetricsError>;
}

/// JSON-RPC transport over HTTP.
pub struct HttpTransport {
    rpc_url: String,
}

impl HttpTransport {
    pub fn new(rpc_url: String) -> Self {
        Self { rpc_url }
    }
}

#[async_trait]
impl ReadTransport for HttpTransport {
    async fn call(&self, to: Address, calldata: Vec<u8>) -> Result<Bytes, MetricsError> {
        trace!("eth_call to {to} data 0x{}", hex::encode(&calldata));

        let provider = ProviderBuilder::new().connect_http(
            self.rpc_url
                .parse()
                .map_err(|e| MetricsError::NodeRead(format!("invalid rpc url: {e}")))?,
        );

        let tx = TransactionRequest::default().to(to).input(calldata.into());

        provider
            .call(tx)
            .await
            .map_err(|e| MetricsError::NodeRead(format!("eth_call failed: {e}")))
    }
}

// ============================================
// TEST SUPPORT
// ============================================

#[cfg(test)]
pub mod testing {
    //! Scripted transport for engine tests: a (contract, calldata) ->
    //! response map. Any unscripted read fails, so a passing test also
    //! proves the engine issued no reads beyond the scripted set.

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use alloy_primitives::{Address, Bytes, U256};
    use async_trait::async_trait;

    use crate::error::MetricsError;

    use super::ReadTransport;

    #[derive(Default)]
    pub struct ScriptedTransport {
        responses: HashMap<(Address, Vec<u8>), Vec<u8>>,
        calls: AtomicUsize,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn stub(mut self, to: Address, calldata: Vec<u8>, response: Vec<u8>) -> Self {
            self.responses.insert((to, calldata), response);
            self
        }

        pub fn calls_made(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReadTransport for ScriptedTransport {
        async fn call(&self, to: Address, calldata: Vec<u8>) -> Result<Bytes, MetricsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .get(&(to, calldata))
                .cloned()
                .map(Bytes::from)
                .ok_or_else(|| MetricsError::NodeRead(format!("unscripted call to {to}")))
        }
    }

    /// Shared handle, so a test can keep inspecting the script after the
    /// engine takes ownership of the transport.
    #[async_trait]
    impl ReadTransport for Arc<ScriptedTransport> {
        async fn call(&self, to: Address, calldata: Vec<u8>) -> Result<Bytes, MetricsError> {
            self.as_ref().call(to, calldata).await
        }
    }

    /// A 32-byte big-endian word holding `value`.
    pub fn uint_word(value: U256) -> Vec<u8> {
        value.to_be_bytes::<32>().to_vec()
    }

    /// An address left-padded to a 32-byte word, as returned by the node.
    pub fn address_word(addr: Address) -> Vec<u8> {
        let mut word = vec![0u8; 12];
        word.extend_from_slice(addr.as_slice());
        word
    }
}
