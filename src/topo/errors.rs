/// Errors from the topology command layer.
use thiserror::Error;

use crate::rpc::RpcError;

use super::object::Id;

/// Errors that can stop a command invocation.
///
/// List failures also surface as `TopoError` from the fetcher, but the
/// dispatcher absorbs them instead of letting them reach `main`.
#[derive(Debug, Error)]
pub enum TopoError {
    /// The transport to the service could not be established.
    #[error("failed to connect to topology service at '{address}'")]
    Connect {
        /// Endpoint that was dialed.
        address: String,
        /// Underlying transport failure.
        source: RpcError,
    },

    /// An unfiltered list call failed.
    #[error("list request failed")]
    List {
        /// Underlying transport or service failure.
        source: RpcError,
    },

    /// A get-by-identifier call failed (remote error or protocol fault).
    #[error("get request for '{id}' failed")]
    Get {
        /// Identifier that was looked up.
        id: Id,
        /// Underlying transport or service failure.
        source: RpcError,
    },

    /// A get-by-identifier call exceeded the fixed deadline.
    #[error("get request for '{id}' timed out after {seconds}s")]
    GetTimeout {
        /// Identifier that was looked up.
        id: Id,
        /// The deadline that elapsed.
        seconds: u64,
    },

    /// The output sink failed mid-write (e.g. stdout closed).
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit code mapping for `TopoError` variants.
impl TopoError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Connect { .. } => 2,
            Self::List { .. } | Self::Get { .. } | Self::GetTimeout { .. } | Self::Io(_) => 1,
        }
    }
}
