/// Errors from the topology RPC transport layer.
use thiserror::Error;

use super::frame::FrameError;

/// Typed transport failures, wrapped by the command layer's `TopoError`.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Socket-level failure (connect, read, write).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame-level failure (oversized frame, bad type byte).
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// A request could not be encoded or a response could not be decoded.
    #[error("codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// The peer violated the one-request/one-response protocol.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The connection closed before a response arrived.
    #[error("connection closed before a response arrived")]
    Closed,

    /// The service answered with an error instead of a result.
    #[error("{0}")]
    Remote(String),
}
