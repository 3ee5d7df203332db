/// Transport layer: framed-TCP RPC channel to the topology service.
pub mod client;
pub mod errors;
pub mod frame;
pub mod wire;

pub use client::Connection;
pub use errors::RpcError;
pub use frame::{Frame, FrameCodec, FrameType};
pub use wire::{GetRequest, GetResponse, ListRequest, ListResponse, Request, Response};
