/// Wire messages for the topology service contract.
///
/// The remote contract is two operations: `List(ListRequest) -> {objects}`
/// and `Get(GetRequest{id}) -> {object}`. Message payloads travel
/// bincode-encoded inside the frames of [`super::frame`].
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::topo::{Id, Object};

/// A client-to-service request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Request {
    /// Fetch every object the service holds.
    List(ListRequest),
    /// Fetch one object by identifier.
    Get(GetRequest),
}

/// List request body. Carries no filter: listing is always unfiltered and
/// the client filters by type tag locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRequest {}

/// Get request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRequest {
    /// Identifier to look up.
    pub id: Id,
}

/// A service-to-client response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Response {
    /// Answer to [`Request::List`].
    List(ListResponse),
    /// Answer to [`Request::Get`].
    Get(GetResponse),
    /// Service-reported failure (e.g. unknown identifier).
    Error(String),
}

/// List response body: the full object set in service-provided order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResponse {
    /// Every object the service holds, order chosen by the service.
    pub objects: Vec<Object>,
}

/// Get response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetResponse {
    /// The object matching the requested identifier.
    pub object: Object,
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::List(_) => write!(f, "List"),
            Request::Get(get) => write!(f, "Get {}", get.id),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::List(list) => write!(f, "List ({} objects)", list.objects.len()),
            Response::Get(get) => write!(f, "Get {}", get.object.id),
            Response::Error(message) => write!(f, "Error: {message}"),
        }
    }
}
