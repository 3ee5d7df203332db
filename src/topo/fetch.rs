/// The object fetcher: one fresh connection and exactly one remote call per
/// operation. The connection handle owns the socket, so it is released on
/// every exit path, error paths included.
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, error};

use crate::rpc::{Connection, GetRequest, ListRequest};

use super::errors::TopoError;
use super::object::{Id, Object};

/// Fixed deadline for a single get-by-identifier exchange.
pub const GET_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetch every object the service holds, in service-provided order.
///
/// The list path has no explicit deadline; it relies on the transport's own
/// defaults. No retries; one failed attempt is final for the invocation.
///
/// # Errors
///
/// `TopoError::Connect` when dialing fails, `TopoError::List` when the call
/// itself does.
pub async fn list_objects(address: &str) -> Result<Vec<Object>, TopoError> {
    let mut conn = Connection::dial(address)
        .await
        .map_err(|source| TopoError::Connect {
            address: address.to_owned(),
            source,
        })?;

    let response = conn
        .list(ListRequest::default())
        .await
        .map_err(|source| TopoError::List { source })?;

    debug!("listed {} objects", response.objects.len());
    Ok(response.objects)
}

/// Fetch one object by identifier, bounded by [`GET_TIMEOUT`].
///
/// Dropping the timed-out future cancels the in-flight exchange and closes
/// the connection. No retries.
///
/// # Errors
///
/// `TopoError::Connect` when dialing fails; `TopoError::Get` or
/// `TopoError::GetTimeout` when the lookup does. A diagnostic is logged
/// before the error propagates.
pub async fn get_object(address: &str, id: &Id) -> Result<Object, TopoError> {
    let mut conn = Connection::dial(address)
        .await
        .map_err(|source| TopoError::Connect {
            address: address.to_owned(),
            source,
        })?;

    let request = GetRequest { id: id.clone() };
    match timeout(GET_TIMEOUT, conn.get(request)).await {
        Ok(Ok(response)) => Ok(response.object),
        Ok(Err(source)) => {
            error!("get request for '{id}' failed");
            Err(TopoError::Get {
                id: id.clone(),
                source,
            })
        }
        Err(_elapsed) => {
            error!("get request for '{id}' timed out");
            Err(TopoError::GetTimeout {
                id: id.clone(),
                seconds: GET_TIMEOUT.as_secs(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Grab an address nobody is listening on.
    async fn dead_address() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        drop(listener);
        address
    }

    #[tokio::test]
    async fn test_list_surfaces_connect_errors() {
        let address = dead_address().await;
        let err = list_objects(&address).await.unwrap_err();
        assert!(matches!(err, TopoError::Connect { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn test_get_surfaces_connect_errors() {
        let address = dead_address().await;
        let err = get_object(&address, &Id::new("e1")).await.unwrap_err();
        assert!(matches!(err, TopoError::Connect { .. }));
    }

    #[tokio::test]
    async fn test_closed_connection_is_a_list_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();

        // Accept and immediately hang up, before any response is written.
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            drop(socket);
        });

        let err = list_objects(&address).await.unwrap_err();
        assert!(matches!(err, TopoError::List { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
