/// Client side of the topology RPC channel.
///
/// A [`Connection`] performs exactly one request/response exchange per call;
/// dropping it closes the socket, so callers that dial per operation release
/// the connection on every exit path.
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::debug;

use super::errors::RpcError;
use super::frame::{Frame, FrameCodec, FrameType};
use super::wire::{GetRequest, GetResponse, ListRequest, ListResponse, Request, Response};

/// An open channel to the topology service.
pub struct Connection {
    stream: Framed<TcpStream, FrameCodec>,
}

impl Connection {
    /// Dial the service at `address` (`host:port`).
    ///
    /// # Errors
    ///
    /// Returns `RpcError::Io` when the TCP connection cannot be established.
    pub async fn dial(address: &str) -> Result<Self, RpcError> {
        debug!("connecting to {address}");
        let stream = TcpStream::connect(address).await?;
        stream.set_nodelay(true)?;
        Ok(Self {
            stream: Framed::new(stream, FrameCodec),
        })
    }

    /// Issue an unfiltered list request.
    ///
    /// # Errors
    ///
    /// Returns `RpcError` on transport failure, a malformed reply, or a
    /// service-reported error.
    pub async fn list(&mut self, request: ListRequest) -> Result<ListResponse, RpcError> {
        match self.call(Request::List(request)).await? {
            Response::List(list) => Ok(list),
            Response::Error(message) => Err(RpcError::Remote(message)),
            other => Err(RpcError::Protocol(format!(
                "service answered '{other}' to a list request"
            ))),
        }
    }

    /// Issue a get-by-identifier request.
    ///
    /// # Errors
    ///
    /// Returns `RpcError` on transport failure, a malformed reply, or a
    /// service-reported error (including unknown identifiers).
    pub async fn get(&mut self, request: GetRequest) -> Result<GetResponse, RpcError> {
        match self.call(Request::Get(request)).await? {
            Response::Get(get) => Ok(get),
            Response::Error(message) => Err(RpcError::Remote(message)),
            other => Err(RpcError::Protocol(format!(
                "service answered '{other}' to a get request"
            ))),
        }
    }

    /// Send one request frame and wait for the matching response frame.
    async fn call(&mut self, request: Request) -> Result<Response, RpcError> {
        debug!("sending {request}");
        let payload = bincode::serialize(&request)?;
        self.stream.send(Frame::request(payload)).await?;

        let frame = match self.stream.next().await {
            Some(frame) => frame?,
            None => return Err(RpcError::Closed),
        };
        if frame.frame_type != FrameType::Response {
            return Err(RpcError::Protocol(format!(
                "expected a response frame, got {:?}",
                frame.frame_type
            )));
        }

        let response: Response = bincode::deserialize(&frame.payload)?;
        debug!("received {response}");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use tokio::net::TcpListener;

    use super::*;
    use crate::topo::{Id, Object};

    /// Serve one canned exchange on an ephemeral port.
    async fn spawn_service(objects: Vec<Object>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut stream = Framed::new(socket, FrameCodec);
            let frame = stream.next().await.unwrap().unwrap();
            assert_eq!(frame.frame_type, FrameType::Request);
            let request: Request = bincode::deserialize(&frame.payload).unwrap();
            let response = match request {
                Request::List(_) => Response::List(ListResponse { objects }),
                Request::Get(get) => Response::Error(format!("object '{}' not found", get.id)),
            };
            let payload = bincode::serialize(&response).unwrap();
            stream.send(Frame::response(payload)).await.unwrap();
        });
        address
    }

    #[tokio::test]
    async fn test_one_shot_list_exchange() {
        let address = spawn_service(vec![Object::kind("k1", "switch")]).await;
        let mut conn = Connection::dial(&address).await.unwrap();
        let response = conn.list(ListRequest::default()).await.unwrap();
        assert_eq!(response.objects.len(), 1);
        assert_eq!(response.objects[0].id.as_str(), "k1");
    }

    #[tokio::test]
    async fn test_service_error_surfaces_as_remote() {
        let address = spawn_service(Vec::new()).await;
        let mut conn = Connection::dial(&address).await.unwrap();
        let err = conn
            .get(GetRequest {
                id: Id::new("ghost"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RpcError::Remote(message) if message.contains("ghost")));
    }
}
