//! Shared test helpers: an in-process topology service fixture.
//!
//! The fixture speaks the framed-TCP protocol over a std `TcpListener` with
//! hand-rolled frame parsing, so a drift in the client's wire layout fails
//! these tests instead of round-tripping silently.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use anyhow::{Context, Result, bail};
use assert_cmd::Command;
use assert_cmd::cargo;

use topocli::rpc::{GetRequest, GetResponse, ListResponse, Request, Response};
use topocli::topo::Object;

const FRAME_REQUEST: u8 = 0;
const FRAME_RESPONSE: u8 = 1;

/// Helper to get a topocli command with a clean environment.
pub fn topocli() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("topocli"));
    cmd.env_remove("TOPO_ADDRESS").env_remove("RUST_LOG");
    cmd
}

/// A small mixed topology: two entities, one relation, two kinds.
pub fn sample_objects() -> Vec<Object> {
    vec![
        Object::entity("e1", "k-camera")
            .with_aspect("onos.topo.Location", &br#"{"lat":52.1}"#[..]),
        Object::entity("e2", "k-camera"),
        Object::relation("r1", "k-link", "e1", "e2"),
        Object::kind("k-camera", "camera"),
        Object::kind("k-link", "link"),
    ]
}

/// An in-process topology service serving a fixed object set.
pub struct Fixture {
    address: String,
}

impl Fixture {
    /// Spawn the service over `objects` on an ephemeral port. The accept
    /// loop runs on a detached thread for the lifetime of the test process,
    /// answering one request per connection.
    pub fn spawn(objects: Vec<Object>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap().to_string();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let _ = serve_one(stream, &objects);
            }
        });
        Self { address }
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Spawn a service that accepts connections and hangs up without answering.
pub fn spawn_hangup_service() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();
    thread::spawn(move || {
        for stream in listener.incoming() {
            drop(stream);
        }
    });
    address
}

/// An address nobody is listening on.
pub fn dead_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);
    address
}

/// Answer exactly one request on `stream`, then hang up.
fn serve_one(mut stream: TcpStream, objects: &[Object]) -> Result<()> {
    let (frame_type, payload) = read_frame(&mut stream)?;
    if frame_type != FRAME_REQUEST {
        bail!("unexpected frame type {frame_type}");
    }

    let request: Request = bincode::deserialize(&payload).context("decoding request")?;
    let response = match request {
        Request::List(_) => Response::List(ListResponse {
            objects: objects.to_vec(),
        }),
        Request::Get(GetRequest { id }) => match objects.iter().find(|o| o.id == id) {
            Some(object) => Response::Get(GetResponse {
                object: object.clone(),
            }),
            None => Response::Error(format!("object '{id}' not found")),
        },
    };

    let payload = bincode::serialize(&response).context("encoding response")?;
    write_frame(&mut stream, FRAME_RESPONSE, &payload)
}

/// Read one `[type: u8][len: u32 BE][payload]` frame.
fn read_frame(stream: &mut TcpStream) -> Result<(u8, Vec<u8>)> {
    let mut header = [0u8; 5];
    stream
        .read_exact(&mut header)
        .context("reading frame header")?;
    let len = u32::from_be_bytes([header[1], header[2], header[3], header[4]]) as usize;
    let mut payload = vec![0u8; len];
    stream
        .read_exact(&mut payload)
        .context("reading frame payload")?;
    Ok((header[0], payload))
}

/// Write one `[type: u8][len: u32 BE][payload]` frame.
fn write_frame(stream: &mut TcpStream, frame_type: u8, payload: &[u8]) -> Result<()> {
    let len = u32::try_from(payload.len()).context("payload too large for a frame")?;
    let mut frame = Vec::with_capacity(5 + payload.len());
    frame.push(frame_type);
    frame.extend_from_slice(&len.to_be_bytes());
    frame.extend_from_slice(payload);
    stream.write_all(&frame).context("writing frame")?;
    Ok(())
}
