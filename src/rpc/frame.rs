/// Length-prefixed frame codec for the topology RPC channel.
///
/// Wire layout: `[type: u8][payload length: u32 BE][payload]`. The channel
/// carries exactly one request and one response per connection, so there is
/// no message numbering or multiplexing.
use bytes::{Buf, BufMut, Bytes, BytesMut};
use thiserror::Error;
use tokio_util::codec::{Decoder, Encoder};

/// Upper bound on a single frame's payload. A full topology listing arrives
/// as one response frame, so the cap is generous.
pub const MAX_FRAME_SIZE: usize = 16 * 1024 * 1024;

/// 1 byte frame type + 4 bytes payload length.
const HEADER_SIZE: usize = 5;

/// Errors raised while encoding or decoding frames.
#[derive(Debug, Error)]
pub enum FrameError {
    /// Payload exceeds [`MAX_FRAME_SIZE`].
    #[error("frame too large: {size} bytes")]
    FrameTooLarge {
        /// Claimed or actual payload size.
        size: usize,
    },

    /// The type byte does not name a known frame type.
    #[error("invalid frame type: {0}")]
    InvalidFrameType(u8),

    /// Underlying transport failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Frame discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FrameType {
    /// Client-to-service request.
    Request = 0,
    /// Service-to-client response.
    Response = 1,
}

impl TryFrom<u8> for FrameType {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FrameType::Request),
            1 => Ok(FrameType::Response),
            n => Err(FrameError::InvalidFrameType(n)),
        }
    }
}

/// One tagged payload on the wire.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Frame discriminator.
    pub frame_type: FrameType,
    /// Opaque payload bytes (bincode-encoded wire message).
    pub payload: Bytes,
}

impl Frame {
    /// Build a request frame.
    #[must_use]
    pub fn request(payload: impl Into<Bytes>) -> Self {
        Self {
            frame_type: FrameType::Request,
            payload: payload.into(),
        }
    }

    /// Build a response frame.
    #[must_use]
    pub fn response(payload: impl Into<Bytes>) -> Self {
        Self {
            frame_type: FrameType::Response,
            payload: payload.into(),
        }
    }
}

/// Codec turning a byte stream into [`Frame`]s and back.
pub struct FrameCodec;

impl Decoder for FrameCodec {
    type Item = Frame;
    type Error = FrameError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < HEADER_SIZE {
            return Ok(None);
        }

        // Peek at the header without consuming it.
        let frame_type = FrameType::try_from(src[0])?;
        let len = (&src[1..HEADER_SIZE]).get_u32() as usize;

        if len > MAX_FRAME_SIZE {
            return Err(FrameError::FrameTooLarge { size: len });
        }

        if src.len() < HEADER_SIZE + len {
            // Wait for the rest of the payload.
            return Ok(None);
        }

        src.advance(HEADER_SIZE);
        let payload = src.split_to(len).freeze();

        Ok(Some(Frame {
            frame_type,
            payload,
        }))
    }
}

impl Encoder<Frame> for FrameCodec {
    type Error = FrameError;

    fn encode(&mut self, item: Frame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let payload_len = item.payload.len();
        if payload_len > MAX_FRAME_SIZE {
            return Err(FrameError::FrameTooLarge { size: payload_len });
        }
        let wire_len = u32::try_from(payload_len)
            .map_err(|_| FrameError::FrameTooLarge { size: payload_len })?;

        dst.reserve(HEADER_SIZE + payload_len);
        dst.put_u8(item.frame_type as u8);
        dst.put_u32(wire_len);
        dst.extend_from_slice(&item.payload);

        Ok(())
    }
}
