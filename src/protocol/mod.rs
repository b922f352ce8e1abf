//! Wire types for framewire messages.
//!
//! A message on the wire is a fixed 6-byte header followed by `length` body
//! bytes. The header is encoded and decoded explicitly, field by field, in
//! big-endian byte order; both ends of a connection must use this crate's
//! layout (this is a private framing format, not an interchange protocol).
//!
//! # Wire Format
//!
//! ```text
//! [kind: u16 big-endian] [length: u32 big-endian] [length body bytes]
//! ```

pub mod error;

use error::{FrameError, Result};

/// Size of the encoded message header in bytes.
pub const HEADER_LEN: usize = 6;

/// Hard upper bound on a message body (16 MB).
///
/// Enforced on both send and receive to prevent memory exhaustion from a
/// corrupt or hostile length field. Receive buffers may impose a smaller
/// bound through their capacity.
pub const MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;

/// Fixed-size message header.
///
/// `kind` is an opaque application tag; the transport carries it without
/// interpreting it. `length` is the exact number of body bytes that follow
/// the header on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageHeader {
    pub kind: u16,
    pub length: u32,
}

impl MessageHeader {
    /// Encodes the header into its fixed 6-byte wire form.
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[..2].copy_from_slice(&self.kind.to_be_bytes());
        buf[2..].copy_from_slice(&self.length.to_be_bytes());
        buf
    }

    /// Decodes a header from its fixed 6-byte wire form.
    pub fn decode(buf: &[u8; HEADER_LEN]) -> Self {
        MessageHeader {
            kind: u16::from_be_bytes([buf[0], buf[1]]),
            length: u32::from_be_bytes([buf[2], buf[3], buf[4], buf[5]]),
        }
    }
}

/// A complete message: header plus owned body buffer.
///
/// On the send path the caller constructs the message with [`Message::new`]
/// and the header's `length` always matches the body. On the receive path
/// the caller allocates the buffer once with [`Message::with_capacity`] and
/// the transport fills it in place; the capacity bounds the body length the
/// message will accept, and a frame declaring more is rejected before any
/// body byte is read.
///
/// The transport never retains a reference to the buffer after a call
/// returns, so a single message can be reused across many receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    header: MessageHeader,
    body: Vec<u8>,
    capacity: usize,
}

impl Message {
    /// Creates a message for sending; `length` is derived from the body.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::OversizedBody`] if the body exceeds
    /// [`MAX_MESSAGE_SIZE`].
    pub fn new(kind: u16, body: Vec<u8>) -> Result<Self> {
        if body.len() > MAX_MESSAGE_SIZE {
            return Err(FrameError::OversizedBody {
                length: body.len(),
                capacity: MAX_MESSAGE_SIZE,
            });
        }
        let capacity = body.len();
        Ok(Message {
            header: MessageHeader {
                kind,
                length: body.len() as u32,
            },
            body,
            capacity,
        })
    }

    /// Creates an empty receive buffer accepting bodies up to `capacity`
    /// bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Message {
            header: MessageHeader::default(),
            body: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// The message header.
    pub fn header(&self) -> MessageHeader {
        self.header
    }

    /// The application tag from the header.
    pub fn kind(&self) -> u16 {
        self.header.kind
    }

    /// The body bytes. Length always matches `header().length`.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body length in bytes.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Whether the body is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The largest body this message will accept on receive.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consumes the message, returning the body buffer.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Installs a received header and sizes the body for the incoming
    /// frame, returning the region the transport fills.
    ///
    /// The caller must have validated `header.length` against
    /// [`Message::capacity`] first.
    pub(crate) fn prepare_receive(&mut self, header: MessageHeader) -> &mut [u8] {
        self.header = header;
        self.body.resize(header.length as usize, 0);
        &mut self.body
    }

    /// Discards a partially received frame so the message is never left
    /// looking like a valid one.
    pub(crate) fn mark_invalid(&mut self) {
        self.header = MessageHeader::default();
        self.body.clear();
    }
}
