//! Framewire: fixed-header, variable-body message framing
//!
//! This crate provides the framing layer for exchanging discrete messages
//! over a continuous byte stream (typically a connected TCP socket).
//!
//! # Overview
//!
//! Each message is a fixed-size header followed by an opaque body:
//!
//! ```text
//! [2-byte kind, big-endian u16] [4-byte length, big-endian u32] [body bytes]
//! ```
//!
//! The transport reads and writes whole messages, looping over partial
//! transfers and retrying transient interrupts, so a successful call always
//! moves exactly one complete message. Body contents are never interpreted;
//! the `kind` tag is carried for the application's benefit only.
//!
//! # Components
//!
//! - [`protocol`] - Wire types ([`Message`], [`MessageHeader`]) and errors
//! - [`transport`] - Blocking ([`FrameTransport`]) and async
//!   ([`FrameTransportAsync`]) framing implementations
//!
//! # Example
//!
//! ```
//! use framewire::{FrameTransport, Message};
//!
//! let msg = Message::new(1, b"hello".to_vec()).unwrap();
//!
//! let mut wire = Vec::new();
//! FrameTransport::send_message(&mut wire, &msg).unwrap();
//!
//! let mut received = Message::with_capacity(64);
//! FrameTransport::receive_message(&mut &wire[..], &mut received).unwrap();
//! assert_eq!(received.kind(), 1);
//! assert_eq!(received.body(), b"hello");
//! ```
//!
//! Connection setup, timeouts, and message dispatch are the caller's
//! responsibility: the transport operates on endpoints it is handed and
//! never opens, closes, or configures them.

pub mod protocol;
pub mod transport;

pub use protocol::error::{FrameError, Result};
pub use protocol::{Message, MessageHeader, HEADER_LEN, MAX_MESSAGE_SIZE};
pub use transport::{FrameTransport, FrameTransportAsync};
