//! Framing transports.
//!
//! Two implementations of the same framing contract:
//!
//! - **[`FrameTransport`]**: blocking, over any `std::io::{Read, Write}`
//!   endpoint (a connected `TcpStream`, typically)
//! - **[`FrameTransportAsync`]**: async, over any
//!   `tokio::io::{AsyncRead, AsyncWrite}` endpoint
//!
//! Both move exactly one complete message per call, looping over partial
//! transfers and silently retrying transient interrupts. Neither is safe
//! for concurrent use of a single endpoint direction; callers run at most
//! one sender and one receiver per connection (the two directions are
//! independent streams). Timeouts and cancellation belong to the endpoint
//! (socket options, async deadlines), not to this layer.

pub mod frame;
pub mod frame_async;

pub use frame::FrameTransport;
pub use frame_async::FrameTransportAsync;
