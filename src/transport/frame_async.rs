use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, trace};

use crate::protocol::error::{FrameError, Result};
use crate::protocol::{Message, MessageHeader, HEADER_LEN, MAX_MESSAGE_SIZE};

/// Async framing transport.
///
/// The async twin of [`FrameTransport`](super::FrameTransport): identical
/// wire behavior and error contract, expressed as an awaited loop over
/// partial transfers instead of a blocking one. Suitable for endpoints
/// driven by a tokio runtime (`tokio::net::TcpStream` halves, duplex pipes).
///
/// # Example
///
/// ```no_run
/// use framewire::{FrameTransportAsync, Message};
///
/// # async fn demo() -> framewire::Result<()> {
/// let mut stream = tokio::net::TcpStream::connect("127.0.0.1:9000").await?;
///
/// let msg = Message::new(1, b"ping".to_vec())?;
/// FrameTransportAsync::send_message(&mut stream, &msg).await?;
///
/// let mut reply = Message::with_capacity(4096);
/// FrameTransportAsync::receive_message(&mut stream, &mut reply).await?;
/// # Ok(())
/// # }
/// ```
pub struct FrameTransportAsync;

impl FrameTransportAsync {
    /// Sends a complete message (async). See
    /// [`FrameTransport::send_message`](super::FrameTransport::send_message)
    /// for the contract.
    pub async fn send_message<W>(endpoint: &mut W, message: &Message) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let header = message.header();
        write_full(endpoint, &header.encode(), "header").await?;
        if !message.is_empty() {
            write_full(endpoint, message.body(), "body").await?;
        }
        endpoint.flush().await?;

        trace!(kind = header.kind, length = header.length, "frame sent");
        Ok(())
    }

    /// Receives one complete message into the caller's buffer (async). See
    /// [`FrameTransport::receive_message`](super::FrameTransport::receive_message)
    /// for the contract.
    pub async fn receive_message<R>(endpoint: &mut R, message: &mut Message) -> Result<()>
    where
        R: AsyncRead + Unpin,
    {
        if let Err(e) = receive_frame(endpoint, &mut *message).await {
            message.mark_invalid();
            return Err(e);
        }
        Ok(())
    }
}

async fn receive_frame<R>(endpoint: &mut R, message: &mut Message) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut header_buf = [0u8; HEADER_LEN];
    read_full(endpoint, &mut header_buf, "header").await?;
    let header = MessageHeader::decode(&header_buf);

    let length = header.length as usize;
    if length > message.capacity() || length > MAX_MESSAGE_SIZE {
        debug!(
            length,
            capacity = message.capacity(),
            "rejecting oversized frame"
        );
        return Err(FrameError::OversizedBody {
            length,
            capacity: message.capacity().min(MAX_MESSAGE_SIZE),
        });
    }

    let body = message.prepare_receive(header);
    if !body.is_empty() {
        read_full(endpoint, body, "body").await?;
    }

    trace!(kind = header.kind, length = header.length, "frame received");
    Ok(())
}

async fn write_full<W>(endpoint: &mut W, buf: &[u8], phase: &'static str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    while written < buf.len() {
        match endpoint.write(&buf[written..]).await {
            Ok(0) => return Err(FrameError::Disconnected(phase)),
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FrameError::Io(e)),
        }
    }
    Ok(())
}

async fn read_full<R>(endpoint: &mut R, buf: &mut [u8], phase: &'static str) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut received = 0;
    while received < buf.len() {
        match endpoint.read(&mut buf[received..]).await {
            Ok(0) => return Err(FrameError::Disconnected(phase)),
            Ok(n) => received += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FrameError::Io(e)),
        }
    }
    Ok(())
}
