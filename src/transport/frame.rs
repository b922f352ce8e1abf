use std::io::{self, Read, Write};

use tracing::{debug, trace};

use crate::protocol::error::{FrameError, Result};
use crate::protocol::{Message, MessageHeader, HEADER_LEN, MAX_MESSAGE_SIZE};

/// Blocking framing transport.
///
/// Operates on any `std::io::{Read, Write}` endpoint with stream semantics:
/// writes may be partial and reads may deliver fewer bytes than requested,
/// so both operations loop until the full message has crossed. A call blocks
/// the thread until the message is complete or the transfer fails.
///
/// # Example
///
/// ```no_run
/// use std::net::TcpStream;
/// use framewire::{FrameTransport, Message};
///
/// let mut stream = TcpStream::connect("127.0.0.1:9000").unwrap();
///
/// let msg = Message::new(1, b"ping".to_vec()).unwrap();
/// FrameTransport::send_message(&mut stream, &msg).unwrap();
///
/// let mut reply = Message::with_capacity(4096);
/// FrameTransport::receive_message(&mut stream, &mut reply).unwrap();
/// ```
pub struct FrameTransport;

impl FrameTransport {
    /// Sends a complete message: 6-byte header, then exactly
    /// `header.length` body bytes, then a flush.
    ///
    /// Partial writes are retried with the remainder until the full byte
    /// count has been transmitted. A transient interrupt
    /// (`ErrorKind::Interrupted`) retries the same write immediately.
    ///
    /// # Errors
    ///
    /// Any other write failure, or a write returning zero bytes, aborts
    /// with an error. Bytes already written stay on the wire; stream
    /// framing is not transactional, so the caller should drop the
    /// connection after a failure.
    pub fn send_message<W: Write>(endpoint: &mut W, message: &Message) -> Result<()> {
        let header = message.header();
        write_full(endpoint, &header.encode(), "header")?;
        if !message.is_empty() {
            write_full(endpoint, message.body(), "body")?;
        }
        endpoint.flush()?;

        trace!(kind = header.kind, length = header.length, "frame sent");
        Ok(())
    }

    /// Receives one complete message into the caller's buffer.
    ///
    /// Reads exactly [`HEADER_LEN`] header bytes, decodes the length, then
    /// reads exactly that many body bytes; a zero length is valid and
    /// completes the message without a body-phase read. Partial reads and
    /// transient interrupts are handled as in [`Self::send_message`].
    ///
    /// # Errors
    ///
    /// - [`FrameError::OversizedBody`] if the declared length exceeds
    ///   `message.capacity()` (or [`MAX_MESSAGE_SIZE`]); rejected before
    ///   any body byte is read
    /// - [`FrameError::Disconnected`] if the peer closes the stream
    ///   mid-message
    /// - [`FrameError::Io`] for any other read failure
    ///
    /// After an error the stream's framing alignment can no longer be
    /// trusted and `message` holds no valid frame, even if a previous
    /// receive into the same buffer succeeded.
    pub fn receive_message<R: Read>(endpoint: &mut R, message: &mut Message) -> Result<()> {
        if let Err(e) = receive_frame(endpoint, &mut *message) {
            message.mark_invalid();
            return Err(e);
        }
        Ok(())
    }
}

fn receive_frame<R: Read>(endpoint: &mut R, message: &mut Message) -> Result<()> {
    let mut header_buf = [0u8; HEADER_LEN];
    read_full(endpoint, &mut header_buf, "header")?;
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
        read_full(endpoint, body, "body")?;
    }

    trace!(kind = header.kind, length = header.length, "frame received");
    Ok(())
}

/// Writes the whole buffer, looping over partial writes.
///
/// Zero-byte writes abort: stream semantics give a full or partial write on
/// success, so zero progress means the endpoint can take no more data.
fn write_full<W: Write>(endpoint: &mut W, buf: &[u8], phase: &'static str) -> Result<()> {
    let mut written = 0;
    while written < buf.len() {
        match endpoint.write(&buf[written..]) {
            Ok(0) => return Err(FrameError::Disconnected(phase)),
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FrameError::Io(e)),
        }
    }
    Ok(())
}

/// Fills the whole buffer, looping over partial reads.
///
/// A read of zero bytes means the peer closed the stream before the message
/// was complete.
fn read_full<R: Read>(endpoint: &mut R, buf: &mut [u8], phase: &'static str) -> Result<()> {
    let mut received = 0;
    while received < buf.len() {
        match endpoint.read(&mut buf[received..]) {
            Ok(0) => return Err(FrameError::Disconnected(phase)),
            Ok(n) => received += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FrameError::Io(e)),
        }
    }
    Ok(())
}
