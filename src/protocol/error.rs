use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stream closed while transferring {0}")]
    Disconnected(&'static str),

    #[error("Body too large: {length} bytes (buffer capacity {capacity} bytes)")]
    OversizedBody { length: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
