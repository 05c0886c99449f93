use thiserror::Error;

/// Failure of a read against a [`PacketView`](crate::PacketView).
///
/// There is only one way for this layer to fail: a computed read lies
/// (partly) outside the valid bytes of the view. The caller is expected to
/// drop the packet as malformed or truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PacketError {
    #[error("OutOfRange: {width} bytes at offset {offset} exceed packet length {length}")]
    OutOfRange {
        offset: usize,
        width: usize,
        length: usize,
    },
}

pub type Result<T, E = PacketError> = std::result::Result<T, E>;
