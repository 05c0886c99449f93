use crate::error::{PacketError, Result};

use log::trace;
use nom::number::complete::{be_i32, be_u16, be_u32, be_u8};
use nom::IResult;

/// A read-only window over one received or outgoing packet
///
/// The view borrows the caller's buffer; nothing is copied on construction.
/// Every read is relative to the start of the window and is checked against
/// its length, so a read never touches bytes outside the packet.
#[derive(Debug, Clone, Copy)]
pub struct PacketView<'a> {
    // underlying buffer, owned by the caller
    buffer: &'a [u8],

    // start of the packet inside the buffer
    offset: usize,

    // number of valid packet bytes from `offset`
    length: usize,
}

impl<'a> PacketView<'a> {
    /// View `length` bytes of `buffer` starting at `offset`.
    ///
    /// ```
    /// use srtp_fields::PacketView;
    ///
    /// let buffer = [0xFF, 0x12, 0x34, 0xFF];
    /// let view = PacketView::new(&buffer, 1, 2).unwrap();
    /// assert_eq!(view.length(), 2);
    /// assert_eq!(view.read_unsigned_short(0).unwrap(), 0x1234);
    /// ```
    pub fn new(buffer: &'a [u8], offset: usize, length: usize) -> Result<Self> {
        match offset.checked_add(length) {
            Some(end) if end <= buffer.len() => Ok(Self {
                buffer,
                offset,
                length,
            }),
            _ => Err(PacketError::OutOfRange {
                offset,
                width: length,
                length: buffer.len(),
            }),
        }
    }

    /// Number of valid bytes in the view.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The valid bytes of the view.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buffer[self.offset..self.offset + self.length]
    }

    pub fn read_byte(&self, offset: usize) -> Result<u8> {
        let input = self.region(offset, 1)?;
        self.finish(offset, 1, be_u8(input))
    }

    pub fn read_unsigned_short(&self, offset: usize) -> Result<u16> {
        let input = self.region(offset, 2)?;
        self.finish(offset, 2, be_u16(input))
    }

    pub fn read_int(&self, offset: usize) -> Result<i32> {
        let input = self.region(offset, 4)?;
        self.finish(offset, 4, be_i32(input))
    }

    pub fn read_unsigned_int(&self, offset: usize) -> Result<u32> {
        let input = self.region(offset, 4)?;
        self.finish(offset, 4, be_u32(input))
    }

    /// Borrow `count` bytes starting at `offset`.
    pub fn region(&self, offset: usize, count: usize) -> Result<&'a [u8]> {
        match offset.checked_add(count) {
            Some(end) if end <= self.length => {
                Ok(&self.buffer[self.offset + offset..self.offset + end])
            }
            _ => Err(self.out_of_range(offset, count)),
        }
    }

    /// Copy `count` bytes starting at `offset` out of the packet, for values
    /// that must outlive the view.
    pub fn read_region(&self, offset: usize, count: usize) -> Result<Vec<u8>> {
        self.region(offset, count).map(<[u8]>::to_vec)
    }

    pub(crate) fn out_of_range(&self, offset: usize, width: usize) -> PacketError {
        trace!(
            "packet read out of range: offset={}, width={}, length={}",
            offset,
            width,
            self.length
        );

        PacketError::OutOfRange {
            offset,
            width,
            length: self.length,
        }
    }

    // the region was checked beforehand, a parser error here still maps to
    // the same failure rather than a panic
    fn finish<T>(&self, offset: usize, width: usize, result: IResult<&[u8], T>) -> Result<T> {
        result
            .map(|(_, value)| value)
            .map_err(|_| self.out_of_range(offset, width))
    }
}

impl<'a> From<&'a [u8]> for PacketView<'a> {
    fn from(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            offset: 0,
            length: buffer.len(),
        }
    }
}
