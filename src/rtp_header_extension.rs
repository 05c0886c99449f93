/// An RTP packet header extension, https://tools.ietf.org/html/rfc3550#section-5.3.1
///
/// Borrowed from the packet; `data` is exactly `length * 4` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtpHeaderExtension<'a> {
    // profile -- 2 bytes
    pub profile: u16,

    // length (in number of 32 bit words) -- 2 bytes
    pub length: u16,

    // variable length data -- {length*4} bytes
    pub data: &'a [u8],
}

impl<'a> RtpHeaderExtension<'a> {
    /// Bytes the extension occupies in the header, including its own
    /// profile and length fields.
    pub fn wire_length(&self) -> usize {
        4 + self.data.len()
    }
}
