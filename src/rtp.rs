/// The first two octets of an RTP header, decoded
///
/// ```text
///  0                   1
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |V=2|P|X|  CC   |M|     PT      |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtpFlags {
    // version -- 2 bits
    pub version: u8,

    // padding flag -- 1 bit
    pub padding: bool,

    // extension flag -- 1 bit
    pub extension: bool,

    // csrc count -- 4 bits
    pub csrc_count: u8,

    // marker flag -- 1 bit
    pub marker: bool,

    // payload type -- 7 bits
    pub payload_type: u8,
}
