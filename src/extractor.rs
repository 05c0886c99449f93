use crate::error::Result;
use crate::packet_view::PacketView;
use crate::rtp::RtpFlags;
use crate::rtp_header_extension::RtpHeaderExtension;

use log::debug;
use nom::bits::bits;
use nom::bits::complete::take;
use nom::multi::count;
use nom::number::complete::be_u32;
use nom::{sequence::tuple, IResult};

/// V, P, X, CC, M, PT, sequence number, timestamp and SSRC.
pub const FIXED_HEADER_LENGTH: usize = 12;

/// One entry of the CSRC list.
pub const CSRC_LENGTH: usize = 4;

/// Profile identifier plus length field of a header extension.
pub const EXTENSION_HEADER_LENGTH: usize = 4;

/// E flag plus 31 bit index in front of the SRTCP authentication tag.
pub const SRTCP_INDEX_LENGTH: usize = 4;

const SEQUENCE_NUMBER_OFFSET: usize = 2;
const TIMESTAMP_OFFSET: usize = 4;
const RTP_SSRC_OFFSET: usize = 8;
const RTCP_SSRC_OFFSET: usize = 4;

/// Length of the RTP header, i.e. the offset where the payload starts.
///
/// Covers the fixed header, the CSRC list and, when the X bit is set, the
/// header extension. A header that would end past the packet is reported
/// as out of range rather than clamped.
///
/// ```
/// use srtp_fields::{header_length, PacketView};
///
/// let packet = [
///     0x90, 0x60, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
///     0x00, 0x00, 0x00, 0x2A, 0xBE, 0xDE, 0x00, 0x01,
///     0x10, 0xAA, 0x00, 0x00, 0x01, 0x02,
/// ];
///
/// let view = PacketView::from(&packet[..]);
/// assert_eq!(header_length(&view).unwrap(), 20);
/// ```
pub fn header_length(view: &PacketView) -> Result<usize> {
    let (_, _, extension, csrc_count) = first_octet(view)?;
    let mut length = FIXED_HEADER_LENGTH + CSRC_LENGTH * csrc_count as usize;

    if extension == 1 {
        // skip the profile identifier
        let words = view.read_unsigned_short(length + 2)?;
        length += EXTENSION_HEADER_LENGTH + 4 * words as usize;
    }

    if length > view.length() {
        debug!(
            "rtp header overruns packet: header={}, packet={}",
            length,
            view.length()
        );

        return Err(view.out_of_range(0, length));
    }

    Ok(length)
}

/// Number of padding octets at the end of the packet, the count octet
/// included. Zero when the P bit is clear.
///
/// The count is not checked against the payload length.
pub fn padding_size(view: &PacketView) -> Result<usize> {
    let (_, padding, _, _) = first_octet(view)?;
    if padding == 0 {
        return Ok(0);
    }

    view.read_byte(view.length() - 1).map(usize::from)
}

/// Bytes after the header. Padding is not subtracted, callers that need
/// the content length subtract [`padding_size`] themselves.
pub fn payload_length(view: &PacketView) -> Result<usize> {
    Ok(view.length() - header_length(view)?)
}

pub fn rtp_ssrc(view: &PacketView) -> Result<u32> {
    view.read_unsigned_int(RTP_SSRC_OFFSET)
}

/// SSRC of the sender of an RTCP packet. The packet is not checked to
/// actually be RTCP.
pub fn rtcp_ssrc(view: &PacketView) -> Result<u32> {
    view.read_unsigned_int(RTCP_SSRC_OFFSET)
}

pub fn sequence_number(view: &PacketView) -> Result<u16> {
    view.read_unsigned_short(SEQUENCE_NUMBER_OFFSET)
}

/// The 32 bit word in front of the authentication tag of an SRTCP packet.
///
/// ```text
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |E|                         SRTCP index                         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ~                     SRTCP MKI (OPTIONAL)                      ~
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// :                     authentication tag                        :
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// Returned as read: the E flag is the sign bit and the index is the low
/// 31 bits, callers mask them apart.
pub fn srtcp_index(view: &PacketView, auth_tag_length: usize) -> Result<i32> {
    let trailer = SRTCP_INDEX_LENGTH.checked_add(auth_tag_length);
    match trailer.and_then(|trailer| view.length().checked_sub(trailer)) {
        Some(offset) => view.read_int(offset),
        None => Err(view.out_of_range(0, trailer.unwrap_or(usize::MAX))),
    }
}

pub fn is_marked(view: &PacketView) -> Result<bool> {
    let (marker, _) = second_octet(view)?;
    Ok(marker == 1)
}

pub fn payload_type(view: &PacketView) -> Result<u8> {
    let (_, payload_type) = second_octet(view)?;
    Ok(payload_type)
}

/// Raw timestamp octets, uninterpreted.
pub fn timestamp(view: &PacketView) -> Result<[u8; 4]> {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(view.region(TIMESTAMP_OFFSET, 4)?);
    Ok(raw)
}

pub fn rtp_timestamp(view: &PacketView) -> Result<u32> {
    view.read_unsigned_int(TIMESTAMP_OFFSET)
}

/// Decode octets 0 and 1 in one go.
pub fn rtp_flags(view: &PacketView) -> Result<RtpFlags> {
    let input = view.region(0, 2)?;
    let (_, ((version, padding, extension, csrc_count), (marker, payload_type))) =
        tuple((parse_vpxcc, parse_mpt))(input).map_err(|_| view.out_of_range(0, 2))?;

    Ok(RtpFlags {
        version,
        padding: padding == 1,
        extension: extension == 1,
        csrc_count,
        marker: marker == 1,
        payload_type,
    })
}

/// The CSRC list following the fixed header.
pub fn contributing_sources(view: &PacketView) -> Result<Vec<u32>> {
    let (_, _, _, csrc_count) = first_octet(view)?;
    let width = CSRC_LENGTH * csrc_count as usize;
    let input = view.region(FIXED_HEADER_LENGTH, width)?;

    parse_csrc(input, csrc_count as usize)
        .map(|(_, csrc)| csrc)
        .map_err(|_| view.out_of_range(FIXED_HEADER_LENGTH, width))
}

/// The header extension, if the X bit is set.
pub fn header_extension<'a>(view: &PacketView<'a>) -> Result<Option<RtpHeaderExtension<'a>>> {
    let (_, _, extension, csrc_count) = first_octet(view)?;
    if extension == 0 {
        return Ok(None);
    }

    let start = FIXED_HEADER_LENGTH + CSRC_LENGTH * csrc_count as usize;
    let profile = view.read_unsigned_short(start)?;
    let length = view.read_unsigned_short(start + 2)?;
    let data = view.region(start + EXTENSION_HEADER_LENGTH, 4 * length as usize)?;

    Ok(Some(RtpHeaderExtension {
        profile,
        length,
        data,
    }))
}

fn first_octet(view: &PacketView) -> Result<(u8, u8, u8, u8)> {
    let input = view.region(0, 1)?;
    parse_vpxcc(input)
        .map(|(_, fields)| fields)
        .map_err(|_| view.out_of_range(0, 1))
}

fn second_octet(view: &PacketView) -> Result<(u8, u8)> {
    let input = view.region(1, 1)?;
    parse_mpt(input)
        .map(|(_, fields)| fields)
        .map_err(|_| view.out_of_range(1, 1))
}

fn parse_vpxcc(input: &[u8]) -> IResult<&[u8], (u8, u8, u8, u8)> {
    let (input, (v, p, x, cc)) = bits(tuple((
        take::<_, _, _, (_, _)>(2usize),
        take::<_, _, _, (_, _)>(1usize),
        take::<_, _, _, (_, _)>(1usize),
        take::<_, _, _, (_, _)>(4usize),
    )))(input)?;

    Ok((input, (v, p, x, cc)))
}

fn parse_mpt(input: &[u8]) -> IResult<&[u8], (u8, u8)> {
    let (input, (m, pt)) = bits(tuple((
        take::<_, _, _, (_, _)>(1usize),
        take::<_, _, _, (_, _)>(7usize),
    )))(input)?;

    Ok((input, (m, pt)))
}

fn parse_csrc(input: &[u8], csrc_count: usize) -> IResult<&[u8], Vec<u32>> {
    count(be_u32, csrc_count)(input)
}
