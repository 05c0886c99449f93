//! # SRTP fields
//!
//! Read-only field extraction for RTP and SRTP/SRTCP packets. Given the bytes
//! of one packet, this crate computes the offsets and values an SRTP
//! transform needs to find the parts it encrypts, authenticates or skips:
//! header length, payload boundary, padding, SSRC, sequence number, payload
//! type, marker bit and the SRTCP index word.
//!
//! Every read is bounds checked against the packet; a read past the end
//! fails with [`PacketError::OutOfRange`] and the buffer is never modified.
//!
//! ```
//! use srtp_fields::*;
//!
//! let packet = [
//!     0x80, 0x60, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
//!     0x00, 0x00, 0x00, 0x2A, 0xDE, 0xAD, 0xBE, 0xEF,
//! ];
//!
//! let view = PacketView::from(&packet[..]);
//! assert_eq!(header_length(&view).unwrap(), 12);
//! assert_eq!(payload_length(&view).unwrap(), 4);
//! assert_eq!(rtp_ssrc(&view).unwrap(), 42);
//! assert_eq!(sequence_number(&view).unwrap(), 1);
//! assert_eq!(payload_type(&view).unwrap(), 96);
//! ```
//!
//! See also:
//! - [RFC 3550](https://tools.ietf.org/html/rfc3550): RTP: A Transport Protocol for Real-Time Applications
//! - [RFC 3711](https://tools.ietf.org/html/rfc3711): The Secure Real-time Transport Protocol (SRTP)

mod error;
pub use error::*;

mod packet_view;
pub use packet_view::*;

mod rtp;
pub use rtp::*;

mod rtp_header_extension;
pub use rtp_header_extension::*;

mod extractor;
pub use extractor::*;
