#![forbid(unsafe_code)]

//! Telnet control bytes recognized during Latin-1 ingress.
//!
//! These are part of the wire contract. The transcoder classifies byte runs
//! starting with [`IAC`] and passes them through verbatim; it never
//! negotiates options or otherwise implements the protocol.

/// Interpret As Command: the telnet escape byte.
pub const IAC: u8 = 255;
/// Start of subnegotiation.
pub const SB: u8 = 250;
/// End of subnegotiation.
pub const SE: u8 = 240;
/// Option negotiation: request the peer enable an option.
pub const DO: u8 = 253;
/// Option negotiation: request the peer disable an option.
pub const DONT: u8 = 254;
/// Option negotiation: announce we will enable an option.
pub const WILL: u8 = 251;
/// Option negotiation: announce we will disable an option.
pub const WONT: u8 = 252;
/// No-operation.
pub const NOP: u8 = 241;

/// True for the four 3-byte option-negotiation verbs.
#[inline]
#[must_use]
pub const fn is_negotiation(byte: u8) -> bool {
    matches!(byte, DO | DONT | WILL | WONT)
}
