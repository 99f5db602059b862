//! Protocol module containing the datagram text codec.

pub mod packet;

pub use packet::{decode_packet, encode_frame, PacketError, PacketFormat, PEER_PORT};
