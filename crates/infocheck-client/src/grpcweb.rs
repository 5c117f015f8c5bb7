//! Minimal gRPC-web wire framing.
//!
//! A gRPC-web body is a sequence of frames: a one-byte flag, a big-endian
//! u32 payload length, then the payload. Flag `0x00` carries a protobuf
//! message; the trailer frame (flag bit `0x80` set) carries the gRPC status
//! as HTTP/1-style header lines.

use bytes::{Buf, Bytes};

use infocheck_common::{ClientError, Result};

pub const FRAME_MESSAGE: u8 = 0x00;
pub const FRAME_TRAILER: u8 = 0x80;

pub const CONTENT_TYPE: &str = "application/grpc-web+proto";

/// Wrap an encoded protobuf message in a gRPC-web message frame.
pub fn encode_frame(message: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(5 + message.len());
    out.push(FRAME_MESSAGE);
    out.extend_from_slice(&(message.len() as u32).to_be_bytes());
    out.extend_from_slice(message);
    out
}

/// Split a gRPC-web response body into the first message payload (if any)
/// and the trailer text (if present).
pub fn decode_frames(body: &[u8]) -> Result<(Option<Bytes>, Option<String>)> {
    let mut buf = Bytes::copy_from_slice(body);
    let mut message = None;
    let mut trailer = None;

    while buf.has_remaining() {
        if buf.remaining() < 5 {
            return Err(ClientError::Frame(format!(
                "truncated frame header: {} bytes left",
                buf.remaining()
            )));
        }
        let flag = buf.get_u8();
        let len = buf.get_u32() as usize;
        if buf.remaining() < len {
            return Err(ClientError::Frame(format!(
                "frame claims {} bytes but only {} remain",
                len,
                buf.remaining()
            )));
        }
        let payload = buf.split_to(len);
        if flag & FRAME_TRAILER != 0 {
            trailer = Some(String::from_utf8_lossy(&payload).into_owned());
        } else if message.is_none() {
            message = Some(payload);
        }
    }

    Ok((message, trailer))
}

/// Extract the `grpc-status` code from trailer text. Absent status is treated
/// as OK, matching grpc-web clients.
pub fn trailer_status(trailer: &str) -> (u32, String) {
    let mut code = 0;
    let mut message = String::new();
    for line in trailer.lines() {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "grpc-status" => code = value.trim().parse().unwrap_or(2),
            "grpc-message" => message = value.trim().to_string(),
            _ => {}
        }
    }
    (code, message)
}
