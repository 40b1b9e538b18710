//! Source RCON packet codec
//!
//! Every packet is framed as:
//!
//! ```text
//! length     i32 LE   size of everything after this field
//! request_id i32 LE
//! type       i32 LE
//! payload    ASCII bytes
//! 0x00 0x00  payload terminator and empty trailer
//! ```

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use super::RconError;

/// Longest payload a client may send; the server drops anything larger
pub const MAX_REQUEST_PAYLOAD: usize = 1446;

/// Longest payload the server puts in one response packet
pub const MAX_RESPONSE_PAYLOAD: usize = 4096;

/// Bytes counted by `length` besides the payload: id, type and two NULs
const HEADER_LEN: usize = 4 + 4 + 2;

/// Request id the server answers with when authentication fails
pub const AUTH_FAILED_ID: i32 = -1;

/// RCON packet type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketType {
    /// SERVERDATA_AUTH
    Login,
    /// SERVERDATA_EXECCOMMAND, also SERVERDATA_AUTH_RESPONSE coming back
    Command,
    /// SERVERDATA_RESPONSE_VALUE
    Response,
    Unknown(i32),
}

impl PacketType {
    pub fn to_i32(self) -> i32 {
        match self {
            Self::Login => 3,
            Self::Command => 2,
            Self::Response => 0,
            Self::Unknown(value) => value,
        }
    }

    pub fn from_i32(value: i32) -> Self {
        match value {
            3 => Self::Login,
            2 => Self::Command,
            0 => Self::Response,
            other => Self::Unknown(other),
        }
    }
}

/// A single RCON packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub request_id: i32,
    pub kind: PacketType,
    pub payload: String,
}

impl Packet {
    pub fn new(request_id: i32, kind: PacketType, payload: impl Into<String>) -> Self {
        Self {
            request_id,
            kind,
            payload: payload.into(),
        }
    }

    /// Serialize to wire format, rejecting payloads the server would drop
    pub fn encode(&self) -> Result<Vec<u8>, RconError> {
        let payload = self.payload.as_bytes();
        if payload.len() > MAX_REQUEST_PAYLOAD {
            return Err(RconError::PayloadTooLarge(payload.len()));
        }
        if payload.contains(&0) {
            return Err(RconError::Malformed("payload contains NUL".to_string()));
        }

        let length = (HEADER_LEN + payload.len()) as i32;
        let mut buf = Vec::with_capacity(4 + HEADER_LEN + payload.len());
        buf.extend_from_slice(&length.to_le_bytes());
        buf.extend_from_slice(&self.request_id.to_le_bytes());
        buf.extend_from_slice(&self.kind.to_i32().to_le_bytes());
        buf.extend_from_slice(payload);
        buf.extend_from_slice(&[0, 0]);
        Ok(buf)
    }

    /// Parse the bytes following the length prefix
    pub fn decode(frame: &[u8]) -> Result<Self, RconError> {
        if frame.len() < HEADER_LEN {
            return Err(RconError::Malformed(format!("frame too short: {} bytes", frame.len())));
        }

        let (body, trailer) = frame.split_at(frame.len() - 2);
        if trailer != [0, 0] {
            return Err(RconError::Malformed("missing NUL terminator".to_string()));
        }

        let request_id = i32::from_le_bytes([body[0], body[1], body[2], body[3]]);
        let kind = PacketType::from_i32(i32::from_le_bytes([body[4], body[5], body[6], body[7]]));
        let payload = String::from_utf8_lossy(&body[8..]).into_owned();

        Ok(Self {
            request_id,
            kind,
            payload,
        })
    }
}

/// Write one packet to the stream
pub async fn write_packet<W>(io: &mut W, packet: &Packet) -> Result<(), RconError>
where
    W: AsyncWrite + Unpin,
{
    let bytes = packet.encode()?;
    io.write_all(&bytes).await?;
    io.flush().await?;
    Ok(())
}

/// Read one packet from the stream
pub async fn read_packet<R>(io: &mut R) -> Result<Packet, RconError>
where
    R: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 4];
    io.read_exact(&mut len_buf).await?;
    let length = i32::from_le_bytes(len_buf);

    let length = usize::try_from(length)
        .ok()
        .filter(|len| (HEADER_LEN..=HEADER_LEN + MAX_RESPONSE_PAYLOAD).contains(len))
        .ok_or_else(|| RconError::Malformed(format!("invalid packet length {length}")))?;

    let mut frame = vec![0u8; length];
    io.read_exact(&mut frame).await?;
    Packet::decode(&frame)
}
