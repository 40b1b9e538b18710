//! RCON client over TCP

use tokio::net::{TcpStream, ToSocketAddrs};
use tracing::{debug, instrument, warn};

use super::codec::{read_packet, write_packet, Packet, PacketType, AUTH_FAILED_ID};
use super::RconError;

/// An RCON session with one game server
#[derive(Debug)]
pub struct RconClient {
    stream: TcpStream,
    next_id: i32,
}

impl RconClient {
    /// Open a TCP connection to the server's RCON port
    pub async fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self, RconError> {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        Ok(Self { stream, next_id: 1 })
    }

    fn take_id(&mut self) -> i32 {
        let id = self.next_id;
        // Stay positive so a reply can never be mistaken for AUTH_FAILED_ID
        self.next_id = if id == i32::MAX { 1 } else { id + 1 };
        id
    }

    /// Log in with the RCON password
    #[instrument(skip_all)]
    pub async fn authenticate(&mut self, password: &str) -> Result<(), RconError> {
        let id = self.take_id();
        write_packet(&mut self.stream, &Packet::new(id, PacketType::Login, password)).await?;

        loop {
            let reply = read_packet(&mut self.stream).await?;
            if reply.request_id == AUTH_FAILED_ID {
                warn!("RCON password rejected");
                return Err(RconError::AuthFailed);
            }
            // Some servers send an empty RESPONSE_VALUE ahead of the auth response
            if reply.kind == PacketType::Command && reply.request_id == id {
                debug!("RCON authenticated");
                return Ok(());
            }
        }
    }

    /// Run a console command and return the server's reply text
    #[instrument(skip(self))]
    pub async fn command(&mut self, command: &str) -> Result<String, RconError> {
        let id = self.take_id();
        write_packet(&mut self.stream, &Packet::new(id, PacketType::Command, command)).await?;

        loop {
            let reply = read_packet(&mut self.stream).await?;
            if reply.request_id == id && reply.kind == PacketType::Response {
                debug!(reply = %reply.payload, "RCON command answered");
                return Ok(reply.payload);
            }
        }
    }
}
