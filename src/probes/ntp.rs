//! NTP reachability probe
//!
//! Sends one SNTP client request and accepts any datagram in reply. This is
//! reachability only; the reply content is never validated.

use crate::{
    error::{AppError, Result},
    models::CheckOutcome,
    probes::Probe,
};
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time;

const NTP_PACKET_LEN: usize = 48;

/// First request byte: LI = 0, version = 3, mode = 3 (client)
const NTP_CLIENT_REQUEST: u8 = 0x1B;

const NTP_PORT: u16 = 123;

/// Verifies that the configured NTP server answers UDP requests
pub struct NtpProbe {
    server: String,
    timeout: Duration,
}

impl NtpProbe {
    pub fn new(server: impl Into<String>, timeout: Duration) -> Self {
        Self {
            server: server.into(),
            timeout,
        }
    }

    /// Target address for the request; bare hostnames get the NTP port
    fn target(&self) -> String {
        if self.server.contains(':') {
            self.server.clone()
        } else {
            format!("{}:{}", self.server, NTP_PORT)
        }
    }

    /// The fixed 48-byte client-mode request
    fn request_packet() -> [u8; NTP_PACKET_LEN] {
        let mut packet = [0u8; NTP_PACKET_LEN];
        packet[0] = NTP_CLIENT_REQUEST;
        packet
    }

    async fn attempt(&self) -> Result<()> {
        // The socket lives for exactly one check and is dropped on every path
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| AppError::transport(e.to_string()))?;

        // Hostname resolution happens inside send_to; a DNS failure surfaces
        // as the same transport error class as a socket failure
        socket
            .send_to(&Self::request_packet(), self.target())
            .await
            .map_err(|e| AppError::transport(e.to_string()))?;

        let mut reply = [0u8; 1024];
        match time::timeout(self.timeout, socket.recv_from(&mut reply)).await {
            Ok(received) => {
                received.map_err(|e| AppError::transport(e.to_string()))?;
                Ok(())
            }
            Err(_) => Err(AppError::timeout(format!(
                "no response from {} within {:?}",
                self.server, self.timeout
            ))),
        }
    }
}

#[async_trait]
impl Probe for NtpProbe {
    fn name(&self) -> &'static str {
        "NTP server"
    }

    fn describe(&self) -> String {
        format!("Checking NTP server: {}", self.server)
    }

    async fn run(&self) -> CheckOutcome {
        match self.attempt().await {
            Ok(()) => CheckOutcome::passed_with("response received"),
            Err(e) => CheckOutcome::failed(e.to_string()),
        }
    }
}
