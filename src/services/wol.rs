//! Wake-on-LAN relay service
//!
//! Turns a MAC address into a magic packet and broadcasts it over UDP so the
//! dashboard can wake machines without being on the same segment as the
//! browser.

use tokio::net::UdpSocket;

use crate::{
    config::WolConfig,
    error::{AppError, AppResult},
};

/// 6 bytes of 0xFF followed by 16 repetitions of the target MAC
const MAGIC_PACKET_LEN: usize = 6 + 16 * 6;

#[derive(Clone)]
pub struct WolService {
    config: WolConfig,
}

impl WolService {
    pub fn new(config: WolConfig) -> Self {
        Self { config }
    }

    /// Send a magic packet for the given MAC.
    ///
    /// Returns the normalized MAC and the broadcast address used.
    pub async fn wake(&self, mac: &str, broadcast: Option<&str>) -> AppResult<(String, String)> {
        let mac_bytes = parse_mac(mac)?;
        let packet = magic_packet(&mac_bytes);

        let address = broadcast
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(&self.config.broadcast_address)
            .to_string();

        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| AppError::Internal(format!("Failed to open UDP socket: {}", e)))?;
        socket
            .set_broadcast(true)
            .map_err(|e| AppError::Internal(format!("Failed to enable broadcast: {}", e)))?;
        socket
            .send_to(&packet, (address.as_str(), self.config.port))
            .await
            .map_err(|e| AppError::Internal(format!("Failed to send magic packet: {}", e)))?;

        tracing::info!(mac = %format_mac(&mac_bytes), %address, "magic packet sent");

        Ok((format_mac(&mac_bytes), address))
    }
}

/// Parse a MAC address, accepting `:`, `-` and `.` separators
pub fn parse_mac(input: &str) -> AppResult<[u8; 6]> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ':' | '-' | '.'))
        .collect();

    if cleaned.len() != 12 || !cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::Validation(
            "mac must be 12 hexadecimal digits, separators optional".to_string(),
        ));
    }

    let mut bytes = [0u8; 6];
    for (i, byte) in bytes.iter_mut().enumerate() {
        // Slice bounds are checked above: exactly 12 hex digits.
        *byte = u8::from_str_radix(&cleaned[i * 2..i * 2 + 2], 16)
            .map_err(|_| AppError::Validation("mac contains invalid hex digits".to_string()))?;
    }
    Ok(bytes)
}

/// Canonical colon-separated uppercase rendering
pub fn format_mac(bytes: &[u8; 6]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":")
}

/// Build the 102-byte magic packet for the given MAC
pub fn magic_packet(mac: &[u8; 6]) -> [u8; MAGIC_PACKET_LEN] {
    let mut packet = [0xFFu8; MAGIC_PACKET_LEN];
    for repeat in 0..16 {
        let start = 6 + repeat * 6;
        packet[start..start + 6].copy_from_slice(mac);
    }
    packet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mac_separator_variants() {
        let expected = [0xAA, 0xBB, 0xCC, 0x00, 0x11, 0x22];
        assert_eq!(parse_mac("AA:BB:CC:00:11:22").unwrap(), expected);
        assert_eq!(parse_mac("aa-bb-cc-00-11-22").unwrap(), expected);
        assert_eq!(parse_mac("aabb.cc00.1122").unwrap(), expected);
        assert_eq!(parse_mac("AABBCC001122").unwrap(), expected);
    }

    #[test]
    fn test_parse_mac_rejects_malformed() {
        assert!(parse_mac("").is_err());
        assert!(parse_mac("AA:BB:CC").is_err());
        assert!(parse_mac("GG:BB:CC:00:11:22").is_err());
        assert!(parse_mac("AA:BB:CC:00:11:22:33").is_err());
    }

    #[test]
    fn test_magic_packet_layout() {
        let mac = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let packet = magic_packet(&mac);
        assert_eq!(packet.len(), 102);
        assert!(packet[..6].iter().all(|&b| b == 0xFF));
        for repeat in 0..16 {
            let start = 6 + repeat * 6;
            assert_eq!(&packet[start..start + 6], &mac);
        }
    }

    #[test]
    fn test_format_mac() {
        let mac = parse_mac("aa:bb:cc:00:11:22").unwrap();
        assert_eq!(format_mac(&mac), "AA:BB:CC:00:11:22");
    }
}
