//! DHCP hostname (option 12) extraction.
//!
//! Only client-to-server BOOTP traffic (UDP destination port 67) is inspected,
//! and only the Host Name option is read. The fixed BOOTP header is skipped
//! wholesale.

/// DHCP/BOOTP server port.
pub const DHCP_SERVER_PORT: u16 = 67;

/// Offset of the options area within the BOOTP message.
pub const DHCP_OPTIONS_OFFSET: usize = 236;

const OPT_HOSTNAME: u8 = 12;
const OPT_END: u8 = 255;

/// Scan a BOOTP message for option 12 and decode it.
///
/// Every option from offset 236 on is read as `(code, len, value)`; only the
/// end option (255) is a bare code byte. Scanning stops at the end option, at an option that would overrun the
/// message, or at the first non-empty option 12 (accepted or not).
pub fn extract_hostname(bootp: &[u8]) -> Option<String> {
    if bootp.len() < DHCP_OPTIONS_OFFSET + 2 {
        return None;
    }

    let mut offset = DHCP_OPTIONS_OFFSET;
    while offset + 1 < bootp.len() {
        let code = bootp[offset];
        if code == OPT_END {
            break;
        }

        let len = usize::from(bootp[offset + 1]);
        let value_start = offset + 2;
        let value_end = value_start + len;
        if value_end > bootp.len() {
            break;
        }

        if code == OPT_HOSTNAME && len > 0 {
            return decode_hostname(&bootp[value_start..value_end]);
        }

        offset = value_end;
    }

    None
}

/// Decode an option 12 value as printable ASCII.
///
/// Trailing NUL padding is tolerated. Any other byte outside 0x20..=0x7e
/// (including a NUL followed by more data) rejects the whole value. Values that
/// are empty or all whitespace decode to `None`.
pub fn decode_hostname(value: &[u8]) -> Option<String> {
    let end = value
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);
    let text = &value[..end];

    if !text.iter().all(|b| (0x20..=0x7e).contains(b)) {
        return None;
    }

    // All bytes are ASCII at this point
    let hostname = std::str::from_utf8(text).ok()?.trim();
    if hostname.is_empty() {
        None
    } else {
        Some(hostname.to_string())
    }
}
