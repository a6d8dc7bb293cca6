// MailSift - util/http.rs
//
// Shared HTTP agent and bounded response-body reads.
//
// The agent configures no independent timeouts: a classify call suspends
// until the underlying network layer resolves or rejects, and a stale
// result is discarded by the request-token guard in app::classify.

use std::io::{self, Read};
use std::sync::OnceLock;

/// Return the shared HTTP agent.
pub fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| ureq::AgentBuilder::new().build())
}

/// Read a response body into a string, enforcing a maximum byte size.
///
/// Rejects up front when the server declares an oversized Content-Length,
/// and while reading when the actual body exceeds the cap.
pub fn read_body_limited(response: ureq::Response, max_bytes: usize) -> io::Result<String> {
    if let Some(length) = response.header("Content-Length") {
        if let Ok(length) = length.parse::<u64>() {
            if length > max_bytes as u64 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Response too large: {length} bytes"),
                ));
            }
        }
    }

    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response exceeded {max_bytes} bytes"),
        ));
    }

    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
