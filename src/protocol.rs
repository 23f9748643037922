/*!
 * Inline Command Encoding
 *
 * This module implements the probe's half of the wire protocol: a single
 * textual inline command, sigil-prefixed and CRLF-terminated. Only encoding
 * exists here; replies are handed back to the caller verbatim and never
 * parsed or validated.
 */

/// Encode an inline command (+PING\r\n)
///
/// Produces the sigil-prefixed, CRLF-terminated request form understood by
/// line-oriented Redis-compatible servers. Encoding is pure: the same name
/// always yields the same bytes.
pub fn inline_command(name: &str) -> Vec<u8> {
    let mut v = Vec::with_capacity(name.len() + 3);
    v.push(b'+');
    v.extend_from_slice(name.as_bytes());
    v.extend_from_slice(b"\r\n");
    v
}
