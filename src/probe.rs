/*!
 * Connectivity Probe
 *
 * This module implements the one-shot probe exchange against a
 * Redis-compatible server: open a TCP connection, send the inline PING
 * command, read a single response buffer, hand the bytes back untouched.
 */

use crate::protocol::inline_command;
use anyhow::*;
use bytes::Bytes;
use log::debug;
use std::io::{Read, Write};
use std::net::TcpStream;

/// Upper bound on the response read, in bytes
///
/// A single receive call captures at most this much; a longer reply is
/// returned truncated, a shorter one whole.
pub const READ_BUF: usize = 1024;

/// Run one probe exchange against `addr`
///
/// Sequence: connect, send `+PING\r\n` with send-all semantics, block for
/// the first chunk of the reply, return it verbatim.
///
/// # Arguments
/// * `addr` - Target address in `host:port` form
///
/// # Returns
/// * `Ok(Bytes)` - Whatever arrived in the first receive, at most
///   [`READ_BUF`] bytes; empty if the server closed without writing
/// * `Err(...)` - Connect, send or receive failure; no retry is attempted
pub fn run(addr: &str) -> Result<Bytes> {
    let mut stream =
        TcpStream::connect(addr).with_context(|| format!("connect to {}", addr))?;
    debug!("connected to {}", addr);

    // write_all loops on partial writes, so the full payload is handed
    // to the transport before we move on
    let payload = inline_command("PING");
    stream.write_all(&payload)?;
    debug!("sent {} bytes", payload.len());

    let mut buf = [0u8; READ_BUF];
    let n = stream.read(&mut buf)?;
    debug!("received {} bytes", n);

    // The socket closes when `stream` goes out of scope, on the error
    // paths above as well as here
    Ok(Bytes::copy_from_slice(&buf[..n]))
}
