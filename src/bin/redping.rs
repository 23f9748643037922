/*!
 * Redping Entry Point
 *
 * This is the executable wrapper around the connectivity probe. It runs
 * one ping exchange against the default endpoint and prints the raw reply,
 * so an operator can eyeball protocol liveness from a shell.
 */

use anyhow::*;
use redping::*;

/// Main function - entry point for the probe
///
/// 1. Initialize logging
/// 2. Run the probe exchange against the default endpoint
/// 3. Print the decoded reply to stdout
///
/// Any failure propagates out of `main`, printing the error chain to
/// stderr and exiting non-zero.
fn main() -> Result<()> {
    // Initialize logging - respects RUST_LOG environment variable
    // Example: RUST_LOG=debug redping
    env_logger::init();

    let reply = probe::run(DEFAULT_ADDR)?;

    // The reply carries its own line ending when the server sends one,
    // so stdout gets the bytes exactly as received
    print!("{}", String::from_utf8_lossy(&reply));

    Ok(())
}
