// Core modules for the redping connectivity probe
pub mod probe; // one-shot connect/send/receive exchange
pub mod protocol; // inline command encoder

// Re-export all public items from modules for easier access
pub use probe::*;
pub use protocol::*;

// Default probe target - Redis default port 6379
pub const DEFAULT_ADDR: &str = "localhost:6379";
