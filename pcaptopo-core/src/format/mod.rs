//! Address formatting.

mod address;

pub use address::MacAddr;
