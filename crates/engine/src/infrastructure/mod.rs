//! Infrastructure: ports and their adapters.

pub mod catalog;
pub mod clock;
pub mod locks;
pub mod memory;
pub mod ports;
pub mod scheduler;
