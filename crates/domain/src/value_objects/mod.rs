pub mod gold_priority;
pub mod role;

pub use gold_priority::GoldPriority;
pub use role::Role;
