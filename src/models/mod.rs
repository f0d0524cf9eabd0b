//! Data models for the Inventário server

pub mod chip;
pub mod enums;
pub mod location;
pub mod machine;
pub mod product;
pub mod telsystem;
pub mod user;

// Re-export commonly used types
pub use chip::Chip;
pub use enums::{ChipCarrier, ChipStatus, LineType, MachineCategory, MachineStatus};
pub use location::Location;
pub use machine::Machine;
pub use product::Product;
pub use telsystem::TelSystem;
pub use user::User;
