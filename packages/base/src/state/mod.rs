pub mod mockreceiver;
pub mod registry;
pub mod tokens;
