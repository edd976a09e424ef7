pub mod mockreceiver;
pub mod notification;
pub mod registry;
pub mod tokens;
