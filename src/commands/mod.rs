//! CLI commands for courier

pub mod dispatch;
pub mod show;
pub mod solve;
pub mod verify;
