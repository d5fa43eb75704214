//! Shared HTTP pieces: application state and the system routes (health).

pub mod health;
pub mod router;
pub mod state;
