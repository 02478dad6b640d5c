//! Admin login and session tokens.

pub mod gate;

pub use gate::AdminGate;
