//! Infrastructure layer - network access

pub mod blockchain;
