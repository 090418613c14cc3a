//! Command implementations for hookpull CLI

pub mod add;
