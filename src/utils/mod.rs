//! Shared helpers for report rendering

pub mod string;
