//! Shared constants used across the fipsdsa crates

pub mod hash;
