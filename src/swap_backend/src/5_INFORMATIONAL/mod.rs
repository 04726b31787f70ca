//! Informational - Display-facing formatting
//! The only place full-precision decimals get rounded

pub mod display;
