//! Middlewares HTTP

pub mod cors;
