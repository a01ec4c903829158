//! Progress indicators for one-shot mode

pub mod typing;
