//! Wire types shared by the backend and the wasm client.

pub mod domain;
pub mod system;
