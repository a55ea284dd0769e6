//! Feature modules: one directory per backend surface, each with its API
//! client and types.

pub mod auth;
pub mod games;
