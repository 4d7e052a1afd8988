//! Wire contracts of the MINICORE commission API.
//!
//! Field names in Rust are English; the JSON names follow the backend
//! (`nombre`, `fechaInicio`, `vendedorId`, ...).

pub mod domain;
pub mod shared;
pub mod usecases;
