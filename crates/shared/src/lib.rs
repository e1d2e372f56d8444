//! Domain vocabulary shared by the catalog, the selection controller and hosts.

pub mod domain;
pub mod error;
