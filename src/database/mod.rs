//! Módulo de base de datos
//!
//! Maneja la conexión compartida con MongoDB

pub mod connection;

pub use connection::{ConnectionManager, Connector, MongoConnector, MongoHandle};
