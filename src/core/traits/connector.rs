use crate::core::errors::Result;
use crate::core::models::connection::{ConnectParams, Connection};

/// Port for establishing the database connection once credentials are loaded.
pub trait Connector {
    fn connect(&self, params: &ConnectParams<'_>) -> Result<Connection>;
}
