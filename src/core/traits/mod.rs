pub mod connector;
pub mod secret_reader;
