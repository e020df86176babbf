pub mod connection;
pub mod credentials;
pub mod endpoint;
pub mod parsed_secret;
pub mod secret_shape;
