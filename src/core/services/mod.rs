pub mod connect_service;
pub mod secret_service;
