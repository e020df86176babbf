pub mod check;
pub mod connect;
pub mod status;
