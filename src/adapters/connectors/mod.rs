pub mod tcp_connector;
