pub mod connectors;
pub mod readers;
