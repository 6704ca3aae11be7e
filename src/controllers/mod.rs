pub mod cli;
pub mod ports;
pub mod viewport;
