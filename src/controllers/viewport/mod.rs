pub mod controller;
pub mod data;
pub mod errors;
pub mod ports;
