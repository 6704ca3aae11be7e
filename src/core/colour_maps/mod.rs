pub mod factory;
pub mod grayscale;
pub mod hot;
pub mod kinds;
