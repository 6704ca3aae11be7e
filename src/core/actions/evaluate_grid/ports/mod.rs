pub mod field_algorithm;
