pub mod grid_listener;
