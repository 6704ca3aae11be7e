pub mod grid_frame;
