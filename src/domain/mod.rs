pub mod error;
pub mod percolation;
pub mod settings;
