pub mod coverage;
pub mod error;
pub mod loader;
pub mod locate;
pub mod matrix;
pub mod pairwise;
pub mod suffix_array;
pub mod utils;
pub mod window;
