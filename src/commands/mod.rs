pub mod count;

pub use count::{count_with_settings, run_count};
