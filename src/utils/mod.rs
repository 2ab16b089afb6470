pub mod maths_utils;

pub use maths_utils::{LinearFit, linear_fit, round_to};
