pub mod convergence;

pub use convergence::{max_abs_diff, ConvergenceRow, ConvergenceStudy};
