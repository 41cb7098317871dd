pub mod assembler;
pub mod estimator;
pub mod ml;
