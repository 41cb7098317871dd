pub mod errors;
pub mod pricing;
