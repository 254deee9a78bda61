pub mod errors;
pub mod fractal_evaluator;
pub mod ports;
