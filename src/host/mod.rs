mod calculator;
mod signature;

pub use calculator::Calculator;
pub use signature::Signature;
