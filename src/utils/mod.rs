//! Shared utilities: random number generation and activation functions.

pub mod activations;
pub mod rng;

pub use activations::{sigmoid, sigmoid_derivative, tanh_derivative, Activation};
pub use rng::SimpleRng;
