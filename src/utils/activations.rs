//! Activation functions for neurons
//!
//! Derivatives are expressed in terms of the activation *output*, which is the
//! value a neuron caches after its forward pass:
//! - Sigmoid: f'(z) = y * (1 - y)
//! - Tanh: f'(z) = 1 - y^2

use serde::Deserialize;

/// Sigmoid activation function.
///
/// Returns the sigmoid of the input: 1 / (1 + exp(-x))
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative assuming x = sigmoid(z).
///
/// Returns the derivative: x * (1 - x)
pub fn sigmoid_derivative(x: f64) -> f64 {
    x * (1.0 - x)
}

/// Tanh derivative assuming x = tanh(z).
pub fn tanh_derivative(x: f64) -> f64 {
    1.0 - x * x
}

/// Squashing function applied by hidden and output neurons.
///
/// Input neurons never consult this; they pass their value through unchanged.
///
/// Deserializes from `"sigmoid"` or `"tanh"` in topology config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    #[default]
    Sigmoid,
    Tanh,
}

impl Activation {
    /// Apply the activation to a weighted sum.
    pub fn apply(self, z: f64) -> f64 {
        match self {
            Activation::Sigmoid => sigmoid(z),
            Activation::Tanh => z.tanh(),
        }
    }

    /// Derivative at the point whose activation output is `output`.
    pub fn derivative(self, output: f64) -> f64 {
        match self {
            Activation::Sigmoid => sigmoid_derivative(output),
            Activation::Tanh => tanh_derivative(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_sigmoid_zero() {
        let result = sigmoid(0.0);
        assert!((result - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_sigmoid_positive() {
        let result = sigmoid(2.0);
        assert!(result > 0.5 && result < 1.0);
    }

    #[test]
    fn test_sigmoid_negative() {
        let result = sigmoid(-2.0);
        assert!(result > 0.0 && result < 0.5);
    }

    #[test]
    fn test_sigmoid_derivative_at_half() {
        let result = sigmoid_derivative(0.5);
        assert!((result - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_tanh_derivative_at_zero() {
        assert!((tanh_derivative(0.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_default_is_sigmoid() {
        assert_eq!(Activation::default(), Activation::Sigmoid);
    }

    #[test]
    fn test_activation_dispatch() {
        assert!((Activation::Sigmoid.apply(0.0) - 0.5).abs() < EPSILON);
        assert!(Activation::Tanh.apply(0.0).abs() < EPSILON);
        assert!((Activation::Tanh.apply(1.0) - 1.0f64.tanh()).abs() < EPSILON);
        assert!((Activation::Sigmoid.derivative(0.5) - 0.25).abs() < EPSILON);
    }
}
