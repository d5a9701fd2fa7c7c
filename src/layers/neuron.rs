//! Single neuron: forward evaluation, error term and weight correction

use crate::layers::Layer;
use crate::utils::{Activation, SimpleRng};

/// Structural role of a neuron (and of the layer that holds it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeuronType {
    /// Takes one value and passes it through unchanged. Never trained.
    Input,
    /// Weighted sum plus bias through the activation; error comes from the next layer.
    Hidden,
    /// Weighted sum plus bias through the activation; error comes from the expected result.
    Output,
}

/// A unit holding weights, a bias and the state of its last forward/backward pass.
///
/// # State lifecycle
///
/// * `inputs` and `output` are overwritten by every [`Neuron::feed_forward`] call.
/// * `error` is overwritten by the error calculation that follows a forward pass.
/// * [`Neuron::update_weights`] reads the cached `inputs` and `error`, so it must
///   run after both of them have been produced for the same sample.
#[derive(Debug, Clone)]
pub struct Neuron {
    kind: NeuronType,
    activation: Activation,
    weights: Vec<f64>,
    bias: f64,
    inputs: Vec<f64>,
    output: f64,
    error: f64,
}

impl Neuron {
    /// Create a neuron expecting `input_count` inputs.
    ///
    /// Input neurons get a single fixed weight of 1.0 and no bias. Hidden and
    /// output neurons draw every weight and the bias uniformly from [-1, 1],
    /// which keeps the initial weighted sums out of the sigmoid's flat tails.
    pub fn new(
        input_count: usize,
        kind: NeuronType,
        activation: Activation,
        rng: &mut SimpleRng,
    ) -> Self {
        let (weights, bias) = match kind {
            NeuronType::Input => (vec![1.0], 0.0),
            NeuronType::Hidden | NeuronType::Output => {
                let weights = (0..input_count)
                    .map(|_| rng.gen_range_f64(-1.0, 1.0))
                    .collect();
                (weights, rng.gen_range_f64(-1.0, 1.0))
            }
        };
        Self::with_weights(weights, bias, kind, activation)
    }

    /// Create a neuron with explicit weights and bias.
    pub fn with_weights(
        weights: Vec<f64>,
        bias: f64,
        kind: NeuronType,
        activation: Activation,
    ) -> Self {
        Self {
            kind,
            activation,
            inputs: vec![0.0; weights.len()],
            weights,
            bias,
            output: 0.0,
            error: 0.0,
        }
    }

    /// Evaluate the neuron on `inputs`, caching them and returning the new output.
    ///
    /// Input neurons store `inputs[0]` as their output unchanged.
    pub fn feed_forward(&mut self, inputs: &[f64]) -> f64 {
        debug_assert_eq!(inputs.len(), self.weights.len());

        self.inputs.clear();
        self.inputs.extend_from_slice(inputs);

        self.output = match self.kind {
            NeuronType::Input => inputs[0],
            NeuronType::Hidden | NeuronType::Output => {
                let sum: f64 = self
                    .weights
                    .iter()
                    .zip(inputs)
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + self.bias;
                self.activation.apply(sum)
            }
        };
        self.output
    }

    /// Delta rule for an output neuron: f'(y) * (expected - y).
    pub fn calculate_output_error(&mut self, expected: f64) {
        self.error = self.activation.derivative(self.output) * (expected - self.output);
    }

    /// Error of the neuron at position `index` in its layer, propagated back from `next`.
    ///
    /// `next` must already hold this sample's error terms.
    pub fn calculate_hidden_error(&mut self, next: &Layer, index: usize) {
        let downstream: f64 = next
            .neurons()
            .iter()
            .map(|neuron| neuron.error * neuron.weights[index])
            .sum();
        self.error = self.activation.derivative(self.output) * downstream;
    }

    /// Gradient step on weights and bias using the cached inputs and error.
    ///
    /// Input neurons keep their fixed pass-through weight.
    pub fn update_weights(&mut self, learning_rate: f64) {
        match self.kind {
            NeuronType::Input => {}
            NeuronType::Hidden | NeuronType::Output => {
                let step = learning_rate * self.error;
                for (weight, input) in self.weights.iter_mut().zip(&self.inputs) {
                    *weight += step * input;
                }
                // bias behaves as a weight on a constant input of 1
                self.bias += step;
            }
        }
    }

    pub fn kind(&self) -> NeuronType {
        self.kind
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Number of inputs this neuron expects.
    pub fn input_count(&self) -> usize {
        self.weights.len()
    }

    /// Inputs received by the last forward pass.
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    /// Output of the last forward pass.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Error term (delta) of the last error calculation.
    pub fn error(&self) -> f64 {
        self.error
    }
}
