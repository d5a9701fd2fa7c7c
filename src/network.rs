//! Feedforward network trained by online backpropagation
//!
//! The network is built layer by layer from a [`Topology`]:
//!
//! 1. an input layer of `input_count` single-input pass-through neurons,
//! 2. one hidden layer per entry of `hidden_layers`, each neuron taking every
//!    output of the previous layer,
//! 3. an output layer of `output_count` neurons wired the same way.
//!
//! Training runs `predict`, `calculate_errors` and `update_weights` for every
//! sample in dataset order, for a fixed number of epochs.

use crate::dataset::DataSet;
use crate::error::{NetworkError, Result};
use crate::layers::{Layer, Neuron, NeuronType};
use crate::topology::{Topology, TopologyConfig};
use crate::utils::SimpleRng;
use tracing::{debug, info, warn};

/// Epochs between loss reports while training.
const LOG_INTERVAL: usize = 1000;

/// A multilayer perceptron owning its layers.
///
/// `layers[0]` is the input layer and the last entry is the output layer.
/// The number of layers and their sizes never change after construction.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    layers: Vec<Layer>,
    topology: Topology,
}

impl NeuralNetwork {
    /// Build a network whose weights are seeded from the current time.
    pub fn new(topology: Topology) -> Self {
        Self::with_rng(topology, &mut SimpleRng::from_time())
    }

    /// Build a network with reproducible initial weights.
    ///
    /// # Example
    ///
    /// ```
    /// use simple_neural_network::{NeuralNetwork, Topology};
    ///
    /// let topology = Topology::new(2, vec![3], 1, 0.5).unwrap();
    /// let network = NeuralNetwork::with_seed(topology, 7);
    /// assert_eq!(network.layer_count(), 3);
    /// ```
    pub fn with_seed(topology: Topology, seed: u64) -> Self {
        Self::with_rng(topology, &mut SimpleRng::new(seed))
    }

    /// Build a network from a loaded config, honouring its optional seed.
    pub fn from_config(config: &TopologyConfig) -> Result<Self> {
        let topology = config.topology()?;
        Ok(match config.seed {
            Some(seed) => Self::with_seed(topology, seed),
            None => Self::new(topology),
        })
    }

    fn with_rng(topology: Topology, rng: &mut SimpleRng) -> Self {
        let activation = topology.activation();
        let mut layers = Vec::with_capacity(topology.hidden_layer_count() + 2);

        let inputs = (0..topology.input_count())
            .map(|_| Neuron::new(1, NeuronType::Input, activation, rng))
            .collect();
        layers.push(Layer::new(inputs, NeuronType::Input));

        for &size in topology.hidden_layers() {
            let previous = layers[layers.len() - 1].len();
            let hidden = (0..size)
                .map(|_| Neuron::new(previous, NeuronType::Hidden, activation, rng))
                .collect();
            layers.push(Layer::hidden(hidden));
        }

        let previous = layers[layers.len() - 1].len();
        let outputs = (0..topology.output_count())
            .map(|_| Neuron::new(previous, NeuronType::Output, activation, rng))
            .collect();
        layers.push(Layer::new(outputs, NeuronType::Output));

        debug!(
            layers = layers.len(),
            input = topology.input_count(),
            hidden = ?topology.hidden_layers(),
            output = topology.output_count(),
            "built network"
        );

        Self { layers, topology }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    /// Run a forward pass and return the output layer's neurons.
    ///
    /// Every neuron's cached inputs and output are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::SizeMismatch`] if `inputs.len()` differs from the
    /// topology's input count; the network is left untouched in that case.
    pub fn predict(&mut self, inputs: &[f64]) -> Result<&[Neuron]> {
        check_len(inputs, self.topology.input_count())?;
        self.send_signals_to_input_neurons(inputs);
        self.feed_forward_all_layers_after_input();
        Ok(self.output_layer().neurons())
    }

    /// Like [`NeuralNetwork::predict`], returning just the output values.
    pub fn predict_values(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.predict(inputs)?;
        Ok(self.output_layer().output_signals())
    }

    fn send_signals_to_input_neurons(&mut self, inputs: &[f64]) {
        for (neuron, &signal) in self.layers[0].neurons_mut().iter_mut().zip(inputs) {
            neuron.feed_forward(&[signal]);
        }
    }

    fn feed_forward_all_layers_after_input(&mut self) {
        for i in 1..self.layers.len() {
            let signals = self.layers[i - 1].output_signals();
            for neuron in self.layers[i].neurons_mut() {
                neuron.feed_forward(&signals);
            }
        }
    }

    /// Compute every neuron's error term for `expected`, output layer first.
    ///
    /// Must follow a [`NeuralNetwork::predict`] on the matching inputs. Input
    /// neurons are skipped since their weights are never trained.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::SizeMismatch`] if `expected.len()` differs from
    /// the topology's output count.
    pub fn calculate_errors(&mut self, expected: &[f64]) -> Result<()> {
        check_len(expected, self.topology.output_count())?;

        for i in (0..self.layers.len()).rev() {
            let (head, tail) = self.layers.split_at_mut(i + 1);
            let current = &mut head[i];
            match current.kind() {
                NeuronType::Output => {
                    for (neuron, &target) in current.neurons_mut().iter_mut().zip(expected) {
                        neuron.calculate_output_error(target);
                    }
                }
                NeuronType::Hidden => {
                    if let Some(next) = tail.first() {
                        for (j, neuron) in current.neurons_mut().iter_mut().enumerate() {
                            neuron.calculate_hidden_error(next, j);
                        }
                    }
                }
                NeuronType::Input => {}
            }
        }
        Ok(())
    }

    /// Apply one gradient step to every hidden and output neuron.
    ///
    /// Uses the inputs cached by the last forward pass and the error terms from
    /// the last [`NeuralNetwork::calculate_errors`].
    pub fn update_weights(&mut self, learning_rate: f64) {
        for layer in self.layers.iter_mut().rev() {
            match layer.kind() {
                NeuronType::Input => {}
                NeuronType::Hidden | NeuronType::Output => {
                    for neuron in layer.neurons_mut() {
                        neuron.update_weights(learning_rate);
                    }
                }
            }
        }
    }

    /// Train on `dataset` for `epochs` full passes of per-sample gradient descent.
    ///
    /// The dataset is checked against the topology before any weight changes,
    /// so a malformed sample leaves the network exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Dataset`] if any sample's input or expected
    /// vector length does not match the topology.
    pub fn learn_back_propagation(&mut self, dataset: &DataSet, epochs: usize) -> Result<()> {
        if let Err(err) = dataset.validate_for(&self.topology) {
            warn!(error = %err, "rejected training data");
            return Err(err);
        }

        let learning_rate = self.topology.learning_rate();
        info!(
            epochs,
            samples = dataset.len(),
            learning_rate,
            "starting backpropagation"
        );

        for epoch in 0..epochs {
            let mut total_error = 0.0;
            for sample in dataset.samples() {
                let outputs = self.predict(&sample.inputs)?;
                total_error += squared_error(outputs, &sample.expected);
                self.calculate_errors(&sample.expected)?;
                self.update_weights(learning_rate);
            }

            if (epoch + 1) % LOG_INTERVAL == 0 {
                let loss = total_error / dataset.len().max(1) as f64;
                debug!(epoch = epoch + 1, loss, "training progress");
            }
        }

        info!(epochs, "training finished");
        Ok(())
    }

    /// Mean squared error over every output of every sample.
    ///
    /// Runs a forward pass per sample, so cached neuron state is overwritten.
    /// An empty dataset has an error of 0.
    pub fn mean_squared_error(&mut self, dataset: &DataSet) -> Result<f64> {
        dataset.validate_for(&self.topology)?;
        if dataset.is_empty() {
            return Ok(0.0);
        }

        let mut total = 0.0;
        for sample in dataset.samples() {
            let outputs = self.predict(&sample.inputs)?;
            total += squared_error(outputs, &sample.expected);
        }
        Ok(total / (dataset.len() * self.topology.output_count()) as f64)
    }
}

fn check_len(values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(NetworkError::SizeMismatch {
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn squared_error(outputs: &[Neuron], expected: &[f64]) -> f64 {
    outputs
        .iter()
        .zip(expected)
        .map(|(neuron, target)| (target - neuron.output()).powi(2))
        .sum()
}
