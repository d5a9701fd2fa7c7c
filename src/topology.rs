//! Network topology and its JSON configuration
//!
//! A [`Topology`] is the immutable shape of a network: how many input neurons,
//! the sizes of the hidden layers in order, how many output neurons, and the
//! learning rate used by training. It can be built in code with
//! [`Topology::new`] or loaded from a JSON file with [`load_topology`].

use crate::error::{NetworkError, Result};
use crate::utils::Activation;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Immutable description of a network's shape and learning rate.
///
/// Every instance upholds: all counts are greater than zero and the learning
/// rate is finite and positive. The fields are private so the invariant cannot
/// be broken after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    input_count: usize,
    hidden_layers: Vec<usize>,
    output_count: usize,
    learning_rate: f64,
    activation: Activation,
}

impl Topology {
    /// Create a topology with the default (sigmoid) activation.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Configuration`] if `input_count`, `output_count`
    /// or any hidden layer size is zero, or if `learning_rate` is not a finite
    /// positive number.
    ///
    /// # Example
    ///
    /// ```
    /// use simple_neural_network::Topology;
    ///
    /// let topology = Topology::new(2, vec![2], 1, 0.5).unwrap();
    /// assert_eq!(topology.hidden_layer_count(), 1);
    /// ```
    pub fn new(
        input_count: usize,
        hidden_layers: Vec<usize>,
        output_count: usize,
        learning_rate: f64,
    ) -> Result<Self> {
        if input_count == 0 {
            return Err(NetworkError::Configuration(
                "input_count must be greater than 0".to_string(),
            ));
        }
        if output_count == 0 {
            return Err(NetworkError::Configuration(
                "output_count must be greater than 0".to_string(),
            ));
        }
        if let Some(index) = hidden_layers.iter().position(|&size| size == 0) {
            return Err(NetworkError::Configuration(format!(
                "hidden layer {} must have at least one neuron",
                index
            )));
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(NetworkError::Configuration(format!(
                "learning_rate must be a positive number, got {}",
                learning_rate
            )));
        }

        Ok(Self {
            input_count,
            hidden_layers,
            output_count,
            learning_rate,
            activation: Activation::default(),
        })
    }

    /// Replace the activation used by hidden and output neurons.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn output_count(&self) -> usize {
        self.output_count
    }

    /// Sizes of the hidden layers, in input-to-output order.
    pub fn hidden_layers(&self) -> &[usize] {
        &self.hidden_layers
    }

    pub fn hidden_layer_count(&self) -> usize {
        self.hidden_layers.len()
    }

    /// Number of neurons in hidden layer `index`, if that layer exists.
    pub fn neurons_in_hidden_layer(&self, index: usize) -> Option<usize> {
        self.hidden_layers.get(index).copied()
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

/// Topology plus training settings as read from a JSON file.
///
/// # Example
///
/// ```json
/// {
///   "input_count": 2,
///   "hidden_layers": [2],
///   "output_count": 1,
///   "learning_rate": 0.5,
///   "activation": "sigmoid",
///   "epochs": 10000,
///   "seed": 7
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TopologyConfig {
    pub input_count: usize,

    /// Hidden layer sizes; may be omitted for a network with no hidden layer.
    #[serde(default)]
    pub hidden_layers: Vec<usize>,

    pub output_count: usize,

    pub learning_rate: f64,

    /// "sigmoid" (default) or "tanh"
    pub activation: Option<Activation>,

    /// Number of training epochs a runner should use
    pub epochs: Option<usize>,

    /// Seed for weight initialization; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl TopologyConfig {
    /// Build a validated [`Topology`] from this config.
    pub fn topology(&self) -> Result<Topology> {
        let topology = Topology::new(
            self.input_count,
            self.hidden_layers.clone(),
            self.output_count,
            self.learning_rate,
        )?;
        Ok(topology.with_activation(self.activation.unwrap_or_default()))
    }
}

/// Loads a topology configuration from a JSON file.
///
/// Reads the file at `path`, deserializes it into a [`TopologyConfig`] and
/// checks that it describes a valid [`Topology`].
///
/// # Examples
///
/// ```no_run
/// use simple_neural_network::topology::load_topology;
///
/// let config = load_topology("config/xor.json").unwrap();
/// assert_eq!(config.input_count, 2);
/// ```
pub fn load_topology<P: AsRef<Path>>(path: P) -> Result<TopologyConfig> {
    let contents = fs::read_to_string(path)?;
    let config: TopologyConfig = serde_json::from_str(&contents)?;
    config.topology()?;
    Ok(config)
}
