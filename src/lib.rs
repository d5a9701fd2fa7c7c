//! Simple Neural Network Library
//!
//! A minimal multilayer feedforward network trained by backpropagation with
//! plain per-sample gradient descent.
//!
//! # Modules
//!
//! - `topology`: Network shape, learning rate and JSON topology configs
//! - `layers`: Neuron and Layer types
//! - `network`: Network construction, forward pass and training loop
//! - `dataset`: Training samples and JSON dataset loading
//! - `utils`: Shared utilities (RNG, activation functions)
//! - `error`: Error type shared by every module
//!
//! # Example
//!
//! ```
//! use simple_neural_network::{DataSet, NeuralNetwork, Topology};
//!
//! let topology = Topology::new(2, vec![2], 1, 0.5).unwrap();
//! let mut network = NeuralNetwork::with_seed(topology, 7);
//! let data = DataSet::from_samples(vec![
//!     (vec![0.0, 0.0], vec![0.0]),
//!     (vec![1.0, 1.0], vec![0.0]),
//!     (vec![1.0, 0.0], vec![1.0]),
//!     (vec![0.0, 1.0], vec![1.0]),
//! ]);
//! network.learn_back_propagation(&data, 100).unwrap();
//! let outputs = network.predict_values(&[1.0, 0.0]).unwrap();
//! assert_eq!(outputs.len(), 1);
//! ```

pub mod dataset;
pub mod error;
pub mod layers;
pub mod network;
pub mod topology;
pub mod utils;

pub use dataset::DataSet;
pub use error::{NetworkError, Result};
pub use layers::{Layer, Neuron, NeuronType};
pub use network::NeuralNetwork;
pub use topology::Topology;
