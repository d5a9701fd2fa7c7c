//! Building blocks of the network
//!
//! A [`Layer`] is an ordered collection of [`Neuron`]s tagged with a
//! [`NeuronType`]. The network owns its layers and each layer owns its neurons.

pub mod layer;
pub mod neuron;

pub use layer::Layer;
pub use neuron::{Neuron, NeuronType};
