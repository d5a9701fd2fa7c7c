//! Ordered group of neurons sharing one position in the network

use crate::layers::{Neuron, NeuronType};

/// A layer of neurons of one nominal type.
///
/// Layers never refer to their neighbours. When a computation needs the next
/// layer (hidden error terms), the owning network passes it in explicitly.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    kind: NeuronType,
}

impl Layer {
    pub fn new(neurons: Vec<Neuron>, kind: NeuronType) -> Self {
        Self { neurons, kind }
    }

    /// Create a hidden layer.
    pub fn hidden(neurons: Vec<Neuron>) -> Self {
        Self::new(neurons, NeuronType::Hidden)
    }

    pub fn neuron(&self, index: usize) -> Option<&Neuron> {
        self.neurons.get(index)
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub(crate) fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    pub fn kind(&self) -> NeuronType {
        self.kind
    }

    /// Number of neurons in the layer.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Outputs of every neuron, in order.
    pub fn output_signals(&self) -> Vec<f64> {
        self.neurons.iter().map(Neuron::output).collect()
    }
}
