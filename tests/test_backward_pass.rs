// Tests for error calculation and weight updates.

use approx::assert_relative_eq;
use simple_neural_network::utils::sigmoid_derivative;
use simple_neural_network::{NeuralNetwork, Topology};

fn snapshot(net: &NeuralNetwork) -> Vec<(Vec<f64>, f64)> {
    net.layers()
        .iter()
        .flat_map(|layer| layer.neurons())
        .map(|neuron| (neuron.weights().to_vec(), neuron.bias()))
        .collect()
}

#[test]
fn test_output_errors_follow_delta_rule() {
    let mut net = NeuralNetwork::with_seed(Topology::new(2, vec![3], 2, 0.5).unwrap(), 42);
    let expected = [1.0, 0.0];
    net.predict(&[0.3, 0.8]).unwrap();
    net.calculate_errors(&expected).unwrap();

    let output_layer = net.layer(2).unwrap();
    for (neuron, target) in output_layer.neurons().iter().zip(expected) {
        let y = neuron.output();
        assert_relative_eq!(
            neuron.error(),
            sigmoid_derivative(y) * (target - y),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_hidden_errors_use_computed_next_layer_errors() {
    let mut net = NeuralNetwork::with_seed(Topology::new(2, vec![4, 3], 2, 0.5).unwrap(), 7);
    net.predict(&[0.6, -0.4]).unwrap();
    net.calculate_errors(&[0.0, 1.0]).unwrap();

    // Walk back from the last hidden layer; every next layer already has its errors.
    for i in (1..net.layer_count() - 1).rev() {
        let current = net.layer(i).unwrap();
        let next = net.layer(i + 1).unwrap();
        assert!(next.neurons().iter().any(|n| n.error() != 0.0));

        for (j, neuron) in current.neurons().iter().enumerate() {
            let downstream: f64 = next
                .neurons()
                .iter()
                .map(|n| n.error() * n.weights()[j])
                .sum();
            assert_relative_eq!(
                neuron.error(),
                sigmoid_derivative(neuron.output()) * downstream,
                epsilon = 1e-12
            );
        }
    }
}

#[test]
fn test_one_cycle_changes_weights() {
    let mut net = NeuralNetwork::with_seed(Topology::new(2, vec![2], 1, 0.5).unwrap(), 42);
    let before = snapshot(&net);

    net.predict(&[1.0, 0.0]).unwrap();
    net.calculate_errors(&[1.0]).unwrap();
    net.update_weights(net.topology().learning_rate());

    let after = snapshot(&net);
    assert_ne!(before, after);

    // input neurons are never trained
    let inputs = net.layer(0).unwrap().len();
    assert_eq!(before[..inputs], after[..inputs]);
}

#[test]
fn test_update_matches_gradient_step() {
    let mut net = NeuralNetwork::with_seed(Topology::new(2, vec![2], 1, 0.5).unwrap(), 3);
    let learning_rate = 0.25;
    net.predict(&[0.5, 1.0]).unwrap();
    net.calculate_errors(&[0.0]).unwrap();
    let before = net.clone();

    net.update_weights(learning_rate);

    for (old_layer, new_layer) in before.layers()[1..].iter().zip(&net.layers()[1..]) {
        for (old, new) in old_layer.neurons().iter().zip(new_layer.neurons()) {
            for ((w_old, w_new), x) in old.weights().iter().zip(new.weights()).zip(old.inputs()) {
                assert_relative_eq!(*w_new, w_old + learning_rate * old.error() * x, epsilon = 1e-12);
            }
            assert_relative_eq!(new.bias(), old.bias() + learning_rate * old.error(), epsilon = 1e-12);
        }
    }
}

#[test]
fn test_zero_error_leaves_weights() {
    let mut net = NeuralNetwork::with_seed(Topology::new(1, vec![], 1, 0.5).unwrap(), 5);
    let prediction = net.predict_values(&[0.5]).unwrap();
    net.calculate_errors(&prediction).unwrap();
    let before = snapshot(&net);

    net.update_weights(0.5);

    assert_eq!(before, snapshot(&net));
}
