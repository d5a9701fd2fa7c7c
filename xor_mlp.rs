use simple_neural_network::dataset::load_dataset;
use simple_neural_network::topology::load_topology;
use simple_neural_network::{DataSet, NeuralNetwork, Result};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

// Small MLP learning XOR from the bundled config and dataset.
const DEFAULT_TOPOLOGY: &str = "config/xor.json";
const DEFAULT_DATASET: &str = "data/xor.json";
const DEFAULT_EPOCHS: usize = 10_000;

// Usage: xor_mlp [topology.json] [dataset.json]
fn paths_from_args(args: &[String]) -> (&str, &str) {
    let topology = args.get(1).map_or(DEFAULT_TOPOLOGY, String::as_str);
    let dataset = args.get(2).map_or(DEFAULT_DATASET, String::as_str);
    (topology, dataset)
}

// Evaluate every sample and print expected vs predicted values.
fn test(network: &mut NeuralNetwork, data: &DataSet) -> Result<()> {
    println!("\nTesting the trained network:");
    for sample in data.samples() {
        let predicted = network.predict_values(&sample.inputs)?;
        println!(
            "Input: {:?}, Expected Output: {:?}, Predicted Output: {:.3?}",
            sample.inputs, sample.expected, predicted
        );
    }
    println!("Mean squared error: {:.6}", network.mean_squared_error(data)?);
    Ok(())
}

fn run(topology_path: &str, dataset_path: &str) -> Result<()> {
    let config = load_topology(topology_path)?;
    let data = load_dataset(dataset_path)?;

    let mut network = NeuralNetwork::from_config(&config)?;
    network.learn_back_propagation(&data, config.epochs.unwrap_or(DEFAULT_EPOCHS))?;
    test(&mut network, &data)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let (topology_path, dataset_path) = paths_from_args(&args);

    if let Err(err) = run(topology_path, dataset_path) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
