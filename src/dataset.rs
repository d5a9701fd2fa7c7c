//! Training data: paired input and expected-output vectors
//!
//! A [`DataSet`] can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "samples": [
//!     { "inputs": [0.0, 0.0], "expected": [0.0] },
//!     { "inputs": [1.0, 0.0], "expected": [1.0] }
//!   ]
//! }
//! ```

use crate::error::{NetworkError, Result};
use crate::topology::Topology;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One training example.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub expected: Vec<f64>,
}

/// Ordered collection of training samples.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DataSet {
    samples: Vec<Sample>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from `(inputs, expected)` pairs.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = (Vec<f64>, Vec<f64>)>,
    {
        Self {
            samples: samples
                .into_iter()
                .map(|(inputs, expected)| Sample { inputs, expected })
                .collect(),
        }
    }

    pub fn add_sample(&mut self, inputs: Vec<f64>, expected: Vec<f64>) {
        self.samples.push(Sample { inputs, expected });
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn input_signals(&self, index: usize) -> Option<&[f64]> {
        self.samples.get(index).map(|s| s.inputs.as_slice())
    }

    pub fn expected_result(&self, index: usize) -> Option<&[f64]> {
        self.samples.get(index).map(|s| s.expected.as_slice())
    }

    pub fn samples(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    /// Check every sample against the topology's input and output sizes.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Dataset`] naming the first offending sample.
    pub fn validate_for(&self, topology: &Topology) -> Result<()> {
        for (index, sample) in self.samples.iter().enumerate() {
            if sample.inputs.len() != topology.input_count() {
                return Err(NetworkError::Dataset(format!(
                    "sample {} has {} input values, topology expects {}",
                    index,
                    sample.inputs.len(),
                    topology.input_count()
                )));
            }
            if sample.expected.len() != topology.output_count() {
                return Err(NetworkError::Dataset(format!(
                    "sample {} has {} expected values, topology expects {}",
                    index,
                    sample.expected.len(),
                    topology.output_count()
                )));
            }
        }
        Ok(())
    }

    /// Structural checks that need no topology: non-empty, consistent, finite rows.
    fn check_well_formed(&self) -> Result<()> {
        let first = self
            .samples
            .first()
            .ok_or_else(|| NetworkError::Dataset("dataset has no samples".to_string()))?;
        let (input_len, expected_len) = (first.inputs.len(), first.expected.len());
        if input_len == 0 || expected_len == 0 {
            return Err(NetworkError::Dataset(
                "sample 0 has an empty inputs or expected vector".to_string(),
            ));
        }

        for (index, sample) in self.samples.iter().enumerate() {
            if sample.inputs.len() != input_len || sample.expected.len() != expected_len {
                return Err(NetworkError::Dataset(format!(
                    "sample {} has shape {}x{}, sample 0 has {}x{}",
                    index,
                    sample.inputs.len(),
                    sample.expected.len(),
                    input_len,
                    expected_len
                )));
            }
            let all_finite = sample
                .inputs
                .iter()
                .chain(&sample.expected)
                .all(|v| v.is_finite());
            if !all_finite {
                return Err(NetworkError::Dataset(format!(
                    "sample {} contains a non-finite value",
                    index
                )));
            }
        }
        Ok(())
    }
}

/// Loads a dataset from a JSON file.
///
/// Rejects files with no samples, empty vectors, rows whose lengths differ
/// from the first row, and non-finite values.
///
/// # Examples
///
/// ```no_run
/// use simple_neural_network::dataset::load_dataset;
///
/// let data = load_dataset("data/xor.json").unwrap();
/// assert_eq!(data.len(), 4);
/// ```
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<DataSet> {
    let contents = fs::read_to_string(path)?;
    let dataset: DataSet = serde_json::from_str(&contents)?;
    dataset.check_well_formed()?;
    Ok(dataset)
}
