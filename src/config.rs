//! Configuration management for SCAN clustering runs

use crate::cluster::Engine;
use crate::error::{ScanError, ScanResult};

/// The two SCAN parameters every engine takes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanParams {
    /// Structural similarity threshold (ε)
    pub epsilon: f64,

    /// Minimum number of ε-neighbors for a core vertex (μ)
    pub mu: usize,
}

impl ScanParams {
    pub fn new(epsilon: f64, mu: usize) -> Self {
        Self { epsilon, mu }
    }

    /// Check ranges. The engines accept anything; this is for callers.
    pub fn validate(&self) -> ScanResult<()> {
        if self.epsilon.is_nan() || !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ScanError::InvalidParameter {
                name: "epsilon",
                message: format!("must be within [0, 1], got {}", self.epsilon),
            });
        }
        if self.mu == 0 {
            return Err(ScanError::InvalidParameter {
                name: "mu",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            epsilon: 0.5,
            mu: 2,
        }
    }
}

/// Full configuration for a clustering run
#[derive(Debug, Clone)]
pub struct Config {
    /// Similarity threshold and core size
    pub params: ScanParams,

    /// Insert edges one-way instead of both ways
    pub directed: bool,

    /// Which engine(s) to run
    pub engines: Vec<Engine>,

    /// Worker threads for the parallel engine (0 = all cores)
    pub threads: usize,

    /// Where to save results, if anywhere
    pub output_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            params: ScanParams::default(),
            directed: false,
            engines: vec![Engine::Sequential],
            threads: 0,
            output_dir: None,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        params: ScanParams,
        directed: bool,
        engines: Vec<Engine>,
        threads: usize,
        output_dir: Option<String>,
    ) -> Self {
        Self {
            params,
            directed,
            engines,
            threads,
            output_dir,
        }
    }

    /// Resolve the thread count, mapping 0 to the number of cores
    pub fn worker_threads(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get()
        }
    }

    pub fn validate(&self) -> ScanResult<()> {
        self.params.validate()?;
        if self.engines.is_empty() {
            return Err(ScanError::InvalidParameter {
                name: "engine",
                message: "at least one engine must be selected".to_string(),
            });
        }
        Ok(())
    }
}
