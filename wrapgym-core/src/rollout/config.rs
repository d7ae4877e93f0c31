//! Configuration of [`run_steps`](super::run_steps).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
    time::Duration,
};

/// Configuration of [`run_steps`](super::run_steps).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct RolloutConfig {
    /// The number of environment steps.
    pub n_steps: usize,

    /// Wait time after every step in milliseconds, for pacing the loop.
    pub wait_ms: u64,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            n_steps: 1000,
            wait_ms: 0,
        }
    }
}

impl RolloutConfig {
    /// Sets the number of environment steps.
    pub fn n_steps(mut self, v: usize) -> Self {
        self.n_steps = v;
        self
    }

    /// Sets the wait time after every step in milliseconds.
    pub fn wait_ms(mut self, v: u64) -> Self {
        self.wait_ms = v;
        self
    }

    /// Wait time after every step.
    pub fn wait(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }

    /// Constructs [`RolloutConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`RolloutConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_rollout_config() -> Result<()> {
        let config = RolloutConfig::default().n_steps(500).wait_ms(10);

        let dir = TempDir::new("rollout_config")?;
        let path = dir.path().join("rollout_config.yaml");
        config.save(&path)?;
        let config_ = RolloutConfig::load(&path)?;
        assert_eq!(config, config_);
        assert_eq!(config_.wait(), Duration::from_millis(10));
        Ok(())
    }
}
