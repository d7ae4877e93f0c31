//! Configuration of [`PixelEnv`](super::PixelEnv).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`PixelEnv`](super::PixelEnv).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelEnvConfig {
    /// Height of frames.
    pub height: usize,

    /// Width of frames.
    pub width: usize,

    /// The number of actions.
    pub n_actions: i64,

    /// Episodes are truncated after this number of steps.
    pub max_steps: usize,

    /// Probability that an episode terminates at each step.
    pub termination_prob: f32,

    /// Lives at the beginning of an episode.
    pub lives: usize,
}

impl Default for PixelEnvConfig {
    fn default() -> Self {
        Self {
            height: 84,
            width: 84,
            n_actions: 4,
            max_steps: 1000,
            termination_prob: 0.01,
            lives: 5,
        }
    }
}

impl PixelEnvConfig {
    /// Sets the height of frames.
    pub fn height(mut self, v: usize) -> Self {
        self.height = v;
        self
    }

    /// Sets the width of frames.
    pub fn width(mut self, v: usize) -> Self {
        self.width = v;
        self
    }

    /// Sets the number of actions.
    pub fn n_actions(mut self, v: i64) -> Self {
        self.n_actions = v;
        self
    }

    /// Sets the maximum number of steps in an episode.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Sets the termination probability.
    pub fn termination_prob(mut self, v: f32) -> Self {
        self.termination_prob = v;
        self
    }

    /// Sets the number of lives.
    pub fn lives(mut self, v: usize) -> Self {
        self.lives = v;
        self
    }

    /// Constructs [`PixelEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves [`PixelEnvConfig`] as YAML file.
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
    fn test_serde_pixel_env_config() -> Result<()> {
        let config = PixelEnvConfig::default()
            .height(32)
            .width(24)
            .termination_prob(0.5)
            .lives(2);

        let dir = TempDir::new("pixel_env_config")?;
        let path = dir.path().join("pixel_env_config.yaml");
        config.save(&path)?;
        let config_ = PixelEnvConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }
}
