//! Configuration of [`FrameStack`](super::FrameStack).
use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`FrameStack`](super::FrameStack).
///
/// `C` is the configuration of the inner environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStackConfig<C> {
    /// Configuration of the inner environment.
    pub env_config: C,

    /// The number of stacked frames. Must be positive.
    pub n_stack: i64,
}

impl<C: Default> Default for FrameStackConfig<C> {
    fn default() -> Self {
        Self {
            env_config: C::default(),
            n_stack: 4,
        }
    }
}

impl<C> FrameStackConfig<C> {
    /// Sets the configuration of the inner environment.
    pub fn env_config(mut self, env_config: C) -> Self {
        self.env_config = env_config;
        self
    }

    /// Sets the number of stacked frames.
    pub fn n_stack(mut self, n_stack: i64) -> Self {
        self.n_stack = n_stack;
        self
    }
}

impl<C: Serialize + DeserializeOwned> FrameStackConfig<C> {
    /// Constructs [`FrameStackConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves [`FrameStackConfig`] as YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
