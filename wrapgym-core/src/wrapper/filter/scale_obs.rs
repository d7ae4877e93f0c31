//! Scaling of array observations.
use super::ObsFilter;
use crate::{error::WrapError, record::Record, ArrayObs, BoxSpace, Element};
use anyhow::Result;
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

/// Configuration of [`ScaleObs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleObsConfig {
    /// Every element of observations is divided by this value.
    pub scale: f32,
}

impl Default for ScaleObsConfig {
    fn default() -> Self {
        Self { scale: 255.0 }
    }
}

impl ScaleObsConfig {
    /// Sets the divisor.
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Converts array observations to `f32` and divides them by a constant.
///
/// With the default configuration, pixel values in `[0, 255]` are mapped into `[0, 1]`.
#[derive(Debug, Clone)]
pub struct ScaleObs {
    scale: f64,
}

impl<T: Element> ObsFilter<BoxSpace<T>> for ScaleObs {
    type Config = ScaleObsConfig;
    type Space = BoxSpace<f32>;

    fn build(config: &Self::Config) -> Result<Self> {
        if !config.scale.is_finite() || config.scale == 0.0 {
            return Err(WrapError::InvalidConfiguration(format!(
                "scale must be finite and non-zero, got {}",
                config.scale
            ))
            .into());
        }
        Ok(Self {
            scale: config.scale as f64,
        })
    }

    fn filt_space(&self, space: &BoxSpace<T>) -> BoxSpace<f32> {
        let low: f64 = space.low().as_();
        let high: f64 = space.high().as_();
        let (low, high) = ((low / self.scale) as f32, (high / self.scale) as f32);
        if low <= high {
            BoxSpace::new(low, high, space.shape())
        } else {
            BoxSpace::new(high, low, space.shape())
        }
    }

    fn filt(&mut self, obs: ArrayObs<T>) -> (ArrayObs<f32>, Record) {
        let scale = self.scale;
        let obs = obs.0.mapv(|v| {
            let v: f64 = v.as_();
            (v / scale) as f32
        });
        (ArrayObs(obs), Record::empty())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Space;
    use ndarray::arr1;

    fn build<T: Element>(config: &ScaleObsConfig) -> Result<ScaleObs> {
        <ScaleObs as ObsFilter<BoxSpace<T>>>::build(config)
    }

    #[test]
    fn test_scale_pixels() -> Result<()> {
        let mut filter = build::<u8>(&ScaleObsConfig::default())?;
        let space = filter.filt_space(&BoxSpace::new(0u8, 255, vec![3]));
        assert_eq!(space, BoxSpace::new(0f32, 1.0, vec![3]));

        let obs = ArrayObs(arr1(&[0u8, 51, 255]).into_dyn());
        let (obs, _) = <ScaleObs as ObsFilter<BoxSpace<u8>>>::filt(&mut filter, obs);
        assert_eq!(obs.0, arr1(&[0f32, 0.2, 1.0]).into_dyn());
        assert!(space.contains(&obs));
        Ok(())
    }

    #[test]
    fn test_negative_scale_keeps_bounds_ordered() -> Result<()> {
        let filter = build::<f32>(&ScaleObsConfig::default().scale(-2.0))?;
        let space = filter.filt_space(&BoxSpace::new(0f32, 4.0, vec![1]));
        assert_eq!(space, BoxSpace::new(-2f32, 0.0, vec![1]));
        Ok(())
    }

    #[test]
    fn test_zero_scale() {
        let config = ScaleObsConfig::default().scale(0.0);
        assert!(build::<u8>(&config).is_err());
    }
}
