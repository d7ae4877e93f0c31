mod config;
use anyhow::Result;
pub use config::PixelEnvConfig;
use log::{debug, trace};
use ndarray::{Array2, ArrayD};
use thiserror::Error;
use wrapgym_core::{
    error::WrapError,
    record::{Record, RecordValue},
    ArrayObs, BoxSpace, Discrete, DiscreteAct, Env, Space, Step,
};

/// Errors of [`PixelEnv`].
#[derive(Error, Debug, PartialEq)]
pub enum PixelEnvError {
    /// The environment has been closed.
    #[error("environment is closed")]
    Closed,

    /// `step` was called before `reset`, or after the end of an episode.
    #[error("environment must be reset before step")]
    NotReset,

    /// The action is not in the action space.
    #[error("invalid action: {0}")]
    InvalidAction(i64),
}

const NOOP: i64 = 0;
const UP: i64 = 2;
const DOWN: i64 = 3;

// Upper bound (exclusive) of background noise
const NOISE: u8 = 32;

/// A toy environment emitting grayscale frames.
///
/// A frame is a `(height, width)` array of `u8` with low-intensity noise and a
/// bright horizontal paddle. Action `2` moves the paddle up and action `3` moves
/// it down; the other actions leave it in place.
///
/// Rewards are drawn from `{-1, 0, 1, 2}`. A reward of `-1` costs a life and an
/// episode terminates when no lives are left, or with probability
/// [`PixelEnvConfig::termination_prob`] at each step. Episodes are truncated after
/// [`PixelEnvConfig::max_steps`] steps.
///
/// The information of each step is a [`Record`] with the total number of frames
/// since construction (`"frame_number"`) and the remaining lives (`"lives"`).
pub struct PixelEnv {
    config: PixelEnvConfig,
    rng: fastrand::Rng,
    observation_space: BoxSpace<u8>,
    action_space: Discrete,

    // Row of the paddle
    paddle: usize,

    lives: usize,

    // Steps in the current episode
    n_steps: usize,

    // Steps since construction
    frame_number: usize,

    needs_reset: bool,
    closed: bool,
}

impl PixelEnv {
    fn check_config(config: &PixelEnvConfig) -> Result<()> {
        let msg = if config.height == 0 || config.width == 0 {
            format!(
                "frame size must be positive, got {}x{}",
                config.height, config.width
            )
        } else if config.n_actions < 1 {
            format!("n_actions must be positive, got {}", config.n_actions)
        } else if config.max_steps == 0 {
            "max_steps must be positive".to_string()
        } else if config.lives == 0 {
            "lives must be positive".to_string()
        } else if !(0.0..=1.0).contains(&config.termination_prob) {
            format!(
                "termination_prob must be in [0, 1], got {}",
                config.termination_prob
            )
        } else {
            return Ok(());
        };
        Err(WrapError::InvalidConfiguration(msg).into())
    }

    fn frame(&mut self) -> ArrayObs<u8> {
        let (h, w) = (self.config.height, self.config.width);
        let paddle = self.paddle;
        let rng = &mut self.rng;
        let frame = Array2::from_shape_fn((h, w), |(i, _)| {
            if i == paddle {
                u8::MAX
            } else {
                rng.u8(..NOISE)
            }
        });
        let frame: ArrayD<u8> = frame.into_dyn();
        ArrayObs(frame)
    }

    fn info(&self) -> Record {
        Record::from_slice(&[
            ("frame_number", RecordValue::Scalar(self.frame_number as f32)),
            ("lives", RecordValue::Scalar(self.lives as f32)),
        ])
    }

    fn move_paddle(&mut self, act: i64) {
        match act {
            UP => self.paddle = self.paddle.saturating_sub(1),
            DOWN => self.paddle = (self.paddle + 1).min(self.config.height - 1),
            _ => {}
        }
    }
}

impl Env for PixelEnv {
    type Config = PixelEnvConfig;
    type Obs = ArrayObs<u8>;
    type Act = DiscreteAct;
    type Info = Record;
    type ObsSpace = BoxSpace<u8>;
    type ActSpace = Discrete;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Self::check_config(config)?;
        debug!("PixelEnv::build(), config = {:?}, seed = {}", config, seed);

        Ok(Self {
            config: config.clone(),
            rng: fastrand::Rng::with_seed(seed as u64),
            observation_space: BoxSpace::new(0, u8::MAX, vec![config.height, config.width]),
            action_space: Discrete::new(config.n_actions),
            paddle: config.height / 2,
            lives: config.lives,
            n_steps: 0,
            frame_number: 0,
            needs_reset: true,
            closed: false,
        })
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        trace!("PixelEnv::reset()");
        if self.closed {
            return Err(PixelEnvError::Closed.into());
        }
        self.paddle = self.config.height / 2;
        self.lives = self.config.lives;
        self.n_steps = 0;
        self.needs_reset = false;
        Ok(self.frame())
    }

    fn step(&mut self, act: &Self::Act) -> Result<(Step<Self>, Record)> {
        trace!("PixelEnv::step()");
        if self.closed {
            return Err(PixelEnvError::Closed.into());
        }
        if !self.action_space.contains(act) {
            return Err(PixelEnvError::InvalidAction(act.0).into());
        }
        if self.needs_reset {
            return Err(PixelEnvError::NotReset.into());
        }

        self.move_paddle(act.0);
        self.n_steps += 1;
        self.frame_number += 1;

        let reward = self.rng.usize(..4) as f32 - 1.0;
        if reward < 0.0 {
            self.lives = self.lives.saturating_sub(1);
        }
        let is_terminated =
            self.lives == 0 || self.rng.f32() < self.config.termination_prob;
        let is_truncated = self.n_steps >= self.config.max_steps;
        self.needs_reset = is_terminated || is_truncated;

        let obs = self.frame();
        let info = self.info();
        let record = Record::from_scalar("noop", (act.0 == NOOP) as i32 as f32);
        Ok((
            Step::new(obs, reward, is_terminated, is_truncated, info),
            record,
        ))
    }

    fn observation_space(&self) -> &Self::ObsSpace {
        &self.observation_space
    }

    fn action_space(&self) -> &Self::ActSpace {
        &self.action_space
    }

    fn close(&mut self) -> Result<()> {
        debug!("PixelEnv::close()");
        self.closed = true;
        Ok(())
    }
}
