use anyhow::{ensure, Result};
use clap::Parser;
use log::info;
use ndarray::Axis;
use wrapgym_core::{
    wrapper::{FrameStack, FrameStackConfig},
    Env as _, Policy, RandomPolicy,
};
use wrapgym_toy_env::{PixelEnv, PixelEnvConfig};

type Env = FrameStack<PixelEnv, u8>;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The number of stacked frames
    #[arg(long, default_value_t = 4)]
    n_stack: i64,

    /// The number of environment steps
    #[arg(long, default_value_t = 500)]
    n_steps: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// YAML file of the environment configuration
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let pixel_config = match &args.config {
        Some(path) => PixelEnvConfig::load(path)?,
        None => PixelEnvConfig::default(),
    };
    let (h, w) = (pixel_config.height, pixel_config.width);
    let config = FrameStackConfig::default()
        .env_config(pixel_config)
        .n_stack(args.n_stack);
    let mut env = Env::build(&config, args.seed as i64)?;
    let k = env.n_stack();
    let expected = [k, h, w];
    info!("Stacked observation shape: {:?}", env.observation_space().shape());

    let mut policy = RandomPolicy::new(&env, args.seed);
    let mut obs = env.reset()?;
    let mut n_episodes = 0;

    for i in 0..args.n_steps {
        ensure!(
            obs.0.shape() == &expected[..],
            "unexpected shape {:?} at step {}",
            obs.0.shape(),
            i
        );
        let act = policy.sample(&obs);
        let (step, _) = env.step_with_reset(&act)?;
        obs = match step.init_obs {
            Some(init_obs) => {
                n_episodes += 1;
                // Every slot holds the initial observation of the new episode
                let first = init_obs.0.index_axis(Axis(0), 0).to_owned();
                ensure!(
                    init_obs.0.axis_iter(Axis(0)).all(|frame| frame == first),
                    "initial frames differ after reset at step {}",
                    i
                );
                init_obs
            }
            None => step.obs,
        };
    }

    println!(
        "Shape stayed {:?} over {} steps and {} episodes",
        expected, args.n_steps, n_episodes
    );
    env.close()
}
