use anyhow::{ensure, Result};
use clap::Parser;
use log::info;
use wrapgym_core::{
    wrapper::{
        ClipReward, ClipRewardConfig, RemapAct, RemapActConfig, ScaleObs, ScaleObsConfig,
        TransformEnv, TransformEnvConfig,
    },
    Env as _, Policy, RandomPolicy, Space,
};
use wrapgym_toy_env::{PixelEnv, PixelEnvConfig};

type Env = TransformEnv<PixelEnv, ScaleObs, ClipReward, RemapAct>;
type EnvConfig =
    TransformEnvConfig<PixelEnvConfig, ScaleObsConfig, ClipRewardConfig, RemapActConfig>;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The number of environment steps
    #[arg(long, default_value_t = 1000)]
    n_steps: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// YAML file of the environment configuration
    #[arg(long)]
    config: Option<String>,
}

fn env_config(args: &Args) -> Result<EnvConfig> {
    let pixel_config = match &args.config {
        Some(path) => PixelEnvConfig::load(path)?,
        None => PixelEnvConfig::default(),
    };
    Ok(EnvConfig::default()
        .env_config(pixel_config)
        .act_filter_config(RemapActConfig::default().seed(args.seed)))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut env = Env::build(&env_config(&args)?, args.seed as i64)?;
    let space = env.observation_space().clone();
    info!("Observation space: {:?}", space);
    info!("Action space: {:?}", env.action_space());

    let mut policy = RandomPolicy::new(&env, args.seed);
    let mut obs = env.reset()?;
    let mut n_remapped = 0;

    for i in 0..args.n_steps {
        ensure!(space.contains(&obs), "observation out of [0, 1] at step {}", i);
        let act = policy.sample(&obs);
        let (step, record) = env.step_with_reset(&act)?;
        ensure!(
            (0.0..=1.0).contains(&step.reward),
            "reward {} out of [0, 1] at step {}",
            step.reward,
            i
        );
        if record.get("remapped").is_some() {
            n_remapped += 1;
        }
        obs = step.init_obs.unwrap_or(step.obs);
    }

    info!("{} of {} actions were remapped", n_remapped, args.n_steps);
    println!("All checks passed");
    env.close()
}
