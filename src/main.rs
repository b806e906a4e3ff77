use anyhow::{Context, Error};
use scatter::config::Config;
use scatter::rng::ThreadPrng;

fn main() -> Result<(), Error> {
    simple_logger::init().context("failed to init logging")?;

    let config_file_name = std::env::args_os().nth(1).context("expected config file name")?;
    let config = Config::load(&config_file_name).context("failed to load the config")?;

    if let Some(seed) = config.seed {
        ThreadPrng::seed(seed);
    }

    let evaluation = config.evaluation();
    let incoming = config.incoming();
    log::debug!(
        "evaluating {} models with {} draws each about {:?}",
        config.models.len(),
        evaluation.count,
        evaluation.normal
    );

    let mut rng = ThreadPrng::get();
    for model in &config.models {
        let start = std::time::Instant::now();

        let bias = evaluation.bias(|normal| model.sample(&incoming, normal, &mut rng));

        log::debug!("{} took {:?}", model.name(), start.elapsed());
        println!(
            "{:<32} mean ({:+.4}, {:+.4}, {:+.4})  concentration {:.4}  alignment {:+.4}",
            model.name(),
            bias.mean.x,
            bias.mean.y,
            bias.mean.z,
            bias.concentration,
            bias.alignment
        );
    }

    Ok(())
}
