use crate::harness::{Evaluation, DEFAULT_COUNT, DEFAULT_NORMAL};
use crate::scattering::ScatterModel;
use crate::vector::Vector3;
use anyhow::{Context, Error};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// An evaluation file: which models to characterise and under which conditions.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Seeds the thread PRNG. Runs are seeded from entropy when absent.
    pub seed: Option<u64>,
    pub count: usize,
    pub normal: [f64; 3],
    /// Incoming ray for the reflection models.
    pub incoming: [f64; 3],
    pub models: Vec<ScatterModel>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            count: DEFAULT_COUNT,
            normal: DEFAULT_NORMAL.into(),
            incoming: [
                std::f64::consts::FRAC_1_SQRT_2,
                std::f64::consts::FRAC_1_SQRT_2,
                0.0,
            ],
            models: vec![],
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut file = File::open(path).context("failed to open config file")?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .context("failed to read config file")?;
        contents.parse()
    }

    pub fn evaluation(&self) -> Evaluation {
        Evaluation::new(self.count, self.normal.into())
    }

    pub fn incoming(&self) -> Vector3 {
        self.incoming.into()
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).context("failed to parse config file")
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use crate::scattering::ScatterModel;
    use crate::vector::Vector3;

    #[test]
    fn defaults() {
        let config: Config = "".parse().expect("empty config is valid");

        assert_eq!(config, Config::default());
        assert_eq!(config.count, 10_000);
        assert_eq!(config.normal, [0.0, -1.0, 0.0]);
        assert!(config.models.is_empty());
    }

    #[test]
    fn full() {
        let config: Config = r#"
            seed = 7
            count = 500
            normal = [0.0, 0.0, 1.0]
            incoming = [1.0, 0.0, -1.0]

            [[models]]
            kind = "hemispherical_reflection"

            [[models]]
            kind = "reflection_clustered"
            spread = 0.5
        "#
        .parse()
        .expect("valid config");

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.evaluation().count, 500);
        assert_eq!(config.evaluation().normal, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(config.incoming(), Vector3::new(1.0, 0.0, -1.0));
        assert_eq!(
            config.models,
            vec![
                ScatterModel::HemisphericalReflection,
                ScatterModel::ReflectionClustered { spread: 0.5 },
            ]
        );
    }

    #[test]
    fn demo_config() {
        let config: Config = include_str!("../demos/models.toml")
            .parse()
            .expect("demo config is valid");

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.models.len(), 7);
    }

    #[test]
    fn unknown_model_is_an_error() {
        let err = r#"
            [[models]]
            kind = "specular"
        "#
        .parse::<Config>()
        .unwrap_err();

        assert_eq!(err.to_string(), "failed to parse config file");
    }

    #[test]
    fn missing_file() {
        let err = Config::load("/nonexistent/scatter.toml").unwrap_err();
        assert_eq!(err.to_string(), "failed to open config file");
    }
}
