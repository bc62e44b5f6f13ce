use serde::{Deserialize, Serialize};
use std::fs;

/// Points-to-win accepted by the game.
pub const POINTS_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub points_to_win: u32,
    pub seed: Option<u64>,
    pub hand_log: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub points_to_win: ValueSource,
    pub seed: ValueSource,
    pub hand_log: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            points_to_win: ValueSource::Default,
            seed: ValueSource::Default,
            hand_log: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            points_to_win: 10,
            seed: None,
            hand_log: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Defaults, then the TOML file named by `EUCHRE_CONFIG`, then `EUCHRE_*`
/// variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("EUCHRE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.points_to_win {
            cfg.points_to_win = v;
            sources.points_to_win = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.hand_log {
            cfg.hand_log = Some(v);
            sources.hand_log = ValueSource::File;
        }
    }

    if let Ok(points) = std::env::var("EUCHRE_POINTS")
        && !points.is_empty()
    {
        cfg.points_to_win = points
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid points to win: {:?}", points)))?;
        sources.points_to_win = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("EUCHRE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {:?}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(path) = std::env::var("EUCHRE_HAND_LOG")
        && !path.is_empty()
    {
        cfg.hand_log = Some(path);
        sources.hand_log = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    points_to_win: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    hand_log: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !POINTS_RANGE.contains(&cfg.points_to_win) {
        return Err(ConfigError::Invalid(format!(
            "points_to_win must be in {}..={}",
            POINTS_RANGE.start(),
            POINTS_RANGE.end()
        )));
    }
    Ok(())
}
