use revolution_engine::game::{
    DEFAULT_GAMES, DEFAULT_PLAYERS, DEFAULT_REPORT_EVERY, DEFAULT_THRESHOLD, SimConfig,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::str::FromStr;

pub const CONFIG_ENV: &str = "REVOLUTION_CONFIG";
pub const PLAYERS_ENV: &str = "REVOLUTION_PLAYERS";
pub const THRESHOLD_ENV: &str = "REVOLUTION_THRESHOLD";
pub const GAMES_ENV: &str = "REVOLUTION_GAMES";
pub const REPORT_EVERY_ENV: &str = "REVOLUTION_REPORT_EVERY";
pub const SEED_ENV: &str = "REVOLUTION_SEED";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub players: usize,
    pub threshold: u32,
    pub games: u64,
    pub report_every: u64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub threshold: ValueSource,
    pub games: ValueSource,
    pub report_every: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            threshold: ValueSource::Default,
            games: ValueSource::Default,
            report_every: ValueSource::Default,
            seed: ValueSource::Default,
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
            players: DEFAULT_PLAYERS,
            threshold: DEFAULT_THRESHOLD as u32,
            games: DEFAULT_GAMES,
            report_every: DEFAULT_REPORT_EVERY,
            seed: None,
        }
    }
}

impl Config {
    /// Validates the table and builds the engine configuration.
    pub fn to_sim_config(&self) -> Result<SimConfig, ConfigError> {
        SimConfig::new(self.players, self.threshold, self.games)
            .map(|c| c.with_report_every(self.report_every))
            .map_err(|e| ConfigError::Invalid(e.to_string()))
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
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Resolves and validates configuration from every source except flags.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let resolved = resolve_with_sources()?;
    resolved.config.to_sim_config()?;
    Ok(resolved)
}

/// Layers defaults, then the TOML file named by `REVOLUTION_CONFIG`, then
/// `REVOLUTION_*` environment variables.
///
/// Values are parsed but not range-checked: commands apply their flags on
/// top and validate the final table once.
pub fn resolve_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.threshold {
            cfg.threshold = v;
            sources.threshold = ValueSource::File;
        }
        if let Some(v) = f.games {
            cfg.games = v;
            sources.games = ValueSource::File;
        }
        if let Some(v) = f.report_every {
            cfg.report_every = v;
            sources.report_every = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(v) = env_value(PLAYERS_ENV, "players")? {
        cfg.players = v;
        sources.players = ValueSource::Env;
    }
    if let Some(v) = env_value(THRESHOLD_ENV, "threshold")? {
        cfg.threshold = v;
        sources.threshold = ValueSource::Env;
    }
    if let Some(v) = env_value(GAMES_ENV, "games")? {
        cfg.games = v;
        sources.games = ValueSource::Env;
    }
    if let Some(v) = env_value(REPORT_EVERY_ENV, "report_every")? {
        cfg.report_every = v;
        sources.report_every = ValueSource::Env;
    }
    if let Some(v) = env_value(SEED_ENV, "seed")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    threshold: Option<u32>,
    #[serde(default)]
    games: Option<u64>,
    #[serde(default)]
    report_every: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
}

fn env_value<T: FromStr>(key: &str, name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", name, raw))),
        _ => Ok(None),
    }
}
