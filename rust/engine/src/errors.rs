use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: players must be >=1")]
    NoPlayers,
    #[error("Invalid configuration: players {players} exceeds the maximum of {max}")]
    TooManyPlayers { players: usize, max: usize },
    #[error("Invalid configuration: threshold {threshold} must be between 1 and 13")]
    ThresholdOutOfRange { threshold: u32 },
    #[error("Invalid configuration: games must be >=1")]
    NoGames,
}
