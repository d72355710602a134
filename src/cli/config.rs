//! Shared configuration arguments for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::{board::Growth, config::GameConfig};

/// Built-in rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// Tic-tac-toe with X and O
    #[default]
    Classic,
    /// Tree planting with aging trees
    Trees,
}

/// How the game is configured, shared by all commands
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON configuration file (overrides --preset)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Built-in rule set
    #[arg(long, value_enum, default_value = "classic")]
    pub preset: Preset,

    /// Board size as ROWSxCOLS, e.g. 4x4
    #[arg(long, value_parser = parse_dimensions)]
    pub size: Option<(usize, usize)>,

    /// Disable piece aging even if the rule set enables it
    #[arg(long)]
    pub no_growth: bool,

    /// Hide the move list
    #[arg(long)]
    pub no_history: bool,
}

impl ConfigArgs {
    /// Resolve the arguments into a validated game configuration
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => match self.preset {
                Preset::Classic => GameConfig::classic(),
                Preset::Trees => GameConfig::tree_planting(),
            },
        };

        if let Some((rows, cols)) = self.size {
            config = config.with_dimensions(rows, cols);
        }
        if self.no_growth {
            config = config.with_growth(Growth::Static);
        }
        if self.no_history {
            config = config.with_debug(false);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_dimensions(s: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got '{s}'"))?;
    let rows = rows
        .trim()
        .parse()
        .map_err(|_| format!("invalid row count '{rows}'"))?;
    let cols = cols
        .trim()
        .parse()
        .map_err(|_| format!("invalid column count '{cols}'"))?;
    Ok((rows, cols))
}
