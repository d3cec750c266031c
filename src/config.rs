use crate::hash::{MAX_COST, MIN_COST};
use anyhow::{bail, Context};
use std::env;

pub const DEFAULT_COST: u32 = 10;
pub const DEFAULT_PROMPT_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cost used when the command line does not name one.
    pub default_cost: u32,
    /// Ask for the password twice when generating interactively.
    pub confirm: bool,
    pub prompt_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_cost: DEFAULT_COST,
            confirm: true,
            prompt_attempts: DEFAULT_PROMPT_ATTEMPTS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup("BECRYPT_DEFAULT_COST") {
            let cost: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("BECRYPT_DEFAULT_COST is not a number: {:?}", raw))?;
            if !(MIN_COST..=MAX_COST).contains(&cost) {
                bail!(
                    "BECRYPT_DEFAULT_COST must be within {}..{}, got {}",
                    MIN_COST,
                    MAX_COST,
                    cost
                );
            }
            config.default_cost = cost;
        }

        if let Some(raw) = lookup("BECRYPT_CONFIRM") {
            config.confirm = parse_bool(&raw)
                .with_context(|| format!("BECRYPT_CONFIRM is not a boolean: {:?}", raw))?;
        }

        if let Some(raw) = lookup("BECRYPT_PROMPT_ATTEMPTS") {
            let attempts: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("BECRYPT_PROMPT_ATTEMPTS is not a number: {:?}", raw))?;
            if attempts == 0 {
                bail!("BECRYPT_PROMPT_ATTEMPTS must be at least 1");
            }
            config.prompt_attempts = attempts;
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Result<bool, anyhow::Error> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised value {:?}", other),
    }
}
