use crate::ledger::ColumnNames;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub columns: ColumnNames,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    /// Positional arguments (`INPUT [OUTPUT]`) take precedence over the environment.
    pub fn from_args_and_env(args: &[String]) -> Result<Self, ConfigError> {
        let mut env_map: HashMap<String, String> = std::env::vars().collect();
        if let Some(input) = args.first() {
            env_map.insert("INPUT_PATH".to_string(), input.clone());
            env_map.remove("OUTPUT_PATH");
        }
        if let Some(output) = args.get(1) {
            env_map.insert("OUTPUT_PATH".to_string(), output.clone());
        }
        Self::from_env_map(env_map)
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let input_path = env_map
            .get("INPUT_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| ConfigError::MissingEnv("INPUT_PATH".to_string()))?;

        let output_path = match env_map.get("OUTPUT_PATH") {
            Some(s) if !s.trim().is_empty() => PathBuf::from(s),
            _ => default_output_path(&input_path),
        };

        let defaults = ColumnNames::default();
        let columns = ColumnNames {
            instrument: column_name(&env_map, "SYMBOL_COLUMN", defaults.instrument)?,
            order_type: column_name(&env_map, "ORDER_TYPE_COLUMN", defaults.order_type)?,
            trade_date: column_name(&env_map, "TRADE_DATE_COLUMN", defaults.trade_date)?,
            unit_price: column_name(&env_map, "PRICE_COLUMN", defaults.unit_price)?,
            quantity: column_name(&env_map, "QUANTITY_COLUMN", defaults.quantity)?,
            tie_break: column_name(&env_map, "TIE_BREAK_COLUMN", defaults.tie_break)?,
            profit_loss: column_name(&env_map, "PNL_COLUMN", defaults.profit_loss)?,
        };

        Ok(Config {
            input_path,
            output_path,
            columns,
        })
    }
}

fn column_name(
    env_map: &HashMap<String, String>,
    key: &str,
    default: String,
) -> Result<String, ConfigError> {
    match env_map.get(key) {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue(
            key.to_string(),
            "column name must not be blank".to_string(),
        )),
        Some(value) => Ok(value.trim().to_string()),
    }
}

/// `<dir>/<stem>_pnl.<ext>` next to the input; `csv` when the input has no extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ledger".to_string());
    let ext = input
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "csv".to_string());
    input.with_file_name(format!("{}_pnl.{}", stem, ext))
}
