use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// TOML alternative to command-line flags:
///
/// ```toml
/// [exchange]
/// name = "Engineering 2026"
/// attempts = 3
///
/// [input]
/// roster = "input/Employee-List.csv"
/// prior = "input/Secret-Santa-Game-Result-2025.csv"
///
/// [output]
/// path = "output/Secret-Santa-Assignments.csv"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub exchange: Option<ExchangeSection>,
    pub input: InputSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeSection {
    pub name: Option<String>,
    pub attempts: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSection {
    pub roster: String,
    pub prior: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
}

impl FileConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SantaError::InvalidConfigValue {
            field: "config".to_string(),
            value: "inline".to_string(),
            reason: e.to_string(),
        })
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SantaError::source(path, e))?;
        toml::from_str(&content).map_err(|e| SantaError::InvalidConfigValue {
            field: "config".to_string(),
            value: path.to_string(),
            reason: e.to_string(),
        })
    }
}

impl ConfigProvider for FileConfig {
    fn roster_path(&self) -> &str {
        &self.input.roster
    }

    fn prior_path(&self) -> Option<&str> {
        self.input.prior.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn attempts(&self) -> u32 {
        self.exchange.as_ref().and_then(|e| e.attempts).unwrap_or(1)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input.roster", &self.input.roster)?;
        validation::validate_extension("input.roster", &self.input.roster, &["csv"])?;
        if let Some(prior) = &self.input.prior {
            validation::validate_path("input.prior", prior)?;
            validation::validate_extension("input.prior", prior, &["csv"])?;
        }
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_extension("output.path", &self.output.path, &["csv"])?;
        if let Some(attempts) = self.exchange.as_ref().and_then(|e| e.attempts) {
            validation::validate_positive_number("exchange.attempts", attempts, 1)?;
        }
        Ok(())
    }
}
