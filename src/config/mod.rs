pub mod cli;
pub mod file;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draws Secret Santa pairings from an employee roster")]
pub struct CliConfig {
    /// Roster CSV with Employee_Name and Employee_EmailID columns.
    #[arg(long, default_value = "input/Employee-List.csv")]
    pub roster: String,

    /// Last round's assignment CSV; omit for a first draw.
    #[arg(long)]
    pub prior: Option<String>,

    #[arg(long, default_value = "output/Secret-Santa-Assignments.csv")]
    pub output: String,

    /// Directory the other paths are resolved against.
    #[arg(long, default_value = ".")]
    pub base_dir: String,

    /// Reshuffle up to this many times when a draw strands a giver.
    #[arg(long, default_value = "1")]
    pub attempts: u32,

    /// TOML file supplying the exchange settings instead of flags.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn roster_path(&self) -> &str {
        &self.roster
    }

    fn prior_path(&self) -> Option<&str> {
        self.prior.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn attempts(&self) -> u32 {
        self.attempts
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("roster", &self.roster)?;
        validation::validate_extension("roster", &self.roster, &["csv"])?;
        if let Some(prior) = &self.prior {
            validation::validate_path("prior", prior)?;
            validation::validate_extension("prior", prior, &["csv"])?;
        }
        validation::validate_path("output", &self.output)?;
        validation::validate_extension("output", &self.output, &["csv"])?;
        validation::validate_path("base_dir", &self.base_dir)?;
        validation::validate_positive_number("attempts", self.attempts, 1)?;
        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
            validation::validate_extension("config", config, &["toml"])?;
        }
        Ok(())
    }
}
