//! Command-line arguments and the optional TOML config file.
//!
//! Precedence: command-line flags, then the config file, then defaults.
//!
//! ```toml
//! [report]
//! language = "french"
//! currency = "€"
//! format = "text"
//!
//! [calculation]
//! policy = "deduct-debts-and-bequests"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use estate_core::{CalculatorSettings, DeductionPolicy, EstateInput, Gender, ParentsStatus};

use crate::i18n::Language;

pub const DEFAULT_CURRENCY: &str = "$";

#[derive(Debug, Clone, Parser)]
#[command(name = "estate")]
#[command(about = "Distribute a net estate among eligible heirs")]
pub struct CliArgs {
    /// JSON file with the estate input record
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Prompt for every field on the terminal
    #[arg(long, conflicts_with = "input")]
    pub interactive: bool,

    /// TOML file with report and calculation defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub total_assets: Option<f64>,

    #[arg(long = "liabilities")]
    pub financial_liabilities: Option<f64>,

    #[arg(long = "debts")]
    pub debt_amount: Option<f64>,

    #[arg(long = "bequests")]
    pub bequests_amount: Option<f64>,

    #[arg(long = "distributable")]
    pub distributable_estate: Option<f64>,

    #[arg(long, value_enum)]
    pub gender: Option<GenderArg>,

    #[arg(long, value_enum)]
    pub parents: Option<ParentsArg>,

    #[arg(long)]
    pub sons: Option<u32>,

    #[arg(long)]
    pub daughters: Option<u32>,

    #[arg(long)]
    pub brothers: Option<u32>,

    #[arg(long)]
    pub sisters: Option<u32>,

    /// Whether a spouse survives (true/false)
    #[arg(long)]
    pub spouse: Option<bool>,

    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Currency symbol used in the text report
    #[arg(long)]
    pub currency: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// How the net estate is derived: liabilities-only, deduct-debts-and-bequests, distributable-estate
    #[arg(long)]
    pub policy: Option<DeductionPolicy>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParentsArg {
    Father,
    Mother,
    Both,
    None,
}

impl From<ParentsArg> for ParentsStatus {
    fn from(arg: ParentsArg) -> Self {
        match arg {
            ParentsArg::Father => ParentsStatus::Father,
            ParentsArg::Mother => ParentsStatus::Mother,
            ParentsArg::Both => ParentsStatus::Both,
            ParentsArg::None => ParentsStatus::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contents of the TOML config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub report: ReportSection,
    pub calculation: CalculationSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub language: Option<Language>,
    pub currency: Option<String>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CalculationSection {
    pub policy: Option<DeductionPolicy>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub language: Language,
    pub currency: String,
    pub format: OutputFormat,
    pub settings: CalculatorSettings,
}

impl AppConfig {
    pub fn resolve(args: &CliArgs, file: &FileConfig) -> Self {
        let policy = args
            .policy
            .or(file.calculation.policy)
            .unwrap_or_default();

        AppConfig {
            language: args.language.or(file.report.language).unwrap_or_default(),
            currency: args
                .currency
                .clone()
                .or_else(|| file.report.currency.clone())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            format: args.format.or(file.report.format).unwrap_or_default(),
            settings: CalculatorSettings::with_policy(policy),
        }
    }
}

impl CliArgs {
    /// Overlay the per-field flags onto `input`.
    pub fn apply_overrides(&self, mut input: EstateInput) -> EstateInput {
        if let Some(v) = self.total_assets {
            input = input.with_total_assets(v);
        }
        if let Some(v) = self.financial_liabilities {
            input = input.with_financial_liabilities(v);
        }
        if let Some(v) = self.debt_amount {
            input = input.with_debt_amount(v);
        }
        if let Some(v) = self.bequests_amount {
            input = input.with_bequests_amount(v);
        }
        if let Some(v) = self.distributable_estate {
            input = input.with_distributable_estate(v);
        }
        if let Some(v) = self.gender {
            input = input.with_gender(v.into());
        }
        if let Some(v) = self.parents {
            input = input.with_parents_status(v.into());
        }
        if let Some(v) = self.sons {
            input = input.with_sons(v);
        }
        if let Some(v) = self.daughters {
            input = input.with_daughters(v);
        }
        if let Some(v) = self.brothers {
            input = input.with_brothers(v);
        }
        if let Some(v) = self.sisters {
            input = input.with_sisters(v);
        }
        if let Some(v) = self.spouse {
            input = input.with_spouse(v);
        }
        input
    }
}
