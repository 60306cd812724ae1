use clap::{Parser, Subcommand};
use std::path::PathBuf;

use immoval_core::models::PropertyType;

/// Immoval - residential property price estimation
#[derive(Parser, Debug)]
#[command(name = "immoval")]
#[command(about = "Residential property price estimation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML config file (artifact paths, MAE, map center)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a property selection and print the estimate
    Predict(PredictArgs),

    /// List the categorical domains and form rules
    Domains(DomainsArgs),

    /// Resolve a coordinate to the nearest known location
    Locate(LocateArgs),

    /// Run health checks on the reference data and model artifacts
    Doctor(DoctorArgs),
}

/// Property type selection on the command line
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PropertyTypeArg {
    Apartment,
    House,
    Other,
}

impl From<PropertyTypeArg> for PropertyType {
    fn from(arg: PropertyTypeArg) -> Self {
        match arg {
            PropertyTypeArg::Apartment => PropertyType::Apartment,
            PropertyTypeArg::House => PropertyType::House,
            PropertyTypeArg::Other => PropertyType::Other,
        }
    }
}

#[derive(Parser, Debug)]
pub struct PredictArgs {
    /// Clicked latitude; resolved to the nearest known location
    #[arg(long)]
    pub lat: Option<f64>,

    /// Clicked longitude
    #[arg(long)]
    pub lon: Option<f64>,

    #[arg(long, value_enum)]
    pub property_type: Option<PropertyTypeArg>,

    /// Property subtype (e.g. APARTMENT, VILLA)
    #[arg(long)]
    pub subtype: Option<String>,

    /// Building condition from the enumerated domain
    #[arg(long)]
    pub condition: Option<String>,

    #[arg(long)]
    pub rooms: Option<u32>,

    /// Living area in square meters
    #[arg(long)]
    pub living_area: Option<f64>,

    /// Number of facades (1-4)
    #[arg(long)]
    pub facades: Option<u32>,

    /// Amenity flags
    #[arg(long)]
    pub kitchen: bool,
    #[arg(long)]
    pub terrace: bool,
    #[arg(long)]
    pub garden: bool,
    #[arg(long)]
    pub pool: bool,
    #[arg(long)]
    pub lift: bool,
}

#[derive(Parser, Debug)]
pub struct DomainsArgs {}

#[derive(Parser, Debug)]
pub struct LocateArgs {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Parser, Debug)]
pub struct DoctorArgs {}
