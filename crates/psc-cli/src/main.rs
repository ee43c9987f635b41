use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use psc_core::Medication;

mod check;

#[derive(Debug, Parser)]
#[command(name = "psc")]
#[command(about = "Check pharmacy stock for a medication around a UK postcode")]
struct Cli {
    /// UK postcode to search around
    #[arg(long, env = "PSC_POSTCODE")]
    postcode: String,

    /// Dosage to check
    #[arg(long, value_enum)]
    dosage: Dosage,

    /// Override the configured search radius in miles
    #[arg(long)]
    radius: Option<u32>,

    /// Ignore any cached store list and re-enumerate
    #[arg(long)]
    refresh: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Dosage {
    #[value(name = "20mg")]
    Mg20,
    #[value(name = "30mg")]
    Mg30,
    #[value(name = "40mg")]
    Mg40,
    #[value(name = "50mg")]
    Mg50,
    #[value(name = "60mg")]
    Mg60,
    #[value(name = "70mg")]
    Mg70,
}

impl Dosage {
    fn medication(self) -> Medication {
        match self {
            Dosage::Mg20 => Medication::Lisdexamfetamine20mg,
            Dosage::Mg30 => Medication::Lisdexamfetamine30mg,
            Dosage::Mg40 => Medication::Lisdexamfetamine40mg,
            Dosage::Mg50 => Medication::Lisdexamfetamine50mg,
            Dosage::Mg60 => Medication::Lisdexamfetamine60mg,
            Dosage::Mg70 => Medication::Lisdexamfetamine70mg,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // dotenv is already loaded; read config straight from the process env.
    let mut config = psc_core::load_app_config_from_env()?;
    if let Some(radius) = cli.radius {
        config.radius_miles = radius;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    check::run_stock_check(&config, &cli.postcode, cli.dosage.medication(), cli.refresh).await
}
