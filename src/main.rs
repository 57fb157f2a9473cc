use anyhow::Result;
use clap::{Parser, Subcommand};

use mortgage_cli::cli::{
    handle_afford, handle_payment, handle_rates, handle_ratio_command, handle_refinance,
    handle_scenario_command, handle_schedule, handle_value, AffordArgs, PaymentArgs, RatesArgs,
    RatioCommands, RefinanceArgs, ScenarioCommands, ScheduleArgs, ValueArgs,
};
use mortgage_cli::config::{MortgagePaths, Settings};
use mortgage_cli::display::double_separator;
use mortgage_cli::provider::MockProvider;
use mortgage_cli::storage::ScenarioStore;

#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "Command-line mortgage analysis",
    long_about = "mortgage-cli performs standard mortgage arithmetic: monthly \
                  payments, amortization schedules, loan-to-value and \
                  debt-to-income ratios, PMI estimates, affordability, and \
                  scenario comparison, with mock rate and valuation lookups."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the monthly payment for a loan
    Payment(PaymentArgs),

    /// Generate an amortization schedule
    Schedule(ScheduleArgs),

    /// Underwriting ratios (LTV, DTI, PMI)
    #[command(subcommand)]
    Ratio(RatioCommands),

    /// Estimate the maximum affordable home price
    Afford(AffordArgs),

    /// Analyze a refinance offer
    Refinance(RefinanceArgs),

    /// Show current mortgage rates
    Rates(RatesArgs),

    /// Get a property valuation estimate
    Value(ValueArgs),

    /// Manage saved scenarios
    #[command(subcommand, alias = "scn")]
    Scenario(ScenarioCommands),

    /// Create the data directory and write the default configuration
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = MortgagePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let provider = MockProvider::new(settings.rate_jitter);

    match cli.command {
        Commands::Payment(args) => handle_payment(&settings, args)?,
        Commands::Schedule(args) => handle_schedule(&settings, args)?,
        Commands::Ratio(cmd) => handle_ratio_command(&settings, cmd)?,
        Commands::Afford(args) => handle_afford(&settings, args)?,
        Commands::Refinance(args) => handle_refinance(&settings, args)?,
        Commands::Rates(args) => handle_rates(&provider, args)?,
        Commands::Value(args) => handle_value(&provider, &settings.currency_symbol, args)?,
        Commands::Scenario(cmd) => {
            let store = ScenarioStore::new(&paths)?;
            handle_scenario_command(&store, &settings, cmd)?;
        }
        Commands::Init => {
            println!("Initializing mortgage-cli at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!(
                "Default lending policy written to {}",
                paths.settings_file().display()
            );
            println!("Run 'mortgage config' to review it.");
        }
        Commands::Config => {
            println!("mortgage-cli Configuration");
            println!("{}", double_separator(26));
            println!("Config directory:   {}", paths.base_dir().display());
            println!("Scenario directory: {}", paths.scenario_dir().display());
            println!();
            println!("Lending policy:");
            println!("  PMI LTV threshold:  {}%", settings.policy.pmi_ltv_threshold);
            println!(
                "  PMI annual rate:    {:.2}%",
                settings.policy.pmi_annual_rate * 100.0
            );
            println!("  Max DTI:            {:.0}%", settings.policy.max_dti * 100.0);
            println!(
                "  Property tax rate:  {:.2}%",
                settings.policy.property_tax_rate * 100.0
            );
            println!(
                "  Insurance rate:     {:.2}%",
                settings.policy.insurance_rate * 100.0
            );
            println!("  Allowed terms:      {:?}", settings.policy.allowed_terms);
            println!("  Max interest rate:  {}%", settings.policy.max_interest_rate);
            println!();
            println!("Rate jitter: {}", settings.rate_jitter);
        }
    }

    Ok(())
}
