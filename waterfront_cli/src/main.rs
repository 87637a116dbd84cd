//! Waterfront screening toolkit command-line interface.
//!
//! One subcommand per model plus reference, batch and assistant commands.
//! Results go to stdout; logs go to stderr at `--log-level` (default `warn`).

mod assistant;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{ask, batch, hydro, info, structures};
use output::Output;

/// Marine/waterfront screening toolkit (CA/IN/OH)
#[derive(Parser, Debug)]
#[command(name = "waterfront")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Marine/waterfront screening toolkit (CA/IN/OH)", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported state profiles (CA, IN, OH)
    ListStates,
    /// Linear wave properties: wavelength, celerity, group velocity, shoaling
    Waves(hydro::WavesArgs),
    /// Maximum Morison inline force per unit length on a pile
    MorisonMax(hydro::MorisonArgs),
    /// Berthing energy and fender reaction
    Berthing(structures::BerthingArgs),
    /// Total mooring load from wind and current
    Mooring(hydro::MooringArgs),
    /// Pile axial capacity
    PileAxial(structures::PileAxialArgs),
    /// Remaining thickness after corrosion
    Corrosion(structures::CorrosionArgs),
    /// Seawall sliding factor of safety
    SeawallSlide(structures::SeawallArgs),
    /// Local scour depth at a pile (screening)
    ScourPile(hydro::ScourArgs),
    /// Tide synthesis from harmonic constituents
    Tides(hydro::TidesArgs),
    /// Write a report template CSV
    ReportTemplate(info::ReportTemplateArgs),
    /// Print the equations reference
    Equations,
    /// Run a JSON file of calculation items
    Batch(batch::BatchArgs),
    /// Ask the engineering assistant a question
    Ask(ask::AskArgs),
    /// Suggest calculations for a project description
    Suggest(ask::SuggestArgs),
}

fn log_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(&cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let out = Output::new(cli.json);

    match cli.command {
        Commands::ListStates => info::list_states(&out),
        Commands::Waves(args) => hydro::waves(args, &out),
        Commands::MorisonMax(args) => hydro::morison(args, &out),
        Commands::Berthing(args) => structures::berthing(args, &out),
        Commands::Mooring(args) => hydro::mooring(args, &out),
        Commands::PileAxial(args) => structures::pile_axial(args, &out),
        Commands::Corrosion(args) => structures::corrosion(args, &out),
        Commands::SeawallSlide(args) => structures::seawall(args, &out),
        Commands::ScourPile(args) => hydro::scour(args, &out),
        Commands::Tides(args) => hydro::tides(args, &out),
        Commands::ReportTemplate(args) => info::report_template(args, &out),
        Commands::Equations => info::equations(),
        Commands::Batch(args) => batch::execute(args, &out),
        Commands::Ask(args) => ask::ask(args, &out),
        Commands::Suggest(args) => ask::suggest(args, &out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use waterfront_core::calculations::{CalculationItem, CalculationOutput};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("waterfront").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_waves_flags() {
        let cli = parse(&["waves", "--T", "10", "--h", "50"]);
        let Commands::Waves(args) = cli.command else {
            panic!("expected waves");
        };
        match args.item() {
            CalculationItem::Waves(input) => {
                assert_eq!(input.period_s, 10.0);
                assert_eq!(input.depth_m, 50.0);
            }
            other => panic!("unexpected item {:?}", other),
        }
    }

    #[test]
    fn test_berthing_defaults() {
        let cli = parse(&["berthing", "--mass", "50000", "--speed", "0.3"]);
        let Commands::Berthing(args) = cli.command else {
            panic!("expected berthing");
        };
        assert_eq!(args.efficiency, 0.7);
        assert_eq!(args.deflection_m, 0.5);
        assert!(args.item().run().is_ok());
    }

    #[test]
    fn test_negative_acceleration_accepted() {
        let cli = parse(&["morison-max", "--D", "1", "--u", "1", "--a", "-0.5"]);
        let Commands::MorisonMax(args) = cli.command else {
            panic!("expected morison-max");
        };
        assert_eq!(args.acceleration_mps2, -0.5);
    }

    #[test]
    fn test_tides_second_constituent_optional() {
        let cli = parse(&["tides", "--A1", "1.0", "--T1", "44712"]);
        let Commands::Tides(args) = cli.command else {
            panic!("expected tides");
        };
        match args.item().unwrap() {
            CalculationItem::Tides(input) => {
                assert_eq!(input.constituents.len(), 1);
                assert_eq!(input.duration_s, 43_200.0);
            }
            other => panic!("unexpected item {:?}", other),
        }

        let cli = parse(&["tides", "--A1", "1.0", "--T1", "44712", "--A2", "0.3", "--T2", "43080"]);
        let Commands::Tides(args) = cli.command else {
            panic!("expected tides");
        };
        match args.item().unwrap().run().unwrap() {
            CalculationOutput::Tides(series) => assert_eq!(series.len(), 73),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_invalid_input_is_an_error() {
        let cli = parse(&["seawall-slide", "--mu", "0.6", "--W=-100", "--T", "400"]);
        let Commands::SeawallSlide(args) = cli.command else {
            panic!("expected seawall-slide");
        };
        assert!(structures::seawall(args, &Output::new(true)).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["list-states", "--json", "--log-level", "debug"]);
        assert!(cli.json);
        assert_eq!(log_level(&cli.log_level), Level::DEBUG);
        assert_eq!(log_level("verbose"), Level::WARN);
    }
}
