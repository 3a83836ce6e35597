use std::io::{self, Write};
use std::path::PathBuf;

use adipo_case::{Frequency, Gender, Language, RawCase, YesNo};
use adipo_data::{load_dataset, CaseFilter, DatasetRecord};
use adipo_model::{PredictError, Predictor};
use adipo_stats::{bmi_histogram, summarize, StatsError};
use clap::{Args, Parser, Subcommand};
use log::{debug, LevelFilter};
use serde::Serialize;

mod config;
mod input;
mod render;
mod report;

use config::Config;
use input::CaseArgs;
use report::{AboutReport, DashboardReport, PopulationBmi, PredictReport};

/// Request was rejected: bad input, nothing wrong with the installation.
const EXIT_REJECTED: i32 = 1;
/// Artifacts, config or dataset unusable.
const EXIT_FATAL: i32 = 2;

const DEFAULT_BINS: usize = 30;

#[derive(Debug, Parser)]
#[command(
    name = "adipo",
    version,
    about = "Obesity-level triage from clinical and lifestyle answers",
    long_about = "adipo classifies a person's obesity level from demographic, anthropometric and\n\
        lifestyle answers using a pre-trained model, and summarises the historical dataset.\n\n\
        EXAMPLES:\n\
        \n  adipo predict --gender Male --age 30 --height 170 --weight 70 ...   Classify one case\n\
        \n  adipo predict --case case.json --weight 95                     Override a saved case\n\
        \n  adipo encode --case case.json                                  Show the model input vector\n\
        \n  adipo dashboard --gender Female --age-min 18 --age-max 30       Filtered dataset summary\n\
        \n  adipo about                                                    Model information",
    after_help = "Configuration is read from --config, $ADIPO_CONFIG or ./adipo.toml."
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Label language (en, pt); overrides the config
    #[arg(long, value_name = "LANG", global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify one case
    #[command(
        about = "Classify one case and explain the result",
        long_about = "Encodes the case against the model's feature schema, classifies it and prints\n\
            the predicted level, confidence, BMI, ranked class probabilities, feature importances,\n\
            lifestyle insights and an input summary.\n\n\
            Exit status is 1 when the case is rejected and 2 when the model cannot be loaded."
    )]
    Predict(PredictArgs),

    /// Print the encoded feature vector of a case
    Encode(EncodeArgs),

    /// Summarise the historical dataset
    #[command(about = "Summarise the historical dataset, optionally filtered")]
    Dashboard(DashboardArgs),

    /// Show model information
    About(OutputArgs),
}

#[derive(Debug, Clone, Args)]
struct OutputArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Args)]
struct PredictArgs {
    #[command(flatten)]
    case: CaseArgs,

    /// Also place the case's BMI in the historical population
    #[arg(long)]
    population: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Clone, Args)]
struct EncodeArgs {
    #[command(flatten)]
    case: CaseArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Clone, Args)]
struct DashboardArgs {
    /// Keep only these genders (repeatable)
    #[arg(long = "gender", value_name = "GENDER")]
    genders: Vec<Gender>,

    /// Minimum age, inclusive
    #[arg(long)]
    age_min: Option<f64>,

    /// Maximum age, inclusive
    #[arg(long)]
    age_max: Option<f64>,

    /// Keep only these family-history answers (repeatable)
    #[arg(long = "family-history", value_name = "YES_NO")]
    family_history: Vec<YesNo>,

    /// Keep only these between-meal eating answers (repeatable)
    #[arg(long = "caec", value_name = "FREQUENCY")]
    caec: Vec<Frequency>,

    /// Keep only these high-calorie food answers (repeatable)
    #[arg(long = "favc", value_name = "YES_NO")]
    favc: Vec<YesNo>,

    /// Number of BMI histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS)]
    bins: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl DashboardArgs {
    fn filter(&self) -> CaseFilter {
        let mut filter = CaseFilter::new();
        if !self.genders.is_empty() {
            filter = filter.genders(self.genders.iter().copied());
        }
        if let Some(min) = self.age_min {
            filter = filter.age_min(min);
        }
        if let Some(max) = self.age_max {
            filter = filter.age_max(max);
        }
        if !self.family_history.is_empty() {
            filter = filter.family_history(self.family_history.iter().copied());
        }
        if !self.caec.is_empty() {
            filter = filter.caec(self.caec.iter().copied());
        }
        if !self.favc.is_empty() {
            filter = filter.favc(self.favc.iter().copied());
        }
        filter
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG, when set, takes precedence over -v.
    builder.parse_env("RUST_LOG");
    let _ = builder.try_init();
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(e) => {
            eprintln!("error: cannot serialize output: {e}");
            EXIT_FATAL
        }
    }
}

/// Write text output to stdout; a failed write is fatal.
fn emit(write: impl FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>) -> i32 {
    let mut out = io::stdout().lock();
    match write(&mut out).and_then(|()| out.flush()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: cannot write output: {e}");
            EXIT_FATAL
        }
    }
}

fn load_predictor(config: &Config) -> Result<Predictor, i32> {
    Predictor::load(&config.artifacts.paths()).map_err(|e| {
        eprintln!("error: {e}");
        EXIT_FATAL
    })
}

fn load_records(config: &Config) -> Result<Vec<DatasetRecord>, i32> {
    load_dataset(&config.dataset.path, config.dataset.height_unit).map_err(|e| {
        eprintln!("error: {e}");
        EXIT_FATAL
    })
}

fn read_case(args: &CaseArgs) -> Result<RawCase, i32> {
    args.to_case().map_err(|e| {
        eprintln!("error: {e}");
        EXIT_REJECTED
    })
}

fn rejected(e: PredictError) -> i32 {
    eprintln!("error: request rejected: {e}");
    EXIT_REJECTED
}

fn run_predict(config: &Config, language: Language, args: &PredictArgs) -> Result<i32, i32> {
    let predictor = load_predictor(config)?;
    let case = read_case(&args.case)?;
    let prediction = predictor.predict(&case).map_err(rejected)?;
    let mut report = PredictReport::new(&predictor, case, &prediction, language);

    if args.population {
        let records = load_records(config)?;
        let rows: Vec<&DatasetRecord> = records.iter().collect();
        match bmi_histogram(&rows, DEFAULT_BINS) {
            Ok(histogram) => {
                let case_bin = histogram.bin_of(report.bmi);
                report.population_bmi = Some(PopulationBmi {
                    histogram,
                    case_bin,
                });
            }
            Err(e) => eprintln!("warning: population BMI unavailable: {e}"),
        }
    }

    if args.output.json {
        return Ok(print_json(&report));
    }
    Ok(emit(|out| render::predict(out, &report, language)))
}

fn run_encode(config: &Config, args: &EncodeArgs) -> Result<i32, i32> {
    let predictor = load_predictor(config)?;
    let case = read_case(&args.case)?;
    let vector = predictor.encode(&case).map_err(rejected)?;
    if args.output.json {
        return Ok(print_json(&vector));
    }
    Ok(emit(|out| render::vector(out, &vector)))
}

fn run_dashboard(config: &Config, language: Language, args: &DashboardArgs) -> Result<i32, i32> {
    let records = load_records(config)?;
    let filter = args.filter();
    debug!("dashboard filter: {filter:?}");
    let rows = filter.apply(&records);

    let mut report = DashboardReport {
        total_records: records.len(),
        selected_records: rows.len(),
        dashboard: None,
        notice: None,
    };
    match summarize(&rows, args.bins) {
        Ok(dashboard) => report.dashboard = Some(dashboard),
        Err(e @ StatsError::EmptySelection) => report.notice = Some(e.to_string()),
        Err(e) => {
            eprintln!("error: {e}");
            return Err(EXIT_REJECTED);
        }
    }

    if args.output.json {
        return Ok(print_json(&report));
    }
    Ok(emit(|out| render::dashboard(out, &report, language)))
}

fn run_about(config: &Config, args: &OutputArgs) -> Result<i32, i32> {
    let predictor = load_predictor(config)?;
    let report = AboutReport::new(&predictor);
    if args.json {
        return Ok(print_json(&report));
    }
    Ok(emit(|out| render::about(out, &report)))
}

fn run(cli: Cli) -> i32 {
    init_logging(cli.verbose);
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_FATAL;
        }
    };
    let language = cli.lang.unwrap_or(config.display.language);

    let result = match &cli.command {
        Command::Predict(args) => run_predict(&config, language, args),
        Command::Encode(args) => run_encode(&config, args),
        Command::Dashboard(args) => run_dashboard(&config, language, args),
        Command::About(args) => run_about(&config, args),
    };
    let rc = result.unwrap_or_else(|rc| rc);
    if cli.verbose > 0 {
        eprintln!("note: finished with exit code {rc}");
    }
    rc
}

fn run_cli() -> i32 {
    run(Cli::parse())
}

fn main() {
    std::process::exit(run_cli());
}
