use bmi::calc;
use bmi::form::{apply_command, parse_command, FormState, SessionOutcome, SESSION_HELP};
use bmi::settings::Config;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bmi")]
#[command(about = "Body-mass index calculator for metric and imperial inputs", long_about = None)]
struct Cli {
    /// Config file (default: ./bmi.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the ratio for one height/weight pair
    Compute {
        /// Height in meters (metric) or feet (imperial)
        #[arg(allow_negative_numbers = true)]
        height: String,

        /// Weight in kilograms (metric) or pounds (imperial)
        #[arg(allow_negative_numbers = true)]
        weight: String,

        /// Unit mode: metric/mkg or imperial/ftlbs
        #[arg(short, long)]
        units: Option<calc::UnitMode>,

        /// Decimals to print (0-255)
        #[arg(short, long, value_parser = clap::value_parser!(u8))]
        precision: Option<u8>,

        /// Print the unrounded result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the height and weight labels for a unit mode
    Labels {
        /// Unit mode: metric/mkg or imperial/ftlbs
        #[arg(short, long)]
        units: Option<calc::UnitMode>,
    },

    /// Interactive form driven by commands on stdin
    Session {
        /// Starting unit mode
        #[arg(short, long)]
        units: Option<calc::UnitMode>,
    },
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let cli = Cli::parse();

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Compute {
            height,
            weight,
            units,
            precision,
            json,
        } => {
            let units = units.unwrap_or(config.units);
            let precision = precision.unwrap_or(config.precision);
            match compute_bmi(&height, &weight, units, precision, json) {
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Labels { units } => {
            let units = units.unwrap_or(config.units);
            let (height, weight) = units.labels();
            println!("units: {}", units.id());
            println!("height: {}", height);
            println!("weight: {}", weight);
        }
        Commands::Session { units } => {
            let units = units.unwrap_or(config.units);
            match run_session(units, config.precision) {
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn compute_bmi(
    height: &str,
    weight: &str,
    units: calc::UnitMode,
    precision: u8,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bmi = calc::compute(height, weight, units)?;

    if json {
        println!("{}", calc::format_report_json(bmi, units)?);
    } else {
        println!("{}", calc::format_ratio(bmi, precision));
    }

    Ok(())
}

fn run_session(units: calc::UnitMode, precision: u8) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = FormState::new(units);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", SESSION_HELP);
    print_form(&form, precision);

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match apply_command(&mut form, parse_command(&line)) {
            SessionOutcome::Continue => {}
            SessionOutcome::ShowForm => print_form(&form, precision),
            SessionOutcome::Message(msg) => println!("{}", msg),
            SessionOutcome::Quit => break,
        }
    }

    Ok(())
}

fn print_form(form: &FormState, precision: u8) {
    println!("{}: {}", form.height_prompt(), form.input.height);
    println!("{}: {}", form.weight_prompt(), form.input.weight);
    if let Some(result) = form.display_result(precision) {
        println!("Your Body-Mass-Index: {}", result);
    }
    if let Some(error) = &form.error {
        println!("[!] {} (type 'ok')", error);
    }
}
