//! # FpCalc CLI
//!
//! Command-line front end for the seismic design force engine.
//!
//! ```text
//! fpcalc partition --sds 1.2 --occupancy office --material steel --floors 6
//! fpcalc fp --sds 1.0 --ip 1.5 --ie 1.5 --height 60 --z 60 --json
//! fpcalc tables components
//! ```

mod input;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use fpcalc_core::calculations::{CalculationItem, CalculationOutput, FpInput, FpResult, PartitionResult};
use fpcalc_core::tables::GradeLocation;
use fpcalc_core::{CalcError, CalcResult, ReferenceTables};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use crate::input::{PartitionFile, PartitionOverrides};

#[derive(Parser, Debug)]
#[command(name = "fpcalc", version, about = "Seismic design force (Fp) for nonstructural components, ASCE 7-22 Ch. 13")]
struct Cli {
    /// Directory with building.json, arch.json and period.json (defaults to built-in tables)
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fp for a partition wall from building selections
    Partition {
        /// TOML file with partition inputs; flags override its values
        #[arg(long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        overrides: PartitionOverrides,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fp from explicit factors and table selections
    Fp {
        /// Design spectral acceleration SDS (g)
        #[arg(long)]
        sds: f64,
        /// Component importance factor Ip
        #[arg(long)]
        ip: f64,
        /// Structure importance factor Ie
        #[arg(long)]
        ie: f64,
        /// Building height h (ft)
        #[arg(long)]
        height: f64,
        /// Attachment height z (ft)
        #[arg(long)]
        z: f64,
        /// Component weight Wp
        #[arg(long, default_value_t = 1.0)]
        wp: f64,
        /// SFRS table row name
        #[arg(long)]
        sfrs: Option<String>,
        /// Component table row name
        #[arg(long)]
        component: Option<String>,
        /// Period table row name
        #[arg(long)]
        structure_type: Option<String>,
        /// Support location (derived from z when omitted)
        #[arg(long, value_enum)]
        location: Option<LocationArg>,
        /// Calculation label
        #[arg(long, default_value = "Fp")]
        label: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the rows of the loaded reference tables
    Tables {
        #[arg(value_enum, default_value_t = TableArg::All)]
        table: TableArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LocationArg {
    Above,
    Below,
}

impl From<LocationArg> for GradeLocation {
    fn from(arg: LocationArg) -> Self {
        match arg {
            LocationArg::Above => GradeLocation::AboveGrade,
            LocationArg::Below => GradeLocation::AtOrBelowGrade,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TableArg {
    All,
    Sfrs,
    Components,
    Periods,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Off
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    // Only fails if a logger is already installed
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

/// Prompt on stderr so stdout stays clean for `--json`.
fn prompt_f64(prompt: &str, default: f64) -> CalcResult<f64> {
    eprint!("{}", prompt);
    io::stderr()
        .flush()
        .map_err(|e| CalcError::file_error("write", "stderr", e.to_string()))?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| CalcError::file_error("read", "stdin", e.to_string()))?;

    crate::input::parse_sds_answer(&answer, default)
}

fn load_tables(dir: Option<&PathBuf>) -> CalcResult<ReferenceTables> {
    match dir {
        Some(dir) => ReferenceTables::load_dir(dir),
        None => ReferenceTables::builtin().cloned(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CalcResult<()> {
    let tables = load_tables(cli.tables.as_ref())?;

    match cli.command {
        Command::Partition { input, overrides, json } => {
            let file = match input {
                Some(path) => crate::input::load_partition_file(&path)?,
                None => PartitionFile::default(),
            };
            let partition = crate::input::resolve_partition(file, overrides, || {
                prompt_f64("Enter SDS (g) [1.0]: ", 1.0)
            })?;
            let output = CalculationItem::Partition(partition).calculate(&tables)?;
            print_output(&output, json)
        }
        Command::Fp {
            sds,
            ip,
            ie,
            height,
            z,
            wp,
            sfrs,
            component,
            structure_type,
            location,
            label,
            json,
        } => {
            let fp_input = FpInput {
                label,
                sds_g: sds,
                ip,
                ie,
                height_ft: height,
                attachment_height_ft: z,
                wp,
                sfrs,
                component,
                structure_type,
                location: location.map(GradeLocation::from),
            };
            let output = CalculationItem::Fp(fp_input).calculate(&tables)?;
            print_output(&output, json)
        }
        Command::Tables { table } => {
            print_tables(&tables, table);
            Ok(())
        }
    }
}

fn print_output(output: &CalculationOutput, json: bool) -> CalcResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
        return Ok(());
    }

    println!("═══════════════════════════════════════");
    println!("  SEISMIC DESIGN FORCE (ASCE 7-22 Ch. 13)");
    println!("═══════════════════════════════════════");
    println!();
    if let CalculationOutput::Partition(result) = output {
        print_building(result);
    }
    print_fp(output.fp());
    Ok(())
}

fn print_building(result: &PartitionResult) {
    let b = &result.building;
    println!("Building:");
    println!("  Risk Category:  {}  (Ie = Ip = {:.2})", b.risk_category, b.importance_factor);
    println!("  Height h:       {:.1} ft  ({:.0} ft/floor)", b.height_ft, b.floor_height_ft);
    println!("  Attachment z:   {:.1} ft", b.attachment_height_ft);
    println!("  SFRS:           {}", b.sfrs.as_deref().unwrap_or("None selected"));
    println!("  Component:      {}", b.component);
    println!();
}

fn print_fp(result: &FpResult) {
    println!("Factors:");
    if result.sfrs_selected {
        println!("  R = {:.2}, Ω₀ = {:.2}", result.sfrs.r, result.sfrs.omega_0);
    } else {
        println!("  R, Ω₀:  no SFRS selected");
    }
    println!("  CAR = {:.2}, Rpo = {:.2}  ({})", result.component.car, result.component.rpo, result.location);
    match result.period {
        Some(p) => println!("  Ta = {:.3} s  (Ct = {}, x = {})", p.ta, p.ct, p.x),
        None => println!("  Ta:  not available"),
    }
    let hf = &result.height_factor;
    match (hf.a1, hf.a2) {
        (Some(a1), Some(a2)) => println!("  Hf = {:.3}  (a1 = {:.3}, a2 = {:.3})", hf.hf, a1, a2),
        _ => println!("  Hf = {:.3}", hf.hf),
    }
    println!("  Rμ = {:.3}", result.rmu);
    println!();

    let c = &result.coefficient;
    println!("Coefficient:");
    println!("  Fp,calc = {:.3}", c.fp_calculated);
    println!("  Fp,min  = {:.3}", c.fp_min);
    println!("  Fp,max  = {:.3}", c.fp_max);
    println!();
    println!("═══════════════════════════════════════");
    println!("  Fp = {:.3} Wp  (governs: {})", c.fp, c.governing);
    println!("═══════════════════════════════════════");
    println!();

    println!("Equations applied:");
    for (category, equations) in result.equations.by_category() {
        println!("  {}:", category.display_name());
        for equation in equations {
            let meta = equation.metadata();
            println!("    {:<28} {}", meta.reference.citation(), meta.formula_plain);
        }
    }
}

fn print_tables(tables: &ReferenceTables, table: TableArg) {
    if matches!(table, TableArg::All | TableArg::Sfrs) {
        println!("SFRS (R, Ω₀):");
        for row in &tables.sfrs {
            println!("  {:>5.2} {:>5.2}  {}", row.r, row.omega_0, row.system);
        }
        println!();
    }
    if matches!(table, TableArg::All | TableArg::Components) {
        println!("Components (CAR below, CAR above, Rpo):");
        for row in &tables.components {
            println!(
                "  {:>5} {:>5} {:>5}  {}",
                cell(row.car_below),
                cell(row.car_above),
                cell(row.rpo),
                row.component
            );
        }
        println!();
    }
    if matches!(table, TableArg::All | TableArg::Periods) {
        println!("Period coefficients (Ct, x):");
        for row in &tables.periods {
            println!("  {:>6.3} {:>5.2}  {}", row.ct, row.x, row.structure_type);
        }
    }
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}
