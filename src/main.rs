//! CDI Calculator CLI
//!
//! Command-line interface for projecting CDI-indexed returns

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use cdi_calculator::{
    calendar, export,
    locale::{format_brl, format_date, format_percent, parse_pt_br_number},
    DayCountConvention, ScenarioRunner, ScheduleResult, SimulationRequest,
};

#[derive(Debug, Parser)]
#[command(name = "cdi_calculator", version, about = "Simulate compound returns indexed to CDI")]
struct Cli {
    /// Amount invested, pt-BR format (e.g. "10.000,00")
    #[arg(long)]
    principal: Option<String>,

    /// Annual CDI in % a.a., pt-BR format (e.g. "13,15")
    #[arg(long)]
    cdi: Option<String>,

    /// Percentage of CDI credited (e.g. "120")
    #[arg(long)]
    pct: Option<String>,

    /// Day-count convention: calendar (all) or business (biz)
    #[arg(long)]
    mode: Option<DayCountConvention>,

    /// Projection start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    start: Option<NaiveDate>,

    /// JSON file with a simulation request; flags override its fields
    #[arg(long)]
    request: Option<PathBuf>,

    /// Project under both conventions
    #[arg(long)]
    compare: bool,

    /// Write the `;`-delimited export to this path ("-" for stdout, replacing the table)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print JSON instead of the table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    check_csv_target(cli.csv.as_deref(), cli.compare)?;
    let request = build_request(&cli)?;

    let input = match request.to_input() {
        Ok(input) => input,
        Err(e) => {
            log::warn!("Rejected simulation request: {}", e);
            anyhow::bail!("Informe valores válidos: {}", e);
        }
    };

    // The only clock read: "now" is resolved here, never inside the library
    let anchor = request.anchor_date_or(calendar::anchor_date(&Local::now()));
    let runner = ScenarioRunner::new(anchor);

    let results = if cli.compare {
        runner.compare_conventions(&input)?
    } else {
        vec![runner.run(&input)?]
    };

    // CSV on stdout stands alone; check_csv_target guarantees a single result
    if let Some(path) = cli.csv.as_deref().filter(|p| is_stdout(p)) {
        log::debug!("Writing CSV for {} to {}", results[0].convention, path.display());
        export::write_csv(io::stdout().lock(), &results[0].rows).context("Failed to write CSV")?;
        return Ok(());
    }

    if cli.json {
        export::write_json(io::stdout().lock(), &results).context("Failed to write JSON")?;
        println!();
    } else {
        for result in &results {
            print_schedule(result);
        }
    }

    if let Some(path) = &cli.csv {
        for result in &results {
            let target = csv_path_for(path, result.convention, results.len() > 1);
            export::write_csv_file(&target, &result.rows)
                .with_context(|| format!("Unable to write CSV file {}", target.display()))?;
            println!("\nResults written to: {}", target.display());
        }
    }

    Ok(())
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Stdout holds one unlabeled CSV block, so comparing needs file paths
fn check_csv_target(csv: Option<&Path>, compare: bool) -> Result<()> {
    if compare && csv.is_some_and(is_stdout) {
        anyhow::bail!("--csv - cannot be combined with --compare; give a file path instead");
    }
    Ok(())
}

/// Defaults, then the request file, then individual flags
fn build_request(cli: &Cli) -> Result<SimulationRequest> {
    let mut request = match &cli.request {
        Some(path) => SimulationRequest::from_json_path(path)
            .with_context(|| format!("Unable to load request {}", path.display()))?,
        None => SimulationRequest::default(),
    };

    if let Some(value) = &cli.principal {
        request.principal = parse_pt_br_number(value).context("Invalid --principal")?;
    }
    if let Some(value) = &cli.cdi {
        request.annual_cdi_pct = parse_pt_br_number(value).context("Invalid --cdi")?;
    }
    if let Some(value) = &cli.pct {
        request.percent_of_cdi = parse_pt_br_number(value).context("Invalid --pct")?;
    }
    if let Some(mode) = cli.mode {
        request.convention = mode;
    }
    if let Some(start) = cli.start {
        request.start_date = Some(start);
    }

    Ok(request)
}

/// With `--compare` each convention gets its own file: `out.csv` -> `out_business_days.csv`
fn csv_path_for(path: &Path, convention: DayCountConvention, per_convention: bool) -> PathBuf {
    if !per_convention {
        return path.to_path_buf();
    }
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("cdi_simulacao");
    path.with_file_name(format!("{}_{}.csv", stem, convention))
}

fn print_schedule(result: &ScheduleResult) {
    let summary = result.summary();

    println!("Calculadora de CDI - {}", result.convention.label());
    println!("======================================\n");
    println!("  Valor aplicado: {}", format_brl(result.principal));
    println!("  Início:         {}", format_date(result.anchor_date));
    println!("  Taxa diária:    {}", format_percent(summary.daily_rate * 100.0));
    println!("  Taxa efetiva:   {}", format_percent(summary.effective_annual_rate * 100.0));
    println!();

    println!("{:<22} {:>10} {:>18} {:>18}", "Período", "Até", "Rendimento", "Saldo final");
    println!("{}", "-".repeat(71));

    for row in &result.rows {
        println!(
            "{:<22} {:>10} {:>18} {:>18}",
            row.label,
            format_date(row.until_date),
            format_brl(row.earnings),
            format_brl(row.final_amount),
        );
    }
    println!();
}
