//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::output_report;
use kata_app::config::Config;
use kata_app::report::run_drills;
use kata_domain::model::Car;
use kata_types::{OutputFormat, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        None => cmd_run(&cli, output_format, None),

        Some(Commands::Run { output }) => cmd_run(&cli, output_format, output.clone()),

        Some(Commands::Car {
            color,
            model,
            tank_capacity,
            fuel_price,
        }) => cmd_car(
            output_format,
            color.clone(),
            model.clone(),
            *tank_capacity,
            fuel_price.unwrap_or(config.fuel_price),
        ),

        Some(Commands::Config {
            show,
            set_output,
            set_fuel_price,
            reset,
        }) => cmd_config(*show, *set_output, *set_fuel_price, *reset),
    }
}

fn cmd_run(cli: &Cli, output_format: OutputFormat, output: Option<PathBuf>) -> Result<()> {
    if cli.verbose {
        eprintln!("Running drill sequence");
    }

    let report = run_drills();

    if let Some(output_path) = output {
        let content = serde_json::to_string_pretty(&report)?;
        std::fs::write(&output_path, content)?;
        println!("Report saved to: {}", output_path.display());
        return Ok(());
    }

    output_report(output_format, &report)
}

/// Car record together with its derived tank value
#[derive(Debug, Serialize)]
struct CarView<'a> {
    #[serde(flatten)]
    car: &'a Car,
    fuel_price: f64,
    total_tank_value: f64,
}

fn cmd_car(
    output_format: OutputFormat,
    color: Option<String>,
    model: Option<String>,
    tank_capacity: i32,
    fuel_price: f64,
) -> Result<()> {
    let mut car = Car::default();
    car.set_color(color);
    car.set_model(model);
    car.set_tank_capacity(tank_capacity);

    if output_format == OutputFormat::Json {
        let view = CarView {
            car: &car,
            fuel_price,
            total_tank_value: car.total_tank_value(fuel_price),
        };
        let content = serde_json::to_string_pretty(&view)?;
        println!("{}", content);
        return Ok(());
    }

    println!("=== Car Record ===");
    println!("Color:         {}", car.color().unwrap_or("-"));
    println!("Model:         {}", car.model().unwrap_or("-"));
    println!("Tank capacity: {}", car.tank_capacity());
    println!(
        "Tank value:    {:.2} (at {:.2} per unit)",
        car.total_tank_value(fuel_price),
        fuel_price
    );

    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_fuel_price: Option<f64>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(fuel_price) = set_fuel_price {
        config.fuel_price = fuel_price;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
