//! Query command: ask a running query service and print the answer.

use std::time::Duration;

use console::style;
use serde::Serialize;

use wasteboard::config::Settings;
use wasteboard::http_client::BackendClient;
use wasteboard::models::{QueryOutcome, WasteLookup};
use wasteboard::utils::{format_kg, format_percentage};

use super::QueryCommands;

/// Run one query against the configured backend.
pub async fn cmd_query(
    settings: &Settings,
    command: QueryCommands,
    json: bool,
) -> anyhow::Result<()> {
    let client = BackendClient::new(
        &settings.backend_url,
        Duration::from_secs(settings.request_timeout),
    )?;

    match command {
        QueryCommands::TotalWaste { comune, year } => {
            let response = client.total_waste(&comune, year).await?;
            if json {
                return print_json(&response);
            }
            print_header(&format!("{} {}", comune, year), client.base_url());
            match response.total_waste {
                Some(WasteLookup::Found(Some(kg))) => {
                    println!("  {:<20} {:>16} kg", "Total waste:", format_kg(kg))
                }
                Some(WasteLookup::Missing(message)) => {
                    println!("  {} {}", style("!").yellow(), message)
                }
                Some(WasteLookup::Found(None)) | None => {
                    println!("  {} No data available", style("!").yellow())
                }
            }
        }
        QueryCommands::AllYears { comune } => {
            let response = client.total_waste_all_years(&comune).await?;
            if json {
                return print_json(&response);
            }
            print_header(&comune, client.base_url());
            if let Some(message) = &response.message {
                println!("  {} {}", style("!").yellow(), message);
            }
            for (year, kg) in &response.total_waste_data {
                let value = kg.map(format_kg).unwrap_or_else(|| "n/a".to_string());
                println!("  {:<20} {:>16} kg", year, value);
            }
        }
        QueryCommands::Extremes { year } => {
            let outcome = client.find_extremes(year).await?;
            if json {
                return print_json(&outcome);
            }
            print_header(&format!("Per-capita waste {}", year), client.base_url());
            match outcome {
                QueryOutcome::Success(extremes) => {
                    println!(
                        "  {:<10} {:<30} {:>12} kg",
                        style("Highest").red(),
                        extremes.max_municipality,
                        format_kg(extremes.max_value)
                    );
                    println!(
                        "  {:<10} {:<30} {:>12} kg",
                        style("Lowest").green(),
                        extremes.min_municipality,
                        format_kg(extremes.min_value)
                    );
                }
                QueryOutcome::Failure { error } => println!("  {} {}", style("!").yellow(), error),
            }
        }
        QueryCommands::Collection { comune } => {
            let outcome = client.collection_change(&comune).await?;
            if json {
                return print_json(&outcome);
            }
            print_header(&format!("Raccolta differenziata {}", comune), client.base_url());
            match outcome {
                QueryOutcome::Success(change) => {
                    for (year, kg) in &change.series {
                        println!("  {:<20} {:>16} kg", year, format_kg(*kg));
                    }
                    println!();
                    println!(
                        "  {:<20} {:>19}",
                        "Change:",
                        style(format_percentage(change.percentage_change)).bold()
                    );
                }
                QueryOutcome::Failure { error } => println!("  {} {}", style("!").yellow(), error),
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_header(title: &str, url: &str) {
    println!();
    println!("{:<50} {}", style(title).bold(), style(url).dim());
    println!("{}", "─".repeat(70));
}
