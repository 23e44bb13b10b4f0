//! Launch Budget CLI
//!
//! Command-line reports over the first-year cost projection: summary
//! figures, the month-by-month table, and the itemized CAPEX/OPEX/
//! equipment/event budgets, as plain tables, CSV, or JSON.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use launch_budget::assumptions::{capex_items, equipment_items, items_total, opex_items, LineItem};
use launch_budget::format::format_brl;
use launch_budget::{Assumptions, CostCategory, CostProjector, PlanSummary, ProjectionResult};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launch_budget", version, about = "First-year launch budget reports")]
struct Cli {
    /// Report to produce
    #[arg(value_enum, default_value_t = Report::Summary)]
    report: Report,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Load the cost schedule from CSV files in this directory instead of
    /// using the built-in plan
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Report {
    /// Headline figures: CAPEX, OPEX, event budget, first-year total
    Summary,
    /// Month-by-month projection table
    Monthly,
    /// One-time setup cost breakdown
    Capex,
    /// Recurring monthly cost breakdown
    Opex,
    /// Itemized production equipment list
    Equipment,
    /// Itemized live-event budget
    Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("loading cost schedule from {}", dir.display()))?,
        None => Assumptions::business_plan(),
    };

    let projector = CostProjector::new(assumptions);
    let result = projector.project();
    let summary = projector.summarize(&result);
    log::debug!("projected {} months", result.records.len());

    let rendered = match cli.report {
        Report::Summary => match cli.format {
            OutputFormat::Table => render_summary(&summary),
            OutputFormat::Csv => summary_csv(&summary),
            OutputFormat::Json => to_json(&summary)?,
        },
        Report::Monthly => match cli.format {
            OutputFormat::Table => render_monthly(&result),
            OutputFormat::Csv => monthly_csv(&result),
            OutputFormat::Json => to_json(&result)?,
        },
        Report::Capex => {
            render_breakdown("CAPEX - One-Time Setup Costs", &capex_items(), cli.format)?
        }
        Report::Opex => {
            render_breakdown("OPEX - Monthly Operating Costs", &opex_items(), cli.format)?
        }
        Report::Equipment => render_breakdown(
            "Production Equipment Breakdown",
            &equipment_items(),
            cli.format,
        )?,
        Report::Event => render_breakdown(
            "Live Event Budget (6 days)",
            projector.assumptions().event_budget.items(),
            cli.format,
        )?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("writing report to {}", path.display()))?;
            println!("Report written to: {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

fn render_summary(summary: &PlanSummary) -> String {
    let mut out = String::new();
    out.push_str("First-Year Launch Budget\n");
    out.push_str("========================\n\n");
    for (name, amount) in [
        ("Initial investment (CAPEX)", summary.total_one_time_setup),
        ("Monthly operation (OPEX)", summary.steady_state_monthly),
        ("Live event budget", summary.event_budget_total),
        ("Total first-year cost", summary.first_year_total),
    ] {
        out.push_str(&format!("  {:<28} {:>16}\n", name, format_brl(amount)));
    }
    out
}

fn render_monthly(result: &ProjectionResult) -> String {
    let mut out = String::new();
    out.push_str("Monthly Cost Projection - Year 1\n\n");

    out.push_str(&format!("{:>10}", "Month"));
    for category in CostCategory::ALL {
        out.push_str(&format!(" {:>9}", category.label()));
    }
    out.push_str(&format!(" {:>10} {:>10}\n", "Monthly", "Cumul."));
    out.push_str(&format!("{}\n", "-".repeat(10 + 10 * 8 + 22)));

    for record in &result.records {
        out.push_str(&format!("{:>10}", record.label));
        for category in CostCategory::ALL {
            out.push_str(&format!(" {:>9.0}", record.costs.get(category)));
        }
        out.push_str(&format!(
            " {:>10.0} {:>10.0}\n",
            record.monthly_total, record.cumulative_total
        ));
    }
    out
}

fn monthly_csv(result: &ProjectionResult) -> String {
    let mut out = String::from("month,label");
    for category in CostCategory::ALL {
        out.push_str(&format!(",{}", category.label().to_ascii_lowercase()));
    }
    out.push_str(",monthly_total");
    for category in CostCategory::ALL {
        out.push_str(&format!(",cum_{}", category.label().to_ascii_lowercase()));
    }
    out.push_str(",cumulative_total\n");

    for record in &result.records {
        out.push_str(&format!("{},{}", record.month, record.label));
        for category in CostCategory::ALL {
            out.push_str(&format!(",{:.2}", record.costs.get(category)));
        }
        out.push_str(&format!(",{:.2}", record.monthly_total));
        for category in CostCategory::ALL {
            out.push_str(&format!(",{:.2}", record.cumulative.get(category)));
        }
        out.push_str(&format!(",{:.2}\n", record.cumulative_total));
    }
    out
}

fn summary_csv(summary: &PlanSummary) -> String {
    format!(
        "metric,amount\n\
         total_one_time_setup,{:.2}\n\
         steady_state_monthly,{:.2}\n\
         event_budget_total,{:.2}\n\
         first_year_total,{:.2}\n",
        summary.total_one_time_setup,
        summary.steady_state_monthly,
        summary.event_budget_total,
        summary.first_year_total,
    )
}

fn render_breakdown(
    title: &str,
    items: &[LineItem],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_items(title, items)),
        OutputFormat::Csv => items_csv(items),
        OutputFormat::Json => to_json(&items),
    }
}

fn render_items(title: &str, items: &[LineItem]) -> String {
    let mut out = format!("{title}\n\n");
    out.push_str(&format!(
        "{:<36} {:>5} {:>14} {:>16}\n",
        "Item", "Qty", "Unit", "Cost"
    ));
    out.push_str(&format!("{}\n", "-".repeat(74)));

    for item in items {
        let quantity = item
            .quantity
            .map(|q| q.to_string())
            .unwrap_or_else(|| "-".to_string());
        let unit = item
            .unit_cost
            .map(format_brl)
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<36} {:>5} {:>14} {:>16}\n",
            item.name,
            quantity,
            unit,
            format_brl(item.cost)
        ));
    }

    out.push_str(&format!("{}\n", "-".repeat(74)));
    out.push_str(&format!(
        "{:<36} {:>5} {:>14} {:>16}\n",
        "Total",
        "",
        "",
        format_brl(items_total(items))
    ));
    out
}

fn items_csv(items: &[LineItem]) -> anyhow::Result<String> {
    // Descriptions contain commas; let the csv writer handle quoting
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "description", "quantity", "unit_cost", "cost"])?;
    for item in items {
        writer.write_record([
            item.name.to_string(),
            item.description.to_string(),
            item.quantity.map(|q| q.to_string()).unwrap_or_default(),
            item.unit_cost.map(|u| format!("{u:.2}")).unwrap_or_default(),
            format!("{:.2}", item.cost),
        ])?;
    }
    let buf = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv output: {e}"))?;
    Ok(String::from_utf8(buf)?)
}
