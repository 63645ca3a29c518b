//! Human-readable summaries printed by the CLI.

use std::fmt::Write as _;
use std::path::Path;

use mbg_core::RecipeValidation;
use mbg_generate::WriteOutcome;
use mbg_generate::budget::BudgetEstimate;
use mbg_generate::model::GenerationResult;

/// Integer with `.` as the thousands separator, as written in Indonesia.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

pub fn format_rupiah(value: u64) -> String {
    format!("Rp {}", format_thousands(value))
}

/// Summary of one `masak` run.
pub fn render_run_summary(
    recipe: &Path,
    result: &GenerationResult,
    written: Option<&WriteOutcome>,
    budget: &BudgetEstimate,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Recipe     : {}", recipe.display());
    let _ = writeln!(out, "Menu       : {}", result.menu);
    let _ = writeln!(out, "Target     : {}", result.target);
    let _ = writeln!(
        out,
        "Records    : {} / {}",
        format_thousands(result.records.len() as u64),
        format_thousands(result.requested)
    );
    let _ = writeln!(out, "Elapsed    : {:.3}s", result.elapsed.as_secs_f64());
    let _ = writeln!(out, "Batch      : {}", result.batch_id);

    match written {
        Some(outcome) => {
            let _ = writeln!(
                out,
                "Output     : {} ({} bytes)",
                outcome.path.display(),
                format_thousands(outcome.byte_size)
            );
        }
        None => {
            let _ = writeln!(out, "Output     : dry run, nothing written");
        }
    }

    match &result.report {
        Some(report) => {
            let _ = writeln!(
                out,
                "Quality    : {:.2}% ({} valid, {} invalid)",
                report.quality(),
                format_thousands(report.valid_records),
                format_thousands(report.invalid_records)
            );
            if !report.empty_field_counts.is_empty() {
                let fields: Vec<String> = report
                    .empty_field_counts
                    .iter()
                    .map(|(field, count)| format!("{field} ({count})"))
                    .collect();
                let _ = writeln!(out, "Empty      : {}", fields.join(", "));
            }
        }
        None => {
            let _ = writeln!(out, "Quality    : not checked (economy mode)");
        }
    }

    for warning in &result.warnings {
        let _ = writeln!(out, "Warning    : {warning}");
    }

    let _ = writeln!(
        out,
        "Budget     : {} (planned {})",
        format_rupiah(budget.total()),
        format_rupiah(budget.baseline)
    );
    out
}

/// Itemized cost estimate for `masak --audit`.
pub fn render_budget(batch_id: &str, budget: &BudgetEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cost estimate for batch {batch_id}");
    for line in &budget.lines {
        let _ = writeln!(out, "  {:<22}{:>20}", line.label, format_rupiah(line.amount));
    }
    let _ = writeln!(out, "  {}", "-".repeat(42));
    let _ = writeln!(out, "  {:<22}{:>20}", "total", format_rupiah(budget.total()));
    let _ = writeln!(out, "  {:<22}{:>20}", "planned", format_rupiah(budget.baseline));
    let _ = writeln!(
        out,
        "  {:<22}{:>20}",
        "deviation",
        format!("+{:.2}%", budget.deviation_percent)
    );
    out
}

/// Report for `gizi`.
pub fn render_validation(recipe: &Path, validation: &RecipeValidation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Checking recipe: {}", recipe.display());
    if !validation.errors.is_empty() {
        let _ = writeln!(out, "Errors:");
        for issue in &validation.errors {
            let _ = writeln!(out, "  - [{}] {}: {}", issue.code, issue.path, issue.message);
        }
    }
    if !validation.warnings.is_empty() {
        let _ = writeln!(out, "Warnings:");
        for issue in &validation.warnings {
            let _ = writeln!(out, "  - [{}] {}", issue.code, issue.message);
        }
    }
    if validation.is_valid() {
        let _ = writeln!(out, "Recipe is valid.");
    }
    out
}
