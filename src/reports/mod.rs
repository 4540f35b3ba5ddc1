use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::io::{self, Write};
use vigenere::analysis::{AttackReport, LengthTrial};
use vigenere::config::AnalysisConfig;

pub fn print_attack_report(report: &AttackReport, config: &AnalysisConfig) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_attack_report(&mut out, report, config) {
        eprintln!("❌ Failed to write report: {}", e);
    }
}

pub fn write_attack_report<W: Write>(
    out: &mut W,
    report: &AttackReport,
    config: &AnalysisConfig,
) -> io::Result<()> {
    writeln!(
        out,
        "\nProcessing cipher in {} ({} letters, {} repeat distances)",
        report.profile, report.text_len, report.distance_count
    )?;

    if !report.top_factors.is_empty() {
        writeln!(out, "{}", factor_table(report))?;
    }

    if !report.has_candidates() {
        writeln!(out, "No key-length candidates (no repeated patterns found).")?;
        return Ok(());
    }
    writeln!(out, "Possible key lengths: {:?}", report.key_lengths)?;

    for trial in &report.trials {
        write_trial(out, trial, config)?;
    }
    Ok(())
}

fn factor_table(report: &AttackReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Factor").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    let best = report.top_factors.first().map(|&(_, c)| c);
    for &(factor, count) in &report.top_factors {
        let factor_cell = if Some(count) == best {
            Cell::new(factor).fg(Color::Green)
        } else {
            Cell::new(factor)
        };
        table.add_row(vec![factor_cell, Cell::new(count)]);
    }
    table
}

fn write_trial<W: Write>(out: &mut W, trial: &LengthTrial, config: &AnalysisConfig) -> io::Result<()> {
    writeln!(
        out,
        "\nKeys of length {} ({} found):",
        trial.key_length,
        trial.keys_found()
    )?;
    if !trial.empty_positions.is_empty() {
        writeln!(
            out,
            "  ⚠️  positions {:?} had no letters, no keys of this length",
            trial.empty_positions
        )?;
    }
    for candidate in trial.candidates.iter().take(config.keys_to_show) {
        writeln!(
            out,
            "{} -> {}",
            candidate.key,
            candidate.preview(config.preview_len)
        )?;
    }
    Ok(())
}
