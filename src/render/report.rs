//! Plain-text rendering of evaluation reports.

use crate::scoring::aggregate::{Aggregate, WinTally};
use crate::strategy::axis::Combination;
use crate::strategy::experiments::{
    BaselineReport, EvaluationReport, GameReport, RaceReport, TileReport,
};
use crate::strategy::harness::Ranking;
use std::io::{self, Write};

pub fn player_name(seat: usize) -> String {
    format!("Player {}", seat + 1)
}

pub fn write_header<W: Write>(out: &mut W, header: &str) -> io::Result<()> {
    writeln!(out, "\n\n{}", header)?;
    writeln!(out, "{}", "-".repeat(header.chars().count()))
}

/// One `axis = variant` line per axis, axis names left-aligned.
pub fn write_combination<W: Write, C: Combination>(out: &mut W, combination: &C) -> io::Result<()> {
    let labels = combination.labels();
    let width = labels.iter().map(|(axis, _)| axis.len()).max().unwrap_or(0);
    for (axis, name) in labels {
        writeln!(out, "{:<width$} = {}", axis, name, width = width)?;
    }
    Ok(())
}

fn write_combination_list<W: Write, C: Combination, A>(
    out: &mut W,
    ranking: &Ranking<C, A>,
) -> io::Result<()> {
    for entry in &ranking.entries {
        let names: Vec<&str> = entry.combination.labels().into_iter().map(|(_, n)| n).collect();
        writeln!(out, "({})", names.join(", "))?;
    }
    Ok(())
}

fn write_test_title<W: Write>(out: &mut W, index: usize, total: usize) -> io::Result<()> {
    writeln!(
        out,
        "\n# Test ({}/{}) with the following strategy:",
        index + 1,
        total
    )
}

fn write_best<W: Write, C: Combination, A: Aggregate>(
    out: &mut W,
    ranking: &Ranking<C, A>,
) -> io::Result<()> {
    if let Some(best) = ranking.best_entry() {
        write_header(out, "==> The best strategy is:")?;
        write_combination(out, &best.combination)?;
    }
    Ok(())
}

/// Win share per seat and the share relative to a fair `1 / players`.
pub fn write_wins_simple<W: Write>(out: &mut W, tally: &WinTally) -> io::Result<()> {
    writeln!(out, "\n> Wins")?;
    for (seat, (rate, fair)) in tally
        .win_rates()
        .into_iter()
        .zip(tally.fair_share_rates())
        .enumerate()
    {
        writeln!(
            out,
            "{}: {:6.2}% -> {:6.2}%",
            player_name(seat),
            rate * 100.0,
            fair * 100.0
        )?;
    }
    Ok(())
}

/// Table of win quotients, row player against column player.
pub fn write_wins_crossover<W: Write>(out: &mut W, tally: &WinTally) -> io::Result<()> {
    let names: Vec<String> = (0..tally.players()).map(player_name).collect();
    let width = names.iter().map(|n| n.len()).max().unwrap_or(0).max(8);

    writeln!(
        out,
        "\n> Winning quotients of player A vs. player B (row vs column)"
    )?;
    write!(out, "{:>width$}", "A \\ B", width = width)?;
    for name in &names {
        write!(out, "{:>width$}", name, width = width + 2)?;
    }
    writeln!(out)?;

    for (name, row) in names.iter().zip(tally.crossover()) {
        write!(out, "{:>width$}", name, width = width)?;
        for quotient in row {
            let cell = quotient.map_or_else(|| "-".to_string(), |q| format!("{:.2}", q));
            write!(out, "{:>width$}", cell, width = width + 2)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_tile_report<W: Write>(out: &mut W, report: &TileReport) -> io::Result<()> {
    let ranking = &report.ranking;
    write_header(
        out,
        "Play the game each time with one of the following strategies:",
    )?;
    write_combination_list(out, ranking)?;

    for (i, entry) in ranking.entries.iter().enumerate() {
        write_test_title(out, i, ranking.entries.len())?;
        write_combination(out, &entry.combination)?;
        let agg = &entry.aggregate;
        writeln!(out, "Points (avg): {}", agg.average())?;
        writeln!(
            out,
            "Points (std/min/max): {:.2} / {} / {}",
            agg.std_dev(),
            agg.min().unwrap_or(0),
            agg.max().unwrap_or(0)
        )?;
    }

    write_best(out, ranking)
}

fn write_baseline<W: Write>(out: &mut W, baseline: &BaselineReport) -> io::Result<()> {
    let header = match baseline.players {
        2 => "Two players with a random strategy:".to_string(),
        4 => "Four players with a random strategy:".to_string(),
        n => format!("{} players with a random strategy:", n),
    };
    write_header(out, &header)?;
    if baseline.players == 2 {
        writeln!(
            out,
            "Shows that the player that starts has a better chance to win."
        )?;
    } else {
        writeln!(
            out,
            "Shows how the chance to win changes by the players starting order."
        )?;
    }
    write_wins_simple(out, &baseline.tally)?;
    write_wins_crossover(out, &baseline.tally)
}

pub fn write_race_report<W: Write>(out: &mut W, report: &RaceReport) -> io::Result<()> {
    for baseline in &report.baselines {
        write_baseline(out, baseline)?;
    }

    let ranking = &report.ranking;
    write_header(
        out,
        "Two players - the first one with the random strategy, \
         the second one each time with one of the following strategies:",
    )?;
    write_combination_list(out, ranking)?;
    writeln!(
        out,
        "Only compare the winning rates of the second player. The partial strategy combination \
         with the highest winning rate is simply the best strategy."
    )?;

    for (i, entry) in ranking.entries.iter().enumerate() {
        write_test_title(out, i, ranking.entries.len())?;
        write_combination(out, &entry.combination)?;
        write_wins_simple(out, &entry.aggregate)?;
    }

    write_best(out, ranking)
}

pub fn write_report<W: Write>(out: &mut W, report: &EvaluationReport) -> io::Result<()> {
    match &report.report {
        GameReport::Tile(tile) => write_tile_report(out, tile),
        GameReport::Race(race) => write_race_report(out, race),
    }
}
