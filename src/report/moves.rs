//! Move leaderboards
//!
//! Six views over the scored move pool: fast moves by damage per turn, by
//! energy per turn, by quality and by type, and charged moves by damage per
//! energy and by type. Each is previewed on screen and written in full to the
//! output directory.

use std::cmp::Ordering;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::table::{Align, Table};
use super::ReportError;
use crate::analysis::MoveBook;
use crate::config::ReportSettings;
use crate::game::{ScoredChargedMove, ScoredFastMove};

/// One move leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveView {
    FastByPowerPerTurn,
    FastByEnergyPerTurn,
    FastByQuality,
    FastByTypeAndQuality,
    ChargedByPowerPerEnergy,
    ChargedByTypeAndPowerPerEnergy,
}

/// How much of a table goes to the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Hidden,
    Head(usize),
    Full,
}

impl MoveView {
    pub const ALL: [MoveView; 6] = [
        MoveView::FastByPowerPerTurn,
        MoveView::FastByEnergyPerTurn,
        MoveView::FastByQuality,
        MoveView::FastByTypeAndQuality,
        MoveView::ChargedByPowerPerEnergy,
        MoveView::ChargedByTypeAndPowerPerEnergy,
    ];

    /// Report file name without extension
    pub fn file_stem(&self) -> &'static str {
        match self {
            MoveView::FastByPowerPerTurn => "pvp_fast_moves_by_dpt",
            MoveView::FastByEnergyPerTurn => "pvp_fast_moves_by_ept",
            MoveView::FastByQuality => "pvp_fast_moves_by_zepdoos",
            MoveView::FastByTypeAndQuality => "pvp_fast_moves_by_type_and_zepdoos",
            MoveView::ChargedByPowerPerEnergy => "pvp_charged_moves_by_dpe",
            MoveView::ChargedByTypeAndPowerPerEnergy => "pvp_charged_moves_by_type_and_dpe",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MoveView::FastByPowerPerTurn => "Best DPT moves:",
            MoveView::FastByEnergyPerTurn => "Best EPT moves:",
            MoveView::FastByQuality => "Best quality moves:",
            MoveView::FastByTypeAndQuality => "Best quality moves by type:",
            MoveView::ChargedByPowerPerEnergy => "Best charge moves for PvP (DPE):",
            MoveView::ChargedByTypeAndPowerPerEnergy => "Best charge moves by type (DPE):",
        }
    }

    pub fn preview(&self, settings: &ReportSettings) -> Preview {
        match self {
            MoveView::FastByPowerPerTurn | MoveView::FastByEnergyPerTurn => {
                Preview::Head(settings.fast_preview)
            }
            MoveView::FastByQuality => Preview::Full,
            MoveView::ChargedByPowerPerEnergy => Preview::Head(settings.charged_preview),
            MoveView::FastByTypeAndQuality | MoveView::ChargedByTypeAndPowerPerEnergy => {
                Preview::Hidden
            }
        }
    }

    /// Build the full table for this view
    pub fn table(&self, book: &MoveBook) -> Table {
        match self {
            MoveView::FastByPowerPerTurn => fast_table(&sorted_fast(book, |a, b| {
                desc(a.power_per_turn, b.power_per_turn).then(desc(a.quality, b.quality))
            })),
            MoveView::FastByEnergyPerTurn => fast_table(&sorted_fast(book, |a, b| {
                desc(a.energy_per_turn, b.energy_per_turn).then(desc(a.quality, b.quality))
            })),
            MoveView::FastByQuality => {
                fast_table(&sorted_fast(book, |a, b| desc(a.quality, b.quality)))
            }
            MoveView::FastByTypeAndQuality => fast_table(&sorted_fast(book, |a, b| {
                b.move_type()
                    .name()
                    .cmp(a.move_type().name())
                    .then(desc(a.quality, b.quality))
            })),
            MoveView::ChargedByPowerPerEnergy => charged_table(&sorted_charged(book, |a, b| {
                desc(a.power_per_energy, b.power_per_energy)
            })),
            MoveView::ChargedByTypeAndPowerPerEnergy => {
                charged_table(&sorted_charged(book, |a, b| {
                    b.move_type()
                        .name()
                        .cmp(a.move_type().name())
                        .then(desc(a.power_per_energy, b.power_per_energy))
                }))
            }
        }
    }
}

fn desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

fn sorted_fast(
    book: &MoveBook,
    order: impl Fn(&ScoredFastMove, &ScoredFastMove) -> Ordering,
) -> Vec<&ScoredFastMove> {
    let mut moves: Vec<&ScoredFastMove> = book.fast_moves().iter().collect();
    moves.sort_by(|a, b| order(a, b));
    moves
}

fn sorted_charged(
    book: &MoveBook,
    order: impl Fn(&ScoredChargedMove, &ScoredChargedMove) -> Ordering,
) -> Vec<&ScoredChargedMove> {
    let mut moves: Vec<&ScoredChargedMove> = book.charged_moves().iter().collect();
    moves.sort_by(|a, b| order(a, b));
    moves
}

fn fast_table(moves: &[&ScoredFastMove]) -> Table {
    let mut table = Table::new(&[
        ("name", Align::Left),
        ("type", Align::Left),
        ("power", Align::Right),
        ("ΔE", Align::Right),
        ("turns", Align::Right),
        ("DPT", Align::Right),
        ("EPT", Align::Right),
        ("ZEPDOOS", Align::Right),
    ]);
    for m in moves {
        table.push_row(vec![
            m.name().to_string(),
            m.move_type().to_string(),
            m.base.power.to_string(),
            m.base.energy_delta.to_string(),
            m.base.duration_turns.to_string(),
            format!("{:.2}", m.power_per_turn),
            format!("{:.2}", m.energy_per_turn),
            format!("{:.2}", m.quality),
        ]);
    }
    table
}

fn charged_table(moves: &[&ScoredChargedMove]) -> Table {
    let mut table = Table::new(&[
        ("name", Align::Left),
        ("type", Align::Left),
        ("power", Align::Right),
        ("ΔE", Align::Right),
        ("DP100E", Align::Right),
        ("DPE", Align::Right),
    ]);
    for m in moves {
        table.push_row(vec![
            m.name().to_string(),
            m.move_type().to_string(),
            m.base.power.to_string(),
            m.base.energy_delta.to_string(),
            m.power_per_100_energy.to_string(),
            format!("{:.4}", m.power_per_energy),
        ]);
    }
    table
}

/// Print every preview to `out` and write every full table into `output_dir`.
///
/// Returns the written paths in view order.
pub fn write_move_reports<W: Write>(
    book: &MoveBook,
    settings: &ReportSettings,
    output_dir: &Path,
    out: &mut W,
) -> Result<Vec<PathBuf>, ReportError> {
    super::ensure_dir(output_dir)?;

    let mut written = Vec::with_capacity(MoveView::ALL.len());
    for view in MoveView::ALL {
        let table = view.table(book);
        let shown = match view.preview(settings) {
            Preview::Hidden => None,
            Preview::Head(n) => Some(table.head(n)),
            Preview::Full => Some(table.clone()),
        };
        if let Some(shown) = shown {
            writeln!(out, "\n{}", view.title())?;
            write!(out, "{}", shown.render_text())?;
        }

        let path = output_dir.join(format!("{}.{}", view.file_stem(), settings.extension()));
        table.write_to_path(&path)?;
        log::debug!("Wrote {} rows to {}", table.len(), path.display());
        written.push(path);
    }
    log::info!("Wrote {} move reports to {}", written.len(), output_dir.display());
    Ok(written)
}
