//! Roster-wide moveset leaderboard

use std::io::Write;
use std::path::{Path, PathBuf};

use super::table::{Align, Table};
use super::ReportError;
use crate::analysis::{sort_movesets, Moveset, SortKey};
use crate::config::ReportSettings;
use crate::game::League;

/// One row per moveset, in the given order
pub fn moveset_table(movesets: &[Moveset<'_>]) -> Table {
    let mut table = Table::new(&[
        ("dex", Align::Right),
        ("pokemon", Align::Left),
        ("fast", Align::Left),
        ("charged", Align::Left),
        ("DPT", Align::Right),
        ("GL TDO", Align::Right),
        ("UL TDO", Align::Right),
        ("ML TDO", Align::Right),
        ("L1 TDO", Align::Right),
    ]);
    for m in movesets {
        table.push_row(vec![
            format!("{:0>3}", m.creature.dex),
            m.creature.full_name.clone(),
            move_label(m.fast.scored.name(), m.fast.legacy),
            move_label(m.charged.scored.name(), m.charged.legacy),
            format!("{:.3}", m.throughput),
            format!("{:.2}", m.tdo[League::Great]),
            format!("{:.2}", m.tdo[League::Ultra]),
            format!("{:.2}", m.tdo[League::Master]),
            format!("{:.4}", m.level1_tdo),
        ]);
    }
    table
}

fn move_label(name: &str, legacy: bool) -> String {
    if legacy {
        format!("{}*", name)
    } else {
        name.to_string()
    }
}

/// Sort by `key`, preview the top rows on `out` and write the full table.
///
/// The level-1 table is always written as well. Returns the written paths.
pub fn write_leaderboard<W: Write>(
    movesets: &mut [Moveset<'_>],
    key: SortKey,
    settings: &ReportSettings,
    output_dir: &Path,
    out: &mut W,
) -> Result<Vec<PathBuf>, ReportError> {
    super::ensure_dir(output_dir)?;
    let mut written = Vec::with_capacity(2);

    sort_movesets(movesets, key);
    let table = moveset_table(movesets);
    writeln!(out, "\nBest movesets by {}:", key)?;
    write!(out, "{}", table.head(settings.leaderboard_top).render_text())?;
    written.push(write_table(&table, key, settings, output_dir)?);

    if key != SortKey::Level1Tdo {
        sort_movesets(movesets, SortKey::Level1Tdo);
        let table = moveset_table(movesets);
        written.push(write_table(&table, SortKey::Level1Tdo, settings, output_dir)?);
    }

    log::info!(
        "Wrote {} movesets to {}",
        movesets.len(),
        output_dir.display()
    );
    Ok(written)
}

fn write_table(
    table: &Table,
    key: SortKey,
    settings: &ReportSettings,
    output_dir: &Path,
) -> Result<PathBuf, ReportError> {
    let path = output_dir.join(format!("pvp_movesets_by_{}.{}", key.slug(), settings.extension()));
    table.write_to_path(&path)?;
    log::debug!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scorer::tests::{charged, fast};
    use crate::analysis::{MoveBook, MovesetRanker};
    use crate::formulas::SCORING;
    use crate::game::{BaseStats, Creature, ElementType, MoveKind};
    use crate::gamemaster::LegacyMoves;

    fn creature(dex: u32, name: &str, stats: BaseStats) -> Creature {
        Creature {
            dex,
            id: name.to_uppercase(),
            name: name.to_string(),
            full_name: name.to_string(),
            form: None,
            primary_type: ElementType::Fighting,
            secondary_type: None,
            stats,
            fast_moves: vec!["COUNTER_FAST".to_string()],
            charged_moves: vec!["CROSS_CHOP".to_string(), "ROCK_SLIDE".to_string()],
        }
    }

    fn book() -> MoveBook {
        MoveBook::build(
            &[
                fast("COUNTER_FAST", ElementType::Fighting, 8.0, 7, 2),
                fast("LOW_KICK_FAST", ElementType::Fighting, 4.0, 5, 1),
            ],
            &[
                charged("CROSS_CHOP", ElementType::Fighting, 50.0, -35),
                charged("ROCK_SLIDE", ElementType::Rock, 80.0, -45),
            ],
            SCORING.quality_c,
        )
        .unwrap()
    }

    #[test]
    fn test_moveset_table_rows() {
        let roster = vec![creature(68, "Machamp", BaseStats::new(234, 159, 180))];
        let book = book();
        let mut legacy = LegacyMoves::new();
        legacy.insert(MoveKind::Fast, "Machamp", "Low Kick");
        let movesets = MovesetRanker::default().rank_roster(&roster, &book, &legacy);

        let table = moveset_table(&movesets);
        assert_eq!(table.len(), 4);
        assert_eq!(table.cell(0, 0), Some("068"));
        assert!((0..table.len()).any(|i| table.cell(i, 2) == Some("Low Kick*")));
    }

    #[test]
    fn test_write_leaderboard() {
        let dir = tempfile::tempdir().unwrap();
        let roster = vec![
            creature(66, "Machop", BaseStats::new(137, 82, 140)),
            creature(68, "Machamp", BaseStats::new(234, 159, 180)),
        ];
        let book = book();
        let legacy = LegacyMoves::new();
        let mut movesets = MovesetRanker::default().rank_roster(&roster, &book, &legacy);
        let settings = ReportSettings {
            leaderboard_top: 1,
            ..Default::default()
        };
        let mut screen = Vec::new();

        let written = write_leaderboard(
            &mut movesets,
            SortKey::Tdo(League::Ultra),
            &settings,
            dir.path(),
            &mut screen,
        )
        .unwrap();

        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("pvp_movesets_by_ul_tdo.txt"));
        assert!(written[1].ends_with("pvp_movesets_by_level1_tdo.txt"));

        let screen = String::from_utf8(screen).unwrap();
        assert!(screen.contains("Best movesets by Ultra League TDO:"));
        // header plus the single previewed row
        assert_eq!(screen.trim_start().lines().count(), 3);

        let level1 = std::fs::read_to_string(&written[1]).unwrap();
        assert_eq!(level1.lines().count(), 5);
        assert!(level1.lines().nth(1).unwrap().contains("Machamp"));
    }

    #[test]
    fn test_level1_key_writes_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let roster = vec![creature(68, "Machamp", BaseStats::new(234, 159, 180))];
        let book = book();
        let mut movesets = MovesetRanker::default().rank_roster(&roster, &book, &LegacyMoves::new());

        let written = write_leaderboard(
            &mut movesets,
            SortKey::Level1Tdo,
            &ReportSettings::default(),
            dir.path(),
            &mut Vec::new(),
        )
        .unwrap();
        assert_eq!(written.len(), 1);
    }
}
