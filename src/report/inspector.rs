//! Creature inspector
//!
//! Looks creatures up by dex number or name and prints their stats, league
//! levels, moves and best movesets. Runs either one query or a read-eval loop
//! over any line source.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use super::fuzzy::{default_suggester, NameSuggester};
use crate::analysis::{CreatureRanking, MoveBook, MovesetRanker};
use crate::game::{Creature, League};
use crate::gamemaster::extract::title_case;
use crate::gamemaster::LegacyMoves;

const MAX_SUGGESTIONS: usize = 5;
const PROMPT: &str = ">> pok: ";
const QUIT_HINT: &str = "`q` or `quit` to quit";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Quit,
    Blank,
    Dex(u32),
    Name(String),
}

impl Query {
    /// Parse a raw input line. `None` means the input is exhausted.
    pub fn parse(line: Option<&str>) -> Query {
        let Some(line) = line else {
            return Query::Quit;
        };
        let text = line.trim();
        if text.is_empty() {
            return Query::Blank;
        }
        if text == "q" || text == "quit" {
            return Query::Quit;
        }
        if text.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(dex) = text.parse() {
                return Query::Dex(dex);
            }
        }
        Query::Name(text.to_string())
    }
}

/// Outcome of a lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Found(Vec<&'a Creature>),
    UnknownDex(u32),
    NotFound {
        query: String,
        suggestions: Vec<String>,
    },
}

/// Creature lookup and report rendering
pub struct Inspector<'a> {
    creatures: &'a [Creature],
    book: &'a MoveBook,
    legacy: &'a LegacyMoves,
    ranker: MovesetRanker,
    suggester: Box<dyn NameSuggester>,
    max_movesets: usize,
}

impl<'a> Inspector<'a> {
    pub fn new(
        creatures: &'a [Creature],
        book: &'a MoveBook,
        legacy: &'a LegacyMoves,
        ranker: MovesetRanker,
    ) -> Self {
        Self {
            creatures,
            book,
            legacy,
            ranker,
            suggester: default_suggester(),
            max_movesets: 10,
        }
    }

    pub fn with_suggester(mut self, suggester: Box<dyn NameSuggester>) -> Self {
        self.suggester = suggester;
        self
    }

    pub fn with_max_movesets(mut self, max_movesets: usize) -> Self {
        self.max_movesets = max_movesets;
        self
    }

    /// Resolve a dex or name query. Quit and blank queries resolve to nothing.
    pub fn lookup(&self, query: &Query) -> Option<Resolution<'a>> {
        match query {
            Query::Dex(dex) => Some(self.lookup_dex(*dex)),
            Query::Name(name) => Some(self.lookup_name(name)),
            Query::Quit | Query::Blank => None,
        }
    }

    fn lookup_dex(&self, dex: u32) -> Resolution<'a> {
        let found: Vec<&Creature> = self.creatures.iter().filter(|c| c.dex == dex).collect();
        if found.is_empty() {
            Resolution::UnknownDex(dex)
        } else {
            Resolution::Found(found)
        }
    }

    /// Short names are tried before full names
    fn lookup_name(&self, query: &str) -> Resolution<'a> {
        let wanted = title_case(query);
        let by_name: Vec<&Creature> = self.creatures.iter().filter(|c| c.name == wanted).collect();
        if !by_name.is_empty() {
            return Resolution::Found(by_name);
        }
        let by_full_name: Vec<&Creature> = self
            .creatures
            .iter()
            .filter(|c| c.full_name == wanted)
            .collect();
        if !by_full_name.is_empty() {
            return Resolution::Found(by_full_name);
        }

        let candidates: Vec<&str> = self.creatures.iter().map(|c| c.full_name.as_str()).collect();
        Resolution::NotFound {
            query: query.to_string(),
            suggestions: self.suggester.suggest(query, &candidates, MAX_SUGGESTIONS),
        }
    }

    pub fn render_resolution(&self, resolution: &Resolution<'_>) -> String {
        match resolution {
            Resolution::Found(creatures) => creatures.iter().map(|c| self.render_creature(c)).collect(),
            Resolution::UnknownDex(dex) => {
                format!("Couldn't find any pokemon with dex number {}.\n", dex)
            }
            Resolution::NotFound { query, suggestions } if suggestions.is_empty() => {
                format!("Couldn't find any pokemon named `{}`.\n", title_case(query))
            }
            Resolution::NotFound { query, suggestions } => format!(
                "Couldn't find `{}`. Maybe you meant: {}\n",
                query,
                suggestions.join(", ")
            ),
        }
    }

    /// Full report for one creature
    pub fn render_creature(&self, creature: &Creature) -> String {
        let ranking = self.ranker.rank_creature(creature, self.book, self.legacy);
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_creature(&mut out, &ranking);
        out
    }

    fn write_creature(&self, out: &mut String, ranking: &CreatureRanking<'_>) -> std::fmt::Result {
        let c = ranking.creature;
        writeln!(out, "\n# {:0>3} {} ({})", c.dex, c.full_name, c.type_label())?;
        writeln!(
            out,
            "Attributes:  ATK={}  DEF={}  STA={}",
            c.stats.attack, c.stats.defense, c.stats.stamina
        )?;
        writeln!(
            out,
            "Perfect at level 40:  CP={}  HP={}",
            ranking.max_cp, ranking.max_hp
        )?;

        writeln!(out, "\nLeagues:")?;
        for (league, fit) in ranking.league_fits.iter() {
            let label = format!("{}:", league);
            if fit.fits {
                writeln!(out, " - {:<14} level {:<4.1}  CP={}", label, fit.level, fit.combat_power)?;
            } else {
                writeln!(out, " - {:<14} too strong (CP={} at level 1)", label, fit.combat_power)?;
            }
        }

        writeln!(out, "\nFast moves:")?;
        for m in &ranking.fast_moves {
            writeln!(
                out,
                " - [{:<4}] [{:<8}] {:<17} (TURNS={} POWER={:<2.0} ΔE={:<2} DPT={:<4.1} EPT={:<4.1} ZEPDOOS={:<4.1}){}",
                if m.stab { "STAB" } else { "" },
                m.scored.move_type(),
                m.scored.name(),
                m.scored.base.duration_turns,
                m.scored.base.power,
                m.scored.base.energy_delta,
                m.power_per_turn,
                m.scored.energy_per_turn,
                m.quality,
                legacy_marker(m.legacy),
            )?;
        }

        writeln!(out, "\nCharged moves:")?;
        for m in &ranking.charged_moves {
            writeln!(
                out,
                " - [{:<4}] [{:<8}] {:<17} (POWER={:<3.0} ΔE={:<3} DP100E={:<3}){}",
                if m.stab { "STAB" } else { "" },
                m.scored.move_type(),
                m.scored.name(),
                m.scored.base.power,
                m.scored.base.energy_delta,
                m.power_per_100_energy,
                legacy_marker(m.legacy),
            )?;
        }

        writeln!(out, "\nBest movesets:")?;
        for m in ranking.movesets.iter().take(self.max_movesets) {
            writeln!(
                out,
                " - {:>17} - {:<17} (DPT={:.3}  {}={:.1}  {}={:.1}  {}={:.1})",
                m.fast.scored.name(),
                m.charged.scored.name(),
                m.throughput,
                League::Great.short_name(),
                m.tdo[League::Great],
                League::Ultra.short_name(),
                m.tdo[League::Ultra],
                League::Master.short_name(),
                m.tdo[League::Master],
            )?;
        }
        if ranking.movesets.len() > self.max_movesets {
            writeln!(out, " - {} others", ranking.movesets.len() - self.max_movesets)?;
        }
        writeln!(out)
    }

    /// Answer a single query, as given on the command line
    pub fn run_query<W: Write>(&self, raw: &str, out: &mut W) -> io::Result<()> {
        if let Some(resolution) = self.lookup(&Query::parse(Some(raw))) {
            write!(out, "{}", self.render_resolution(&resolution))?;
        }
        Ok(())
    }

    /// Read queries until `q`, `quit` or end of input.
    ///
    /// Reports go to `out`; the prompt and hints go to `err`. Returns the
    /// number of lookups answered.
    pub fn run_session<R: BufRead, W: Write, E: Write>(
        &self,
        mut input: R,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<usize> {
        let mut answered = 0;
        loop {
            write!(err, "{}", PROMPT)?;
            err.flush()?;

            let mut line = String::new();
            let read = input.read_line(&mut line)?;
            let query = Query::parse((read > 0).then_some(line.as_str()));

            match query {
                Query::Quit => break,
                Query::Blank => writeln!(err, "{}", QUIT_HINT)?,
                _ => {
                    if let Some(resolution) = self.lookup(&query) {
                        write!(out, "{}", self.render_resolution(&resolution))?;
                        out.flush()?;
                        answered += 1;
                    }
                }
            }
        }
        log::debug!("Inspector session ended after {} lookups", answered);
        Ok(answered)
    }
}

fn legacy_marker(legacy: bool) -> &'static str {
    if legacy {
        " [Legacy]"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scorer::tests::{charged, fast};
    use crate::formulas::SCORING;
    use crate::game::{BaseStats, ElementType, MoveKind};
    use crate::report::NoSuggester;

    fn roster() -> Vec<Creature> {
        let machamp = Creature {
            dex: 68,
            id: "MACHAMP".to_string(),
            name: "Machamp".to_string(),
            full_name: "Machamp".to_string(),
            form: None,
            primary_type: ElementType::Fighting,
            secondary_type: None,
            stats: BaseStats::new(234, 159, 180),
            fast_moves: vec!["COUNTER_FAST".to_string(), "BULLET_PUNCH_FAST".to_string()],
            charged_moves: vec![
                "CROSS_CHOP".to_string(),
                "ROCK_SLIDE".to_string(),
                "HEAVY_SLAM".to_string(),
            ],
        };
        let rattata = Creature {
            dex: 19,
            id: "RATTATA".to_string(),
            name: "Rattata".to_string(),
            full_name: "Rattata Alola".to_string(),
            form: Some("RATTATA_ALOLA".to_string()),
            primary_type: ElementType::Dark,
            secondary_type: Some(ElementType::Normal),
            stats: BaseStats::new(103, 70, 102),
            fast_moves: vec!["BULLET_PUNCH_FAST".to_string()],
            charged_moves: vec!["ROCK_SLIDE".to_string()],
        };
        vec![machamp, rattata]
    }

    fn book() -> MoveBook {
        MoveBook::build(
            &[
                fast("COUNTER_FAST", ElementType::Fighting, 8.0, 7, 2),
                fast("BULLET_PUNCH_FAST", ElementType::Steel, 6.0, 7, 2),
                fast("KARATE_CHOP_FAST", ElementType::Fighting, 5.0, 8, 2),
            ],
            &[
                charged("CROSS_CHOP", ElementType::Fighting, 50.0, -35),
                charged("ROCK_SLIDE", ElementType::Rock, 80.0, -45),
                charged("HEAVY_SLAM", ElementType::Steel, 70.0, -50),
            ],
            SCORING.quality_c,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_queries() {
        assert_eq!(Query::parse(None), Query::Quit);
        assert_eq!(Query::parse(Some("q\n")), Query::Quit);
        assert_eq!(Query::parse(Some("quit")), Query::Quit);
        assert_eq!(Query::parse(Some("   \n")), Query::Blank);
        assert_eq!(Query::parse(Some("068\n")), Query::Dex(68));
        assert_eq!(
            Query::parse(Some(" mr mime \n")),
            Query::Name("mr mime".to_string())
        );
    }

    #[test]
    fn test_lookup_by_dex_and_names() {
        let roster = roster();
        let book = book();
        let legacy = LegacyMoves::new();
        let inspector = Inspector::new(&roster, &book, &legacy, MovesetRanker::default());

        let Some(Resolution::Found(found)) = inspector.lookup(&Query::Dex(68)) else {
            panic!("dex lookup failed");
        };
        assert_eq!(found[0].name, "Machamp");

        let Some(Resolution::Found(found)) = inspector.lookup(&Query::Name("MACHAMP".to_string())) else {
            panic!("name lookup failed");
        };
        assert_eq!(found.len(), 1);

        let Some(Resolution::Found(found)) =
            inspector.lookup(&Query::Name("rattata alola".to_string()))
        else {
            panic!("full name lookup failed");
        };
        assert_eq!(found[0].dex, 19);

        assert_eq!(
            inspector.lookup(&Query::Dex(999)),
            Some(Resolution::UnknownDex(999))
        );
        assert_eq!(inspector.lookup(&Query::Blank), None);
    }

    #[test]
    fn test_not_found_without_suggestions() {
        let roster = roster();
        let book = book();
        let legacy = LegacyMoves::new();
        let inspector = Inspector::new(&roster, &book, &legacy, MovesetRanker::default())
            .with_suggester(Box::new(NoSuggester));

        let resolution = inspector.lookup(&Query::Name("machmp".to_string())).unwrap();
        assert_eq!(
            inspector.render_resolution(&resolution),
            "Couldn't find any pokemon named `Machmp`.\n"
        );
    }

    #[cfg(feature = "fuzzy")]
    #[test]
    fn test_not_found_with_suggestions() {
        let roster = roster();
        let book = book();
        let legacy = LegacyMoves::new();
        let inspector = Inspector::new(&roster, &book, &legacy, MovesetRanker::default());

        let resolution = inspector.lookup(&Query::Name("Machmp".to_string())).unwrap();
        let text = inspector.render_resolution(&resolution);
        assert!(text.starts_with("Couldn't find `Machmp`. Maybe you meant: Machamp"));
    }

    #[test]
    fn test_render_creature() {
        let roster = roster();
        let book = book();
        let mut legacy = LegacyMoves::new();
        legacy.insert(MoveKind::Fast, "Machamp", "Karate Chop");
        let inspector = Inspector::new(&roster, &book, &legacy, MovesetRanker::default())
            .with_max_movesets(4);

        let text = inspector.render_creature(&roster[0]);

        assert!(text.starts_with("\n# 068 Machamp (Fighting)\n"));
        assert!(text.contains("Attributes:  ATK=234  DEF=159  STA=180"));
        assert!(text.contains("Great League:"));
        assert!(text.contains("[STAB] [Fighting] Counter"));
        assert!(text.contains("Karate Chop"));
        assert!(text.contains("[Legacy]"));
        assert!(text.contains("[    ] [Steel   ] Heavy Slam"));
        // 3 fast x 3 charged, 4 shown
        assert!(text.contains(" - 5 others\n"));

        let dual = inspector.render_creature(&roster[1]);
        assert!(dual.starts_with("\n# 019 Rattata Alola (Dark-Normal)\n"));
        assert!(!dual.contains("others"));
    }

    #[test]
    fn test_session_loop() {
        let roster = roster();
        let book = book();
        let legacy = LegacyMoves::new();
        let inspector = Inspector::new(&roster, &book, &legacy, MovesetRanker::default())
            .with_suggester(Box::new(NoSuggester));

        let input = "68\n\nnobody\nq\n19\n".as_bytes();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let answered = inspector.run_session(input, &mut out, &mut err).unwrap();

        assert_eq!(answered, 2);
        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(out.contains("# 068 Machamp"));
        assert!(out.contains("Couldn't find any pokemon named `Nobody`."));
        assert!(!out.contains("Rattata"));
        assert!(err.contains(QUIT_HINT));
        assert_eq!(err.matches(PROMPT).count(), 4);
    }

    #[test]
    fn test_session_ends_at_end_of_input() {
        let roster = roster();
        let book = book();
        let legacy = LegacyMoves::new();
        let inspector = Inspector::new(&roster, &book, &legacy, MovesetRanker::default());

        let mut out = Vec::new();
        let answered = inspector
            .run_session("19".as_bytes(), &mut out, &mut io::sink())
            .unwrap();
        assert_eq!(answered, 1);
        assert!(String::from_utf8(out).unwrap().contains("Rattata Alola"));
    }

    #[test]
    fn test_single_query() {
        let roster = roster();
        let book = book();
        let legacy = LegacyMoves::new();
        let inspector = Inspector::new(&roster, &book, &legacy, MovesetRanker::default());

        let mut out = Vec::new();
        inspector.run_query("machamp", &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Best movesets:"));
    }
}
