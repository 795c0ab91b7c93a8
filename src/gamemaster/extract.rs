//! Game master extraction
//!
//! Walks the heterogeneous `itemTemplates` list and pulls out fast moves,
//! charged moves and creatures. Any template that looks like a move or a
//! creature but cannot be parsed fails the whole extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::{ExtractError, ExtractReport, GameMasterData};
use crate::game::{supersede_forms, BaseStats, ChargedMove, Creature, ElementType, FastMove};

/// Move identifiers: optional `_FAST` suffix marks fast moves
static MOVE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+?)(_FAST)?$").expect("valid move id regex"));

/// Creature template identifiers: `V0019_POKEMON_RATTATA_ALOLA`
static CREATURE_TEMPLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^V(\d+)_POKEMON_(\w+)$").expect("valid creature template regex"));

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGameMaster {
    item_templates: Vec<RawItemTemplate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItemTemplate {
    template_id: Option<String>,
    combat_move: Option<RawCombatMove>,
    pokemon_settings: Option<RawPokemonSettings>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCombatMove {
    unique_id: Option<String>,
    #[serde(rename = "type")]
    move_type: Option<String>,
    power: Option<f64>,
    energy_delta: Option<i32>,
    duration_turns: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPokemonSettings {
    pokemon_id: Option<String>,
    #[serde(rename = "type")]
    primary_type: Option<String>,
    type2: Option<String>,
    stats: Option<RawStats>,
    quick_moves: Option<Vec<String>>,
    cinematic_moves: Option<Vec<String>>,
    form: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawStats {
    base_stamina: u32,
    base_attack: u32,
    base_defense: u32,
}

/// Extract records from game master JSON text
pub fn extract_str(json: &str) -> Result<GameMasterData, ExtractError> {
    let raw: RawGameMaster = serde_json::from_str(json)?;
    extract(raw)
}

/// Extract records from an already parsed game master document
pub fn extract_value(value: serde_json::Value) -> Result<GameMasterData, ExtractError> {
    let raw: RawGameMaster = serde_json::from_value(value)?;
    extract(raw)
}

fn extract(raw: RawGameMaster) -> Result<GameMasterData, ExtractError> {
    let mut fast_moves = Vec::new();
    let mut charged_moves = Vec::new();
    let mut creatures = Vec::new();
    let mut report = ExtractReport {
        templates: raw.item_templates.len(),
        ..Default::default()
    };

    for (index, item) in raw.item_templates.into_iter().enumerate() {
        let label = item
            .template_id
            .clone()
            .unwrap_or_else(|| format!("item #{}", index));

        if let Some(combat_move) = item.combat_move {
            match parse_move(&label, combat_move)? {
                ParsedMove::Fast(m, defaulted) => {
                    if defaulted {
                        log::warn!("{} has no usable durationTurns, assuming 1 turn", m.id);
                        report.defaulted_durations.push(m.id.clone());
                    }
                    fast_moves.push(m);
                }
                ParsedMove::Charged(m) => charged_moves.push(m),
            }
        } else if let Some(settings) = item.pokemon_settings {
            let template_id = item.template_id.as_deref().ok_or(ExtractError::MissingField {
                item: label.clone(),
                field: "templateId",
            })?;
            creatures.push(parse_creature(template_id, settings)?);
        } else {
            report.ignored += 1;
        }
    }

    let (creatures, superseded) = supersede_forms(creatures);
    report.superseded = superseded;

    log::info!(
        "Extracted {} fast moves, {} charged moves and {} creatures ({} templates ignored, {} superseded)",
        fast_moves.len(),
        charged_moves.len(),
        creatures.len(),
        report.ignored,
        report.superseded
    );

    Ok(GameMasterData {
        fast_moves,
        charged_moves,
        creatures,
        report,
    })
}

enum ParsedMove {
    /// The flag records whether the duration was defaulted
    Fast(FastMove, bool),
    Charged(ChargedMove),
}

fn parse_move(label: &str, raw: RawCombatMove) -> Result<ParsedMove, ExtractError> {
    let id = raw.unique_id.ok_or_else(|| missing(label, "combatMove.uniqueId"))?;
    let captures = MOVE_ID_RE
        .captures(&id)
        .ok_or_else(|| ExtractError::MalformedId {
            item: label.to_string(),
            value: id.clone(),
        })?;
    let name = display_name(&captures[1]);
    let is_fast = captures.get(2).is_some();

    let type_id = raw.move_type.ok_or_else(|| missing(label, "combatMove.type"))?;
    let move_type = parse_type(label, &type_id)?;
    let power = raw.power.unwrap_or(0.0);
    let energy_delta = raw.energy_delta.unwrap_or(0);

    if is_fast {
        let (duration_turns, defaulted) = match raw.duration_turns {
            Some(turns) if turns > 0 => (turns, false),
            _ => (1, true),
        };
        Ok(ParsedMove::Fast(
            FastMove {
                id,
                name,
                move_type,
                power,
                energy_delta,
                duration_turns,
            },
            defaulted,
        ))
    } else {
        Ok(ParsedMove::Charged(ChargedMove {
            id,
            name,
            move_type,
            power,
            energy_delta,
        }))
    }
}

fn parse_creature(template_id: &str, raw: RawPokemonSettings) -> Result<Creature, ExtractError> {
    let captures =
        CREATURE_TEMPLATE_RE
            .captures(template_id)
            .ok_or_else(|| ExtractError::MalformedId {
                item: template_id.to_string(),
                value: template_id.to_string(),
            })?;
    let dex: u32 = captures[1]
        .parse()
        .map_err(|_| ExtractError::MalformedId {
            item: template_id.to_string(),
            value: captures[1].to_string(),
        })?;
    if dex == 0 {
        return Err(ExtractError::MalformedId {
            item: template_id.to_string(),
            value: captures[1].to_string(),
        });
    }
    let full_name = display_name(&captures[2]);

    let id = raw
        .pokemon_id
        .ok_or_else(|| missing(template_id, "pokemonSettings.pokemonId"))?;
    let name = display_name(&id);

    let primary_id = raw
        .primary_type
        .ok_or_else(|| missing(template_id, "pokemonSettings.type"))?;
    let primary_type = parse_type(template_id, &primary_id)?;
    let secondary_type = raw
        .type2
        .map(|t| parse_type(template_id, &t))
        .transpose()?;

    let stats = raw
        .stats
        .ok_or_else(|| missing(template_id, "pokemonSettings.stats"))?;

    Ok(Creature {
        dex,
        id,
        name,
        full_name,
        form: raw.form,
        primary_type,
        secondary_type,
        stats: BaseStats::new(stats.base_attack, stats.base_defense, stats.base_stamina),
        fast_moves: dedup(raw.quick_moves.unwrap_or_default()),
        charged_moves: dedup(raw.cinematic_moves.unwrap_or_default()),
    })
}

fn parse_type(label: &str, type_id: &str) -> Result<ElementType, ExtractError> {
    ElementType::from_template_id(type_id).ok_or_else(|| ExtractError::UnknownType {
        item: label.to_string(),
        value: type_id.to_string(),
    })
}

fn missing(label: &str, field: &'static str) -> ExtractError {
    ExtractError::MissingField {
        item: label.to_string(),
        field,
    }
}

/// Keep the first occurrence of every identifier
fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

/// Turn an identifier such as `MR_MIME` into `Mr Mime`
pub fn display_name(identifier: &str) -> String {
    title_case(&identifier.replace('_', " "))
}

/// Capitalize the first letter of every run of letters and lowercase the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }
    out
}
