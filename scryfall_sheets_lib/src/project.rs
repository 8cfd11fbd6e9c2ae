//! Row Projector: flattens card records into spreadsheet rows.
//!
//! Each card is first augmented (face data fills gaps, an `image` formula is
//! derived), then every requested field is looked up by dotted path and
//! formatted for display. Lookups never fail; a miss is an empty cell.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

use scryfall_api::types::Card;

use crate::fields::FieldList;

const CARD_FACES_KEY: &str = "card_faces";
const IMAGE_KEY: &str = "image";
const IMAGE_MODE: u8 = 4;
const IMAGE_WIDTH: u32 = 340;
const IMAGE_HEIGHT: u32 = 244;

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(Number),
    Bool(bool),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Empty => serializer.serialize_str(""),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Number(n) => n.serialize(serializer),
            Cell::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

pub type Row = Vec<Cell>;

/// Returns a copy of `card` with the first card face's keys filling any keys
/// missing at the top level, plus a derived `image` formula.
///
/// Top-level keys always win over face keys.
pub fn augment_card(card: &Card) -> Card {
    let mut out = card.clone();

    let first_face = card
        .get(CARD_FACES_KEY)
        .and_then(Value::as_array)
        .and_then(|faces| faces.first())
        .and_then(Value::as_object);
    if let Some(face) = first_face {
        for (key, value) in face {
            if !out.contains_key(key) {
                out.insert(key.clone(), value.clone());
            }
        }
    }

    let normal_image = out
        .get("image_uris")
        .and_then(|uris| uris.get("normal"))
        .and_then(Value::as_str)
        .map(str::to_string);
    if let Some(url) = normal_image {
        out.insert(IMAGE_KEY.to_string(), Value::String(image_formula(&url)));
    }

    out
}

/// Spreadsheet formula displaying the image at a fixed size.
pub fn image_formula(url: &str) -> String {
    format!(
        "=IMAGE(\"{}\", {}, {}, {})",
        url, IMAGE_MODE, IMAGE_WIDTH, IMAGE_HEIGHT
    )
}

/// Walks `path` one `.`-separated segment at a time.
///
/// Returns `None` as soon as a segment is missing or an intermediate value is
/// falsy. Numeric segments index into arrays.
pub fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(root, |current, segment| {
        if is_falsy(current) {
            return None;
        }
        match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    })
}

/// `null`, `false`, `0` and `""` count as absent.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Formats a looked-up value for display in the column named `field`.
pub fn format_cell(field: &str, value: Option<&Value>) -> Cell {
    let value = match value {
        Some(v) if !is_falsy(v) => v,
        _ => return Cell::Empty,
    };
    match value {
        Value::String(s) => Cell::Text(s.replace('\n', "\n\n")),
        Value::Number(n) => Cell::Number(n.clone()),
        Value::Bool(b) => Cell::Bool(*b),
        Value::Array(items) => {
            let separator = if field.contains("color") { "" } else { ", " };
            Cell::Text(
                items
                    .iter()
                    .map(array_element_text)
                    .collect::<Vec<_>>()
                    .join(separator),
            )
        }
        Value::Object(_) => Cell::Text(value.to_string()),
        Value::Null => Cell::Empty,
    }
}

fn array_element_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Projects one card onto the requested fields.
pub fn project_card(card: &Card, fields: &FieldList) -> Row {
    let augmented = Value::Object(augment_card(card));
    fields
        .iter()
        .map(|field| format_cell(field, lookup_path(&augmented, field)))
        .collect()
}

/// Projects every card, one row per card, columns in field order.
pub fn project_rows(cards: &[Card], fields: &FieldList) -> Vec<Row> {
    cards.iter().map(|card| project_card(card, fields)).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn card(value: Value) -> Card {
        match value {
            Value::Object(map) => map,
            _ => panic!("card fixture must be an object"),
        }
    }

    fn fields(names: &[&str]) -> FieldList {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn nested_path_lookup() {
        let v = json!({ "prices": { "usd": "1.50", "eur": null } });
        assert_eq!(lookup_path(&v, "prices.usd"), Some(&json!("1.50")));
        assert_eq!(lookup_path(&v, "prices.eur"), Some(&Value::Null));
        assert_eq!(lookup_path(&v, "prices.tix"), None);
        assert_eq!(lookup_path(&v, "legalities.modern"), None);
        assert_eq!(lookup_path(&v, "prices.usd.deeper.still"), None);
    }

    #[test]
    fn falsy_intermediate_stops_traversal() {
        let v = json!({ "prices": null, "zero": 0 });
        assert_eq!(lookup_path(&v, "prices.usd"), None);
        assert_eq!(lookup_path(&v, "zero.anything"), None);
    }

    #[test]
    fn numeric_segments_index_arrays() {
        let v = json!({ "card_faces": [{ "name": "Front" }, { "name": "Back" }] });
        assert_eq!(lookup_path(&v, "card_faces.1.name"), Some(&json!("Back")));
        assert_eq!(lookup_path(&v, "card_faces.2.name"), None);
        assert_eq!(lookup_path(&v, "card_faces.x"), None);
    }

    #[test]
    fn missing_nested_field_is_empty_cell() {
        let c = card(json!({ "name": "Llanowar Elves", "prices": { "usd": "0.20" } }));
        let row = project_card(&c, &fields(&["name", "prices.eur", "legalities.standard.x"]));
        assert_eq!(row, vec![text("Llanowar Elves"), Cell::Empty, Cell::Empty]);
    }

    #[test]
    fn falsy_values_render_empty() {
        let c = card(json!({ "a": null, "b": false, "c": 0, "d": "", "e": 0.0 }));
        let row = project_card(&c, &fields(&["a", "b", "c", "d", "e"]));
        assert!(row.iter().all(|cell| *cell == Cell::Empty));
        assert!(row.iter().all(|cell| cell.to_string().is_empty()));
    }

    #[test]
    fn scalars_kept() {
        let c = card(json!({ "cmc": 3.0, "reserved": true, "power": "2" }));
        let row = project_card(&c, &fields(&["cmc", "reserved", "power"]));
        assert_eq!(row[0], Cell::Number(Number::from_f64(3.0).unwrap()));
        assert_eq!(row[1], Cell::Bool(true));
        assert_eq!(row[2], text("2"));
    }

    #[test]
    fn newlines_doubled() {
        let c = card(json!({ "oracle_text": "Flying\nHaste\n\nTrample" }));
        let row = project_card(&c, &fields(&["oracle_text"]));
        assert_eq!(row[0], text("Flying\n\nHaste\n\n\n\nTrample"));
    }

    #[test]
    fn color_arrays_concatenate() {
        let c = card(json!({ "color_identity": ["W", "U"], "colors": ["B", "G"] }));
        let row = project_card(&c, &fields(&["color_identity", "colors"]));
        assert_eq!(row, vec![text("WU"), text("BG")]);
    }

    #[test]
    fn other_arrays_join_with_comma() {
        let c = card(json!({ "subtypes": ["Human", "Wizard"], "keywords": [] }));
        let row = project_card(&c, &fields(&["subtypes", "keywords"]));
        assert_eq!(row, vec![text("Human, Wizard"), text("")]);
    }

    #[test]
    fn array_elements_rendered() {
        let cell = format_cell("games", Some(&json!(["paper", null, 3, { "a": 1 }])));
        assert_eq!(cell, text(r#"paper, , 3, {"a":1}"#));
    }

    #[test]
    fn objects_render_as_json() {
        let c = card(json!({ "prices": { "usd": "1.00" } }));
        let row = project_card(&c, &fields(&["prices"]));
        assert_eq!(row[0], text(r#"{"usd":"1.00"}"#));
    }

    #[test]
    fn face_fills_gaps_but_top_level_wins() {
        let c = card(json!({
            "name": "Delver of Secrets // Insectile Aberration",
            "card_faces": [
                {
                    "name": "Delver of Secrets",
                    "mana_cost": "{U}",
                    "oracle_text": "At the beginning of your upkeep, look at the top card of your library.",
                    "image_uris": { "normal": "https://img.example/delver-front.jpg" }
                },
                {
                    "name": "Insectile Aberration",
                    "oracle_text": "Flying"
                }
            ]
        }));
        let augmented = augment_card(&c);
        assert_eq!(
            augmented["name"],
            json!("Delver of Secrets // Insectile Aberration")
        );
        assert_eq!(augmented["mana_cost"], json!("{U}"));
        assert!(augmented["oracle_text"]
            .as_str()
            .unwrap()
            .starts_with("At the beginning"));
        assert_eq!(
            augmented["image"],
            json!("=IMAGE(\"https://img.example/delver-front.jpg\", 4, 340, 244)")
        );
    }

    #[test]
    fn augment_does_not_mutate_input() {
        let c = card(json!({
            "card_faces": [{ "mana_cost": "{G}" }],
            "image_uris": { "normal": "https://img.example/x.jpg" }
        }));
        let before = c.clone();
        let augmented = augment_card(&c);
        assert_eq!(c, before);
        assert!(!c.contains_key("image"));
        assert!(augmented.contains_key("image"));
        assert!(augmented.contains_key("mana_cost"));
    }

    #[test]
    fn top_level_image_preferred() {
        let c = card(json!({
            "image_uris": { "normal": "https://img.example/top.jpg" },
            "card_faces": [{ "image_uris": { "normal": "https://img.example/face.jpg" } }]
        }));
        let row = project_card(&c, &fields(&["image"]));
        assert_eq!(
            row[0],
            text("=IMAGE(\"https://img.example/top.jpg\", 4, 340, 244)")
        );
    }

    #[test]
    fn no_image_url_means_empty_image_cell() {
        let c = card(json!({ "name": "Island" }));
        let row = project_card(&c, &fields(&["image"]));
        assert_eq!(row[0], Cell::Empty);
    }

    #[test]
    fn card_faces_that_are_not_objects_are_ignored() {
        let c = card(json!({ "name": "Odd", "card_faces": ["nope"] }));
        let augmented = augment_card(&c);
        assert_eq!(augmented.len(), 2);
    }

    #[test]
    fn rows_follow_card_and_field_order() {
        let cards = vec![
            card(json!({ "name": "A", "type_line": "Instant" })),
            card(json!({ "name": "B" })),
        ];
        let rows = project_rows(&cards, &fields(&["type_line", "name"]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![text("Instant"), text("A")]);
        assert_eq!(rows[1], vec![Cell::Empty, text("B")]);
    }

    #[test]
    fn cell_serialization() {
        let row = vec![
            Cell::Empty,
            text("x"),
            Cell::Number(Number::from(2)),
            Cell::Bool(false),
        ];
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"["","x",2,false]"#);
    }
}
