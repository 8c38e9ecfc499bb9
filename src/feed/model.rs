// Wire types for the results feed
//
// Field names follow the legacy JSON feed (Spanish), mapped to Rust names
// through serde renames. The endpoint serves either a bare key -> record map
// or the same map wrapped in a "sorteos" envelope with a last-updated label.

use serde::Deserialize;
use std::collections::HashMap;

/// One number cell as it appears in the feed. The feed mixes JSON numbers
/// and strings (zodiac signs, multipliers like "x2"), so both are preserved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Token {
    Number(i64),
    Text(String),
}

impl Token {
    /// Whether the token displays as a numeric cell. String tokens that
    /// parse as numbers still count as numeric, matching the feed's
    /// convention of quoting leading-zero numbers.
    pub fn is_numeric(&self) -> bool {
        match self {
            Token::Number(_) => true,
            Token::Text(s) => s.trim().parse::<f64>().is_ok(),
        }
    }

    pub fn display(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Text(s) => s.clone(),
        }
    }
}

/// One lottery draw outcome as served by the feed
#[derive(Debug, Clone, Deserialize)]
pub struct DrawRecord {
    #[serde(rename = "nombre_juego")]
    pub game_name: String,

    /// "DD-MM" or "DD-MM-YYYY"; the year is inferred when absent
    #[serde(rename = "fecha_sorteo")]
    pub draw_date: String,

    /// Draw time label, absent for the super category
    #[serde(rename = "hora_sorteo", default)]
    pub draw_time: Option<String>,

    /// Present only for the single-number game, together with the digits
    #[serde(rename = "numero_ganador", default)]
    pub winning_number: Option<Token>,

    #[serde(rename = "numeros_individuales", default)]
    pub individual_numbers: Vec<Token>,

    /// Present for multi-number games (number, sign, multiplier, ...)
    #[serde(rename = "numeros_adicionales", default)]
    pub additional_numbers: Vec<Token>,

    /// Kept for feed compatibility; a terminal has no image surface, so a
    /// missing or broken reference degrades to rendering nothing
    #[serde(rename = "logo_url", default)]
    pub logo_url: Option<String>,
}

impl DrawRecord {
    /// A draw with no numbers at all is still pending
    pub fn is_pending(&self) -> bool {
        self.winning_number.is_none() && self.additional_numbers.is_empty()
    }
}

/// Mapping from game key to its latest draw
pub type ResultMap = HashMap<String, DrawRecord>;

/// The two body shapes the endpoint serves
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    Wrapped {
        sorteos: ResultMap,
        #[serde(rename = "fecha_actualizacion", default)]
        last_updated: Option<String>,
    },
    Bare(ResultMap),
}

impl Envelope {
    pub fn into_parts(self) -> (ResultMap, Option<String>) {
        match self {
            Envelope::Wrapped {
                sorteos,
                last_updated,
            } => (sorteos, last_updated),
            Envelope::Bare(map) => (map, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRAPPED: &str = r#"{
        "fecha_actualizacion": "15-06-2024 21:05",
        "sorteos": {
            "juga3-noche": {
                "nombre_juego": "Jugá 3 9:00 PM",
                "fecha_sorteo": "15-06",
                "hora_sorteo": "9:00 PM",
                "numero_ganador": 472,
                "numeros_individuales": [4, 7, 2]
            },
            "diaria-tarde": {
                "nombre_juego": "La Diaria 3:00 PM",
                "fecha_sorteo": "15-06",
                "hora_sorteo": "3:00 PM",
                "numeros_adicionales": [38, "Leo", "x2"]
            }
        }
    }"#;

    #[test]
    fn parses_wrapped_envelope() {
        let envelope: Envelope = serde_json::from_str(WRAPPED).unwrap();
        let (map, last_updated) = envelope.into_parts();
        assert_eq!(last_updated.as_deref(), Some("15-06-2024 21:05"));
        assert_eq!(map.len(), 2);

        let juga = &map["juga3-noche"];
        assert_eq!(juga.winning_number, Some(Token::Number(472)));
        assert_eq!(juga.individual_numbers.len(), 3);
        assert!(!juga.is_pending());
    }

    #[test]
    fn parses_bare_map() {
        let body = r#"{
            "pega3-manana": {
                "nombre_juego": "Pega 3",
                "fecha_sorteo": "14-06",
                "hora_sorteo": "11:00 AM"
            }
        }"#;
        let envelope: Envelope = serde_json::from_str(body).unwrap();
        let (map, last_updated) = envelope.into_parts();
        assert_eq!(last_updated, None);
        assert!(map["pega3-manana"].is_pending());
        assert_eq!(map["pega3-manana"].draw_time.as_deref(), Some("11:00 AM"));
    }

    #[test]
    fn mixed_tokens_keep_their_kind() {
        let envelope: Envelope = serde_json::from_str(WRAPPED).unwrap();
        let (map, _) = envelope.into_parts();
        let diaria = &map["diaria-tarde"];
        assert!(diaria.additional_numbers[0].is_numeric());
        assert!(!diaria.additional_numbers[1].is_numeric());
        assert!(!diaria.additional_numbers[2].is_numeric());
        assert_eq!(diaria.additional_numbers[1].display(), "Leo");
    }

    #[test]
    fn quoted_numbers_count_as_numeric() {
        let token = Token::Text("07".to_string());
        assert!(token.is_numeric());
        assert_eq!(token.display(), "07");
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(serde_json::from_str::<Envelope>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<Envelope>("not json").is_err());
    }
}
