// Line patterns for the whole-document parser.

use lazy_static::lazy_static;
use regex::Regex;

/// Tokens of the card's printed headings; lines holding them are never names.
pub const HEADING_TOKENS: [&str; 2] = ["ROYAUME", "CARTE"];

/// Expiry label, with the typographic apostrophe OCR often returns.
pub const EXPIRY_LABELS: [&str; 2] = ["Valable jusqu'au", "Valable jusqu’au"];

/// Arabic for "director", printed before the issuing official's name.
pub const DIRECTOR_KEYWORD: &str = "مدير";

lazy_static! {
    /// Upper-case Latin letters, accented letters and spaces only.
    pub static ref NAME_LINE: Regex = Regex::new(r"^[A-ZÀ-ÿ\s]+$").unwrap();

    /// dd?dd?dddd with any separator, as OCR renders dots unreliably.
    pub static ref DATE_SHAPE: Regex = Regex::new(r"\d{2}.\d{2}.\d{4}").unwrap();

    /// Place after "à". A leading `a’` is an OCR artifact and is skipped.
    pub static ref BIRTH_PLACE: Regex =
        Regex::new(r"à\s+(?:[aA]['’]\s*)?([A-Za-zÀ-ÿ][A-Za-zÀ-ÿ\s]*)").unwrap();

    /// Candidate card numbers. Letter/digit mix is checked separately.
    pub static ref ID_TOKEN: Regex = Regex::new(r"\b[A-Za-z0-9]{8}\b").unwrap();

    pub static ref ARABIC_WORDS: Regex = Regex::new(r"[أ-ي]+(?: [أ-ي]+)*").unwrap();
}

/// First 8-character alphanumeric token holding both a letter and a digit.
pub fn find_id_code(line: &str) -> Option<&str> {
    ID_TOKEN.find_iter(line).map(|m| m.as_str()).find(|token| {
        token.chars().any(|c| c.is_ascii_alphabetic()) && token.chars().any(|c| c.is_ascii_digit())
    })
}

/// True when the whole of `code` is a valid card number.
pub fn is_id_code(code: &str) -> bool {
    find_id_code(code) == Some(code)
}

pub fn is_name_line(line: &str) -> bool {
    NAME_LINE.is_match(line) && !HEADING_TOKENS.iter().any(|token| line.contains(token))
}

pub fn is_expiry_line(line: &str) -> bool {
    EXPIRY_LABELS.iter().any(|label| line.contains(label))
}

pub fn find_date(line: &str) -> Option<&str> {
    DATE_SHAPE.find(line).map(|m| m.as_str())
}

pub fn find_birth_place(line: &str) -> Option<String> {
    BIRTH_PLACE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|place| !place.is_empty())
}

pub fn find_director(line: &str) -> Option<String> {
    if !line.contains(DIRECTOR_KEYWORD) {
        return None;
    }
    ARABIC_WORDS.find(line).map(|m| m.as_str().trim().to_string())
}
