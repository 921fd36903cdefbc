use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TABLE_LIKE: Regex = Regex::new(r"\t{2,}|\s{5,}").unwrap();
    static ref SPECIAL_CHAR: Regex = Regex::new(r"[^\w\s\-.,;:!?()@]").unwrap();
}

/// Share of characters that may fall outside the plain set before the text
/// counts as cluttered.
const SPECIAL_CHAR_RATIO: f64 = 0.05;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingFlags {
    pub has_images: bool,
    pub has_tables: bool,
    pub has_special_characters: bool,
}

pub fn inspect(text: &str) -> FormattingFlags {
    FormattingFlags {
        has_images: has_images(text),
        has_tables: has_tables(text),
        has_special_characters: has_special_characters(text),
    }
}

/// Two or more consecutive tabs, or five or more consecutive whitespace characters.
pub fn has_tables(text: &str) -> bool {
    TABLE_LIKE.is_match(text)
}

/// More than 5% of characters are outside word characters, whitespace and `-.,;:!?()@`.
pub fn has_special_characters(text: &str) -> bool {
    let special = SPECIAL_CHAR.find_iter(text).count();
    special as f64 > text.chars().count() as f64 * SPECIAL_CHAR_RATIO
}

/// Plain text carries no image signal, so this is always false.
pub fn has_images(_text: &str) -> bool {
    false
}
