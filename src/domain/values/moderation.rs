//! Comment moderation: link blocking and profanity filtering.

use crate::domain::error::DomainError;
use std::ops::RangeInclusive;
use unicode_normalization::UnicodeNormalization;

pub const MAX_COMMENT_LENGTH: usize = 1000;

const PROFANITY: &[&str] = &[
    "merda", "porra", "caralho", "puta", "puto", "foda", "foder", "fodido", "viado", "bicha",
    "cuzao", "cuzinho", "buceta", "boceta", "piroca", "piranha", "putinha", "prostituta",
    "vagabunda", "vagabundo",
];

const COMBINING_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036f}';

const SHORTENERS: &[&str] = &["bit.ly/", "t.co/", "tinyurl.com/"];

/// Lowercase and strip diacritics: canonical decomposition, then the
/// combining marks are dropped.
pub fn fold_accents(text: &str) -> String {
    text.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn normalize_word(word: &str) -> String {
    fold_accents(word)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

fn is_profane(word: &str) -> bool {
    let normalized = normalize_word(word);
    // Prefix match catches stretched spellings without flagging words like "computador".
    !normalized.is_empty() && PROFANITY.iter().any(|p| normalized.starts_with(p))
}

pub fn contains_profanity(text: &str) -> bool {
    fold_accents(text)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .any(is_profane)
}

fn looks_like_link(token: &str) -> bool {
    let t = token.to_lowercase();
    if t.starts_with("http://") || t.starts_with("https://") || t.starts_with("www.") {
        return true;
    }
    if SHORTENERS.iter().any(|s| t.contains(s)) {
        return true;
    }
    // Bare domains such as "loja.com" or "exemplo.com.br/oferta".
    let host = t.split('/').next().unwrap_or("");
    let host = host.trim_end_matches(|c: char| matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | ')'));
    let mut labels = host.split('.');
    let first = labels.next().unwrap_or("");
    let rest: Vec<&str> = labels.collect();
    let label_ok = |l: &str| !l.is_empty() && l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    match rest.last() {
        Some(tld) => {
            label_ok(first)
                && rest.iter().all(|l| label_ok(l))
                && tld.len() >= 2
                && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

pub fn contains_links(text: &str) -> bool {
    text.split_whitespace().any(looks_like_link)
}

pub fn remove_links(text: &str) -> String {
    text.split_whitespace()
        .filter(|t| !looks_like_link(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mask profane words with `*`, keeping surrounding punctuation.
pub fn mask_profanity(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();
    for c in text.chars() {
        if c.is_whitespace() {
            out.push_str(&mask_word(&word));
            word.clear();
            out.push(c);
        } else {
            word.push(c);
        }
    }
    out.push_str(&mask_word(&word));
    out
}

fn mask_word(word: &str) -> String {
    if !is_profane(word) {
        return word.to_string();
    }
    word.chars()
        .map(|c| if c.is_alphanumeric() { '*' } else { c })
        .collect()
}

/// Reject a comment that cannot be posted as-is.
pub fn validate_comment(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::Rejected("O comentário não pode estar vazio.".into()));
    }
    if contains_links(content) {
        return Err(DomainError::Rejected("Links não são permitidos nos comentários.".into()));
    }
    if contains_profanity(content) {
        return Err(DomainError::Rejected(
            "O comentário contém palavras inadequadas. Por favor, revise o texto.".into(),
        ));
    }
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(DomainError::Rejected(format!(
            "O comentário deve ter no máximo {MAX_COMMENT_LENGTH} caracteres."
        )));
    }
    Ok(())
}

pub fn sanitize_comment(content: &str) -> String {
    mask_profanity(&remove_links(content)).trim().to_string()
}
