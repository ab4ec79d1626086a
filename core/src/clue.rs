use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::ClueRecord;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Converts a wire record, returning `None` when either side is blank after cleanup.
    pub fn from_record(record: &ClueRecord) -> Option<Self> {
        let question = normalize_text(&record.question);
        let answer = normalize_text(&record.answer);
        if question.is_empty() || answer.is_empty() {
            log::trace!("dropping incomplete clue {:?}", record.id);
            return None;
        }
        Some(Self { question, answer })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// Strips inline markup tags and escaping backslashes, and collapses whitespace.
///
/// Only bare tags such as `<i>`, `</b>` or `<br />` are removed; a `<` that is not immediately followed by a tag
/// name and `>` is kept, so text such as `a<b and b>c` survives untouched.
pub fn normalize_text(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('<') {
        let (before, tail) = rest.split_at(start);
        stripped.push_str(before);
        match tag_len(tail) {
            Some(len) => rest = &tail[len..],
            None => {
                stripped.push('<');
                rest = &tail[1..];
            }
        }
    }
    stripped.push_str(rest);
    stripped.retain(|c| c != '\\');

    let mut out = String::with_capacity(stripped.len());
    for word in stripped.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

fn tag_len(tail: &str) -> Option<usize> {
    let bytes = tail.as_bytes();
    let mut i = 1;
    if bytes.get(i) == Some(&b'/') {
        i += 1;
    }
    if !bytes.get(i)?.is_ascii_alphabetic() {
        return None;
    }
    while bytes.get(i).is_some_and(u8::is_ascii_alphanumeric) {
        i += 1;
    }
    while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
        i += 1;
    }
    if bytes.get(i) == Some(&b'/') {
        i += 1;
    }
    (bytes.get(i) == Some(&b'>')).then_some(i + 1)
}
