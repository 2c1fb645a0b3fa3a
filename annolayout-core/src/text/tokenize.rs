use crate::foundation::core::Coord;
use crate::foundation::error::{LayoutError, LayoutResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A whitespace-delimited word and its inclusive character span.
pub struct Word {
    /// Word text.
    pub text: String,
    /// Offset of the first character (in codepoints).
    pub start: Coord,
    /// Offset of the last character (inclusive).
    pub end: Coord,
    /// Set on words produced by target splicing.
    #[serde(default)]
    pub annotated: bool,
}

impl Word {
    fn plain(text: String, start: Coord, end: Coord) -> Self {
        Self {
            text,
            start,
            end,
            annotated: false,
        }
    }
}

/// Split `text` into words at runs of Unicode whitespace.
///
/// Offsets count codepoints, not bytes. Separators belong to no word but still
/// advance the offset. Fails with [`LayoutError::EmptyInput`] on empty text;
/// whitespace-only text yields no words.
pub fn tokenize(text: &str) -> LayoutResult<Vec<Word>> {
    if text.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    let mut words = Vec::new();
    let mut current = String::new();
    let mut current_start: Coord = 0;

    for (offset, ch) in text.chars().enumerate() {
        let offset = offset as Coord;
        if ch.is_whitespace() {
            if !current.is_empty() {
                words.push(Word::plain(
                    std::mem::take(&mut current),
                    current_start,
                    offset - 1,
                ));
            }
            continue;
        }
        if current.is_empty() {
            current_start = offset;
        }
        current.push(ch);
    }
    if !current.is_empty() {
        let len = current.chars().count() as Coord;
        words.push(Word::plain(current, current_start, current_start + len - 1));
    }

    Ok(words)
}

/// Char-offset to word-position lookup over a tokenized sentence.
#[derive(Clone, Debug, Default)]
pub struct WordIndex {
    by_char: Vec<Option<usize>>,
}

impl WordIndex {
    /// Build the index from words in left-to-right order.
    pub fn new(words: &[Word]) -> Self {
        let len = words
            .last()
            .map(|w| usize::try_from(w.end + 1).unwrap_or(0))
            .unwrap_or(0);
        let mut by_char = vec![None; len];
        for (idx, word) in words.iter().enumerate() {
            let (Ok(start), Ok(end)) = (usize::try_from(word.start), usize::try_from(word.end))
            else {
                continue;
            };
            for slot in by_char.iter_mut().take(end + 1).skip(start) {
                *slot = Some(idx);
            }
        }
        Self { by_char }
    }

    /// Word covering `coord`, or `None` for separators and out-of-range offsets.
    pub fn word_at(&self, coord: Coord) -> Option<usize> {
        let i = usize::try_from(coord).ok()?;
        self.by_char.get(i).copied().flatten()
    }

    /// Inclusive range of words touched by `start..=end`.
    pub fn word_range(&self, start: Coord, end: Coord) -> Option<(usize, usize)> {
        if start > end {
            return None;
        }
        let lo = usize::try_from(start).ok()?;
        let hi = usize::try_from(end).ok()?.min(self.by_char.len().checked_sub(1)?);
        let mut hits = self.by_char.get(lo..=hi)?.iter().flatten();
        let first = *hits.next()?;
        let last = hits.last().copied().unwrap_or(first);
        Some((first, last))
    }

    /// Number of indexed character positions.
    pub fn len(&self) -> usize {
        self.by_char.len()
    }

    /// Whether the index covers no characters.
    pub fn is_empty(&self) -> bool {
        self.by_char.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/tokenize.rs"]
mod tests;
