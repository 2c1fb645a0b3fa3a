use crate::annotation::span::Span;
use crate::foundation::core::Coord;
use crate::foundation::error::{LayoutError, LayoutResult};
use crate::text::tokenize::Word;

/// Merge already-annotated target spans into a word sequence.
///
/// Every word lying inside a target is replaced by one synthetic word covering
/// exactly the target, with `annotated` set. Targets must start on a word start and
/// end on a word end; anything else (including overlapping targets) is
/// [`LayoutError::MisalignedTarget`].
pub fn splice<P>(text: &str, words: Vec<Word>, targets: &[Span<P>]) -> LayoutResult<Vec<Word>> {
    if targets.is_empty() {
        return Ok(words);
    }

    let mut order: Vec<&Span<P>> = targets.iter().collect();
    for t in &order {
        t.validate_positioned()?;
    }
    order.sort_by_key(|t| t.start);
    for pair in order.windows(2) {
        if pair[0].overlaps(pair[1]) {
            return Err(LayoutError::misaligned_target(format!(
                "targets [{}, {}] and [{}, {}] overlap",
                pair[0].start, pair[0].end, pair[1].start, pair[1].end
            )));
        }
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::with_capacity(words.len());
    let mut pending = order.into_iter().peekable();
    let mut words = words.into_iter().peekable();

    while let Some(word) = words.next() {
        let Some(target) = pending.next_if(|t| t.start <= word.end) else {
            out.push(word);
            continue;
        };
        if target.start != word.start {
            return Err(misaligned(target.start, target.end, "start"));
        }

        let mut last = word;
        while last.end < target.end {
            match words.next_if(|w| w.start <= target.end) {
                Some(w) => last = w,
                None => break,
            }
        }
        if last.end != target.end {
            return Err(misaligned(target.start, target.end, "end"));
        }

        out.push(Word {
            text: substring(&chars, target.start, target.end)?,
            start: target.start,
            end: target.end,
            annotated: true,
        });
    }

    if let Some(t) = pending.next() {
        return Err(misaligned(t.start, t.end, "start"));
    }
    Ok(out)
}

fn misaligned(start: Coord, end: Coord, edge: &str) -> LayoutError {
    LayoutError::misaligned_target(format!(
        "target [{start}, {end}] {edge} does not fall on a word boundary"
    ))
}

fn substring(chars: &[char], start: Coord, end: Coord) -> LayoutResult<String> {
    let (Ok(lo), Ok(hi)) = (usize::try_from(start), usize::try_from(end)) else {
        return Err(LayoutError::invalid_span("target has a negative coordinate"));
    };
    chars
        .get(lo..=hi)
        .map(|s| s.iter().collect())
        .ok_or_else(|| {
            LayoutError::invalid_span(format!(
                "target [{start}, {end}] is outside the {}-char text",
                chars.len()
            ))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/text/splice.rs"]
mod tests;
