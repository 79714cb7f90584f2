//! Grouping verses into rendering units.
//!
//! A single greedy left-to-right pass: a `0` immediately followed by a `1`
//! forms a couplet; everything else stands alone under its own code's rule.
//! Nothing is reordered, dropped or rewritten.

use std::iter::FusedIterator;

use crate::layout::position::{Alignment, Arity, PositionCode, Weight};
use crate::model::Verse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Two hemistichs side by side.
    Couplet,
    /// A single centered verse, including a hemistich without its partner.
    Centered,
    FreeVerse,
    Comment,
    Paragraph,
}

impl GroupKind {
    fn single(code: PositionCode) -> Self {
        match code {
            PositionCode::FreeVerse => GroupKind::FreeVerse,
            PositionCode::Comment => GroupKind::Comment,
            PositionCode::Paragraph => GroupKind::Paragraph,
            PositionCode::FirstHemistich
            | PositionCode::SecondHemistich
            | PositionCode::CenteredFirst
            | PositionCode::CenteredSecond
            | PositionCode::Unknown(_) => GroupKind::Centered,
        }
    }
}

/// One rendering unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGroup<'a> {
    pub kind: GroupKind,
    /// One verse, or two for a couplet, exactly as supplied.
    pub verses: &'a [Verse],
    pub alignment: Alignment,
    pub weight: Weight,
    /// 1-based running number; `None` for comments.
    pub number: Option<usize>,
}

impl<'a> LayoutGroup<'a> {
    pub fn first(&self) -> &'a Verse {
        &self.verses[0]
    }

    /// The closing hemistich of a couplet.
    pub fn second(&self) -> Option<&'a Verse> {
        self.verses.get(1)
    }
}

/// Iterator over the layout groups of a verse slice.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    verses: &'a [Verse],
    cursor: usize,
    numbered: usize,
}

impl<'a> Layout<'a> {
    pub fn new(verses: &'a [Verse]) -> Self {
        Self {
            verses,
            cursor: 0,
            numbered: 0,
        }
    }
}

impl<'a> Iterator for Layout<'a> {
    type Item = LayoutGroup<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.verses.get(self.cursor..)?;
        let current = rest.first()?.position_code();

        let pairs_with_next = current == PositionCode::FirstHemistich
            && rest
                .get(1)
                .is_some_and(|next| next.position_code() == PositionCode::SecondHemistich);

        let (kind, len, alignment, weight) = if pairs_with_next {
            (GroupKind::Couplet, 2, Alignment::Center, Weight::Normal)
        } else {
            let descriptor = current.descriptor();
            let alignment = match descriptor.arity {
                Arity::Pair => Alignment::Center,
                Arity::Single => descriptor.alignment,
            };
            (GroupKind::single(current), 1, alignment, descriptor.weight)
        };

        self.cursor += len;
        let number = current.is_numbered().then(|| {
            self.numbered += 1;
            self.numbered
        });

        Some(LayoutGroup {
            kind,
            verses: &rest[..len],
            alignment,
            weight,
            number,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.verses.len().saturating_sub(self.cursor);
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl FusedIterator for Layout<'_> {}

/// Group a verse sequence in one pass.
pub fn layout_verses(verses: &[Verse]) -> Vec<LayoutGroup<'_>> {
    Layout::new(verses).collect()
}
