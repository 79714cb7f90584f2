//! Verse position codes and their rendering descriptors.

/// Structural role of a verse, decoded from its numeric `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionCode {
    /// `0`: opens a couplet.
    FirstHemistich,
    /// `1`: closes a couplet.
    SecondHemistich,
    /// `2`: centered standalone verse.
    CenteredFirst,
    /// `3`: centered standalone verse, alternate form.
    CenteredSecond,
    /// `4`: free-verse line.
    FreeVerse,
    /// `5`: editorial note; not numbered.
    Comment,
    /// `-1`: prose.
    Paragraph,
    /// Anything outside the vocabulary; rendered as a centered verse.
    Unknown(i64),
}

impl From<i64> for PositionCode {
    fn from(code: i64) -> Self {
        match code {
            0 => PositionCode::FirstHemistich,
            1 => PositionCode::SecondHemistich,
            2 => PositionCode::CenteredFirst,
            3 => PositionCode::CenteredSecond,
            4 => PositionCode::FreeVerse,
            5 => PositionCode::Comment,
            -1 => PositionCode::Paragraph,
            other => PositionCode::Unknown(other),
        }
    }
}

impl From<PositionCode> for i64 {
    fn from(code: PositionCode) -> Self {
        match code {
            PositionCode::FirstHemistich => 0,
            PositionCode::SecondHemistich => 1,
            PositionCode::CenteredFirst => 2,
            PositionCode::CenteredSecond => 3,
            PositionCode::FreeVerse => 4,
            PositionCode::Comment => 5,
            PositionCode::Paragraph => -1,
            PositionCode::Unknown(other) => other,
        }
    }
}

/// How many verses a code wants to occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Single,
    /// Half of a couplet; only pairs when the adjacency rule matches.
    Pair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Right,
    Left,
    Center,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    /// De-emphasized, e.g. editorial comments.
    Muted,
}

/// Rendering rule for one position code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub arity: Arity,
    pub alignment: Alignment,
    pub weight: Weight,
}

impl PositionCode {
    pub fn descriptor(&self) -> Descriptor {
        let (arity, alignment, weight) = match self {
            PositionCode::FirstHemistich => (Arity::Pair, Alignment::Right, Weight::Normal),
            PositionCode::SecondHemistich => (Arity::Pair, Alignment::Left, Weight::Normal),
            PositionCode::CenteredFirst
            | PositionCode::CenteredSecond
            | PositionCode::FreeVerse
            | PositionCode::Unknown(_) => (Arity::Single, Alignment::Center, Weight::Normal),
            PositionCode::Comment => (Arity::Single, Alignment::Center, Weight::Muted),
            PositionCode::Paragraph => (Arity::Single, Alignment::Justify, Weight::Normal),
        };
        Descriptor {
            arity,
            alignment,
            weight,
        }
    }

    /// Whether this verse counts toward verse numbering.
    pub fn is_numbered(&self) -> bool {
        !matches!(self, PositionCode::Comment)
    }
}
