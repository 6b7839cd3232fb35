/// One of the three recognised bracket pairs.
///
/// The set is closed: `(`/`)`, `[`/`]` and `{`/`}`. Angle brackets and any
/// other delimiters are ordinary characters as far as the checker goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `(` and `)`.
    Paren,
    /// `[` and `]`.
    Square,
    /// `{` and `}`.
    Curly,
}

impl Bracket {
    /// Every recognised pair, in declaration order.
    pub const ALL: [Bracket; 3] = [Bracket::Paren, Bracket::Square, Bracket::Curly];

    /// Opening character of this pair.
    pub const fn opener(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    /// Closing character of this pair.
    pub const fn closer(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }

    /// The pair that `c` opens, if any.
    pub const fn from_opener(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Paren),
            '[' => Some(Self::Square),
            '{' => Some(Self::Curly),
            _ => None,
        }
    }

    /// The pair that `c` closes, if any.
    pub const fn from_closer(c: char) -> Option<Self> {
        match c {
            ')' => Some(Self::Paren),
            ']' => Some(Self::Square),
            '}' => Some(Self::Curly),
            _ => None,
        }
    }
}
