use std::fmt;

use serde::Serialize;

/// `YES`/`NO` encoding of a balance result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
        }
    }

    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for Verdict {
    fn from(balanced: bool) -> Self {
        if balanced { Self::Yes } else { Self::No }
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_yes()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_mapping() {
        assert_eq!(Verdict::from(true), Verdict::Yes);
        assert_eq!(Verdict::from(false), Verdict::No);
        assert!(bool::from(Verdict::Yes));
        assert!(!bool::from(Verdict::No));
    }

    #[test]
    fn display_is_uppercase() {
        assert_eq!(Verdict::Yes.to_string(), "YES");
        assert_eq!(Verdict::No.to_string(), "NO");
    }

    #[test]
    fn serialises_as_uppercase_string() {
        assert_eq!(serde_json::to_string(&Verdict::Yes).unwrap(), "\"YES\"");
        assert_eq!(serde_json::to_string(&Verdict::No).unwrap(), "\"NO\"");
    }
}
