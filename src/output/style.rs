use serde::Deserialize;
use std::{fmt, str::FromStr};

use crate::Error;

/// Display style of a rendered table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum Style {
    /// Cells joined by a tab, no padding.
    #[default]
    Tab,
    /// Cells padded to the widest data cell of their column.
    Aligned,
    /// Like [`Style::Aligned`], but columns wider than the given width
    /// are truncated, keeping the tail of each value.
    Fixed(usize),
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(style: &str) -> Result<Self, Self::Err> {
        match style {
            "t" => Ok(Self::Tab),
            "a" => Ok(Self::Aligned),
            // widths too large for usize saturate: no column reaches them
            _ => style
                .strip_prefix('f')
                .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
                .map(|n| Self::Fixed(n.parse().unwrap_or(usize::MAX)))
                .ok_or_else(|| Error::InvalidStyle(style.to_owned())),
        }
    }
}

impl TryFrom<String> for Style {
    type Error = Error;

    fn try_from(style: String) -> Result<Self, Self::Error> {
        style.parse()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab => write!(f, "t"),
            Self::Aligned => write!(f, "a"),
            Self::Fixed(width) => write!(f, "f{width}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_styles() {
        assert_eq!("t".parse::<Style>().unwrap(), Style::Tab);
        assert_eq!("a".parse::<Style>().unwrap(), Style::Aligned);
        assert_eq!("f50".parse::<Style>().unwrap(), Style::Fixed(50));
        assert_eq!("f007".parse::<Style>().unwrap(), Style::Fixed(7));
        assert_eq!("f0".parse::<Style>().unwrap(), Style::Fixed(0));
    }

    #[test]
    fn reject_unknown_styles() {
        for style in ["", "x", "T", "f", "f-1", "f+1", "f5x", "a ", "fa"] {
            assert!(
                matches!(style.parse::<Style>(), Err(Error::InvalidStyle(ref s)) if s == style),
                "style {style:?} should be invalid"
            );
        }
    }

    #[test]
    fn saturate_huge_fixed_width() {
        assert_eq!(
            "f99999999999999999999999".parse::<Style>().unwrap(),
            Style::Fixed(usize::MAX)
        );
    }

    #[test]
    fn display_round_trips() {
        for style in [Style::Tab, Style::Aligned, Style::Fixed(12)] {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
    }
}
