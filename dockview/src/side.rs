use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalSide {
    Top,
    Bottom,
}

impl VerticalSide {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalSide {
    Left,
    Right,
}

impl HorizontalSide {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseSideError {
    #[error("docking side is empty")]
    Empty,
    #[error("unknown docking keyword `{0}`")]
    UnknownKeyword(String),
    #[error("docking side names more than one {0} keyword")]
    DuplicateAxis(Axis),
}

/// An ordered docking preference, e.g. `"bottom left"`.
///
/// Holds at most one keyword per axis. The axis of the first keyword is the primary axis: the
/// overlay is placed against the target's edge on that axis and aligned flush on the other.
/// A missing keyword on the secondary axis means "flush with the target's near edge".
///
/// Parsing and [`fmt::Display`] use the same space-separated keyword form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DockingSide {
    vertical: Option<VerticalSide>,
    horizontal: Option<HorizontalSide>,
    primary: Axis,
}

impl DockingSide {
    /// Docks above or below the target.
    pub fn vertical(side: VerticalSide) -> Self {
        Self {
            vertical: Some(side),
            horizontal: None,
            primary: Axis::Vertical,
        }
    }

    /// Docks to the left or right of the target.
    pub fn horizontal(side: HorizontalSide) -> Self {
        Self {
            vertical: None,
            horizontal: Some(side),
            primary: Axis::Horizontal,
        }
    }

    pub fn then_horizontal(mut self, side: HorizontalSide) -> Self {
        if self.primary == Axis::Vertical {
            self.horizontal = Some(side);
        }
        self
    }

    pub fn then_vertical(mut self, side: VerticalSide) -> Self {
        if self.primary == Axis::Horizontal {
            self.vertical = Some(side);
        }
        self
    }

    pub fn vertical_side(&self) -> Option<VerticalSide> {
        self.vertical
    }

    pub fn horizontal_side(&self) -> Option<HorizontalSide> {
        self.horizontal
    }

    pub fn primary(&self) -> Axis {
        self.primary
    }

    /// Parses an optional preference. Blank input yields `Ok(None)`.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, ParseSideError> {
        match s.parse() {
            Ok(side) => Ok(Some(side)),
            Err(ParseSideError::Empty) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl FromStr for DockingSide {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut vertical = None;
        let mut horizontal = None;
        let mut primary = None;

        for token in s.split_whitespace() {
            let axis = match token {
                "top" | "bottom" => {
                    if vertical.is_some() {
                        return Err(ParseSideError::DuplicateAxis(Axis::Vertical));
                    }
                    vertical = Some(if token == "top" {
                        VerticalSide::Top
                    } else {
                        VerticalSide::Bottom
                    });
                    Axis::Vertical
                }
                "left" | "right" => {
                    if horizontal.is_some() {
                        return Err(ParseSideError::DuplicateAxis(Axis::Horizontal));
                    }
                    horizontal = Some(if token == "left" {
                        HorizontalSide::Left
                    } else {
                        HorizontalSide::Right
                    });
                    Axis::Horizontal
                }
                other => return Err(ParseSideError::UnknownKeyword(other.to_string())),
            };
            primary.get_or_insert(axis);
        }

        let primary = primary.ok_or(ParseSideError::Empty)?;
        Ok(Self {
            vertical,
            horizontal,
            primary,
        })
    }
}

impl fmt::Display for DockingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertical = self.vertical.map(VerticalSide::as_str);
        let horizontal = self.horizontal.map(HorizontalSide::as_str);
        let (first, second) = match self.primary {
            Axis::Vertical => (vertical, horizontal),
            Axis::Horizontal => (horizontal, vertical),
        };
        match (first, second) {
            (Some(a), Some(b)) => write!(f, "{a} {b}"),
            (Some(a), None) | (None, Some(a)) => f.write_str(a),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DockingSide {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DockingSide {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
