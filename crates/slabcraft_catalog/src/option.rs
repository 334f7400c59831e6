//! Per-shape activation options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which sub-variant of a shape is active for a layer.
///
/// Not every option is valid for every shape; a shape advertises its
/// valid set through [`crate::Shape::available_options`]. `Eighths`,
/// `Quarters` and `Halves` select template families of the extended
/// block set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeOption {
    /// The shape is not used.
    Disable,
    /// The shape's single template family is used.
    Enable,
    /// Eighth-resolution family (extended namespace only).
    Eighths,
    /// Quarter-resolution family (extended namespace only).
    Quarters,
    /// Half-resolution family (extended namespace only).
    Halves,
}

impl fmt::Display for ShapeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Disable => "Disable",
            Self::Enable => "Enable",
            Self::Eighths => "Eighths",
            Self::Quarters => "Quarters",
            Self::Halves => "Halves",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text() {
        assert_eq!(ShapeOption::Disable.to_string(), "Disable");
        assert_eq!(ShapeOption::Quarters.to_string(), "Quarters");
    }
}
