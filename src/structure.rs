//! Layout types for paginated documents

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical page format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PageFormat {
    /// ISO A4 (210 x 297 mm)
    A4,
    /// ISO A3 (297 x 420 mm)
    A3,
    /// US Letter (8.5 x 11 in)
    Letter,
    /// US Legal (8.5 x 14 in)
    Legal,
}

impl PageFormat {
    /// Media size in points (1/72 inch), portrait base.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PageFormat::A4 => (595.0, 842.0),
            PageFormat::A3 => (842.0, 1191.0),
            PageFormat::Letter => (612.0, 792.0),
            PageFormat::Legal => (612.0, 1008.0),
        }
    }
}

impl Default for PageFormat {
    fn default() -> Self {
        PageFormat::A4
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageFormat::A4 => "A4",
            PageFormat::A3 => "A3",
            PageFormat::Letter => "Letter",
            PageFormat::Legal => "Legal",
        };
        write!(f, "{}", name)
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Orientation {
    /// Taller than wide
    Portrait,
    /// Wider than tall
    Landscape,
    /// Equal sides
    Square,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Portrait
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
            Orientation::Square => "square",
        };
        write!(f, "{}", name)
    }
}

/// Structural configuration of a document.
///
/// On input (construction) `number_of_pages` is the requested initial page
/// count. On output from [`Document::structure`](crate::Document::structure)
/// it is the live page count at the time of the call, never a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Structure {
    /// Number of pages
    pub number_of_pages: usize,
    /// Page format
    pub format: PageFormat,
    /// Page orientation
    pub orientation: Orientation,
}

impl Default for Structure {
    fn default() -> Self {
        Self {
            number_of_pages: 1,
            format: PageFormat::A4,
            orientation: Orientation::Portrait,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default() {
        assert_eq!(PageFormat::default(), PageFormat::A4);
    }

    #[test]
    fn test_orientation_default() {
        assert_eq!(Orientation::default(), Orientation::Portrait);
    }

    #[test]
    fn test_structure_default() {
        let structure = Structure::default();
        assert_eq!(structure.number_of_pages, 1);
        assert_eq!(structure.format, PageFormat::A4);
        assert_eq!(structure.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_format_dimensions() {
        assert_eq!(PageFormat::A4.dimensions(), (595.0, 842.0));
        assert_eq!(PageFormat::A3.dimensions(), (842.0, 1191.0));
        assert_eq!(PageFormat::Letter.dimensions(), (612.0, 792.0));
        assert_eq!(PageFormat::Legal.dimensions(), (612.0, 1008.0));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(PageFormat::A4.to_string(), "A4");
        assert_eq!(PageFormat::Legal.to_string(), "Legal");
    }

    #[test]
    fn test_orientation_display() {
        assert_eq!(Orientation::Portrait.to_string(), "portrait");
        assert_eq!(Orientation::Landscape.to_string(), "landscape");
        assert_eq!(Orientation::Square.to_string(), "square");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_structure_serde_round_trip() {
        let structure = Structure {
            number_of_pages: 10,
            format: PageFormat::Legal,
            orientation: Orientation::Landscape,
        };

        let json = serde_json::to_string(&structure).unwrap();
        assert!(json.contains("\"numberOfPages\":10"));
        assert!(json.contains("\"Legal\""));
        assert!(json.contains("\"landscape\""));

        let deserialized: Structure = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, structure);
    }
}
