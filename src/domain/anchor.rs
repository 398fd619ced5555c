//! Named screen anchors and their resolution to absolute coordinates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::{Point, Size};

/// Padding kept between an anchored toolbar and the viewport edge
pub const DEFAULT_EDGE_PADDING: f32 = 20.0;

/// Alignment of an element along one axis of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    Start,
    Center,
    End,
}

impl Align {
    /// Offset along the axis for an element of `extent` inside `available`
    fn resolve(self, available: f32, extent: f32, padding: f32) -> f32 {
        match self {
            Align::Start => padding,
            Align::Center => (available - extent) / 2.0,
            Align::End => available - extent - padding,
        }
    }
}

/// One of the nine named screen positions
///
/// Deserializes through [`Anchor::parse_or`], so unknown names fall back to the
/// default anchor instead of failing the surrounding document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown anchor `{0}`")]
pub struct ParseAnchorError(pub String);

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterLeft,
        Anchor::Center,
        Anchor::CenterRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    pub fn horizontal(self) -> Align {
        match self {
            Anchor::TopLeft | Anchor::CenterLeft | Anchor::BottomLeft => Align::Start,
            Anchor::TopCenter | Anchor::Center | Anchor::BottomCenter => Align::Center,
            Anchor::TopRight | Anchor::CenterRight | Anchor::BottomRight => Align::End,
        }
    }

    pub fn vertical(self) -> Align {
        match self {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => Align::Start,
            Anchor::CenterLeft | Anchor::Center | Anchor::CenterRight => Align::Center,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => Align::End,
        }
    }

    /// Top-left coordinate of an element of `element` size anchored inside `viewport`.
    ///
    /// Centered axes ignore `padding`; edge axes keep exactly `padding` between
    /// the element and the edge. The result is not clamped, so an element larger
    /// than the viewport gets a negative coordinate.
    pub fn resolve(self, viewport: Size, element: Size, padding: f32) -> Point {
        Point::new(
            self.horizontal()
                .resolve(viewport.width, element.width, padding),
            self.vertical()
                .resolve(viewport.height, element.height, padding),
        )
    }

    /// Parse `name`, falling back to `fallback` for unrecognised names
    pub fn parse_or(name: &str, fallback: Anchor) -> Anchor {
        name.parse().unwrap_or_else(|err: ParseAnchorError| {
            log::warn!("{}, using {}", err, fallback);
            fallback
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopCenter => "top-center",
            Anchor::TopRight => "top-right",
            Anchor::CenterLeft => "center-left",
            Anchor::Center => "center",
            Anchor::CenterRight => "center-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomCenter => "bottom-center",
            Anchor::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Anchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let anchor = match normalized.as_str() {
            "top-left" | "left-top" => Anchor::TopLeft,
            "top-center" | "center-top" | "top" => Anchor::TopCenter,
            "top-right" | "right-top" => Anchor::TopRight,
            "center-left" | "left-center" | "left" => Anchor::CenterLeft,
            "center" | "center-center" => Anchor::Center,
            "center-right" | "right-center" | "right" => Anchor::CenterRight,
            "bottom-left" | "left-bottom" => Anchor::BottomLeft,
            "bottom-center" | "center-bottom" | "bottom" => Anchor::BottomCenter,
            "bottom-right" | "right-bottom" => Anchor::BottomRight,
            _ => return Err(ParseAnchorError(s.to_string())),
        };
        Ok(anchor)
    }
}

impl From<String> for Anchor {
    fn from(name: String) -> Self {
        Anchor::parse_or(&name, Anchor::default())
    }
}

/// Where the toolbar starts: explicit coordinates or a named anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultPosition {
    Explicit(Point),
    Anchor(Anchor),
}

impl Default for DefaultPosition {
    fn default() -> Self {
        DefaultPosition::Anchor(Anchor::BottomCenter)
    }
}

impl From<Point> for DefaultPosition {
    fn from(point: Point) -> Self {
        DefaultPosition::Explicit(point)
    }
}

impl From<Anchor> for DefaultPosition {
    fn from(anchor: Anchor) -> Self {
        DefaultPosition::Anchor(anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size {
        width: 1000.0,
        height: 800.0,
    };
    const TOOLBAR: Size = Size {
        width: 200.0,
        height: 50.0,
    };

    #[test]
    fn test_resolve_all_anchors() {
        let expected = [
            (Anchor::TopLeft, Point::new(20.0, 20.0)),
            (Anchor::TopCenter, Point::new(400.0, 20.0)),
            (Anchor::TopRight, Point::new(780.0, 20.0)),
            (Anchor::CenterLeft, Point::new(20.0, 375.0)),
            (Anchor::Center, Point::new(400.0, 375.0)),
            (Anchor::CenterRight, Point::new(780.0, 375.0)),
            (Anchor::BottomLeft, Point::new(20.0, 730.0)),
            (Anchor::BottomCenter, Point::new(400.0, 730.0)),
            (Anchor::BottomRight, Point::new(780.0, 730.0)),
        ];

        for (anchor, point) in expected {
            assert_eq!(
                anchor.resolve(VIEWPORT, TOOLBAR, DEFAULT_EDGE_PADDING),
                point,
                "anchor {anchor}"
            );
        }
    }

    #[test]
    fn test_resolve_oversized_element_is_not_clamped() {
        let point = Anchor::BottomRight.resolve(Size::new(100.0, 100.0), TOOLBAR, 20.0);
        assert_eq!(point, Point::new(-120.0, 30.0));
    }

    #[test]
    fn test_parse_both_naming_conventions() {
        assert_eq!("left-center".parse(), Ok(Anchor::CenterLeft));
        assert_eq!("center-left".parse(), Ok(Anchor::CenterLeft));
        assert_eq!("right-center".parse(), Ok(Anchor::CenterRight));
        assert_eq!("center".parse(), Ok(Anchor::Center));
        assert_eq!(" Bottom_Right ".parse(), Ok(Anchor::BottomRight));
        for anchor in Anchor::ALL {
            assert_eq!(anchor.name().parse(), Ok(anchor));
        }
    }

    #[test]
    fn test_parse_unknown_anchor_falls_back() {
        assert_eq!(
            "middle-ish".parse::<Anchor>(),
            Err(ParseAnchorError("middle-ish".to_string()))
        );
        assert_eq!(
            Anchor::parse_or("middle-ish", Anchor::BottomCenter),
            Anchor::BottomCenter
        );
    }

    #[test]
    fn test_default_position_deserializes_coordinates_or_anchor() {
        let explicit: DefaultPosition = serde_json::from_str(r#"{"x": 50, "y": 50}"#).unwrap();
        assert_eq!(explicit, DefaultPosition::Explicit(Point::new(50.0, 50.0)));

        let anchored: DefaultPosition = serde_json::from_str(r#""left-center""#).unwrap();
        assert_eq!(anchored, DefaultPosition::Anchor(Anchor::CenterLeft));

        assert_eq!(
            DefaultPosition::default(),
            DefaultPosition::Anchor(Anchor::BottomCenter)
        );
    }

    #[test]
    fn test_deserialize_accepts_every_parsed_name() {
        for name in ["top", "left-top", "bottom_right", "center-center"] {
            let anchor: Anchor = serde_json::from_str(&format!("\"{name}\"")).unwrap();
            assert_eq!(Ok(anchor), name.parse::<Anchor>());
        }
    }

    #[test]
    fn test_deserialize_unknown_anchor_uses_default() {
        let anchor: Anchor = serde_json::from_str(r#""middle""#).unwrap();
        assert_eq!(anchor, Anchor::BottomCenter);

        let position: DefaultPosition = serde_json::from_str(r#""middle""#).unwrap();
        assert_eq!(position, DefaultPosition::Anchor(Anchor::BottomCenter));
    }

    #[test]
    fn test_serialize_uses_canonical_name() {
        assert_eq!(
            serde_json::to_string(&Anchor::CenterLeft).unwrap(),
            r#""center-left""#
        );
    }
}
