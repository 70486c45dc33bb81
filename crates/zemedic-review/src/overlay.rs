//! Overlay marker placement.
//!
//! Findings carry their own relative coordinates when the service localized
//! them; otherwise placement falls back to a fixed anchor cycle keyed by the
//! finding's index, so a result renders the same way every time.

use zemedic_analysis::{Finding, OverlayCoordinates};

/// Fallback anchors (relative x, y) cycled by finding index.
const FALLBACK_ANCHORS: &[(f64, f64)] = &[
    (0.30, 0.35),
    (0.62, 0.55),
    (0.45, 0.72),
    (0.70, 0.28),
];

/// Radius used for fallback markers.
const FALLBACK_RADIUS: f64 = 0.05;

/// Marker position for a finding at the given detection index.
pub fn overlay_position(finding: &Finding, index: usize) -> OverlayCoordinates {
    finding.overlay.unwrap_or_else(|| {
        let (x, y) = FALLBACK_ANCHORS[index % FALLBACK_ANCHORS.len()];
        OverlayCoordinates {
            x,
            y,
            radius: FALLBACK_RADIUS,
        }
    })
}

/// Marker accent color, cycling by index as the dashboard hotspots do.
pub fn marker_color(index: usize) -> &'static str {
    match index % 3 {
        0 => "red",
        1 => "yellow",
        _ => "green",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zemedic_analysis::Finding;

    fn finding(overlay: Option<OverlayCoordinates>) -> Finding {
        Finding {
            name: "Pneumonia".to_string(),
            location: "Right Lower Lobe".to_string(),
            severity: None,
            confidence: 0.94,
            recommendation: String::new(),
            overlay,
        }
    }

    #[test]
    fn test_explicit_coordinates_win() {
        let coords = OverlayCoordinates {
            x: 0.62,
            y: 0.58,
            radius: 0.08,
        };
        assert_eq!(overlay_position(&finding(Some(coords)), 3), coords);
    }

    #[test]
    fn test_fallback_is_deterministic_by_index() {
        let f = finding(None);
        let first = overlay_position(&f, 0);
        assert_eq!(overlay_position(&f, 0), first);
        assert_eq!(first.radius, FALLBACK_RADIUS);

        // Indices wrap around the anchor table.
        assert_eq!(
            overlay_position(&f, FALLBACK_ANCHORS.len()),
            overlay_position(&f, 0)
        );
        assert_ne!(overlay_position(&f, 1), overlay_position(&f, 0));
    }

    #[test]
    fn test_marker_colors_cycle() {
        assert_eq!(marker_color(0), "red");
        assert_eq!(marker_color(1), "yellow");
        assert_eq!(marker_color(2), "green");
        assert_eq!(marker_color(3), "red");
    }
}
