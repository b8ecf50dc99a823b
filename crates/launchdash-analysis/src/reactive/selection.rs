//! Normalizing selections reported by the client.

use launchdash_core::config::SliderConfig;
use launchdash_core::Selection;

/// Clamp the payload range into the control's display bounds. The site value
/// is kept verbatim; an unknown site is a legal selection. An inverted range
/// stays inverted and still selects nothing.
pub fn normalize_selection(selection: Selection, slider: &SliderConfig) -> Selection {
    let payload_range = selection
        .payload_range
        .clamp_to(slider.effective_min(), slider.effective_max());
    Selection {
        site: selection.site,
        payload_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdash_core::{PayloadRange, SiteFilter};

    #[test]
    fn test_clamps_range_keeps_site() {
        let selection = Selection::new(
            SiteFilter::from_value("Mars Base"),
            PayloadRange::new(-1000.0, 15_000.0),
        );
        let normalized = normalize_selection(selection, &SliderConfig::default());
        assert_eq!(normalized.site, SiteFilter::from_value("Mars Base"));
        assert_eq!(normalized.payload_range, PayloadRange::new(0.0, 10_000.0));
    }

    #[test]
    fn test_inverted_range_outside_bounds_stays_empty() {
        for (low, high) in [(-50.0, -100.0), (12_000.0, 11_000.0)] {
            let selection = Selection::new(SiteFilter::All, PayloadRange::new(low, high));
            let normalized = normalize_selection(selection, &SliderConfig::default());
            assert!(normalized.payload_range.is_inverted());
            assert_eq!(normalized.payload_range, PayloadRange::new(low, high));
        }
    }
}
