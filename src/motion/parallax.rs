use yew::prelude::*;
use yew_hooks::prelude::use_window_scroll;

/// Normalized reading position: 0 at the top of the document, 1 at the bottom.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Background vertical offset in percent for a given scroll progress.
pub fn background_offset(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0) * 100.0
}

fn document_metrics() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    Some((root.scroll_height() as f64, viewport))
}

/// Background offset in percent, recomputed on every window scroll.
#[hook]
pub fn use_parallax_offset() -> f64 {
    let (_, scroll_y) = use_window_scroll();
    match document_metrics() {
        Some((document_height, viewport_height)) => {
            background_offset(scroll_progress(scroll_y, document_height, viewport_height))
        }
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_zero_and_full() {
        assert_eq!(background_offset(0.0), 0.0);
        assert_eq!(background_offset(1.0), 100.0);
    }

    #[test]
    fn halfway_down_is_half_offset() {
        // 3000px document, 1000px viewport: 1000px scrolled is half of the 2000px range
        let progress = scroll_progress(1000.0, 3000.0, 1000.0);
        assert_eq!(progress, 0.5);
        assert_eq!(background_offset(progress), 50.0);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(background_offset(-0.3), 0.0);
        assert_eq!(background_offset(1.7), 100.0);
        assert_eq!(background_offset(f64::NAN), 0.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2600.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_documents_do_not_scroll() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn offset_is_monotonic_and_linear() {
        let samples: Vec<f64> = (0..=10).map(|i| background_offset(i as f64 / 10.0)).collect();
        for pair in samples.windows(2) {
            assert!(pair[1] >= pair[0]);
            assert!((pair[1] - pair[0] - 10.0).abs() < 1e-9);
        }
    }
}
