use ecg_strip_rs::core::{LayoutConfig, Signal, StripLayout, Viewport, compute_fit, points_per_row};
use proptest::prelude::*;

proptest! {
    #[test]
    fn row_partition_is_exact_and_gap_free(
        sample_count in 1usize..5000,
        rows in 1u32..64
    ) {
        let samples = vec![0.0; sample_count];
        let signal = Signal::new(samples).expect("valid signal");
        let viewport = Viewport::new(1920, 1080);
        let config = LayoutConfig { rows, scale_x: 1.0, scale_y: 1.0, pan_y: 0.0 };
        let layout = StripLayout::new(&signal, config, viewport);

        let spans = layout.row_spans();
        let allotment = points_per_row(sample_count, rows);

        prop_assert_eq!(spans.len(), rows as usize);
        prop_assert_eq!(spans[0].start, 0);
        prop_assert_eq!(spans.last().expect("spans").end, sample_count);
        for pair in spans.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }

        let total: usize = spans.iter().map(|span| span.len()).sum();
        prop_assert_eq!(total, sample_count);

        // Every non-empty row before the last non-empty one gets the full allotment.
        let last_non_empty = spans.iter().rposition(|span| !span.is_empty()).expect("data");
        for span in &spans[..last_non_empty] {
            prop_assert_eq!(span.len(), allotment);
        }
    }

    #[test]
    fn auto_fit_scales_are_always_positive_and_finite(
        base in -1_000_000.0f64..1_000_000.0,
        step in -100.0f64..100.0,
        sample_count in 1usize..2000,
        rows in 1u32..32
    ) {
        let samples: Vec<f64> = (0..sample_count).map(|i| base + step * i as f64).collect();
        let signal = Signal::new(samples).expect("valid signal");

        let fit = compute_fit(&signal, rows, Viewport::new(1920, 1080)).expect("fit");
        prop_assert!(fit.scale_x.is_finite() && fit.scale_x > 0.0);
        prop_assert!(fit.scale_y.is_finite() && fit.scale_y > 0.0);
    }

    #[test]
    fn midpoint_sample_maps_to_row_center(
        low in -10_000.0f64..10_000.0,
        span in 0.001f64..10_000.0,
        pan_y in -500.0f64..500.0
    ) {
        let high = low + span;
        let midpoint = (low + high) / 2.0;
        let signal = Signal::new(vec![low, midpoint, high]).expect("valid signal");
        let viewport = Viewport::new(1000, 600);

        let fit = compute_fit(&signal, 1, viewport).expect("fit");
        let config = LayoutConfig { rows: 1, scale_x: fit.scale_x, scale_y: fit.scale_y, pan_y };
        let layout = StripLayout::new(&signal, config, viewport);

        let (_, y) = layout.row_points(0).nth(1).expect("midpoint sample");
        prop_assert!((y - (layout.row_center_y(0) + pan_y)).abs() <= 1e-7);
    }
}
