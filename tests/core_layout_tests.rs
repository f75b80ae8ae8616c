use approx::assert_relative_eq;
use ecg_strip_rs::core::{LayoutConfig, Signal, StripLayout, Viewport, compute_fit};

fn ramp_signal() -> Signal {
    Signal::new((0..10).map(f64::from).collect()).expect("valid signal")
}

fn fitted_config(signal: &Signal, rows: u32, viewport: Viewport) -> LayoutConfig {
    let fit = compute_fit(signal, rows, viewport).expect("fit");
    LayoutConfig {
        rows,
        scale_x: fit.scale_x,
        scale_y: fit.scale_y,
        pan_y: 0.0,
    }
}

#[test]
fn row_partition_covers_signal_exactly() {
    let signal = ramp_signal();
    let viewport = Viewport::new(100, 100);
    let layout = StripLayout::new(&signal, fitted_config(&signal, 3, viewport), viewport);

    let spans = layout.row_spans();
    assert_eq!(spans.len(), 3);
    assert_eq!(spans[0].start, 0);
    assert_eq!(spans.last().expect("spans").end, signal.len());
    for pair in spans.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    // Only the last row may fall short of the allotment.
    assert_eq!(spans[0].len(), 4);
    assert_eq!(spans[1].len(), 4);
    assert_eq!(spans[2].len(), 2);
}

#[test]
fn surplus_rows_beyond_data_are_empty() {
    let signal = Signal::new(vec![1.0, 2.0, 3.0]).expect("valid signal");
    let viewport = Viewport::new(100, 100);
    let layout = StripLayout::new(&signal, fitted_config(&signal, 5, viewport), viewport);

    let spans = layout.row_spans();
    assert_eq!(spans[2].end, 3);
    assert!(spans[3].is_empty());
    assert!(spans[4].is_empty());
    assert_eq!(layout.row_points(4).len(), 0);
}

#[test]
fn single_row_reference_coordinates() {
    let signal = ramp_signal();
    let viewport = Viewport::new(100, 100);
    let layout = StripLayout::new(&signal, fitted_config(&signal, 1, viewport), viewport);

    assert_eq!(layout.points_per_row(), 10);
    assert_eq!(layout.row_height(), 100.0);
    assert_eq!(layout.row_center_y(0), 50.0);

    // Sample 0 (value 0, midpoint 4.5) sits 4.5 amplitude units below center.
    let (x, y) = layout.row_points(0).next().expect("first point");
    assert_eq!(x, 0.0);
    assert_relative_eq!(y, 50.0 + 4.5 * (100.0 / 13.5), epsilon = 1e-9);
}

#[test]
fn second_row_restarts_x_at_row_origin() {
    let signal = ramp_signal();
    let viewport = Viewport::new(100, 100);
    let layout = StripLayout::new(&signal, fitted_config(&signal, 2, viewport), viewport);

    let span = layout.row_span(1);
    assert_eq!(span.start, 5);
    assert_eq!(span.end, 10);
    assert_eq!(layout.row_center_y(1), 75.0);

    let (x, _) = layout.row_points(1).next().expect("first point of row 1");
    assert_eq!(x, 0.0);
}

#[test]
fn midpoint_sample_lands_on_row_center() {
    let signal = Signal::new(vec![0.0, 4.5, 9.0]).expect("valid signal");
    let viewport = Viewport::new(100, 100);
    let layout = StripLayout::new(&signal, fitted_config(&signal, 1, viewport), viewport);

    let (_, y) = layout.row_points(0).nth(1).expect("midpoint sample");
    assert_relative_eq!(y, layout.row_center_y(0), epsilon = 1e-9);
}

#[test]
fn pan_offset_shifts_every_point_vertically() {
    let signal = ramp_signal();
    let viewport = Viewport::new(100, 100);
    let mut config = fitted_config(&signal, 2, viewport);

    let layout = StripLayout::new(&signal, config, viewport);
    let baseline: Vec<(f64, f64)> = (0..2).flat_map(|row| layout.row_points(row)).collect();

    config.pan_y = 12.5;
    let panned_layout = StripLayout::new(&signal, config, viewport);
    let panned: Vec<(f64, f64)> = (0..2).flat_map(|row| panned_layout.row_points(row)).collect();

    assert_eq!(baseline.len(), panned.len());
    for (&(x0, y0), &(x1, y1)) in baseline.iter().zip(&panned) {
        assert_eq!(x0, x1);
        assert_relative_eq!(y1, y0 + 12.5, epsilon = 1e-12);
    }
}

#[test]
fn flat_signal_renders_on_row_center_lines() {
    let signal = Signal::new(vec![5.0, 5.0, 5.0, 5.0]).expect("valid signal");
    let viewport = Viewport::new(100, 100);
    let layout = StripLayout::new(&signal, fitted_config(&signal, 2, viewport), viewport);

    for row in 0..2 {
        for (_, y) in layout.row_points(row) {
            assert_relative_eq!(y, layout.row_center_y(row), epsilon = 1e-12);
        }
    }
}

#[test]
fn row_points_iterator_is_restartable() {
    let signal = ramp_signal();
    let viewport = Viewport::new(100, 100);
    let layout = StripLayout::new(&signal, fitted_config(&signal, 2, viewport), viewport);

    let first_pass: Vec<(f64, f64)> = layout.row_points(0).collect();
    let second_pass: Vec<(f64, f64)> = layout.row_points(0).collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(layout.row_points(0).len(), 5);
}
