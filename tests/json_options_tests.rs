use ecg_strip_rs::StripError;
use ecg_strip_rs::api::{StripEngine, StripEngineConfig, StripOptions};
use ecg_strip_rs::core::{Signal, Viewport};
use ecg_strip_rs::render::NullRenderer;

#[test]
fn options_contract_round_trips() {
    let options = StripOptions {
        rows: 4,
        show_grid: false,
    };

    let payload = options.to_json_contract_v1_pretty().expect("serialize");
    let decoded = StripOptions::from_json_compat_str(&payload).expect("parse");
    assert_eq!(decoded, options);
}

#[test]
fn bare_options_object_is_accepted() {
    let decoded =
        StripOptions::from_json_compat_str(r#"{"rows":3,"show_grid":true}"#).expect("parse");
    assert_eq!(decoded.rows, 3);
    assert!(decoded.show_grid);
}

#[test]
fn zero_rows_in_payload_are_rejected() {
    let err = StripOptions::from_json_compat_str(r#"{"rows":0,"show_grid":true}"#)
        .expect_err("must fail");
    assert!(matches!(err, StripError::InvalidRowCount { requested: 0 }));
}

#[test]
fn negative_rows_and_malformed_payloads_are_rejected() {
    let err = StripOptions::from_json_compat_str(r#"{"rows":-2,"show_grid":true}"#)
        .expect_err("must fail");
    assert!(matches!(err, StripError::InvalidData(_)));

    let err = StripOptions::from_json_compat_str("not json at all").expect_err("must fail");
    assert!(matches!(err, StripError::InvalidData(_)));
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let err = StripOptions::from_json_compat_str(
        r#"{"schema_version":99,"options":{"rows":1,"show_grid":true}}"#,
    )
    .expect_err("must fail");
    assert!(matches!(err, StripError::InvalidData(_)));
}

#[test]
fn applying_options_updates_layout_and_grid() {
    let signal = Signal::new((0..12).map(f64::from).collect()).expect("valid signal");
    let config = StripEngineConfig::new(Viewport::new(120, 90));
    let mut engine =
        StripEngine::new(NullRenderer::default(), config, signal).expect("engine init");

    engine
        .apply_options(StripOptions {
            rows: 3,
            show_grid: false,
        })
        .expect("apply options");

    assert_eq!(engine.rows(), 3);
    assert!(!engine.style().show_grid);
    // Row change re-derives scale_x from auto-fit: 120px over ceil(12/3) samples.
    assert_eq!(engine.scale_x(), 30.0);
    assert_eq!(engine.renderer().last_grid_line_count, 0);
}
