use serde_json::{json, Map, Value};
use traceattrs::{AttributeContainer, ColorBar, Line, Seed, StyleConfig, StyleError};

fn mapping(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("test value is an object")
}

#[test]
fn test_absent_seed_builds_empty_container() {
    let line = Line::construct(Seed::Absent, Map::new(), &StyleConfig::default()).unwrap();
    assert!(line.to_map().is_empty());
    assert!(!line.is_modified());

    let from_null = Line::from_value(Value::Null).unwrap();
    assert_eq!(from_null, line);
    assert_eq!(Line::default(), line);
}

#[test]
fn test_non_mapping_seed_is_invalid_argument() {
    let err = Line::from_value(json!([1, 2])).unwrap_err();
    match err {
        StyleError::InvalidArgument {
            container,
            expected,
            received,
        } => {
            assert_eq!(container, "Line");
            assert_eq!(expected, "a mapping or compatible container");
            assert_eq!(received, "array");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(matches!(
        ColorBar::try_from(json!("x")),
        Err(StyleError::InvalidArgument { .. })
    ));
}

#[test]
fn test_overrides_win_over_seed() {
    let line = Line::construct(
        Seed::Mapping(mapping(json!({"cmin": 0, "cmax": 10}))),
        mapping(json!({"cmax": 5, "cmin": null})),
        &StyleConfig::default(),
    )
    .unwrap();

    // A null override is treated as absent, so the seed value stays.
    assert_eq!(Value::Object(line.to_map()), json!({"cmax": 5, "cmin": 0}));
}

#[test]
fn test_unmatched_overrides_are_forwarded() {
    let line = Line::construct(
        Seed::Mapping(mapping(json!({"shape": "spline"}))),
        mapping(json!({"shape": "linear", "opacity": 0.5})),
        &StyleConfig::default(),
    )
    .unwrap();

    assert_eq!(line.get_attr("shape"), Some(json!("linear")));
    assert_eq!(line.get_attr("opacity"), Some(json!(0.5)));
}

#[test]
fn test_copy_from_container_is_deep_and_relocated() {
    let mut source = Line::from_map(mapping(json!({
        "showscale": true,
        "colorbar": {"tickfont": {"size": 9}},
        "extra_key": [1, 2]
    })))
    .unwrap();

    let copy = Line::construct(
        Seed::Container(&source),
        mapping(json!({"showscale": false})),
        &StyleConfig::default(),
    )
    .unwrap();

    assert_eq!(copy.showscale(), Some(false));
    assert_eq!(copy.get_attr("extra_key"), Some(json!([1, 2])));
    assert_eq!(
        copy.get_attr("colorbar"),
        Some(json!({"tickfont": {"size": 9}}))
    );
    assert!(!copy.is_modified());

    source
        .colorbar_mut()
        .unwrap()
        .tickfont_mut()
        .unwrap()
        .set_attr("size", 20)
        .unwrap();
    assert_eq!(
        copy.get_attr("colorbar"),
        Some(json!({"tickfont": {"size": 9}}))
    );
}

#[test]
fn test_copy_equals_reconstruction_from_export() {
    let source = Line::from_map(mapping(json!({
        "color": ["red", "#00ff00", "hsl(240, 100%, 50%)"],
        "colorbar": {"tickformatstops": [{"enabled": true}, {"value": "%b"}]},
        "custom": {"nested": true}
    })))
    .unwrap();

    let copied = Line::copy_of(&source);
    let rebuilt = Line::from_map(source.to_map()).unwrap();
    assert_eq!(copied, rebuilt);
}

#[test]
fn test_invalid_seed_fails_by_default() {
    let err = Line::from_map(mapping(json!({"showscale": true, "cmin": "low"}))).unwrap_err();
    let StyleError::Validation(err) = err else {
        panic!("expected a validation error");
    };
    assert_eq!(err.path, "parcoords.line.cmin");
}

#[test]
fn test_skip_invalid_keeps_good_values() {
    let line = Line::construct(
        Seed::Mapping(mapping(json!({
            "showscale": true,
            "cmin": "low",
            "colorbar": {"x": 99, "y": 0.5},
            "colorscale": [[0.5, "red"], [1, "blue"]]
        }))),
        Map::new(),
        &StyleConfig::lenient(),
    )
    .unwrap();

    assert_eq!(
        Value::Object(line.to_map()),
        json!({"colorbar": {"y": 0.5}, "showscale": true})
    );
}

#[test]
fn test_skip_invalid_still_rejects_non_mapping_seed() {
    let result = Line::construct(
        Seed::Value(json!(3)),
        Map::new(),
        &StyleConfig::lenient(),
    );
    assert!(matches!(result, Err(StyleError::InvalidArgument { .. })));
}

#[test]
fn test_set_attr_fails_fast_after_lenient_construction() {
    let mut line = Line::construct(Seed::Absent, Map::new(), &StyleConfig::lenient()).unwrap();
    assert!(line.set_attr("cmin", "low").is_err());
}

#[test]
fn test_warn_unknown_does_not_change_behavior() {
    let config = StyleConfig {
        warn_unknown: true,
        ..StyleConfig::default()
    };
    let line = Line::construct(
        Seed::Mapping(mapping(json!({"notarealattr": 1, "ghost": null}))),
        Map::new(),
        &config,
    )
    .unwrap();

    assert_eq!(line.get_attr("notarealattr"), Some(json!(1)));
    // Forwarded nulls are dropped.
    assert_eq!(line.get_attr("ghost"), None);
}
