//! Metrics model and rendering tests
//!
//! Tests that verify metric families keep unique label tuples and render to the
//! Prometheus text format.

use smartzone_exporter::metrics::{render, MetricFamily, MetricKind};

const ZONE_LABELS: &[&str] = &["zone_name", "zone_id"];

#[test]
fn test_add_sample_appends_in_order() {
    // Given: An empty gauge family
    let mut family = MetricFamily::gauge("smartzone_zone_total_aps", "Total", ZONE_LABELS);

    // When: Adding two distinct label tuples
    family.add_sample(vec!["B".into(), "2".into()], 5.0);
    family.add_sample(vec!["A".into(), "1".into()], 3.0);

    // Then: Samples keep insertion order
    let names: Vec<&str> = family
        .samples()
        .iter()
        .map(|s| s.label_values[0].as_str())
        .collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_repeated_label_tuple_overwrites_in_place() {
    // Given: A family with two samples
    let mut family = MetricFamily::gauge("smartzone_zone_total_aps", "Total", ZONE_LABELS);
    family.add_sample(vec!["A".into(), "1".into()], 1.0);
    family.add_sample(vec!["B".into(), "2".into()], 2.0);

    // When: Adding the first tuple again
    family.add_sample(vec!["A".into(), "1".into()], 7.0);

    // Then: The sample count is unchanged and the value replaced at its position
    assert_eq!(family.samples().len(), 2);
    assert_eq!(family.samples()[0].value, 7.0);
    assert_eq!(family.value_of(&["A", "1"]), Some(7.0));
}

#[test]
fn test_value_of_missing_tuple() {
    let family = MetricFamily::gauge("smartzone_zone_total_aps", "Total", ZONE_LABELS);

    assert!(family.is_empty());
    assert_eq!(family.value_of(&["A", "1"]), None);
}

#[test]
fn test_render_gauge() {
    // Given: A gauge with one sample
    let mut family = MetricFamily::gauge(
        "smartzone_zone_total_aps",
        "Total number of APs in zone",
        ZONE_LABELS,
    );
    family.add_sample(vec!["Campus".into(), "z1".into()], 3.0);

    // When: Rendering
    let output = render(&[family]).unwrap();

    // Then: Help, type and sample lines are present
    assert!(output.contains("# HELP smartzone_zone_total_aps Total number of APs in zone"));
    assert!(output.contains("# TYPE smartzone_zone_total_aps gauge"));
    let line = output
        .lines()
        .find(|l| l.starts_with("smartzone_zone_total_aps{"))
        .expect("sample line");
    assert!(line.contains(r#"zone_name="Campus""#));
    assert!(line.contains(r#"zone_id="z1""#));
    assert!(line.ends_with(" 3"));
}

#[test]
fn test_render_counter() {
    let mut family = MetricFamily::counter(
        "smartzone_controller_uptime_seconds_total",
        "Controller uptime in seconds",
        &["id"],
    );
    family.add_sample(vec!["c1".into()], 86400.0);

    let output = render(&[family]).unwrap();

    assert!(output.contains("# TYPE smartzone_controller_uptime_seconds_total counter"));
    assert!(output.contains(r#"smartzone_controller_uptime_seconds_total{id="c1"} 86400"#));
}

#[test]
fn test_negative_counter_renders_as_zero() {
    let mut family = MetricFamily::counter("test_total", "test", &["id"]);
    family.add_sample(vec!["c1".into()], -5.0);

    let output = render(&[family]).unwrap();

    assert!(output.contains(r#"test_total{id="c1"} 0"#));
}

#[test]
fn test_info_renders_as_gauge() {
    let mut family = MetricFamily::info(
        "api_compatibility_info",
        "Compatibility with exporter and controller",
        &["compatible"],
    );
    family.add_sample(vec!["True".into()], 1.0);

    assert_eq!(family.kind, MetricKind::Info);
    let output = render(&[family]).unwrap();
    assert!(output.contains("# TYPE api_compatibility_info gauge"));
    assert!(output.contains(r#"api_compatibility_info{compatible="True"} 1"#));
}

#[test]
fn test_render_escapes_label_values() {
    let mut family = MetricFamily::gauge("test_gauge", "test", &["name"]);
    family.add_sample(vec!["say \"hi\"\nback\\slash".into()], 1.0);

    let output = render(&[family]).unwrap();

    assert!(output.contains(r#"test_gauge{name="say \"hi\"\nback\\slash"} 1"#));
}

#[test]
fn test_render_nothing() {
    let output = render(&[]).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_render_is_deterministic() {
    // Given: The same families built twice
    let build = || {
        let mut family = MetricFamily::gauge("test_gauge", "test", &["name"]);
        family.add_sample(vec!["b".into()], 1.0);
        family.add_sample(vec!["a".into()], 2.0);
        vec![family]
    };

    // Then: Rendering yields identical text
    assert_eq!(render(&build()).unwrap(), render(&build()).unwrap());
    assert_eq!(build(), build());
}
