use tsp_core::logging::init_logger;
use tsp_core::{tour_cost, DistanceMatrix, DistanceOracle, LogLevel, Metric, PointSet, SolverConfig};

#[test]
fn tour_cost_includes_the_closing_edge() {
    let set = PointSet::from_json_str(
        r#"{
            "points": [
                {"label": "a", "x": 0.0, "y": 0.0},
                {"label": "b", "x": 0.0, "y": 1.0},
                {"label": "c", "x": 1.0, "y": 1.0},
                {"label": "d", "x": 1.0, "y": 0.0}
            ]
        }"#,
    )
    .unwrap();

    let open: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let mut closed = open.clone();
    closed.push("a".to_string());

    assert!((tour_cost(&set, &open) - 3.0).abs() < 1e-12);
    assert!((tour_cost(&set, &closed) - 4.0).abs() < 1e-12);
}

#[test]
fn great_circle_metric_from_json() {
    let set = PointSet::from_json_str(
        r#"{
            "metric": "great-circle",
            "points": [
                {"label": "a", "x": 0.0, "y": 0.0},
                {"label": "b", "x": 90.0, "y": 0.0}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(set.metric, Metric::GreatCircle);
    let quarter = std::f64::consts::FRAC_PI_2 * 6371.0;
    assert!((set.distance(&"a".into(), &"b".into()) - quarter).abs() < 1e-6);
}

#[test]
fn asymmetric_matrix_cost_follows_direction() {
    let m = DistanceMatrix::new(
        vec!["x".into(), "y".into(), "z".into()],
        vec![
            vec![0.0, 1.0, 10.0],
            vec![10.0, 0.0, 1.0],
            vec![1.0, 10.0, 0.0],
        ],
    )
    .unwrap();

    let forward: Vec<String> = ["x", "y", "z", "x"].iter().map(|s| s.to_string()).collect();
    let backward: Vec<String> = ["x", "z", "y", "x"].iter().map(|s| s.to_string()).collect();
    assert_eq!(tour_cost(&m, &forward), 3.0);
    assert_eq!(tour_cost(&m, &backward), 30.0);
    assert_eq!(m.labels().len(), 3);
}

#[test]
fn logger_installs_once() {
    let config = SolverConfig::default().with_log_level(LogLevel::Debug);
    assert!(init_logger(&config).is_ok());
    assert!(init_logger(&config).is_err());
    log::debug!("logger is live");
}
