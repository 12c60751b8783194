use knap_challenges::knapsack::Solution;
use knap_structs::config::{RunSettings, SolverKind};
use knap_structs::core::{RunReport, SearchStats, SolverReport};
use knap_utils::{dejsonify, jsonify};

#[test]
fn test_default_settings() {
    let settings = RunSettings::default();
    assert_eq!(
        settings.solvers,
        vec![
            SolverKind::Greedy,
            SolverKind::BranchAndBound,
            SolverKind::Dynamic
        ]
    );
    assert!(settings.hyperparameters.is_none());
}

#[test]
fn test_settings_from_json() {
    let settings: RunSettings =
        r#"{"solvers": ["branch_and_bound"], "hyperparameters": {"warm_start": true}}"#
            .parse()
            .unwrap();
    assert_eq!(settings.solvers, vec![SolverKind::BranchAndBound]);
    assert_eq!(
        settings
            .hyperparameters
            .unwrap()
            .get("warm_start")
            .and_then(|v| v.as_bool()),
        Some(true)
    );
}

#[test]
fn test_settings_missing_fields_use_defaults() {
    let settings: RunSettings = "{}".parse().unwrap();
    assert_eq!(settings, RunSettings::default());
}

#[test]
fn test_settings_unknown_solver() {
    assert!(r#"{"solvers": ["simplex"]}"#.parse::<RunSettings>().is_err());
}

#[test]
fn test_solver_kind_names() {
    for kind in SolverKind::ALL {
        assert_eq!(kind.name().parse::<SolverKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
    assert!("dp".parse::<SolverKind>().is_err());
    assert!(!SolverKind::Greedy.is_exact());
    assert!(SolverKind::Dynamic.is_exact());
    assert!(SolverKind::BranchAndBound.is_exact());
}

#[test]
fn test_run_report_json() {
    let report = RunReport {
        num_items: 3,
        capacity: 50,
        solution: Solution {
            total_value: 220,
            is_optimal: true,
            taken: vec![1, 2],
        },
        solvers: vec![
            SolverReport {
                solver: SolverKind::Greedy,
                total_value: 160,
                is_optimal: false,
                num_taken: 2,
                elapsed_ms: 0.0,
                search_stats: None,
            },
            SolverReport {
                solver: SolverKind::BranchAndBound,
                total_value: 220,
                is_optimal: true,
                num_taken: 2,
                elapsed_ms: 0.0,
                search_stats: Some(SearchStats::default()),
            },
        ],
    };
    let json = jsonify(&report).unwrap();
    assert!(json.contains(r#""solver":"branch_and_bound""#));
    assert!(!json.contains(r#""search_stats":null"#));
    assert_eq!(dejsonify::<RunReport>(&json).unwrap(), report);
    assert_eq!(report.submission(), "220 1\n0 1 1");
}
