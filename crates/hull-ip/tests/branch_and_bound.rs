use hull_core::errors::HullError;
use hull_core::{ObjectiveSense, OptimizationBackend};
use hull_ip::{BinaryProgram, BranchConfig};
use proptest::prelude::*;

fn values(program: &BinaryProgram, count: usize) -> Vec<f64> {
    (0..count)
        .map(|index| program.variable_value(index).unwrap())
        .collect()
}

#[test]
fn minimum_vertex_cover_of_a_triangle() {
    let mut program = BinaryProgram::default();
    let vars = program.add_binary_variables(3, 1.0).unwrap();
    assert_eq!(vars, 0..3);
    for (u, v) in [(0, 1), (1, 2), (0, 2)] {
        program
            .add_linear_constraint(&[(u, 1.0), (v, 1.0)], Some(1.0), None)
            .unwrap();
    }
    let optimum = program.solve().unwrap();
    assert_eq!(optimum, 2.0);
    assert_eq!(program.objective_value().unwrap(), 2.0);
    assert_eq!(values(&program, 3).iter().sum::<f64>(), 2.0);
    let chosen = program.solution_values().unwrap();
    assert_eq!(chosen.len(), 3);
    assert_eq!(chosen.iter().filter(|value| **value).count(), 2);
}

#[test]
fn constraints_persist_between_solves() {
    let mut program = BinaryProgram::default();
    program.add_binary_variables(4, 1.0).unwrap();
    program.set_objective_sense(ObjectiveSense::Minimize);
    program
        .add_linear_constraint(&[(0, 1.0), (1, 1.0)], Some(1.0), None)
        .unwrap();
    assert_eq!(program.solve().unwrap(), 1.0);

    program
        .add_linear_constraint(&[(2, 1.0), (3, 1.0)], Some(1.0), None)
        .unwrap();
    assert_eq!(program.num_constraints(), 2);
    assert_eq!(program.solve().unwrap(), 2.0);
    let chosen = values(&program, 4);
    assert!(chosen[0] + chosen[1] >= 1.0);
    assert!(chosen[2] + chosen[3] >= 1.0);
}

#[test]
fn maximize_respects_capacity() {
    let mut program = BinaryProgram::default();
    program.add_binary_variables(5, 1.0).unwrap();
    program.set_objective_sense(ObjectiveSense::Maximize);
    let terms: Vec<_> = (0..5).map(|i| (i, 1.0)).collect();
    program
        .add_linear_constraint(&terms, None, Some(3.0))
        .unwrap();
    assert_eq!(program.solve().unwrap(), 3.0);
}

#[test]
fn infeasible_model_is_reported() {
    let mut program = BinaryProgram::default();
    program.add_binary_variables(2, 1.0).unwrap();
    program
        .add_linear_constraint(&[(0, 1.0), (1, 1.0)], Some(3.0), None)
        .unwrap();
    let err = program.solve().unwrap_err();
    assert!(matches!(&err, HullError::Solver(info) if info.code == "infeasible"));
    assert_eq!(program.objective_value().unwrap_err().code(), "no-solution");
}

#[test]
fn node_limit_is_reported() {
    let mut program = BinaryProgram::new(BranchConfig {
        node_limit: Some(1),
        ..BranchConfig::default()
    });
    program.add_binary_variables(6, 1.0).unwrap();
    program
        .add_linear_constraint(&[(0, 1.0), (5, 1.0)], Some(1.0), None)
        .unwrap();
    let err = program.solve().unwrap_err();
    assert_eq!(err.code(), "node-limit");
    assert_eq!(
        err.info().hint.as_deref(),
        Some("raise BranchConfig::node_limit")
    );
    assert!(err.info().context.contains_key("nodes"));
    assert!(program.solution_values().is_none());
    assert_eq!(program.variable_value(0).unwrap_err().code(), "no-solution");
}

#[test]
fn invalid_rows_are_rejected() {
    let mut program = BinaryProgram::default();
    program.add_binary_variables(2, 1.0).unwrap();
    assert_eq!(
        program
            .add_linear_constraint(&[(7, 1.0)], Some(1.0), None)
            .unwrap_err()
            .code(),
        "unknown-variable"
    );
    assert_eq!(
        program
            .add_linear_constraint(&[(0, 1.0)], Some(2.0), Some(1.0))
            .unwrap_err()
            .code(),
        "empty-range"
    );
}

#[test]
fn config_defaults_fill_missing_fields() {
    let config: BranchConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, BranchConfig::default());
    let config: BranchConfig = serde_json::from_str(r#"{"node_limit": 10}"#).unwrap();
    assert_eq!(config.node_limit, Some(10));
}

fn brute_force_cover(n: usize, rows: &[Vec<usize>]) -> Option<usize> {
    (0u32..(1 << n))
        .filter(|mask| {
            rows.iter()
                .all(|row| row.iter().any(|index| mask & (1 << index) != 0))
        })
        .map(|mask| mask.count_ones() as usize)
        .min()
}

proptest! {
    #[test]
    fn set_cover_matches_enumeration(
        n in 1usize..8,
        raw_rows in proptest::collection::vec(proptest::collection::vec(0usize..8, 1..4), 0..6),
    ) {
        let rows: Vec<Vec<usize>> = raw_rows
            .into_iter()
            .map(|row| row.into_iter().map(|index| index % n).collect())
            .collect();
        let mut program = BinaryProgram::default();
        program.add_binary_variables(n, 1.0).unwrap();
        for row in &rows {
            let terms: Vec<_> = row.iter().map(|index| (*index, 1.0)).collect();
            program.add_linear_constraint(&terms, Some(1.0), None).unwrap();
        }
        let expected = brute_force_cover(n, &rows).unwrap();
        prop_assert_eq!(program.solve().unwrap(), expected as f64);
    }
}
