#![cfg(feature = "serde")]

use pellet_core::{CellIndex, GameLoop, GameStatus, GameSummary, Grid};

#[test]
fn summary_serializes_status_with_numeric_cell_index() {
    let mut game = GameLoop::new("PG-- G--- ---- ---F".parse().unwrap());
    let summary = game.run(|_: &pellet_core::StepReport| {});

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["status"]["LostToHazard"]["cell"], 4);
    assert_eq!(json["total_utility"], -9999);
    assert_eq!(json["grid"]["cells"][0], "Agent");

    let back: GameSummary = serde_json::from_value(json).unwrap();
    assert_eq!(
        back.status,
        GameStatus::LostToHazard {
            cell: CellIndex::new(4).unwrap()
        }
    );
}

#[test]
fn out_of_board_index_is_rejected() {
    let result: Result<CellIndex, _> = serde_json::from_str("16");
    assert!(result.is_err());
}

#[test]
fn grid_without_an_agent_is_rejected() {
    let cells = vec!["Food"; 16];
    let result: Result<Grid, _> = serde_json::from_value(serde_json::json!({ "cells": cells }));
    let message = result.unwrap_err().to_string();
    assert!(message.contains("agent"), "{message}");
}

#[test]
fn grid_with_two_agents_is_rejected() {
    let mut cells = vec!["Empty"; 16];
    cells[0] = "Agent";
    cells[9] = "Agent";
    let result: Result<Grid, _> = serde_json::from_value(serde_json::json!({ "cells": cells }));
    assert!(result.is_err());
}

#[test]
fn serialized_grid_round_trips_through_validation() {
    let grid: Grid = "PF-- G--- ---C ----".parse().unwrap();
    let back: Grid = serde_json::from_str(&serde_json::to_string(&grid).unwrap()).unwrap();
    assert_eq!(back, grid);
    assert_eq!(GameLoop::new(back).agent().position, CellIndex::ORIGIN);
}
