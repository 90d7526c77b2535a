// Wire messages exchanged with the game server, mirroring the contest
// RPC shapes (PascalCase field names). Missing fields default rather
// than fail: absent energy is 0, absent keys are false, absent owners
// are neutral, absent lists are empty. The engine must always get a
// decidable snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::board::{Lighthouse, Position};
use crate::engine::decision::Action;

/// Sent to the game server when joining.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewPlayer {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ServerAddress")]
    pub server_address: String,
}

/// The server's reply to a join: the id this bot plays as.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PlayerId {
    #[serde(rename = "PlayerID", default)]
    pub player_id: i32,
}

/// Acknowledgement returned for the initial-state message.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PlayerReady {
    #[serde(rename = "Ready")]
    pub ready: bool,
}

/// One visible lighthouse in a turn message.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LighthouseState {
    #[serde(rename = "Position", default)]
    pub position: Position,
    #[serde(rename = "Owner", default)]
    pub owner: i32,
    #[serde(rename = "Energy", default)]
    pub energy: i32,
    #[serde(rename = "HaveKey", default)]
    pub have_key: bool,
    #[serde(rename = "Connections", default)]
    pub connections: Vec<Position>,
}

impl From<LighthouseState> for Lighthouse {
    fn from(state: LighthouseState) -> Self {
        Lighthouse {
            position: state.position,
            owner: state.owner,
            energy: state.energy,
            have_key: state.have_key,
            connections: state.connections,
        }
    }
}

/// One visible cell and its collectable energy.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct CellState {
    #[serde(rename = "Position", default)]
    pub position: Position,
    #[serde(rename = "Energy", default)]
    pub energy: i32,
}

/// The full board snapshot delivered once before the first turn.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InitialState {
    #[serde(rename = "PlayerNum", default)]
    pub player_num: i32,
    #[serde(rename = "PlayerCount", default)]
    pub player_count: i32,
    #[serde(rename = "Position", default)]
    pub position: Position,
    #[serde(rename = "Map", default)]
    pub map: Vec<Vec<i32>>,
    #[serde(rename = "Lighthouses", default)]
    pub lighthouses: Vec<LighthouseState>,
}

/// The per-turn snapshot: everything the bot observes this turn.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewTurn {
    #[serde(rename = "Position", default)]
    pub position: Position,
    #[serde(rename = "Energy", default)]
    pub energy: i32,
    #[serde(rename = "HaveKey", default)]
    pub have_key: bool,
    #[serde(rename = "Lighthouses", default)]
    pub lighthouses: Vec<LighthouseState>,
    #[serde(rename = "Cells", default)]
    pub cells: Vec<CellState>,
}

impl NewTurn {
    /// Visible cell energies keyed by position.
    pub fn cell_energies(&self) -> HashMap<Position, i32> {
        self.cells.iter().map(|c| (c.position, c.energy)).collect()
    }
}

/// Action kind on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "MOVE")]
    Move,
    #[serde(rename = "ATTACK")]
    Attack,
    #[serde(rename = "CONNECT")]
    Connect,
    #[serde(rename = "PASS")]
    Pass,
}

/// The single action returned for a turn.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct NewAction {
    #[serde(rename = "Action")]
    pub action: ActionKind,
    #[serde(rename = "Destination")]
    pub destination: Position,
    #[serde(rename = "Energy", default)]
    pub energy: i32,
}

impl From<Action> for NewAction {
    fn from(action: Action) -> Self {
        match action {
            Action::Move(destination) => NewAction {
                action: ActionKind::Move,
                destination,
                energy: 0,
            },
            Action::Attack { position, energy } => NewAction {
                action: ActionKind::Attack,
                destination: position,
                energy,
            },
            Action::Connect(destination) => NewAction {
                action: ActionKind::Connect,
                destination,
                energy: 0,
            },
            Action::Pass(position) => NewAction {
                action: ActionKind::Pass,
                destination: position,
                energy: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_missing_fields_default() {
        let turn: NewTurn = serde_json::from_str(r#"{"Position": {"X": 3, "Y": 4}}"#).unwrap();
        assert_eq!(turn.position, Position::new(3, 4));
        assert_eq!(turn.energy, 0);
        assert!(!turn.have_key);
        assert!(turn.lighthouses.is_empty());
        assert!(turn.cells.is_empty());
    }

    #[test]
    fn test_lighthouse_missing_owner_is_neutral() {
        let lh: LighthouseState =
            serde_json::from_str(r#"{"Position": {"X": 1, "Y": 2}, "Energy": 7}"#).unwrap();
        assert_eq!(lh.owner, 0);
        assert!(!lh.have_key);
        assert!(lh.connections.is_empty());
    }

    #[test]
    fn test_action_serializes_with_wire_names() {
        let action = NewAction::from(Action::Attack {
            position: Position::new(5, 5),
            energy: 64,
        });
        let json = serde_json::to_value(action).unwrap();
        assert_eq!(json["Action"], "ATTACK");
        assert_eq!(json["Destination"]["X"], 5);
        assert_eq!(json["Energy"], 64);
    }

    #[test]
    fn test_move_action_roundtrip() {
        let action = NewAction::from(Action::Move(Position::new(2, 9)));
        let json = serde_json::to_string(&action).unwrap();
        let back: NewAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back.action, ActionKind::Move);
        assert_eq!(back.destination, Position::new(2, 9));
        assert_eq!(back.energy, 0);
    }

    #[test]
    fn test_cell_energies_map() {
        let turn = NewTurn {
            cells: vec![
                CellState {
                    position: Position::new(1, 1),
                    energy: 12,
                },
                CellState {
                    position: Position::new(2, 2),
                    energy: 0,
                },
            ],
            ..Default::default()
        };
        let energies = turn.cell_energies();
        assert_eq!(energies.get(&Position::new(1, 1)), Some(&12));
        assert_eq!(energies.get(&Position::new(9, 9)), None);
    }
}
