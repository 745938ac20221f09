//! Request and response messages.
//!
//! A request carries one decision point: the phase tag, per-territory owners
//! and army counts, the seating, and optionally the legal actions and the
//! remaining time. Territories inside a request may be given by identifier
//! or by name; they are resolved against the board before scoring. A
//! response carries either the chosen action, always by identifier, or the
//! error that prevented a choice.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::{Action, Board, Engagement, GameState, Phase, PlayerId, TerritoryRef, Transfer};
use crate::error::{AgentError, Result};

/// An engagement as written on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementSpec {
    pub from: TerritoryRef,
    pub to: TerritoryRef,
}

impl EngagementSpec {
    pub fn resolve(&self, board: &Board) -> Result<Engagement> {
        Ok(Engagement {
            from: board.resolve(&self.from)?,
            to: board.resolve(&self.to)?,
        })
    }
}

impl From<Engagement> for EngagementSpec {
    fn from(e: Engagement) -> Self {
        EngagementSpec {
            from: e.from.into(),
            to: e.to.into(),
        }
    }
}

/// A transfer as written on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSpec {
    pub from: TerritoryRef,
    pub to: TerritoryRef,
    pub troops: u32,
}

/// An action as written on the wire; same shape as `Action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActionSpec {
    Assign { to: TerritoryRef },
    Place { to: TerritoryRef },
    TurnInCards { cards: Option<[usize; 3]> },
    Attack { engagement: Option<EngagementSpec> },
    Occupy {
        from: TerritoryRef,
        to: TerritoryRef,
        troops: u32,
    },
    Fortify { transfer: Option<TransferSpec> },
}

impl ActionSpec {
    /// Resolves every territory reference against `board`.
    pub fn resolve(&self, board: &Board) -> Result<Action> {
        let action = match self {
            ActionSpec::Assign { to } => Action::Assign {
                to: board.resolve(to)?,
            },
            ActionSpec::Place { to } => Action::Place {
                to: board.resolve(to)?,
            },
            ActionSpec::TurnInCards { cards } => Action::TurnInCards { cards: *cards },
            ActionSpec::Attack { engagement } => Action::Attack {
                engagement: engagement.as_ref().map(|e| e.resolve(board)).transpose()?,
            },
            ActionSpec::Occupy { from, to, troops } => Action::Occupy {
                from: board.resolve(from)?,
                to: board.resolve(to)?,
                troops: *troops,
            },
            ActionSpec::Fortify { transfer } => Action::Fortify {
                transfer: match transfer {
                    Some(t) => Some(Transfer {
                        from: board.resolve(&t.from)?,
                        to: board.resolve(&t.to)?,
                        troops: t.troops,
                    }),
                    None => None,
                },
            },
        };
        Ok(action)
    }
}

impl From<Action> for ActionSpec {
    fn from(action: Action) -> Self {
        match action {
            Action::Assign { to } => ActionSpec::Assign { to: to.into() },
            Action::Place { to } => ActionSpec::Place { to: to.into() },
            Action::TurnInCards { cards } => ActionSpec::TurnInCards { cards },
            Action::Attack { engagement } => ActionSpec::Attack {
                engagement: engagement.map(EngagementSpec::from),
            },
            Action::Occupy { from, to, troops } => ActionSpec::Occupy {
                from: from.into(),
                to: to.into(),
                troops,
            },
            Action::Fortify { transfer } => ActionSpec::Fortify {
                transfer: transfer.map(|t| TransferSpec {
                    from: t.from.into(),
                    to: t.to.into(),
                    troops: t.troops,
                }),
            },
        }
    }
}

/// One decision request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Phase tag, parsed with `Phase::from_str`.
    pub turn_type: String,
    pub owners: Vec<Option<PlayerId>>,
    pub armies: Vec<u32>,
    pub current_player: PlayerId,
    pub players: Vec<PlayerId>,
    #[serde(default)]
    pub occupying: Option<EngagementSpec>,
    /// Legal actions supplied by the caller. Generated from the rules when
    /// absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ActionSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_left_ms: Option<u64>,
}

impl Request {
    pub fn phase(&self) -> Result<Phase> {
        self.turn_type.parse()
    }

    pub fn budget(&self) -> Option<Duration> {
        self.time_left_ms.map(Duration::from_millis)
    }

    /// Builds the game state this request describes.
    pub fn to_state(&self, board: Arc<Board>) -> Result<GameState> {
        let phase = self.phase()?;
        let occupying = self
            .occupying
            .as_ref()
            .map(|e| e.resolve(&board))
            .transpose()?;
        GameState::from_parts(
            board,
            phase,
            self.owners.clone(),
            self.armies.clone(),
            self.current_player,
            self.players.clone(),
            occupying,
        )
    }

    /// Resolves the supplied actions, if any, against `board`.
    pub fn resolve_actions(&self, board: &Board) -> Result<Option<Vec<Action>>> {
        self.actions
            .as_ref()
            .map(|specs| specs.iter().map(|a| a.resolve(board)).collect())
            .transpose()
    }
}

/// One decision response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Action { action: Action },
    Error { error: String, kind: String },
}

impl Response {
    pub fn error(err: &AgentError) -> Self {
        Response::Error {
            error: err.to_string(),
            kind: err.kind().to_string(),
        }
    }

    /// Serializes the response as a single JSON line.
    pub fn to_line(&self) -> String {
        match serde_json::to_string(self) {
            Ok(line) => line,
            Err(e) => format!(
                r#"{{"error":{:?},"kind":"MalformedRequest"}}"#,
                e.to_string()
            ),
        }
    }
}

impl From<Result<Action>> for Response {
    fn from(result: Result<Action>) -> Self {
        match result {
            Ok(action) => Response::Action { action },
            Err(e) => Response::error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::classic::*;

    fn request_json(turn_type: &str) -> String {
        serde_json::json!({
            "turn_type": turn_type,
            "owners": vec![serde_json::Value::Null; TERRITORY_COUNT],
            "armies": vec![0; TERRITORY_COUNT],
            "current_player": 0,
            "players": [0, 1],
        })
        .to_string()
    }

    #[test]
    fn minimal_request_parses() {
        let req: Request = serde_json::from_str(&request_json("PreAssign")).unwrap();
        assert_eq!(req.phase().unwrap(), Phase::PreAssign);
        assert_eq!(req.occupying, None);
        assert_eq!(req.actions, None);
        assert_eq!(req.budget(), None);
        let state = req.to_state(Arc::new(Board::classic())).unwrap();
        assert_eq!(state.players, vec![PlayerId(0), PlayerId(1)]);
    }

    #[test]
    fn unknown_turn_type_surfaces_on_conversion() {
        let req: Request = serde_json::from_str(&request_json("Draft")).unwrap();
        assert!(matches!(
            req.to_state(Arc::new(Board::classic())),
            Err(AgentError::UnknownPhase(ref t)) if t == "Draft"
        ));
    }

    #[test]
    fn actions_and_budget_are_optional_fields() {
        let mut value: serde_json::Value = serde_json::from_str(&request_json("Occupy")).unwrap();
        value["occupying"] = serde_json::json!({"from": 10, "to": 17});
        value["actions"] = serde_json::json!([{"type": "Occupy", "from": 10, "to": 17, "troops": 2}]);
        value["time_left_ms"] = serde_json::json!(250);
        let req: Request = serde_json::from_value(value).unwrap();
        let board = Board::classic();
        assert_eq!(
            req.occupying.as_ref().unwrap().resolve(&board).unwrap(),
            Engagement { from: 10, to: 17 }
        );
        assert_eq!(
            req.resolve_actions(&board).unwrap(),
            Some(vec![Action::Occupy {
                from: 10,
                to: 17,
                troops: 2
            }])
        );
        assert_eq!(req.budget(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn territories_may_be_named() {
        let mut value: serde_json::Value = serde_json::from_str(&request_json("Occupy")).unwrap();
        value["occupying"] = serde_json::json!({"from": "Brazil", "to": "north africa"});
        value["actions"] = serde_json::json!([
            {"type": "Occupy", "from": "Brazil", "to": 17, "troops": 1},
            {"type": "Attack", "engagement": {"from": "Brazil", "to": "Peru"}},
            {"type": "Fortify", "transfer": {"from": "Peru", "to": "Brazil", "troops": 2}},
        ]);
        let req: Request = serde_json::from_value(value).unwrap();
        let board = Arc::new(Board::classic());
        let state = req.to_state(Arc::clone(&board)).unwrap();
        assert_eq!(
            state.occupying,
            Some(Engagement {
                from: BRAZIL,
                to: NORTH_AFRICA
            })
        );
        let actions = req.resolve_actions(&board).unwrap().unwrap();
        assert_eq!(
            actions[0],
            Action::Occupy {
                from: BRAZIL,
                to: NORTH_AFRICA,
                troops: 1
            }
        );
        assert_eq!(
            actions[1],
            Action::Attack {
                engagement: Some(Engagement { from: BRAZIL, to: PERU })
            }
        );
        assert_eq!(
            actions[2],
            Action::Fortify {
                transfer: Some(Transfer {
                    from: PERU,
                    to: BRAZIL,
                    troops: 2
                })
            }
        );
    }

    #[test]
    fn unknown_names_and_ids_fail_resolution() {
        let board = Board::classic();
        let named: ActionSpec = serde_json::from_str(r#"{"type":"Assign","to":"Atlantis"}"#).unwrap();
        assert!(matches!(
            named.resolve(&board),
            Err(AgentError::UnknownTerritory(ref n)) if n == "Atlantis"
        ));
        let numbered: ActionSpec = serde_json::from_str(r#"{"type":"Place","to":99}"#).unwrap();
        assert!(matches!(
            numbered.resolve(&board),
            Err(AgentError::InvalidTerritory(99))
        ));
    }

    #[test]
    fn action_converts_to_numeric_spec() {
        let action = Action::Fortify {
            transfer: Some(Transfer {
                from: PERU,
                to: BRAZIL,
                troops: 2,
            }),
        };
        let spec = ActionSpec::from(action);
        assert_eq!(spec.resolve(&Board::classic()).unwrap(), action);
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            serde_json::to_value(action).unwrap()
        );
    }

    #[test]
    fn response_shapes() {
        let ok = Response::from(Ok(Action::Place { to: 4 }));
        assert_eq!(ok.to_line(), r#"{"action":{"type":"Place","to":4}}"#);

        let err = Response::from(Err(AgentError::NoLegalActions));
        let value: serde_json::Value = serde_json::from_str(&err.to_line()).unwrap();
        assert_eq!(value["kind"], "NoLegalActions");
        assert!(value["error"].as_str().is_some());
    }
}
