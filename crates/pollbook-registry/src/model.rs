//! Registry models

use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use pollbook_persistence::entity::voters;

/// Outcome of a failed check-in attempt
#[derive(thiserror::Error, Debug)]
pub enum CheckInError {
    #[error("voter '{0}' not found")]
    NotFound(String),

    /// The transition was rejected; the original check-in data is
    /// preserved unchanged.
    #[error("voter '{0}' already voted")]
    AlreadyVoted(String),

    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

/// Voter fields exposed to poll-station terminals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoterView {
    pub number: String,
    pub name: String,
    pub voted: bool,
    pub notes: Option<String>,
    pub ballot_box_id: Option<String>,
    pub running_number: Option<i32>,
    pub timestamp: Option<String>,
    pub checked_in_by: Option<String>,
}

impl From<voters::Model> for VoterView {
    fn from(value: voters::Model) -> Self {
        Self {
            number: value.number,
            name: value.name,
            voted: value.voted,
            notes: value.notes,
            ballot_box_id: value.ballot_box_id,
            running_number: value.running_number,
            timestamp: value.timestamp,
            checked_in_by: value.checked_in_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_in_error_display() {
        assert_eq!(
            format!("{}", CheckInError::NotFound("0000000".to_string())),
            "voter '0000000' not found"
        );
        assert_eq!(
            format!("{}", CheckInError::AlreadyVoted("2456789".to_string())),
            "voter '2456789' already voted"
        );
    }

    #[test]
    fn test_voter_view_from_model() {
        let model = voters::Model {
            number: "2456789".to_string(),
            name: "Werner Wusel".to_string(),
            voted: false,
            notes: None,
            ballot_box_id: None,
            running_number: None,
            timestamp: None,
            checked_in_by: None,
        };
        let view = VoterView::from(model);
        assert_eq!(view.number, "2456789");
        assert!(!view.voted);
    }
}
