//! Player data structures: gender, team side, and the roster entry itself.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in lookups and removal).
pub type PlayerId = Uuid;

/// Player gender, used only by the balancer to split the game pool.
/// Wire labels are the Portuguese strings the stored payloads use.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Masculino")]
    Male,
    #[serde(rename = "Feminino")]
    Female,
}

/// Where a player currently is: on court (A or B) or in the waiting line.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum TeamSide {
    A,
    B,
    #[default]
    #[serde(rename = "WAITING")]
    Waiting,
}

/// A roster entry.
///
/// `sequence_number` is the queue position: lower means arrived (or was
/// re-queued) earlier. Values are unique across the roster but not
/// necessarily contiguous; only relative order matters. `created_at` is
/// informational only and never consulted by any rule.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    /// Display name, upper-cased at entry.
    pub name: String,
    pub gender: Gender,
    pub team: TeamSide,
    pub sequence_number: u64,
    /// Epoch millis at creation.
    pub created_at: i64,
}

impl Player {
    /// Create a new player on the given side with a freshly minted
    /// sequence number. The name is trimmed and upper-cased.
    pub fn new(
        name: impl Into<String>,
        gender: Gender,
        team: TeamSide,
        sequence_number: u64,
    ) -> Self {
        let name = name.into().trim().to_uppercase();
        Self {
            id: Uuid::new_v4(),
            name,
            gender,
            team,
            sequence_number,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}
