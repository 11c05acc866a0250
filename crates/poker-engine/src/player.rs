use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a seated player.
pub type PlayerId = u32;

/// What the evaluation core needs to know about whoever holds a hand.
///
/// Wallets, seating and betting live with the caller; a hand only needs a
/// stable identity and a display name.
pub trait Player {
    fn id(&self) -> PlayerId;

    fn name(&self) -> &str;
}

/// Minimal player: an id and a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    id: PlayerId,
    name: String,
}

impl Client {
    pub fn register(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Player for Client {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
