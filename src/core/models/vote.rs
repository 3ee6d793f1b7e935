//! Voting and decision types

use serde::Serialize;

/// Ballot cast by a voter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Vote {
    Grant,
    Deny,
    Abstain,
}

/// Final access decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Grant,
    Deny,
}

impl Decision {
    pub fn is_granted(self) -> bool {
        matches!(self, Decision::Grant)
    }
}

impl Vote {
    /// Combine ballots: any deny wins, then any grant, otherwise deny
    pub fn aggregate<I>(votes: I) -> Decision
    where
        I: IntoIterator<Item = Vote>,
    {
        let mut granted = false;
        for vote in votes {
            match vote {
                Vote::Deny => return Decision::Deny,
                Vote::Grant => granted = true,
                Vote::Abstain => {}
            }
        }

        if granted {
            Decision::Grant
        } else {
            Decision::Deny
        }
    }
}
