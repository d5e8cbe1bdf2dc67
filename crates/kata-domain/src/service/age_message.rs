//! Age message classification drill

use serde::{Deserialize, Serialize};

/// Age band for the message drill.
///
/// The bands partition the whole integer domain: the bottom band is open
/// below (negative ages included) and the top band is open above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBand {
    Child,
    Teenager,
    Adult,
}

impl AgeBand {
    /// Classify an age into exactly one band.
    pub fn from_age(age: i32) -> Self {
        if age <= 12 {
            AgeBand::Child
        } else if age <= 17 {
            AgeBand::Teenager
        } else {
            AgeBand::Adult
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Child => "child",
            AgeBand::Teenager => "teenager",
            AgeBand::Adult => "adult",
        }
    }

    /// Descriptive message printed by the drill.
    pub fn message(&self) -> &'static str {
        match self {
            AgeBand::Child => "You are still a child.",
            AgeBand::Teenager => "You are a teenager.",
            AgeBand::Adult => "You are an adult.",
        }
    }
}
