use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One person in the exchange. The email is the identity key for all set and
/// map operations; the name is presentational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub email: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Ordered participant list, as loaded from the roster file.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn name_of(&self, email: &str) -> Option<&str> {
        self.participants
            .iter()
            .find(|p| p.email == email)
            .map(|p| p.name.as_str())
    }

    /// First email that appears more than once, if any. Duplicate identifiers
    /// make the draw ill-defined, so callers reject them up front.
    pub fn duplicate_email(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.participants
            .iter()
            .find(|p| !seen.insert(p.email.as_str()))
            .map(|p| p.email.as_str())
    }
}

impl FromIterator<Participant> for Roster {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Last round's pairings: giver email to receiver email. Keys need not cover
/// the current roster (turnover), and at most one entry per giver survives.
#[derive(Debug, Clone, Default)]
pub struct PriorAssignments {
    by_giver: HashMap<String, String>,
}

impl PriorAssignments {
    pub fn insert(&mut self, giver: String, receiver: String) {
        self.by_giver.insert(giver, receiver);
    }

    pub fn receiver_for(&self, giver: &str) -> Option<&str> {
        self.by_giver.get(giver).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_giver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_giver.is_empty()
    }
}

impl FromIterator<(String, String)> for PriorAssignments {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            by_giver: iter.into_iter().collect(),
        }
    }
}

/// One giver/receiver pairing produced by a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub giver: Participant,
    pub receiver: Participant,
}

/// What the transform stage hands to load: the full pairing list plus how
/// many shuffles it took to get there (1 unless retries are configured).
#[derive(Debug, Clone)]
pub struct DrawResult {
    pub assignments: Vec<Assignment>,
    pub attempts: u32,
}

/// Wire format of one roster row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRow {
    #[serde(rename = "Employee_Name")]
    pub name: String,
    #[serde(rename = "Employee_EmailID")]
    pub email: String,
}

/// Wire format of one prior-assignment row. Extra columns (e.g. the names in
/// a previous round's output file) are ignored on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorRow {
    #[serde(rename = "Employee_EmailID")]
    pub giver_email: String,
    #[serde(rename = "Secret_Child_EmailID")]
    pub receiver_email: String,
}

/// Wire format of one output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    #[serde(rename = "Employee_Name")]
    pub giver_name: String,
    #[serde(rename = "Employee_EmailID")]
    pub giver_email: String,
    #[serde(rename = "Secret_Child_Name")]
    pub receiver_name: String,
    #[serde(rename = "Secret_Child_EmailID")]
    pub receiver_email: String,
}

impl From<&Assignment> for AssignmentRow {
    fn from(assignment: &Assignment) -> Self {
        Self {
            giver_name: assignment.giver.name.clone(),
            giver_email: assignment.giver.email.clone(),
            receiver_name: assignment.receiver.name.clone(),
            receiver_email: assignment.receiver.email.clone(),
        }
    }
}

impl From<AssignmentRow> for Assignment {
    fn from(row: AssignmentRow) -> Self {
        Self {
            giver: Participant::new(row.giver_name, row.giver_email),
            receiver: Participant::new(row.receiver_name, row.receiver_email),
        }
    }
}
