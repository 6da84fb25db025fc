//! Actor records: persisted entities, scraped candidates and mutation inputs.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the catalog.
pub type ActorId = i64;

/// Domain ordering value. Unique across records created through the strict path.
pub type Rank = i64;

/// A persisted actor.
///
/// Only the catalog constructs these; callers receive clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRecord {
    pub id: ActorId,
    pub name: String,
    pub rank: Rank,
    pub details: Option<String>,
    #[serde(rename = "type")]
    pub actor_type: Option<String>,
}

/// Id and name only, as returned in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSummary {
    pub id: ActorId,
    pub name: String,
}

impl From<&ActorRecord> for ActorSummary {
    fn from(record: &ActorRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
        }
    }
}

/// One record as read off a provider page, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// `None` when the name selector did not match
    pub name: Option<String>,

    /// `0` when absent or unparseable
    pub rank: Rank,

    pub details: Option<String>,

    /// Empty when absent
    #[serde(rename = "type")]
    pub actor_type: String,
}

impl CandidateRecord {
    /// Whether the candidate carries a non-empty name.
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Convert into an insertable record, or `None` when the name is missing.
    ///
    /// An empty type becomes `None`.
    pub fn into_new_actor(self) -> Option<NewActor> {
        if !self.has_name() {
            return None;
        }
        let name = self.name?;
        Some(NewActor {
            name,
            rank: self.rank,
            details: self.details,
            actor_type: Some(self.actor_type).filter(|t| !t.is_empty()),
        })
    }
}

/// Input for creating or ingesting a record. The id is always assigned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActor {
    pub name: String,
    pub rank: Rank,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default, rename = "type")]
    pub actor_type: Option<String>,
}

impl NewActor {
    /// Create a new record input with the required fields.
    pub fn new(name: impl Into<String>, rank: Rank) -> Self {
        Self {
            name: name.into(),
            rank,
            details: None,
            actor_type: None,
        }
    }

    /// Set the details text.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Set the actor type.
    pub fn with_type(mut self, actor_type: impl Into<String>) -> Self {
        self.actor_type = Some(actor_type.into());
        self
    }

    pub(crate) fn into_record(self, id: ActorId) -> ActorRecord {
        ActorRecord {
            id,
            name: self.name,
            rank: self.rank,
            details: self.details,
            actor_type: self.actor_type,
        }
    }
}

/// Input for updating a record.
///
/// `name` is validated but never applied: names are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorUpdate {
    pub id: ActorId,
    pub name: String,
    pub rank: Rank,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default, rename = "type")]
    pub actor_type: Option<String>,
}

impl ActorUpdate {
    pub fn new(id: ActorId, name: impl Into<String>, rank: Rank) -> Self {
        Self {
            id,
            name: name.into(),
            rank,
            details: None,
            actor_type: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_type(mut self, actor_type: impl Into<String>) -> Self {
        self.actor_type = Some(actor_type.into());
        self
    }

    /// Apply the mutable fields to `record`.
    pub(crate) fn apply_to(self, record: &mut ActorRecord) {
        record.rank = self.rank;
        record.details = self.details;
        record.actor_type = self.actor_type;
    }
}

impl From<ActorRecord> for ActorUpdate {
    fn from(record: ActorRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            rank: record.rank,
            details: record.details,
            actor_type: record.actor_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_without_name_is_rejected() {
        let candidate = CandidateRecord {
            name: None,
            rank: 4,
            ..Default::default()
        };
        assert!(!candidate.has_name());
        assert!(candidate.into_new_actor().is_none());

        let empty = CandidateRecord {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(empty.into_new_actor().is_none());
    }

    #[test]
    fn test_candidate_to_new_actor() {
        let candidate = CandidateRecord {
            name: Some("Tom Hanks".to_string()),
            rank: 2,
            details: Some("Forrest Gump".to_string()),
            actor_type: String::new(),
        };

        let actor = candidate.into_new_actor().unwrap();
        assert_eq!(actor.name, "Tom Hanks");
        assert_eq!(actor.rank, 2);
        assert_eq!(actor.details.as_deref(), Some("Forrest Gump"));
        assert_eq!(actor.actor_type, None);
    }

    #[test]
    fn test_update_keeps_name_and_id() {
        let mut record = NewActor::new("Meryl Streep", 3)
            .with_type("Actress")
            .into_record(9);

        ActorUpdate::new(9, "Someone Else", 5)
            .with_details("updated")
            .apply_to(&mut record);

        assert_eq!(record.id, 9);
        assert_eq!(record.name, "Meryl Streep");
        assert_eq!(record.rank, 5);
        assert_eq!(record.details.as_deref(), Some("updated"));
        assert_eq!(record.actor_type, None);
    }

    #[test]
    fn test_record_serializes_type_field() {
        let record = NewActor::new("Tom Cruise", 1)
            .with_type("Actor")
            .into_record(123);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "Actor");
        assert_eq!(json["id"], 123);
    }
}
