/// Topology object model: the tagged Entity/Relation/Kind union plus aspects.
use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use strum::Display;

/// A topology object identifier.
///
/// IDs are opaque strings assigned by the service. The empty `Id` doubles as
/// the defined "absent" value for reference fields outside an object's
/// active variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id(String);

impl Id {
    /// Construct an `Id` from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a plain string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty (absent) identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The object subtype discriminator.
///
/// Rendered upper-case in the first column of every row and header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ObjectType {
    /// Subtype unknown to this client (the wire zero value).
    Unspecified,
    Entity,
    Relation,
    Kind,
}

/// Entity payload: a single node-like resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Kind this entity instantiates (foreign key, not validated locally).
    pub kind_id: Id,
}

/// Relation payload: a directed edge between two entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Kind this relation instantiates (foreign key, not validated locally).
    pub kind_id: Id,
    /// Source endpoint of the edge.
    pub src_entity_id: Id,
    /// Target endpoint of the edge.
    pub tgt_entity_id: Id,
}

/// Kind payload: a type/category definition referenced by entities and relations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kind {
    /// Human-readable kind name.
    pub name: String,
}

/// The active subtype payload.
///
/// The enum tag is the single source of truth for which fields an object
/// carries; there is no cross-variant field access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectVariant {
    /// Subtype this client does not know how to render.
    Unspecified,
    Entity(Entity),
    Relation(Relation),
    Kind(Kind),
}

/// One topology object: an immutable snapshot returned by the service for
/// the duration of a single command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    /// Unique identifier.
    pub id: Id,
    /// Active subtype payload.
    pub variant: ObjectVariant,
    /// Open side-data map: aspect-type name → opaque payload bytes.
    /// Iteration order is unspecified; consumers must not rely on it.
    pub aspects: HashMap<String, Bytes>,
}

impl Object {
    /// Build an entity object with no aspects.
    #[must_use]
    pub fn entity(id: impl Into<Id>, kind_id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            variant: ObjectVariant::Entity(Entity {
                kind_id: kind_id.into(),
            }),
            aspects: HashMap::new(),
        }
    }

    /// Build a relation object with no aspects.
    #[must_use]
    pub fn relation(
        id: impl Into<Id>,
        kind_id: impl Into<Id>,
        src_entity_id: impl Into<Id>,
        tgt_entity_id: impl Into<Id>,
    ) -> Self {
        Self {
            id: id.into(),
            variant: ObjectVariant::Relation(Relation {
                kind_id: kind_id.into(),
                src_entity_id: src_entity_id.into(),
                tgt_entity_id: tgt_entity_id.into(),
            }),
            aspects: HashMap::new(),
        }
    }

    /// Build a kind object with no aspects.
    #[must_use]
    pub fn kind(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            variant: ObjectVariant::Kind(Kind { name: name.into() }),
            aspects: HashMap::new(),
        }
    }

    /// Attach an aspect payload, replacing any previous payload of the same type.
    #[must_use]
    pub fn with_aspect(
        mut self,
        aspect_type: impl Into<String>,
        payload: impl Into<Bytes>,
    ) -> Self {
        self.aspects.insert(aspect_type.into(), payload.into());
        self
    }

    /// Type tag derived from the active variant.
    #[must_use]
    pub fn object_type(&self) -> ObjectType {
        match self.variant {
            ObjectVariant::Unspecified => ObjectType::Unspecified,
            ObjectVariant::Entity(_) => ObjectType::Entity,
            ObjectVariant::Relation(_) => ObjectType::Relation,
            ObjectVariant::Kind(_) => ObjectType::Kind,
        }
    }

    /// Kind reference, or `""` when the active variant has none.
    #[must_use]
    pub fn kind_id(&self) -> &str {
        match &self.variant {
            ObjectVariant::Entity(e) => e.kind_id.as_str(),
            ObjectVariant::Relation(r) => r.kind_id.as_str(),
            _ => "",
        }
    }

    /// Relation source endpoint, or `""` for non-relations.
    #[must_use]
    pub fn src_entity_id(&self) -> &str {
        match &self.variant {
            ObjectVariant::Relation(r) => r.src_entity_id.as_str(),
            _ => "",
        }
    }

    /// Relation target endpoint, or `""` for non-relations.
    #[must_use]
    pub fn tgt_entity_id(&self) -> &str {
        match &self.variant {
            ObjectVariant::Relation(r) => r.tgt_entity_id.as_str(),
            _ => "",
        }
    }

    /// Kind name, or `""` for non-kinds.
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.variant {
            ObjectVariant::Kind(k) => &k.name,
            _ => "",
        }
    }
}
