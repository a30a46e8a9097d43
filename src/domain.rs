//! Read-only Reactome domain objects consumed by the annotation engine.
//!
//! Field names follow the Reactome content-service JSON (`schemaClass`,
//! camelCase attributes) so dumps can be deserialized directly.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StableId(String);

impl StableId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StableId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntity {
    pub database_name: String,
    pub identifier: String,
}

impl ReferenceEntity {
    pub fn new(database_name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            identifier: identifier.into(),
        }
    }
}

/// A database name + identifier pair as found on cross-references, diseases
/// and PSI-MOD terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseIdentifier {
    pub database_name: String,
    pub identifier: String,
}

impl DatabaseIdentifier {
    pub fn new(database_name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            identifier: identifier.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyTerm {
    pub accession: String,
}

impl OntologyTerm {
    pub fn new(accession: impl Into<String>) -> Self {
        Self {
            accession: accession.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalystActivity {
    pub activity: Option<OntologyTerm>,
    pub ec_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "schemaClass")]
pub enum Publication {
    #[serde(rename_all = "camelCase")]
    LiteratureReference {
        #[serde(default)]
        pub_med_identifier: Option<u64>,
    },
    Book,
    #[serde(rename = "URL")]
    Url,
    #[serde(other)]
    Other,
}

impl Publication {
    pub fn pubmed(id: u64) -> Self {
        Publication::LiteratureReference {
            pub_med_identifier: Some(id),
        }
    }

    pub fn pubmed_id(&self) -> Option<u64> {
        match self {
            Publication::LiteratureReference { pub_med_identifier } => *pub_med_identifier,
            Publication::Book | Publication::Url | Publication::Other => None,
        }
    }
}

const TRANSLATIONAL_CLASSES: &[&str] = &[
    "TranslationalModification",
    "GroupModifiedResidue",
    "CrosslinkedResidue",
    "InterChainCrosslinkedResidue",
    "IntraChainCrosslinkedResidue",
    "ModifiedResidue",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedResidue {
    pub schema_class: String,
    #[serde(default)]
    pub psi_mod: Option<DatabaseIdentifier>,
}

impl ModifiedResidue {
    pub fn translational(psi_mod: Option<DatabaseIdentifier>) -> Self {
        Self {
            schema_class: "ModifiedResidue".to_string(),
            psi_mod,
        }
    }

    pub fn is_translational(&self) -> bool {
        TRANSLATIONAL_CLASSES.contains(&self.schema_class.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pathway {
    pub st_id: StableId,
    pub display_name: Option<String>,
    pub go_biological_process: Option<OntologyTerm>,
    pub literature_reference: Vec<Publication>,
    pub disease: Vec<DatabaseIdentifier>,
    pub cross_reference: Vec<DatabaseIdentifier>,
    pub has_event: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReactionLikeEvent {
    pub st_id: StableId,
    pub display_name: Option<String>,
    pub go_biological_process: Option<OntologyTerm>,
    pub catalyst_activity: Vec<CatalystActivity>,
    pub literature_reference: Vec<Publication>,
    pub disease: Vec<DatabaseIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Compartment {
    pub st_id: StableId,
    pub display_name: Option<String>,
    pub accession: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schemaClass")]
pub enum Event {
    #[serde(alias = "TopLevelPathway", alias = "CellLineagePath")]
    Pathway(Pathway),
    #[serde(
        alias = "Reaction",
        alias = "BlackBoxEvent",
        alias = "Polymerisation",
        alias = "Depolymerisation",
        alias = "FailedReaction",
        alias = "CellDevelopmentStep"
    )]
    ReactionLikeEvent(ReactionLikeEvent),
}

impl Event {
    pub fn st_id(&self) -> &StableId {
        match self {
            Event::Pathway(pathway) => &pathway.st_id,
            Event::ReactionLikeEvent(reaction) => &reaction.st_id,
        }
    }

    pub fn literature_reference(&self) -> &[Publication] {
        match self {
            Event::Pathway(pathway) => &pathway.literature_reference,
            Event::ReactionLikeEvent(reaction) => &reaction.literature_reference,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPhysicalEntity", into = "RawPhysicalEntity")]
pub struct PhysicalEntity {
    pub st_id: StableId,
    pub display_name: Option<String>,
    pub kind: EntityKind,
}

impl PhysicalEntity {
    pub fn new(st_id: impl Into<StableId>, kind: EntityKind) -> Self {
        Self {
            st_id: st_id.into(),
            display_name: None,
            kind,
        }
    }

    pub fn schema_class(&self) -> &str {
        self.kind.schema_class()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    SimpleEntity {
        reference_entity: Option<ReferenceEntity>,
        cross_reference: Vec<DatabaseIdentifier>,
    },
    SequenceEntity {
        reference_entity: Option<ReferenceEntity>,
        inferred_to: Vec<PhysicalEntity>,
        inferred_from: Vec<PhysicalEntity>,
        modified_residues: Vec<ModifiedResidue>,
    },
    Complex {
        components: Vec<PhysicalEntity>,
    },
    EntitySet {
        members: Vec<PhysicalEntity>,
    },
    Polymer {
        repeated_units: Vec<PhysicalEntity>,
    },
    ChemicalDrug {
        reference_entity: Option<ReferenceEntity>,
    },
    ProteinDrug {
        reference_entity: Option<ReferenceEntity>,
    },
    RnaDrug {
        reference_entity: Option<ReferenceEntity>,
    },
    GenomeEncodedEntity,
    OtherEntity,
    /// A class added to the data model after this engine was last updated.
    Unrecognized {
        schema_class: String,
    },
}

impl EntityKind {
    pub fn schema_class(&self) -> &str {
        match self {
            EntityKind::SimpleEntity { .. } => "SimpleEntity",
            EntityKind::SequenceEntity { .. } => "EntityWithAccessionedSequence",
            EntityKind::Complex { .. } => "Complex",
            EntityKind::EntitySet { .. } => "EntitySet",
            EntityKind::Polymer { .. } => "Polymer",
            EntityKind::ChemicalDrug { .. } => "ChemicalDrug",
            EntityKind::ProteinDrug { .. } => "ProteinDrug",
            EntityKind::RnaDrug { .. } => "RNADrug",
            EntityKind::GenomeEncodedEntity => "GenomeEncodedEntity",
            EntityKind::OtherEntity => "OtherEntity",
            EntityKind::Unrecognized { schema_class } => schema_class,
        }
    }
}

/// Flat wire shape of every physical entity class; `schemaClass` selects
/// which of the attributes are meaningful.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawPhysicalEntity {
    schema_class: String,
    st_id: StableId,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_entity: Option<ReferenceEntity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cross_reference: Vec<DatabaseIdentifier>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    has_component: Vec<PhysicalEntity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    has_member: Vec<PhysicalEntity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    repeated_unit: Vec<PhysicalEntity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    inferred_to: Vec<PhysicalEntity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    inferred_from: Vec<PhysicalEntity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    has_modified_residue: Vec<ModifiedResidue>,
}

impl From<RawPhysicalEntity> for PhysicalEntity {
    fn from(raw: RawPhysicalEntity) -> Self {
        let kind = match raw.schema_class.as_str() {
            "SimpleEntity" => EntityKind::SimpleEntity {
                reference_entity: raw.reference_entity,
                cross_reference: raw.cross_reference,
            },
            "EntityWithAccessionedSequence" => EntityKind::SequenceEntity {
                reference_entity: raw.reference_entity,
                inferred_to: raw.inferred_to,
                inferred_from: raw.inferred_from,
                modified_residues: raw.has_modified_residue,
            },
            "Complex" => EntityKind::Complex {
                components: raw.has_component,
            },
            "EntitySet" | "DefinedSet" | "CandidateSet" | "OpenSet" => EntityKind::EntitySet {
                members: raw.has_member,
            },
            "Polymer" => EntityKind::Polymer {
                repeated_units: raw.repeated_unit,
            },
            "ChemicalDrug" => EntityKind::ChemicalDrug {
                reference_entity: raw.reference_entity,
            },
            "ProteinDrug" => EntityKind::ProteinDrug {
                reference_entity: raw.reference_entity,
            },
            "RNADrug" => EntityKind::RnaDrug {
                reference_entity: raw.reference_entity,
            },
            "GenomeEncodedEntity" => EntityKind::GenomeEncodedEntity,
            "OtherEntity" => EntityKind::OtherEntity,
            other => EntityKind::Unrecognized {
                schema_class: other.to_string(),
            },
        };
        Self {
            st_id: raw.st_id,
            display_name: raw.display_name,
            kind,
        }
    }
}

impl From<PhysicalEntity> for RawPhysicalEntity {
    fn from(entity: PhysicalEntity) -> Self {
        let mut raw = RawPhysicalEntity {
            schema_class: entity.kind.schema_class().to_string(),
            st_id: entity.st_id,
            display_name: entity.display_name,
            ..RawPhysicalEntity::default()
        };
        match entity.kind {
            EntityKind::SimpleEntity {
                reference_entity,
                cross_reference,
            } => {
                raw.reference_entity = reference_entity;
                raw.cross_reference = cross_reference;
            }
            EntityKind::SequenceEntity {
                reference_entity,
                inferred_to,
                inferred_from,
                modified_residues,
            } => {
                raw.reference_entity = reference_entity;
                raw.inferred_to = inferred_to;
                raw.inferred_from = inferred_from;
                raw.has_modified_residue = modified_residues;
            }
            EntityKind::Complex { components } => raw.has_component = components,
            EntityKind::EntitySet { members } => raw.has_member = members,
            EntityKind::Polymer { repeated_units } => raw.repeated_unit = repeated_units,
            EntityKind::ChemicalDrug { reference_entity }
            | EntityKind::ProteinDrug { reference_entity }
            | EntityKind::RnaDrug { reference_entity } => raw.reference_entity = reference_entity,
            EntityKind::GenomeEncodedEntity
            | EntityKind::OtherEntity
            | EntityKind::Unrecognized { .. } => {}
        }
        raw
    }
}
