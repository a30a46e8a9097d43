//! Qualifier-grouped annotation terms and the node they are attached to.

use std::fmt;

use serde::Serialize;

use crate::identifiers::Resolution;
use crate::warning::AnnotationWarning;

/// MIRIAM biology qualifiers used by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Qualifier {
    Is,
    IsDescribedBy,
    HasPart,
    OccursIn,
    HasInstance,
    IsHomologTo,
    HasVersion,
}

impl Qualifier {
    /// The `bqbiol:` element name used in RDF annotation blocks.
    pub fn bqbiol_name(self) -> &'static str {
        match self {
            Qualifier::Is => "is",
            Qualifier::IsDescribedBy => "isDescribedBy",
            Qualifier::HasPart => "hasPart",
            Qualifier::OccursIn => "occursIn",
            Qualifier::HasInstance => "hasInstance",
            Qualifier::IsHomologTo => "isHomologTo",
            Qualifier::HasVersion => "hasVersion",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bqbiol:{}", self.bqbiol_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceUri(String);

impl ResourceUri {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationTerm {
    pub qualifier: Qualifier,
    pub resources: Vec<ResourceUri>,
}

/// Per-invocation grouping of resources by qualifier.
///
/// Groups appear in first-use order and resources keep insertion order within
/// a group. A group is only created on its first resource, so no emitted term
/// is ever empty.
#[derive(Debug, Default)]
pub struct AnnotationSet {
    groups: Vec<AnnotationTerm>,
    warnings: Vec<AnnotationWarning>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, qualifier: Qualifier, uri: ResourceUri) {
        match self.groups.iter_mut().find(|term| term.qualifier == qualifier) {
            Some(term) => term.resources.push(uri),
            None => self.groups.push(AnnotationTerm {
                qualifier,
                resources: vec![uri],
            }),
        }
    }

    pub fn add_resolved(&mut self, qualifier: Qualifier, resolution: Resolution) {
        if let Some(uri) = resolution.into_resource() {
            self.add(qualifier, uri);
        }
    }

    pub fn warn(&mut self, warning: AnnotationWarning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn resources(&self, qualifier: Qualifier) -> &[ResourceUri] {
        self.groups
            .iter()
            .find(|term| term.qualifier == qualifier)
            .map(|term| term.resources.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn emit(self) -> AnnotationReport {
        AnnotationReport {
            terms: self.groups,
            warnings: self.warnings,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotationReport {
    pub terms: Vec<AnnotationTerm>,
    pub warnings: Vec<AnnotationWarning>,
}

impl AnnotationReport {
    pub fn resources(&self, qualifier: Qualifier) -> &[ResourceUri] {
        self.terms
            .iter()
            .find(|term| term.qualifier == qualifier)
            .map(|term| term.resources.as_slice())
            .unwrap_or(&[])
    }

    pub fn resource_count(&self) -> usize {
        self.terms.iter().map(|term| term.resources.len()).sum()
    }
}

/// An exported element that accepts annotation terms. Terms are only ever
/// appended.
pub trait AnnotatedNode {
    fn add_annotation_term(&mut self, term: AnnotationTerm);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportNode {
    pub id: String,
    pub terms: Vec<AnnotationTerm>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AnnotationWarning>,
}

impl ExportNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            terms: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn terms_for(&self, qualifier: Qualifier) -> impl Iterator<Item = &AnnotationTerm> {
        self.terms
            .iter()
            .filter(move |term| term.qualifier == qualifier)
    }
}

impl AnnotatedNode for ExportNode {
    fn add_annotation_term(&mut self, term: AnnotationTerm) {
        self.terms.push(term);
    }
}
