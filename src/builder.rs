//! Per-export-unit annotation builders.
//!
//! Every `annotate_*` call owns a fresh [`AnnotationSet`], fills it, emits it
//! once and appends the resulting terms to the target node. No state is kept
//! between calls.

use crate::annotation::{AnnotatedNode, AnnotationReport, AnnotationSet, Qualifier};
use crate::dispatch::{DEFAULT_MAX_DEPTH, EntityDispatcher, Level};
use crate::domain::{
    CatalystActivity, Compartment, DatabaseIdentifier, Event, Pathway, PhysicalEntity,
    Publication, ReactionLikeEvent, StableId,
};
use crate::identifiers::IdentifierResolver;

#[derive(Debug, Clone)]
pub struct Annotator {
    resolver: IdentifierResolver,
    max_depth: usize,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(IdentifierResolver::default(), DEFAULT_MAX_DEPTH)
    }
}

impl Annotator {
    pub fn new(resolver: IdentifierResolver, max_depth: usize) -> Self {
        Self {
            resolver,
            max_depth,
        }
    }

    pub fn resolver(&self) -> &IdentifierResolver {
        &self.resolver
    }

    pub fn annotate_pathway<N: AnnotatedNode + ?Sized>(
        &self,
        pathway: &Pathway,
        node: &mut N,
    ) -> AnnotationReport {
        tracing::debug!(st_id = %pathway.st_id, "annotating pathway");
        let mut set = AnnotationSet::new();
        self.add_self_reference(&pathway.st_id, &mut set);
        if let Some(go) = &pathway.go_biological_process {
            set.add_resolved(Qualifier::Is, self.resolver.resolve("go", &go.accession));
        }
        self.add_publications(&pathway.literature_reference, &mut set);
        self.add_diseases(&pathway.disease, &mut set);
        for xref in &pathway.cross_reference {
            set.add_resolved(
                Qualifier::HasInstance,
                self.resolver.resolve(&xref.database_name, &xref.identifier),
            );
        }
        attach(set, node)
    }

    /// Publications of the given sub-events only, for a container pathway
    /// that carries no literature of its own.
    pub fn annotate_event_publications<N: AnnotatedNode + ?Sized>(
        &self,
        events: &[Event],
        node: &mut N,
    ) -> AnnotationReport {
        tracing::debug!(events = events.len(), "annotating sub-event publications");
        let mut set = AnnotationSet::new();
        for event in events {
            self.add_publications(event.literature_reference(), &mut set);
        }
        attach(set, node)
    }

    pub fn annotate_reaction<N: AnnotatedNode + ?Sized>(
        &self,
        reaction: &ReactionLikeEvent,
        node: &mut N,
    ) -> AnnotationReport {
        tracing::debug!(st_id = %reaction.st_id, "annotating reaction");
        let mut set = AnnotationSet::new();
        self.add_self_reference(&reaction.st_id, &mut set);

        let go_accession = match &reaction.go_biological_process {
            Some(process) => Some(process.accession.as_str()),
            None => first_catalyst_function(&reaction.catalyst_activity),
        };
        if let Some(accession) = go_accession {
            set.add_resolved(Qualifier::Is, self.resolver.resolve("go", accession));
        }

        for ec_number in reaction
            .catalyst_activity
            .iter()
            .filter_map(|activity| activity.ec_number.as_deref())
        {
            set.add_resolved(Qualifier::Is, self.resolver.resolve("ec-code", ec_number));
        }

        self.add_publications(&reaction.literature_reference, &mut set);
        self.add_diseases(&reaction.disease, &mut set);
        attach(set, node)
    }

    pub fn annotate_species<N: AnnotatedNode + ?Sized>(
        &self,
        entity: &PhysicalEntity,
        node: &mut N,
    ) -> AnnotationReport {
        tracing::debug!(st_id = %entity.st_id, class = entity.schema_class(), "annotating species");
        let mut set = AnnotationSet::new();
        self.add_self_reference(&entity.st_id, &mut set);
        EntityDispatcher::new(&self.resolver, self.max_depth).resolve(
            entity,
            Qualifier::Is,
            Level::TopLevel,
            &mut set,
        );
        attach(set, node)
    }

    pub fn annotate_compartment<N: AnnotatedNode + ?Sized>(
        &self,
        compartment: &Compartment,
        node: &mut N,
    ) -> AnnotationReport {
        tracing::debug!(accession = %compartment.accession, "annotating compartment");
        let mut set = AnnotationSet::new();
        set.add_resolved(
            Qualifier::Is,
            self.resolver.resolve("go", &compartment.accession),
        );
        attach(set, node)
    }

    fn add_self_reference(&self, st_id: &StableId, set: &mut AnnotationSet) {
        set.add_resolved(Qualifier::Is, self.resolver.resolve("reactome", st_id.as_str()));
    }

    fn add_publications(&self, publications: &[Publication], set: &mut AnnotationSet) {
        for pubmed in publications.iter().filter_map(Publication::pubmed_id) {
            set.add_resolved(
                Qualifier::IsDescribedBy,
                self.resolver.resolve("pubmed", &pubmed.to_string()),
            );
        }
    }

    fn add_diseases(&self, diseases: &[DatabaseIdentifier], set: &mut AnnotationSet) {
        for disease in diseases {
            set.add_resolved(
                Qualifier::OccursIn,
                self.resolver
                    .resolve(&disease.database_name, &disease.identifier),
            );
        }
    }
}

// Only the first catalyst activity is consulted for the GO fallback, while EC
// numbers are collected from all of them.
fn first_catalyst_function(activities: &[CatalystActivity]) -> Option<&str> {
    activities
        .first()
        .and_then(|activity| activity.activity.as_ref())
        .map(|term| term.accession.as_str())
}

fn attach<N: AnnotatedNode + ?Sized>(set: AnnotationSet, node: &mut N) -> AnnotationReport {
    let report = set.emit();
    for term in &report.terms {
        node.add_annotation_term(term.clone());
    }
    report
}
