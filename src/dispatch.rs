use crate::annotation::{AnnotationSet, Qualifier};
use crate::domain::{
    DatabaseIdentifier, EntityKind, ModifiedResidue, PhysicalEntity, ReferenceEntity,
};
use crate::identifiers::IdentifierResolver;
use crate::warning::AnnotationWarning;

pub const DEFAULT_MAX_DEPTH: usize = 64;

const KEGG_COMPOUND_DB: &str = "COMPOUND";

/// Whether the entity being resolved is the exported species itself or a part
/// reached through a complex, set or polymer. Homolog and residue
/// modification references are only added at the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    TopLevel,
    Nested,
}

pub struct EntityDispatcher<'a> {
    resolver: &'a IdentifierResolver,
    max_depth: usize,
}

impl<'a> EntityDispatcher<'a> {
    pub fn new(resolver: &'a IdentifierResolver, max_depth: usize) -> Self {
        Self {
            resolver,
            max_depth,
        }
    }

    pub fn resolve(
        &self,
        entity: &PhysicalEntity,
        qualifier: Qualifier,
        level: Level,
        set: &mut AnnotationSet,
    ) {
        self.resolve_at(entity, qualifier, level, 0, set);
    }

    fn resolve_at(
        &self,
        entity: &PhysicalEntity,
        qualifier: Qualifier,
        level: Level,
        depth: usize,
        set: &mut AnnotationSet,
    ) {
        if depth > self.max_depth {
            set.warn(AnnotationWarning::DepthLimitReached {
                st_id: entity.st_id.clone(),
                max_depth: self.max_depth,
            });
            return;
        }

        match &entity.kind {
            EntityKind::SimpleEntity {
                reference_entity,
                cross_reference,
            } => {
                self.add_reference(reference_entity.as_ref(), qualifier, set);
                if let Some(kegg) = cross_reference
                    .iter()
                    .find(|xref| xref.database_name == KEGG_COMPOUND_DB)
                {
                    set.add_resolved(qualifier, self.resolver.resolve("kegg", &kegg.identifier));
                }
            }
            EntityKind::SequenceEntity {
                reference_entity,
                inferred_to,
                inferred_from,
                modified_residues,
            } => {
                self.add_reference(reference_entity.as_ref(), qualifier, set);
                if level == Level::TopLevel {
                    for homolog in inferred_to.iter().chain(inferred_from) {
                        set.add_resolved(
                            Qualifier::IsHomologTo,
                            self.resolver.resolve("reactome", homolog.st_id.as_str()),
                        );
                    }
                    for term in modified_residues.iter().filter_map(psi_mod_term) {
                        set.add_resolved(
                            Qualifier::HasVersion,
                            self.resolver.resolve(&term.database_name, &term.identifier),
                        );
                    }
                }
            }
            EntityKind::Complex { components: parts }
            | EntityKind::EntitySet { members: parts }
            | EntityKind::Polymer {
                repeated_units: parts,
            } => {
                for part in parts {
                    self.resolve_at(part, Qualifier::HasPart, Level::Nested, depth + 1, set);
                }
            }
            EntityKind::ChemicalDrug { reference_entity }
            | EntityKind::ProteinDrug { reference_entity }
            | EntityKind::RnaDrug { reference_entity } => {
                self.add_reference(reference_entity.as_ref(), qualifier, set);
            }
            EntityKind::GenomeEncodedEntity | EntityKind::OtherEntity => {}
            EntityKind::Unrecognized { schema_class } => {
                set.warn(AnnotationWarning::UnrecognizedVariant {
                    st_id: entity.st_id.clone(),
                    schema_class: schema_class.clone(),
                });
            }
        }
    }

    fn add_reference(
        &self,
        reference: Option<&ReferenceEntity>,
        qualifier: Qualifier,
        set: &mut AnnotationSet,
    ) {
        if let Some(reference) = reference {
            set.add_resolved(
                qualifier,
                self.resolver
                    .resolve(&reference.database_name, &reference.identifier),
            );
        }
    }
}

fn psi_mod_term(residue: &ModifiedResidue) -> Option<&DatabaseIdentifier> {
    if residue.is_translational() {
        residue.psi_mod.as_ref()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::domain::StableId;

    fn protein(st_id: &str, accession: &str) -> PhysicalEntity {
        PhysicalEntity::new(
            st_id,
            EntityKind::SequenceEntity {
                reference_entity: Some(ReferenceEntity::new("UniProt", accession)),
                inferred_to: Vec::new(),
                inferred_from: Vec::new(),
                modified_residues: Vec::new(),
            },
        )
    }

    fn complex(st_id: &str, components: Vec<PhysicalEntity>) -> PhysicalEntity {
        PhysicalEntity::new(st_id, EntityKind::Complex { components })
    }

    #[test]
    fn simple_entity_adds_first_kegg_compound() {
        let resolver = IdentifierResolver::default();
        let dispatcher = EntityDispatcher::new(&resolver, DEFAULT_MAX_DEPTH);
        let entity = PhysicalEntity::new(
            "R-ALL-29356",
            EntityKind::SimpleEntity {
                reference_entity: Some(ReferenceEntity::new("ChEBI", "15377")),
                cross_reference: vec![
                    DatabaseIdentifier::new("PubChem", "962"),
                    DatabaseIdentifier::new("COMPOUND", "C00001"),
                    DatabaseIdentifier::new("COMPOUND", "C99999"),
                ],
            },
        );
        let mut set = AnnotationSet::new();
        dispatcher.resolve(&entity, Qualifier::Is, Level::TopLevel, &mut set);

        let is: Vec<&str> = set.resources(Qualifier::Is).iter().map(|u| u.as_str()).collect();
        assert_eq!(
            is,
            vec![
                "http://identifiers.org/chebi/CHEBI:15377",
                "http://identifiers.org/kegg/KEGG:C00001",
            ]
        );
    }

    #[test]
    fn kegg_match_is_case_sensitive() {
        let resolver = IdentifierResolver::default();
        let dispatcher = EntityDispatcher::new(&resolver, DEFAULT_MAX_DEPTH);
        let entity = PhysicalEntity::new(
            "R-ALL-1",
            EntityKind::SimpleEntity {
                reference_entity: None,
                cross_reference: vec![DatabaseIdentifier::new("compound", "C00002")],
            },
        );
        let mut set = AnnotationSet::new();
        dispatcher.resolve(&entity, Qualifier::Is, Level::TopLevel, &mut set);
        assert!(set.is_empty());
    }

    #[test]
    fn nested_components_become_parts() {
        let resolver = IdentifierResolver::default();
        let dispatcher = EntityDispatcher::new(&resolver, DEFAULT_MAX_DEPTH);
        let entity = complex(
            "R-HSA-1",
            vec![protein("R-HSA-2", "P11111"), protein("R-HSA-3", "P22222")],
        );
        let mut set = AnnotationSet::new();
        dispatcher.resolve(&entity, Qualifier::Is, Level::TopLevel, &mut set);

        assert!(set.resources(Qualifier::Is).is_empty());
        assert_eq!(set.resources(Qualifier::HasPart).len(), 2);
    }

    #[test]
    fn depth_limit_skips_and_warns() {
        let resolver = IdentifierResolver::default();
        let dispatcher = EntityDispatcher::new(&resolver, 1);
        let entity = complex(
            "R-HSA-1",
            vec![
                protein("R-HSA-2", "P11111"),
                complex("R-HSA-3", vec![protein("R-HSA-4", "P44444")]),
            ],
        );
        let mut set = AnnotationSet::new();
        dispatcher.resolve(&entity, Qualifier::Is, Level::TopLevel, &mut set);

        let parts = set.resources(Qualifier::HasPart);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].as_str(), "http://identifiers.org/uniprot/P11111");
        let report = set.emit();
        assert_matches!(
            &report.warnings[..],
            [AnnotationWarning::DepthLimitReached { st_id, max_depth: 1 }]
                if *st_id == StableId::from("R-HSA-4")
        );
    }

    #[test]
    fn genome_encoded_entity_is_silent() {
        let resolver = IdentifierResolver::default();
        let dispatcher = EntityDispatcher::new(&resolver, DEFAULT_MAX_DEPTH);
        let entity = PhysicalEntity::new("R-HSA-5", EntityKind::GenomeEncodedEntity);
        let mut set = AnnotationSet::new();
        dispatcher.resolve(&entity, Qualifier::Is, Level::TopLevel, &mut set);
        let report = set.emit();
        assert!(report.terms.is_empty());
        assert!(report.warnings.is_empty());
    }
}
