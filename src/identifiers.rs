use crate::annotation::ResourceUri;

const IDENTIFIERS_BASE: &str = "http://identifiers.org";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resource(ResourceUri),
    Suppressed,
}

impl Resolution {
    pub fn into_resource(self) -> Option<ResourceUri> {
        match self {
            Resolution::Resource(uri) => Some(uri),
            Resolution::Suppressed => None,
        }
    }
}

/// Turns a (database, accession) pair into an identifiers.org URI.
///
/// Databases on the suppression list never yield a resource. UniProt is the
/// only registry with a non-prefixed accession segment.
#[derive(Debug, Clone)]
pub struct IdentifierResolver {
    suppressed: Vec<String>,
}

impl Default for IdentifierResolver {
    fn default() -> Self {
        Self::new(default_suppressed_databases())
    }
}

impl IdentifierResolver {
    pub fn new(suppressed: Vec<String>) -> Self {
        Self { suppressed }
    }

    pub fn is_suppressed(&self, database_name: &str) -> bool {
        self.suppressed
            .iter()
            .any(|db| db.eq_ignore_ascii_case(database_name))
    }

    pub fn resolve(&self, database_name: &str, accession: &str) -> Resolution {
        if self.is_suppressed(database_name) {
            return Resolution::Suppressed;
        }
        let uri = if database_name.eq_ignore_ascii_case("uniprot") {
            format!("{IDENTIFIERS_BASE}/uniprot/{accession}")
        } else {
            format!(
                "{IDENTIFIERS_BASE}/{}/{}:{accession}",
                database_name.to_lowercase(),
                database_name.to_uppercase()
            )
        };
        Resolution::Resource(ResourceUri::new(uri))
    }
}

pub fn default_suppressed_databases() -> Vec<String> {
    vec!["embl".to_string()]
}

/// Resolves with the default suppression list.
pub fn resolve(database_name: &str, accession: &str) -> Resolution {
    IdentifierResolver::default().resolve(database_name, accession)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_prefixes_accession() {
        let uri = resolve("chebi", "15377").into_resource().unwrap();
        assert_eq!(uri.as_str(), "http://identifiers.org/chebi/CHEBI:15377");
    }

    #[test]
    fn mixed_case_database_name() {
        let uri = resolve("ChEBI", "15377").into_resource().unwrap();
        assert_eq!(uri.as_str(), "http://identifiers.org/chebi/CHEBI:15377");
    }

    #[test]
    fn uniprot_has_bare_accession() {
        let uri = resolve("UniProt", "P12345").into_resource().unwrap();
        assert_eq!(uri.as_str(), "http://identifiers.org/uniprot/P12345");
    }

    #[test]
    fn embl_is_suppressed() {
        assert_eq!(resolve("embl", "X12345"), Resolution::Suppressed);
        assert_eq!(resolve("EMBL", "X12345"), Resolution::Suppressed);
    }

    #[test]
    fn custom_suppression_list_replaces_default() {
        let resolver = IdentifierResolver::new(vec!["ensembl".to_string()]);
        assert_eq!(resolver.resolve("ENSEMBL", "ENSG1"), Resolution::Suppressed);
        assert!(resolver.resolve("embl", "X1").into_resource().is_some());
    }
}
