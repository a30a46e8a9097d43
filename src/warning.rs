use serde::Serialize;
use thiserror::Error;

use crate::domain::StableId;

/// Non-fatal conditions met while annotating. The affected entity gets no
/// annotation; its siblings and ancestors are processed as usual.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotationWarning {
    #[error("{st_id}: entity class {schema_class} is not handled, no annotation added")]
    UnrecognizedVariant {
        st_id: StableId,
        schema_class: String,
    },

    #[error("{st_id}: nesting deeper than {max_depth} levels, entity skipped")]
    DepthLimitReached { st_id: StableId, max_depth: usize },
}
