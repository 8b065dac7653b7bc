//! Display surfaces charts are drawn into

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A resolved display surface, identified by its element id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceHandle {
    pub id: String,
}

/// Looks up display surfaces in the host document
#[cfg_attr(test, mockall::automock)]
pub trait SurfaceResolver: Send + Sync {
    /// Resolve an element id, or `None` if the document has no such surface
    fn resolve(&self, id: &str) -> Option<SurfaceHandle>;
}

/// Surfaces declared by a host document
#[derive(Debug, Clone, Default)]
pub struct SurfaceSet {
    ids: BTreeSet<String>,
}

impl SurfaceSet {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

impl SurfaceResolver for SurfaceSet {
    fn resolve(&self, id: &str) -> Option<SurfaceHandle> {
        self.contains(id).then(|| SurfaceHandle { id: id.to_string() })
    }
}
