use serde::{Deserialize, Serialize};

use crate::core::annotation::Annotation;
use crate::core::trace::Trace;

/// Chart layout; only the annotation sequence matters to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Layout {
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// A chart handle as exposed by the host page: the trace list plus layout.
///
/// The crate never creates or destroys charts on behalf of the host; it only
/// reads them and commits annotation updates through [`Chart::relayout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Chart {
    #[serde(default)]
    pub data: Vec<Trace>,
    #[serde(default)]
    pub layout: Layout,
}

impl Chart {
    #[must_use]
    pub fn new(data: Vec<Trace>) -> Self {
        Self {
            data,
            layout: Layout::default(),
        }
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.layout.annotations = annotations;
        self
    }

    /// Applies a partial layout patch, replacing only the fields it carries.
    pub fn relayout(&mut self, patch: RelayoutPatch) {
        if let Some(annotations) = patch.annotations {
            self.layout.annotations = annotations;
        }
    }
}

/// Partial layout update, mirroring the plotting library's relayout call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RelayoutPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,
}

impl RelayoutPatch {
    #[must_use]
    pub fn annotations(annotations: Vec<Annotation>) -> Self {
        Self {
            annotations: Some(annotations),
        }
    }
}
