pub mod annotation;
pub mod chart;
pub mod locale;
pub mod trace;

pub use annotation::{Annotation, AnnotationFont, AnnotationOrigin};
pub use chart::{Chart, Layout, RelayoutPatch};
pub use locale::{LabelLocale, format_grouped_integer};
pub use trace::{Trace, TraceKind, Visibility};
