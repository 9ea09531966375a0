pub mod annotator;
pub mod annotator_config;
pub mod binding;
pub mod bootstrap;
pub mod json_contract;
pub mod registry;
pub mod scheduler;

pub use annotator::{recompute_totals, totals_for_traces};
pub use annotator_config::TotalsAnnotatorConfig;
pub use binding::{ChartEvent, TotalsAnnotator};
pub use bootstrap::{no_data_placeholder, seed_totals};
pub use json_contract::{CHART_JSON_SCHEMA_V1, ChartJsonContractV1};
pub use registry::ChartRegistry;
pub use scheduler::{PendingRecompute, SettleQueue};
