//! Job discovery: catalog loading, per-job application-status annotation,
//! conjunctive faceted filtering with multi-key sorting, autosuggest,
//! incremental reveal, and named filter presets, composed by a per-tab
//! session.

pub mod annotate;
pub mod catalog;
pub mod domain;
pub mod filter;
pub mod presets;
pub mod reveal;
pub mod router;
pub mod session;
pub mod suggest;

#[cfg(test)]
mod tests;

pub use annotate::{annotate, ApplicationStatusIndex};
pub use catalog::{
    load, normalize, ApplicationStatus, JobsPage, ListingClient, LoadedCatalog, RawJob,
    TransportError,
};
pub use domain::{
    EducationLevel, ExperienceLevel, GenderPreference, Job, JobCategory, JobDuration, JobId,
    JobType, SortKey, WorkLocation,
};
pub use filter::{apply, BudgetBand, FilterState};
pub use presets::{apply_named, FilterPreset, PresetError};
pub use reveal::{RevealController, RevealPhase, PAGE_SIZE};
pub use router::{discovery_router, JobCardView, JobsView, SearchRequest, SuggestionsView};
pub use session::{DiscoverySession, StatusToken};
pub use suggest::suggest;
