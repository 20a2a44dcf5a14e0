use std::sync::Arc;

use super::annotate::{annotate, ApplicationStatusIndex};
use super::catalog::{self, ListingClient, TransportError};
use super::domain::{
    EducationLevel, ExperienceLevel, GenderPreference, Job, JobCategory, JobDuration, JobId,
    JobType, SortKey, WorkLocation,
};
use super::filter::{self, BudgetBand, FilterState};
use super::presets::{self, FilterPreset, PresetError};
use super::reveal::{RevealController, RevealPhase};
use super::suggest::suggest;

/// Identifies the catalog load an annotation pass belongs to, so results that
/// land after a reload (or teardown) are discarded instead of corrupting the
/// current status map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusToken(u64);

/// Per-tab owner of the discovery state: catalog snapshot, filter intent,
/// result window, and application-status annotations.
///
/// Every mutation that changes the filtered set funnels through `reapply`,
/// which pairs the engine rerun with a window reset in one step.
pub struct DiscoverySession<C> {
    client: Arc<C>,
    page_limit: u32,
    authenticated: bool,
    catalog: Vec<Job>,
    load_error: Option<TransportError>,
    filters: FilterState,
    sort: SortKey,
    matched: Vec<Job>,
    reveal: RevealController,
    statuses: ApplicationStatusIndex,
    generation: u64,
    closed: bool,
}

impl<C> DiscoverySession<C>
where
    C: ListingClient,
{
    pub fn new(client: Arc<C>, authenticated: bool, page_limit: u32) -> Self {
        Self {
            client,
            page_limit,
            authenticated,
            catalog: Vec::new(),
            load_error: None,
            filters: FilterState::default(),
            sort: SortKey::default(),
            matched: Vec::new(),
            reveal: RevealController::default(),
            statuses: ApplicationStatusIndex::default(),
            generation: 0,
            closed: false,
        }
    }

    /// Replace the catalog with a fresh collaborator load, reset the window,
    /// and rebuild annotations for authenticated callers. A transport failure
    /// degrades to an empty catalog carrying the error.
    pub async fn reload(&mut self) {
        if self.closed {
            return;
        }

        self.generation += 1;
        let loaded = catalog::load(self.client.as_ref(), 1, self.page_limit).await;
        self.catalog = loaded.jobs;
        self.load_error = loaded.error;
        self.statuses = ApplicationStatusIndex::default();
        self.reapply();

        if self.authenticated && !self.catalog.is_empty() {
            let token = self.status_token();
            let index = annotate(self.client.as_ref(), &self.catalog).await;
            self.install_statuses(token, index);
        }
    }

    /// Token for the current catalog generation. Hosts running annotation in
    /// the background pair it with `install_statuses`.
    pub fn status_token(&self) -> StatusToken {
        StatusToken(self.generation)
    }

    /// Install an annotation result. Returns false (and installs nothing)
    /// when the token is stale or the session was torn down.
    pub fn install_statuses(&mut self, token: StatusToken, index: ApplicationStatusIndex) -> bool {
        if self.closed || token.0 != self.generation {
            return false;
        }
        self.statuses = index;
        true
    }

    fn reapply(&mut self) {
        self.matched = filter::apply(&self.catalog, &self.filters, self.sort);
        self.reveal.reset(self.matched.len());
    }

    fn mutate(&mut self, change: impl FnOnce(&mut FilterState)) {
        if self.closed {
            return;
        }
        change(&mut self.filters);
        self.reapply();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.mutate(|filters| filters.query = query);
    }

    pub fn toggle_category(&mut self, category: JobCategory) {
        self.mutate(|filters| filter::toggle(&mut filters.categories, category));
    }

    pub fn toggle_budget_band(&mut self, band: BudgetBand) {
        self.mutate(|filters| filter::toggle(&mut filters.budget_bands, band));
    }

    pub fn toggle_duration(&mut self, duration: JobDuration) {
        self.mutate(|filters| filter::toggle(&mut filters.durations, duration));
    }

    pub fn toggle_job_type(&mut self, job_type: JobType) {
        self.mutate(|filters| filter::toggle(&mut filters.job_types, job_type));
    }

    pub fn toggle_work_location(&mut self, location: WorkLocation) {
        self.mutate(|filters| filter::toggle(&mut filters.work_locations, location));
    }

    pub fn toggle_experience_level(&mut self, level: ExperienceLevel) {
        self.mutate(|filters| filter::toggle(&mut filters.experience_levels, level));
    }

    pub fn toggle_education_level(&mut self, level: EducationLevel) {
        self.mutate(|filters| filter::toggle(&mut filters.education_levels, level));
    }

    pub fn toggle_gender(&mut self, gender: GenderPreference) {
        self.mutate(|filters| filter::toggle(&mut filters.genders, gender));
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if self.closed {
            return;
        }
        self.sort = sort;
        self.reapply();
    }

    /// Replace the whole filter intent at once (e.g. from a search request).
    pub fn set_filters(&mut self, filters: FilterState, sort: SortKey) {
        if self.closed {
            return;
        }
        self.filters = filters;
        self.sort = sort;
        self.reapply();
    }

    pub fn clear_filters(&mut self) {
        self.mutate(FilterState::clear);
    }

    pub fn apply_preset(&mut self, name: &str) -> Result<(), PresetError> {
        if self.closed {
            return Ok(());
        }
        let catalog = FilterPreset::standard();
        presets::apply_named(&catalog, name, &mut self.filters)?;
        self.reapply();
        Ok(())
    }

    /// Host-driven "request more" signal. Returns whether the window grew;
    /// triggers while loading, after exhaustion, or after teardown are
    /// silently ignored.
    pub fn request_more(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.reveal.reveal()
    }

    pub fn suggestions(&self, query: &str) -> Vec<String> {
        suggest(query, &self.catalog, &JobCategory::ALL)
    }

    /// Delete a posting through the collaborator (which enforces
    /// authorization) and drop it from the local snapshot.
    pub async fn delete_job(&mut self, job_id: &JobId) -> Result<(), TransportError> {
        if self.closed {
            return Ok(());
        }
        self.client.delete_job(job_id).await?;
        self.catalog.retain(|job| &job.id != job_id);
        self.reapply();
        Ok(())
    }

    /// Tear the session down: later reveal triggers and annotation installs
    /// are ignored.
    pub fn shutdown(&mut self) {
        self.closed = true;
        self.generation += 1;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The currently revealed prefix of the filtered set.
    pub fn visible(&self) -> &[Job] {
        &self.matched[..self.reveal.revealed()]
    }

    pub fn has_more(&self) -> bool {
        self.reveal.has_more()
    }

    pub fn reveal_phase(&self) -> RevealPhase {
        self.reveal.phase()
    }

    pub fn total_matches(&self) -> usize {
        self.matched.len()
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn load_error(&self) -> Option<&TransportError> {
        self.load_error.as_ref()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn has_applied(&self, job_id: &JobId) -> bool {
        self.statuses.has_applied(job_id)
    }

    pub fn applied_count(&self) -> usize {
        self.statuses.applied_count()
    }
}
