use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{
    EducationLevel, ExperienceLevel, GenderPreference, Job, JobCategory, JobDuration, JobType,
    SortKey, WorkLocation,
};

/// Budget-range facet vocabulary. Ranges are half-open `[min, max)`; the top
/// band is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetBand {
    UnderFiveThousand,
    FiveToTenThousand,
    TenToTwentyThousand,
    AboveTwentyThousand,
}

impl BudgetBand {
    pub const ALL: [Self; 4] = [
        Self::UnderFiveThousand,
        Self::FiveToTenThousand,
        Self::TenToTwentyThousand,
        Self::AboveTwentyThousand,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderFiveThousand => "Under 5,000 ETB",
            Self::FiveToTenThousand => "5,000 - 10,000 ETB",
            Self::TenToTwentyThousand => "10,000 - 20,000 ETB",
            Self::AboveTwentyThousand => "Above 20,000 ETB",
        }
    }

    pub const fn bounds(self) -> (u32, Option<u32>) {
        match self {
            Self::UnderFiveThousand => (0, Some(5_000)),
            Self::FiveToTenThousand => (5_000, Some(10_000)),
            Self::TenToTwentyThousand => (10_000, Some(20_000)),
            Self::AboveTwentyThousand => (20_000, None),
        }
    }

    pub fn contains(self, budget: u32) -> bool {
        let (min, max) = self.bounds();
        budget >= min && max.map_or(true, |upper| budget < upper)
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|band| band.label().eq_ignore_ascii_case(trimmed))
    }
}

/// The caller-owned filter intent. An empty selection set means the facet is
/// inactive; within an active facet the selected values are ORed, across
/// facets the constraints are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub categories: BTreeSet<JobCategory>,
    #[serde(default)]
    pub budget_bands: BTreeSet<BudgetBand>,
    #[serde(default)]
    pub durations: BTreeSet<JobDuration>,
    #[serde(default)]
    pub job_types: BTreeSet<JobType>,
    #[serde(default)]
    pub work_locations: BTreeSet<WorkLocation>,
    #[serde(default)]
    pub experience_levels: BTreeSet<ExperienceLevel>,
    #[serde(default)]
    pub education_levels: BTreeSet<EducationLevel>,
    #[serde(default)]
    pub genders: BTreeSet<GenderPreference>,
}

impl FilterState {
    /// "Clear all": empties every facet and the search box.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_inactive(&self) -> bool {
        self.query.trim().is_empty()
            && self.categories.is_empty()
            && self.budget_bands.is_empty()
            && self.durations.is_empty()
            && self.job_types.is_empty()
            && self.work_locations.is_empty()
            && self.experience_levels.is_empty()
            && self.education_levels.is_empty()
            && self.genders.is_empty()
    }

    /// True when the job passes every active facet.
    pub fn matches(&self, job: &Job) -> bool {
        let query = self.query.trim();
        if !query.is_empty() {
            let needle = query.to_lowercase();
            let title_hit = job.title.to_lowercase().contains(&needle);
            let category_hit = job.category.label().to_lowercase().contains(&needle);
            if !title_hit && !category_hit {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&job.category) {
            return false;
        }

        if !self.budget_bands.is_empty()
            && !self.budget_bands.iter().any(|band| band.contains(job.budget))
        {
            return false;
        }

        if !self.durations.is_empty() && !self.durations.contains(&job.duration) {
            return false;
        }

        if !self.job_types.is_empty() && !self.job_types.contains(&job.job_type) {
            return false;
        }

        if !self.work_locations.is_empty() && !self.work_locations.contains(&job.work_location) {
            return false;
        }

        if !self.experience_levels.is_empty() {
            match job.experience {
                Some(level) if self.experience_levels.contains(&level) => {}
                _ => return false,
            }
        }

        if !self.education_levels.is_empty() {
            match job.education {
                Some(level) if self.education_levels.contains(&level) => {}
                _ => return false,
            }
        }

        if !self.genders.is_empty() {
            // Selecting "Any" admits every job, including jobs with no stated
            // preference. Asymmetric with the other facets; kept for
            // compatibility with existing saved filters.
            let wildcard = self.genders.contains(&GenderPreference::Any);
            let member = job
                .gender
                .map_or(false, |gender| self.genders.contains(&gender));
            if !wildcard && !member {
                return false;
            }
        }

        true
    }
}

/// Run the full filter + sort pass over a catalog snapshot. Pure and
/// synchronous; ties keep catalog order because the sort is stable.
pub fn apply(catalog: &[Job], filters: &FilterState, sort: SortKey) -> Vec<Job> {
    let mut matched: Vec<Job> = catalog
        .iter()
        .filter(|job| filters.matches(job))
        .cloned()
        .collect();

    match sort {
        SortKey::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::BudgetLow => matched.sort_by(|a, b| a.budget.cmp(&b.budget)),
        SortKey::BudgetHigh => matched.sort_by(|a, b| b.budget.cmp(&a.budget)),
    }

    matched
}

/// Toggle a value in a facet selection set: absent inserts, present removes.
pub fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}
