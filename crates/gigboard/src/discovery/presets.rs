use std::fmt;

use super::domain::{ExperienceLevel, WorkLocation};
use super::filter::{BudgetBand, FilterState};

/// Named, fixed bundle of facet selections. Applying a preset clears every
/// existing filter first; facets the preset does not name stay cleared.
#[derive(Debug, Clone)]
pub struct FilterPreset {
    pub name: &'static str,
    pub budget_bands: Vec<BudgetBand>,
    pub work_locations: Vec<WorkLocation>,
    pub experience_levels: Vec<ExperienceLevel>,
}

impl FilterPreset {
    /// The presets offered in the discovery sidebar.
    pub fn standard() -> Vec<Self> {
        vec![
            Self {
                name: "High Budget",
                budget_bands: vec![BudgetBand::AboveTwentyThousand],
                work_locations: Vec::new(),
                experience_levels: Vec::new(),
            },
            Self {
                name: "Remote Only",
                budget_bands: Vec::new(),
                work_locations: vec![WorkLocation::Remote],
                experience_levels: Vec::new(),
            },
            Self {
                name: "Entry Level",
                budget_bands: Vec::new(),
                work_locations: Vec::new(),
                experience_levels: vec![ExperienceLevel::EntryLevel, ExperienceLevel::Junior],
            },
        ]
    }

    pub fn apply_to(&self, filters: &mut FilterState) {
        filters.clear();
        filters.budget_bands = self.budget_bands.iter().copied().collect();
        filters.work_locations = self.work_locations.iter().copied().collect();
        filters.experience_levels = self.experience_levels.iter().copied().collect();
    }
}

/// Apply the preset with the given name from a preset catalog.
pub fn apply_named(
    presets: &[FilterPreset],
    name: &str,
    filters: &mut FilterState,
) -> Result<(), PresetError> {
    let preset = presets
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| PresetError::UnknownPreset(name.to_string()))?;
    preset.apply_to(filters);
    Ok(())
}

#[derive(Debug)]
pub enum PresetError {
    UnknownPreset(String),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::UnknownPreset(name) => write!(f, "preset with name {} not found", name),
        }
    }
}

impl std::error::Error for PresetError {}
