use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One parsed row from a catalog seed export.
#[derive(Debug)]
pub(crate) struct SeedRecord {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) category: Option<String>,
    pub(crate) budget: Option<f64>,
    pub(crate) duration: Option<String>,
    pub(crate) job_type: Option<String>,
    pub(crate) work_location: Option<String>,
    pub(crate) experience: Option<String>,
    pub(crate) education: Option<String>,
    pub(crate) gender: Option<String>,
    pub(crate) vacancies: Option<u32>,
    pub(crate) skills: Vec<String>,
    pub(crate) posted_at: Option<String>,
    pub(crate) posted_by: Option<String>,
    pub(crate) link: Option<String>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<SeedRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<SeedRow>() {
        let row = record?;
        records.push(SeedRecord {
            title: row.title,
            description: row.description.unwrap_or_default(),
            category: row.category,
            budget: row.budget.as_deref().and_then(parse_amount),
            duration: row.duration,
            job_type: row.job_type,
            work_location: row.work_location,
            experience: row.experience,
            education: row.education,
            gender: row.gender,
            vacancies: row.vacancies.as_deref().and_then(parse_count),
            skills: row.skills.as_deref().map(split_skills).unwrap_or_default(),
            posted_at: row.posted_at,
            posted_by: row.posted_by,
            link: row.link,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct SeedRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Description", default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(rename = "Category", default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(rename = "Budget", default, deserialize_with = "empty_string_as_none")]
    budget: Option<String>,
    #[serde(rename = "Duration", default, deserialize_with = "empty_string_as_none")]
    duration: Option<String>,
    #[serde(rename = "Job Type", default, deserialize_with = "empty_string_as_none")]
    job_type: Option<String>,
    #[serde(rename = "Work Location", default, deserialize_with = "empty_string_as_none")]
    work_location: Option<String>,
    #[serde(rename = "Experience", default, deserialize_with = "empty_string_as_none")]
    experience: Option<String>,
    #[serde(rename = "Education", default, deserialize_with = "empty_string_as_none")]
    education: Option<String>,
    #[serde(rename = "Gender", default, deserialize_with = "empty_string_as_none")]
    gender: Option<String>,
    #[serde(rename = "Vacancies", default, deserialize_with = "empty_string_as_none")]
    vacancies: Option<String>,
    #[serde(rename = "Skills", default, deserialize_with = "empty_string_as_none")]
    skills: Option<String>,
    #[serde(rename = "Posted At", default, deserialize_with = "empty_string_as_none")]
    posted_at: Option<String>,
    #[serde(rename = "Posted By", default, deserialize_with = "empty_string_as_none")]
    posted_by: Option<String>,
    #[serde(rename = "Link", default, deserialize_with = "empty_string_as_none")]
    link: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_amount(value: &str) -> Option<f64> {
    value.trim().replace(',', "").parse::<f64>().ok()
}

fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

/// Skills cells hold semicolon-separated lists.
fn split_skills(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) fn split_skills_for_tests(value: &str) -> Vec<String> {
    split_skills(value)
}
