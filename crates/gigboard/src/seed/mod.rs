//! Catalog seeding from CSV exports of job postings, used by the demo CLI
//! and the in-memory listing collaborator.

mod parser;

use crate::discovery::catalog::{RawAmount, RawJob, RawPoster, RawTimestamp};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum SeedImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for SeedImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedImportError::Io(err) => write!(f, "failed to read seed export: {}", err),
            SeedImportError::Csv(err) => write!(f, "invalid seed CSV data: {}", err),
        }
    }
}

impl std::error::Error for SeedImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedImportError::Io(err) => Some(err),
            SeedImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SeedImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SeedImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct JobSeedImporter;

impl JobSeedImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawJob>, SeedImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse a seed export into raw records ready for normalization. Rows
    /// with a blank title are dropped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawJob>, SeedImportError> {
        let mut jobs = Vec::new();

        for record in parser::parse_records(reader)? {
            if record.title.trim().is_empty() {
                continue;
            }

            let id = format!("seed-{:04}", jobs.len() + 1);
            jobs.push(RawJob {
                id,
                title: record.title,
                description: record.description,
                category: record.category,
                budget: record.budget.map(RawAmount::Number),
                salary: None,
                duration: record.duration,
                job_type: record.job_type,
                work_location: record.work_location,
                city: None,
                experience: record.experience,
                education: record.education,
                gender: record.gender,
                vacancies: record.vacancies,
                skills: record.skills,
                created_at: record.posted_at.map(RawTimestamp::Text),
                posted_by: record.posted_by.map(RawPoster::Id),
                job_link: record.link,
            });
        }

        Ok(jobs)
    }
}
