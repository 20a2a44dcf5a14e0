use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use gigboard::discovery::{
    BudgetBand, DiscoverySession, ExperienceLevel, FilterPreset, JobCategory, ListingClient,
    SortKey, WorkLocation,
};
use gigboard::error::AppError;
use gigboard::seed::JobSeedImporter;

use crate::infra::{sample_jobs, InMemoryListingClient};

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Seed the catalog from a CSV export instead of the built-in samples
    #[arg(long)]
    pub(crate) seed_csv: Option<PathBuf>,
    /// Free-text query matched against titles and categories
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Restrict to a category by display label (repeatable)
    #[arg(long = "category", value_parser = parse_category)]
    pub(crate) categories: Vec<JobCategory>,
    /// Restrict to a budget band by display label (repeatable)
    #[arg(long = "budget-band", value_parser = parse_budget_band)]
    pub(crate) budget_bands: Vec<BudgetBand>,
    /// Restrict to a work location (repeatable)
    #[arg(long = "work-location", value_parser = parse_work_location)]
    pub(crate) work_locations: Vec<WorkLocation>,
    /// Restrict to an experience level (repeatable)
    #[arg(long = "experience", value_parser = parse_experience)]
    pub(crate) experience_levels: Vec<ExperienceLevel>,
    /// Apply a named preset before the other filter flags
    #[arg(long)]
    pub(crate) preset: Option<String>,
    /// Sort key: newest, oldest, budget_low, budget_high
    #[arg(long, default_value = "newest", value_parser = parse_sort)]
    pub(crate) sort: SortKey,
    /// Additional pages to reveal after the first
    #[arg(long, default_value_t = 0)]
    pub(crate) reveals: u32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed the catalog from a CSV export instead of the built-in samples
    #[arg(long)]
    pub(crate) seed_csv: Option<PathBuf>,
    /// Query used for the search and suggestion portion of the demo
    #[arg(long, default_value = "design")]
    pub(crate) query: String,
    /// Skip the authenticated application-status portion of the demo
    #[arg(long)]
    pub(crate) skip_annotation: bool,
}

pub(crate) async fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        seed_csv,
        query,
        categories,
        budget_bands,
        work_locations,
        experience_levels,
        preset,
        sort,
        reveals,
    } = args;

    let jobs = load_catalog(seed_csv)?;
    let client = Arc::new(InMemoryListingClient::with_jobs(jobs));
    let mut session = DiscoverySession::new(client, false, 50);
    session.reload().await;

    if let Some(error) = session.load_error() {
        println!("Catalog degraded: {error}");
    }

    if let Some(name) = preset {
        if session.apply_preset(&name).is_err() {
            println!("Unknown preset '{name}'. Available presets:");
            for preset in FilterPreset::standard() {
                println!("  - {}", preset.name);
            }
            return Ok(());
        }
    }

    for category in categories {
        session.toggle_category(category);
    }
    for band in budget_bands {
        session.toggle_budget_band(band);
    }
    for location in work_locations {
        session.toggle_work_location(location);
    }
    for level in experience_levels {
        session.toggle_experience_level(level);
    }
    if let Some(query) = query {
        session.set_query(query);
    }
    session.set_sort(sort);

    render_window(&session, "Search results");
    for _ in 0..reveals {
        if !session.request_more() {
            break;
        }
        render_window(&session, "Revealed more");
    }

    if session.has_more() {
        println!(
            "\n{} more matches available (reveal in pages of 10)",
            session.total_matches() - session.visible().len()
        );
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed_csv,
        query,
        skip_annotation,
    } = args;

    let jobs = load_catalog(seed_csv)?;
    let client = InMemoryListingClient::with_jobs(jobs.clone());
    if !skip_annotation {
        // Pretend the caller already applied to the two freshest postings.
        for job in jobs.iter().take(2) {
            client.mark_applied(&job.id);
        }
    }

    let client = Arc::new(client);
    let mut session = DiscoverySession::new(client, !skip_annotation, 50);
    session.reload().await;

    println!("Gigboard discovery demo");
    println!(
        "Catalog: {} postings loaded{}",
        session.catalog_len(),
        match session.load_error() {
            Some(error) => format!(" (degraded: {error})"),
            None => String::new(),
        }
    );

    render_window(&session, "Newest postings");

    let prefix: String = query.chars().take(3).collect();
    let suggestions = session.suggestions(&prefix);
    println!("\nSuggestions for '{prefix}'");
    if suggestions.is_empty() {
        println!("  (none)");
    }
    for suggestion in suggestions.iter().take(8) {
        println!("  - {suggestion}");
    }

    session.set_query(query.clone());
    render_window(&session, &format!("Search '{query}'"));

    println!("\nPreset walkthrough");
    for preset in FilterPreset::standard() {
        if session.apply_preset(preset.name).is_err() {
            continue;
        }
        println!(
            "- {}: {} of {} postings match",
            preset.name,
            session.total_matches(),
            session.catalog_len()
        );
    }
    session.clear_filters();

    println!("\nInfinite scroll walkthrough");
    println!(
        "- window {} / {} (has_more: {})",
        session.visible().len(),
        session.total_matches(),
        session.has_more()
    );
    while session.request_more() {
        println!(
            "- window {} / {} (has_more: {})",
            session.visible().len(),
            session.total_matches(),
            session.has_more()
        );
    }

    if !skip_annotation {
        println!(
            "\nApplication status: {} posting(s) already applied to",
            session.applied_count()
        );
    }

    Ok(())
}

fn load_catalog(seed_csv: Option<PathBuf>) -> Result<Vec<gigboard::discovery::RawJob>, AppError> {
    match seed_csv {
        Some(path) => Ok(JobSeedImporter::from_path(path)?),
        None => Ok(sample_jobs()),
    }
}

fn render_window<C>(session: &DiscoverySession<C>, heading: &str)
where
    C: ListingClient,
{
    println!(
        "\n{heading} ({} of {} matches shown)",
        session.visible().len(),
        session.total_matches()
    );
    for (rank, job) in session.visible().iter().enumerate() {
        let applied = if session.has_applied(&job.id) {
            " [applied]"
        } else {
            ""
        };
        println!(
            "{:>3}. {} | {} ETB | {} | {}{}",
            rank + 1,
            job.title,
            job.budget,
            job.category.label(),
            job.work_location.label(),
            applied
        );
    }
}

fn parse_category(raw: &str) -> Result<JobCategory, String> {
    JobCategory::from_label(raw).ok_or_else(|| format!("unknown category '{raw}'"))
}

fn parse_budget_band(raw: &str) -> Result<BudgetBand, String> {
    BudgetBand::from_label(raw).ok_or_else(|| format!("unknown budget band '{raw}'"))
}

fn parse_work_location(raw: &str) -> Result<WorkLocation, String> {
    WorkLocation::from_label(raw).ok_or_else(|| format!("unknown work location '{raw}'"))
}

fn parse_experience(raw: &str) -> Result<ExperienceLevel, String> {
    ExperienceLevel::from_label(raw).ok_or_else(|| format!("unknown experience level '{raw}'"))
}

fn parse_sort(raw: &str) -> Result<SortKey, String> {
    SortKey::from_label(raw).ok_or_else(|| format!("unknown sort key '{raw}'"))
}
