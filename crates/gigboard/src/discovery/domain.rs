use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog jobs, unique within one catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Canonical job posting after normalization. Immutable until the whole
/// catalog is replaced by a fresh load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub category: JobCategory,
    /// Non-negative budget in ETB.
    pub budget: u32,
    pub duration: JobDuration,
    pub job_type: JobType,
    pub work_location: WorkLocation,
    pub experience: Option<ExperienceLevel>,
    pub education: Option<EducationLevel>,
    pub gender: Option<GenderPreference>,
    pub vacancies: Option<u32>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub posted_by: String,
    pub external_link: Option<String>,
}

/// Job categories, aligned with the posting form's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    SoftwareDevelopment,
    WebDevelopment,
    MobileAppDevelopment,
    GameDevelopment,
    DevOpsEngineering,
    CloudComputing,
    Cybersecurity,
    DataScience,
    MachineLearningAndAi,
    BusinessIntelligence,
    DataAnalysis,
    DatabaseAdministration,
    UiUxDesign,
    GraphicDesign,
    MotionGraphics,
    ThreeDAnimation,
    VideoEditing,
    ContentWriting,
    TechnicalWriting,
    Copywriting,
    TranslationAndLocalization,
    DigitalMarketing,
    SeoAndSem,
    SocialMediaMarketing,
    EmailMarketing,
    SalesAndBusinessDevelopment,
    CustomerSuccess,
    TechnicalSupport,
    CustomerService,
    HumanResourcesManagement,
    RecruitmentAndTalentAcquisition,
    PayrollAndBenefitsAdministration,
    FinancialAnalysis,
    AccountingAndBookkeeping,
    TaxConsulting,
    LegalServices,
    ContractManagement,
    ComplianceAndRiskManagement,
    ProjectManagement,
    ProgramManagement,
    AgileCoaching,
    ProductManagement,
    OperationsManagement,
    SupplyChainAndLogistics,
    HealthcareAndMedicalServices,
    Nursing,
    Pharmacy,
    EducationAndTraining,
    InstructionalDesign,
    CivilEngineering,
    MechanicalEngineering,
    ElectricalEngineering,
    EnvironmentalConsulting,
    EventPlanning,
    PublicRelations,
    MarketResearch,
    RealEstateManagement,
    HospitalityAndTourism,
    Other,
}

impl JobCategory {
    pub const ALL: [Self; 59] = [
        Self::SoftwareDevelopment,
        Self::WebDevelopment,
        Self::MobileAppDevelopment,
        Self::GameDevelopment,
        Self::DevOpsEngineering,
        Self::CloudComputing,
        Self::Cybersecurity,
        Self::DataScience,
        Self::MachineLearningAndAi,
        Self::BusinessIntelligence,
        Self::DataAnalysis,
        Self::DatabaseAdministration,
        Self::UiUxDesign,
        Self::GraphicDesign,
        Self::MotionGraphics,
        Self::ThreeDAnimation,
        Self::VideoEditing,
        Self::ContentWriting,
        Self::TechnicalWriting,
        Self::Copywriting,
        Self::TranslationAndLocalization,
        Self::DigitalMarketing,
        Self::SeoAndSem,
        Self::SocialMediaMarketing,
        Self::EmailMarketing,
        Self::SalesAndBusinessDevelopment,
        Self::CustomerSuccess,
        Self::TechnicalSupport,
        Self::CustomerService,
        Self::HumanResourcesManagement,
        Self::RecruitmentAndTalentAcquisition,
        Self::PayrollAndBenefitsAdministration,
        Self::FinancialAnalysis,
        Self::AccountingAndBookkeeping,
        Self::TaxConsulting,
        Self::LegalServices,
        Self::ContractManagement,
        Self::ComplianceAndRiskManagement,
        Self::ProjectManagement,
        Self::ProgramManagement,
        Self::AgileCoaching,
        Self::ProductManagement,
        Self::OperationsManagement,
        Self::SupplyChainAndLogistics,
        Self::HealthcareAndMedicalServices,
        Self::Nursing,
        Self::Pharmacy,
        Self::EducationAndTraining,
        Self::InstructionalDesign,
        Self::CivilEngineering,
        Self::MechanicalEngineering,
        Self::ElectricalEngineering,
        Self::EnvironmentalConsulting,
        Self::EventPlanning,
        Self::PublicRelations,
        Self::MarketResearch,
        Self::RealEstateManagement,
        Self::HospitalityAndTourism,
        Self::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::SoftwareDevelopment => "Software Development",
            Self::WebDevelopment => "Web Development",
            Self::MobileAppDevelopment => "Mobile App Development",
            Self::GameDevelopment => "Game Development",
            Self::DevOpsEngineering => "DevOps Engineering",
            Self::CloudComputing => "Cloud Computing",
            Self::Cybersecurity => "Cybersecurity",
            Self::DataScience => "Data Science",
            Self::MachineLearningAndAi => "Machine Learning & AI",
            Self::BusinessIntelligence => "Business Intelligence",
            Self::DataAnalysis => "Data Analysis",
            Self::DatabaseAdministration => "Database Administration",
            Self::UiUxDesign => "UI/UX Design",
            Self::GraphicDesign => "Graphic Design",
            Self::MotionGraphics => "Motion Graphics",
            Self::ThreeDAnimation => "3D Animation",
            Self::VideoEditing => "Video Editing",
            Self::ContentWriting => "Content Writing",
            Self::TechnicalWriting => "Technical Writing",
            Self::Copywriting => "Copywriting",
            Self::TranslationAndLocalization => "Translation & Localization",
            Self::DigitalMarketing => "Digital Marketing",
            Self::SeoAndSem => "SEO & SEM",
            Self::SocialMediaMarketing => "Social Media Marketing",
            Self::EmailMarketing => "Email Marketing",
            Self::SalesAndBusinessDevelopment => "Sales & Business Development",
            Self::CustomerSuccess => "Customer Success",
            Self::TechnicalSupport => "Technical Support",
            Self::CustomerService => "Customer Service",
            Self::HumanResourcesManagement => "Human Resources Management",
            Self::RecruitmentAndTalentAcquisition => "Recruitment & Talent Acquisition",
            Self::PayrollAndBenefitsAdministration => "Payroll & Benefits Administration",
            Self::FinancialAnalysis => "Financial Analysis",
            Self::AccountingAndBookkeeping => "Accounting & Bookkeeping",
            Self::TaxConsulting => "Tax Consulting",
            Self::LegalServices => "Legal Services",
            Self::ContractManagement => "Contract Management",
            Self::ComplianceAndRiskManagement => "Compliance & Risk Management",
            Self::ProjectManagement => "Project Management",
            Self::ProgramManagement => "Program Management",
            Self::AgileCoaching => "Agile Coaching",
            Self::ProductManagement => "Product Management",
            Self::OperationsManagement => "Operations Management",
            Self::SupplyChainAndLogistics => "Supply Chain & Logistics",
            Self::HealthcareAndMedicalServices => "Healthcare & Medical Services",
            Self::Nursing => "Nursing",
            Self::Pharmacy => "Pharmacy",
            Self::EducationAndTraining => "Education & Training",
            Self::InstructionalDesign => "Instructional Design",
            Self::CivilEngineering => "Civil Engineering",
            Self::MechanicalEngineering => "Mechanical Engineering",
            Self::ElectricalEngineering => "Electrical Engineering",
            Self::EnvironmentalConsulting => "Environmental Consulting",
            Self::EventPlanning => "Event Planning",
            Self::PublicRelations => "Public Relations",
            Self::MarketResearch => "Market Research",
            Self::RealEstateManagement => "Real Estate Management",
            Self::HospitalityAndTourism => "Hospitality & Tourism",
            Self::Other => "Other",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
    }
}

/// Expected engagement length for a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobDuration {
    LessThanOneMonth,
    OneMonth,
    TwoMonths,
    ThreeMonths,
    MoreThanThreeMonths,
}

impl JobDuration {
    pub const ALL: [Self; 5] = [
        Self::LessThanOneMonth,
        Self::OneMonth,
        Self::TwoMonths,
        Self::ThreeMonths,
        Self::MoreThanThreeMonths,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::LessThanOneMonth => "Less than 1 month",
            Self::OneMonth => "1 month",
            Self::TwoMonths => "2 months",
            Self::ThreeMonths => "3 months",
            Self::MoreThanThreeMonths => "More than 3 months",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|duration| duration.label().eq_ignore_ascii_case(trimmed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Temporary,
    Internship,
}

impl JobType {
    pub const ALL: [Self; 6] = [
        Self::FullTime,
        Self::PartTime,
        Self::Contract,
        Self::Freelance,
        Self::Temporary,
        Self::Internship,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Freelance => "Freelance",
            Self::Temporary => "Temporary",
            Self::Internship => "Internship",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|job_type| job_type.label().eq_ignore_ascii_case(trimmed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkLocation {
    Remote,
    OnSite,
    Hybrid,
}

impl WorkLocation {
    pub const ALL: [Self; 3] = [Self::Remote, Self::OnSite, Self::Hybrid];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::OnSite => "On-site",
            Self::Hybrid => "Hybrid",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|location| location.label().eq_ignore_ascii_case(trimmed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    EntryLevel,
    Junior,
    MidLevel,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [Self; 6] = [
        Self::EntryLevel,
        Self::Junior,
        Self::MidLevel,
        Self::Senior,
        Self::Lead,
        Self::Executive,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::EntryLevel => "Entry Level",
            Self::Junior => "Junior",
            Self::MidLevel => "Mid-level",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
            Self::Executive => "Executive",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.label().eq_ignore_ascii_case(trimmed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    AssociateDegree,
    BachelorsDegree,
    MastersDegree,
    Phd,
    ProfessionalCertification,
    NoFormalEducationRequired,
}

impl EducationLevel {
    pub const ALL: [Self; 7] = [
        Self::HighSchool,
        Self::AssociateDegree,
        Self::BachelorsDegree,
        Self::MastersDegree,
        Self::Phd,
        Self::ProfessionalCertification,
        Self::NoFormalEducationRequired,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::AssociateDegree => "Associate Degree",
            Self::BachelorsDegree => "Bachelor's Degree",
            Self::MastersDegree => "Master's Degree",
            Self::Phd => "PhD",
            Self::ProfessionalCertification => "Professional Certification",
            Self::NoFormalEducationRequired => "No Formal Education Required",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.label().eq_ignore_ascii_case(trimmed))
    }
}

/// Poster-declared gender preference. `Any` is also the filter wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderPreference {
    Any,
    Male,
    Female,
    NonBinary,
}

impl GenderPreference {
    pub const ALL: [Self; 4] = [Self::Any, Self::Male, Self::Female, Self::NonBinary];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Male => "Male",
            Self::Female => "Female",
            Self::NonBinary => "Non-binary",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|gender| gender.label().eq_ignore_ascii_case(trimmed))
    }
}

/// Active result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    BudgetLow,
    BudgetHigh,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::BudgetLow, Self::BudgetHigh];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::BudgetLow => "budget_low",
            Self::BudgetHigh => "budget_high",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.label().eq_ignore_ascii_case(trimmed))
    }
}
