use serde::Deserialize;

/// Content records backing the portfolio sections. These are read-only
/// inputs to rendering; nothing in the engine depends on their values
/// beyond field presence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortfolioContent {
    pub personal: PersonalInfo,
    pub about: AboutContent,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<Project>,
    pub education: Vec<EducationItem>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    pub nav: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub tagline: String,
    pub resume_url: Option<String>,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AboutContent {
    pub summary: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// One role, most recent first in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExperienceItem {
    pub id: String,
    pub role: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub tech_stack: Vec<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub bullets: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EducationItem {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub grade: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub venue: String,
    pub track: String,
    pub year: String,
    pub url: Option<String>,
}

/// Entry of the sticky navigation bar; `id` doubles as the page section
/// anchor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub id: String,
    pub label: String,
}
