use vapps_derive::api_model;
use vapps_domain::content::{AppFeature, AppRecord, AppStats};

#[api_model]
/// Compact listing entry
pub struct AppSummary {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub status: String,
    /// Platform tags in `ios, android, web` order
    pub platforms: Vec<String>,
    pub logo: String,
    pub primary_color: String,
    pub featured: bool,
}

#[api_model(deny_unknown_fields = false)]
/// Full application record
pub struct AppDetail {
    #[serde(flatten)]
    pub summary: AppSummary,
    pub description: String,
    pub long_description: Option<String>,
    pub icon: String,
    pub screenshots: Vec<String>,
    pub features: Vec<FeatureDto>,
    pub secondary_color: String,
    pub gradient: String,
    pub stats: Option<StatsDto>,
}

#[api_model]
/// Feature highlight
pub struct FeatureDto {
    pub title: String,
    pub description: String,
}

#[api_model]
/// Published usage statistics
pub struct StatsDto {
    pub users: Option<String>,
    pub rating: Option<String>,
}

#[api_model]
/// Error body of the content API
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl AppSummary {
    #[must_use]
    pub fn from_record(record: &AppRecord, featured: bool) -> Self {
        Self {
            slug: record.slug.to_owned(),
            name: record.name.to_owned(),
            tagline: record.tagline.to_owned(),
            status: record.status.as_str().to_owned(),
            platforms: record.platforms.tags().map(str::to_owned).collect(),
            logo: record.logo.to_owned(),
            primary_color: record.primary_color.to_owned(),
            featured,
        }
    }
}

impl AppDetail {
    #[must_use]
    pub fn from_record(record: &AppRecord, featured: bool) -> Self {
        Self {
            summary: AppSummary::from_record(record, featured),
            description: record.description.to_owned(),
            long_description: record.long_description.map(str::to_owned),
            icon: record.icon.to_owned(),
            screenshots: record.screenshots.iter().map(|s| (*s).to_owned()).collect(),
            features: record.features.iter().map(FeatureDto::from).collect(),
            secondary_color: record.secondary_color.to_owned(),
            gradient: record.gradient.to_owned(),
            stats: record.stats.as_ref().map(StatsDto::from),
        }
    }
}

impl From<&AppFeature> for FeatureDto {
    fn from(feature: &AppFeature) -> Self {
        Self { title: feature.title.to_owned(), description: feature.description.to_owned() }
    }
}

impl From<&AppStats> for StatsDto {
    fn from(stats: &AppStats) -> Self {
        Self { users: stats.users.map(str::to_owned), rating: stats.rating.map(str::to_owned) }
    }
}
