//! Content records describing the showcased applications.
//!
//! Records are compiled-in constants, so every text field borrows `'static` data.

use crate::platforms::PlatformSet;
use serde::Serialize;

/// One showcased application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    pub logo: &'static str,
    pub icon: &'static str,
    pub screenshots: &'static [&'static str],
    pub features: &'static [AppFeature],
    pub links: &'static [AppLink],
    pub status: AppStatus,
    pub platforms: PlatformSet,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub gradient: &'static str,
    pub stats: Option<AppStats>,
    pub testimonial: Option<Testimonial>,
}

impl AppRecord {
    /// Paragraphs of the long description, falling back to the short description.
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.long_description
            .unwrap_or(self.description)
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Rating published in the record statistics, if any.
    #[must_use]
    pub fn rating(&self) -> Option<&'static str> {
        self.stats.as_ref().and_then(|s| s.rating)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppFeature {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppLink {
    pub kind: LinkKind,
    pub url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

/// Distribution channel of an [`AppLink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    PlayStore,
    AppStore,
    Website,
    GitHub,
}

impl LinkKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlayStore => "playstore",
            Self::AppStore => "appstore",
            Self::Website => "website",
            Self::GitHub => "github",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppStatus {
    Active,
    Beta,
    ComingSoon,
}

impl AppStatus {
    /// Stable tag, also the message key under `common.*`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Beta => "beta",
            Self::ComingSoon => "coming-soon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}
