use vapps_domain::config::SiteSettings;

/// `robots.txt`: everything but the JSON API is crawlable; points at the sitemap.
#[must_use]
pub fn robots_txt(settings: &SiteSettings) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}\n",
        settings.url("/sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_at_the_sitemap() {
        let txt = robots_txt(&SiteSettings::default());
        assert!(txt.starts_with("User-agent: *\n"));
        assert!(txt.ends_with("Sitemap: https://various-apps.com/sitemap.xml\n"));
    }
}
