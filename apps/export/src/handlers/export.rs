//! Writes the whole site as static files.
//!
//! Every page lands at `<path>/index.html`. Default-locale addresses with an
//! explicit prefix (the language switcher links to them) get redirect stubs.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vapps::domain::config::SiteConfig;
use vapps::domain::routes::Route;
use vapps::features::i18n::Translator;
use vapps::features::pages::{PageStatus, RenderContext, page_path, pages, redirect_stub, render};
use vapps::features::seo::Synthesizer;
use vapps::features::seo::robots::robots_txt;
use vapps::features::seo::sitemap::to_xml;

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub redirects: usize,
    pub assets: usize,
}

/// Exports every page plus `404.html`, `sitemap.xml` and `robots.txt` into `out`,
/// then copies the static directory over when it exists.
///
/// # Errors
/// Returns an error if the content records are invalid, a page fails to render,
/// or a file cannot be written.
pub fn export(cfg: &SiteConfig, out: &Path, lastmod: NaiveDate, year: i32) -> Result<ExportSummary> {
    vapps::features::catalog::validate().context("Content records are invalid")?;

    let default = cfg.site.default_locale;
    let translator = Translator::embedded(default).context("Failed to load message catalogs")?;
    let synthesizer = Synthesizer::new(cfg.site.clone(), translator);
    let ctx = RenderContext::new(&synthesizer, year);

    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;
    info!(out = %out.display(), %default, "Exporting site");

    let inventory = pages();
    let mut redirects = 0;

    for page in &inventory {
        let path = page_path(page, default);
        let rendered = render(&ctx, page.locale, Some(page.route)).with_context(|| format!("Rendering {path}"))?;
        if rendered.status != PageStatus::Ok {
            bail!("Page {path} rendered as not found");
        }
        write(&page_file(out, &path), &rendered.html)?;
        debug!(%path, "Page written");

        if page.locale == default {
            let prefixed = prefixed_path(&path, &default.to_string());
            write(&page_file(out, &prefixed), &redirect_stub(&path))?;
            redirects += 1;
        }
    }

    let not_found = render(&ctx, default, None).context("Rendering not-found page")?;
    write(&out.join("404.html"), &not_found.html)?;

    let entries = synthesizer.sitemap_entries(&inventory, lastmod);
    write(&out.join("sitemap.xml"), &to_xml(&entries).context("Serializing sitemap")?)?;
    write(&out.join("robots.txt"), &robots_txt(&cfg.site))?;

    let static_dir = &cfg.storage.static_dir;
    let assets = if static_dir.is_dir() { copy_dir(static_dir, out)? } else { 0 };

    let summary = ExportSummary { pages: inventory.len(), redirects, assets };
    info!(pages = summary.pages, redirects, assets, sitemap = entries.len(), "Export complete");
    Ok(summary)
}

/// `/en` + path, for the redirect stub of a default-locale page.
fn prefixed_path(path: &str, locale: &str) -> String {
    if path == Route::Home.to_string() { format!("/{locale}") } else { format!("/{locale}{path}") }
}

fn page_file(out: &Path, path: &str) -> PathBuf {
    let relative = path.trim_matches('/');
    if relative.is_empty() { out.join("index.html") } else { out.join(relative).join("index.html") }
}

fn write(file: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(file, contents).with_context(|| format!("Failed to write {}", file.display()))
}

fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(from).with_context(|| format!("Failed to read {}", from.display()))? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copied += copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| format!("Failed to copy {}", entry.path().display()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_files_nest_under_index_html() {
        let out = Path::new("dist");
        assert_eq!(page_file(out, "/"), out.join("index.html"));
        assert_eq!(page_file(out, "/tr/apps/viona"), out.join("tr/apps/viona/index.html"));
    }

    #[test]
    fn default_pages_get_prefixed_stub_paths() {
        assert_eq!(prefixed_path("/", "en"), "/en");
        assert_eq!(prefixed_path("/apps/viona", "en"), "/en/apps/viona");
    }

    #[test]
    fn export_writes_the_full_site() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut cfg = SiteConfig::default();
        cfg.storage.static_dir = dir.path().join("no-static");
        let out = dir.path().join("site");

        let lastmod = NaiveDate::from_ymd_opt(2025, 1, 27).context("date")?;
        let summary = export(&cfg, &out, lastmod, 2025)?;

        assert_eq!(summary, ExportSummary { pages: 14, redirects: 7, assets: 0 });
        assert!(out.join("index.html").is_file());
        assert!(out.join("tr/apps/ai-poster/privacy/index.html").is_file());
        assert!(out.join("en/apps/viona/index.html").is_file());
        assert!(fs::read_to_string(out.join("404.html"))?.contains("App Not Found"));
        assert!(fs::read_to_string(out.join("sitemap.xml"))?.contains("<lastmod>2025-01-27</lastmod>"));
        Ok(())
    }
}
