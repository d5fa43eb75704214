//! Serializes [`PageMetadata`] into `<head>` markup.

use crate::error::SeoError;
use crate::markup::escape;
use crate::metadata::PageMetadata;
use std::fmt::Write;

/// Writes the `<title>`, description, robots, link and social tags of `meta`.
///
/// # Errors
/// Returns [`SeoError::Format`] if writing into `out` fails.
pub fn write_head(out: &mut String, meta: &PageMetadata) -> Result<(), SeoError> {
    writeln!(out, "<title>{}</title>", escape(&meta.title))?;
    write_meta(out, "name", "description", &meta.description)?;
    if !meta.keywords.is_empty() {
        write_meta(out, "name", "keywords", &meta.keywords.join(", "))?;
    }
    write_meta(out, "name", "robots", meta.robots.content())?;

    if let Some(canonical) = &meta.canonical {
        writeln!(out, r#"<link rel="canonical" href="{}">"#, escape(canonical))?;
    }
    for alternate in &meta.alternates {
        writeln!(
            out,
            r#"<link rel="alternate" hreflang="{}" href="{}">"#,
            escape(&alternate.hreflang),
            escape(&alternate.href)
        )?;
    }

    let og = &meta.open_graph;
    write_meta(out, "property", "og:title", &og.title)?;
    write_meta(out, "property", "og:description", &og.description)?;
    if let Some(url) = &og.url {
        write_meta(out, "property", "og:url", url)?;
    }
    write_meta(out, "property", "og:site_name", &og.site_name)?;
    write_meta(out, "property", "og:type", og.kind)?;
    write_meta(out, "property", "og:locale", og.locale)?;
    for image in &og.images {
        write_meta(out, "property", "og:image", &image.url)?;
        write_meta(out, "property", "og:image:width", &image.width.to_string())?;
        write_meta(out, "property", "og:image:height", &image.height.to_string())?;
        write_meta(out, "property", "og:image:alt", &image.alt)?;
    }

    let twitter = &meta.twitter;
    write_meta(out, "name", "twitter:card", twitter.card)?;
    write_meta(out, "name", "twitter:title", &twitter.title)?;
    write_meta(out, "name", "twitter:description", &twitter.description)?;
    for image in &twitter.images {
        write_meta(out, "name", "twitter:image", image)?;
    }

    Ok(())
}

fn write_meta(out: &mut String, attr: &str, key: &str, content: &str) -> Result<(), SeoError> {
    writeln!(out, r#"<meta {attr}="{key}" content="{}">"#, escape(content))?;
    Ok(())
}
