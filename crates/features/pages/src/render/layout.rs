use super::{RenderContext, esc, t};
use crate::error::RenderError;
use serde_json::Value;
use std::fmt::Write;
use vapps_domain::constants::PRIVACY_APP;
use vapps_domain::locale::Locale;
use vapps_domain::routes::Route;
use vapps_seo::PageMetadata;
use vapps_seo::head::write_head;
use vapps_seo::jsonld::script;

/// Everything around `<main>`.
pub(super) struct Frame<'a> {
    pub locale: Locale,
    /// Page the language switcher links to in each locale; `None` links to home.
    pub route: Option<Route<'a>>,
    pub meta: &'a PageMetadata,
    pub structured: &'a [Value],
}

pub(super) fn document<F>(ctx: &RenderContext<'_>, frame: &Frame<'_>, body: F) -> Result<String, RenderError>
where
    F: FnOnce(&mut String) -> Result<(), RenderError>,
{
    let mut out = String::with_capacity(16 * 1024);
    let locale = frame.locale;

    writeln!(out, "<!DOCTYPE html>\n<html lang=\"{locale}\">\n<head>")?;
    out.push_str("<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    write_head(&mut out, frame.meta)?;
    out.push_str("<link rel=\"icon\" href=\"/favicon.ico\">\n");
    for data in frame.structured {
        writeln!(out, "{}", script(data)?)?;
    }
    out.push_str("</head>\n<body>\n");

    header(&mut out, ctx, frame)?;
    out.push_str("<main>\n");
    body(&mut out)?;
    out.push_str("</main>\n");
    footer(&mut out, ctx, locale)?;

    out.push_str("</body>\n</html>\n");
    Ok(out)
}

fn header(out: &mut String, ctx: &RenderContext<'_>, frame: &Frame<'_>) -> Result<(), RenderError> {
    let locale = frame.locale;
    let nav = ctx.scope(locale, "nav");
    let home = ctx.href(locale, "/");
    let site = &ctx.synthesizer.settings().name;

    writeln!(out, "<header>\n<a class=\"brand\" href=\"{home}\">{}</a>", esc(site))?;
    writeln!(out, "<nav aria-label=\"{}\">\n<ul>", t(&nav, "home"))?;
    for (anchor, key) in [("apps", "apps"), ("studio", "studio"), ("contact", "contact")] {
        let target = if home == "/" { format!("/#{anchor}") } else { format!("{home}#{anchor}") };
        writeln!(out, "<li><a href=\"{target}\">{}</a></li>", t(&nav, key))?;
    }
    out.push_str("</ul>\n</nav>\n");

    let path = frame.route.map_or_else(|| "/".to_owned(), |route| route.to_string());
    writeln!(out, "<nav class=\"language-switcher\" aria-label=\"{}\">\n<ul>", t(&nav, "language"))?;
    for candidate in Locale::ALL {
        // Always prefixed: the server stores the choice in the locale cookie.
        let href = if path == "/" { format!("/{candidate}") } else { format!("/{candidate}{path}") };
        let current = if candidate == locale { " aria-current=\"true\"" } else { "" };
        writeln!(
            out,
            "<li><a href=\"{}\" hreflang=\"{candidate}\" lang=\"{candidate}\"{current}>{} {}</a></li>",
            esc(&href),
            candidate.flag(),
            candidate.name()
        )?;
    }
    out.push_str("</ul>\n</nav>\n</header>\n");
    Ok(())
}

fn footer(out: &mut String, ctx: &RenderContext<'_>, locale: Locale) -> Result<(), RenderError> {
    let footer = ctx.scope(locale, "contact.footer");
    let year = ctx.year.to_string();
    let privacy = ctx.href(locale, &Route::Privacy(PRIVACY_APP).to_string());

    out.push_str("<footer>\n");
    writeln!(out, "<p>{}</p>", esc(&footer.format("copyright", &[("year", &year)])))?;
    writeln!(
        out,
        "<ul>\n<li><a href=\"{privacy}\">{}</a></li>\n<li>{}</li>\n<li>{}</li>\n</ul>",
        t(&footer, "privacy"),
        t(&footer, "terms"),
        t(&footer, "careers")
    )?;
    writeln!(out, "<p>{} · {}</p>", t(&footer, "craftedWith"), t(&footer, "location"))?;
    out.push_str("</footer>\n");
    Ok(())
}
