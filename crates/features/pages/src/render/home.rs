use super::layout::{Frame, document};
use super::{RenderContext, esc, t};
use crate::error::RenderError;
use std::fmt::Write;
use vapps_domain::locale::Locale;
use vapps_domain::routes::Route;

/// Studio figures shown under the principles; `None` is the live record count.
const STUDIO_STATS: [(Option<&str>, &str); 4] =
    [(Some("2024"), "founded"), (None, "appsBuilt"), (Some("20K+"), "totalUsers"), (Some("4.8"), "avgRating")];

const PRINCIPLES: [&str; 4] = ["innovation", "velocity", "userFirst", "craft"];

const SOCIALS: [(&str, &str); 3] =
    [("Twitter", "@variousapps"), ("GitHub", "/variousapps"), ("LinkedIn", "/variousapps")];

pub(super) fn render(ctx: &RenderContext<'_>, locale: Locale) -> Result<String, RenderError> {
    let seo = ctx.synthesizer;
    let meta = seo.home(locale);
    let structured = [seo.organization(), seo.website(), seo.item_list(locale)];
    let frame = Frame { locale, route: Some(Route::Home), meta: &meta, structured: &structured };

    document(ctx, &frame, |out| {
        hero(out, ctx, locale)?;
        apps_grid(out, ctx, locale)?;
        featured(out, ctx, locale)?;
        studio(out, ctx, locale)?;
        contact(out, ctx, locale)
    })
}

fn section_heading(out: &mut String, number: &str, label: &str) -> Result<(), RenderError> {
    writeln!(out, "<p class=\"section-label\"><span>{number}</span> {label}</p>")?;
    Ok(())
}

fn hero(out: &mut String, ctx: &RenderContext<'_>, locale: Locale) -> Result<(), RenderError> {
    let hero = ctx.scope(locale, "hero");

    out.push_str("<section id=\"hero\">\n");
    writeln!(out, "<p class=\"accent\">{}</p>", t(&hero, "accent"))?;
    writeln!(out, "<h1><span>{}</span> <span>{}</span></h1>", t(&hero, "title1"), t(&hero, "title2"))?;
    writeln!(
        out,
        "<p class=\"tagline\">{} <strong>{}</strong></p>",
        t(&hero, "tagline"),
        t(&hero, "taglineHighlight")
    )?;
    writeln!(
        out,
        "<p class=\"actions\"><a href=\"#apps\">{}</a> <a href=\"#contact\">{}</a></p>",
        t(&hero, "exploreWork"),
        t(&hero, "contactUs")
    )?;
    writeln!(out, "<p class=\"scroll\" aria-hidden=\"true\">{}</p>", t(&hero, "scroll"))?;
    out.push_str("</section>\n");
    Ok(())
}

fn apps_grid(out: &mut String, ctx: &RenderContext<'_>, locale: Locale) -> Result<(), RenderError> {
    let grid = ctx.scope(locale, "appsGrid");
    let common = ctx.scope(locale, "common");
    let translator = ctx.synthesizer.translator();
    let apps = vapps_catalog::all();

    out.push_str("<section id=\"apps\">\n");
    section_heading(out, &t(&grid, "sectionNumber"), &t(&grid, "sectionLabel"))?;
    writeln!(out, "<h2>{} {}</h2>", t(&grid, "title1"), t(&grid, "title2"))?;
    writeln!(out, "<p>{}</p>\n<ul class=\"apps-grid\">", t(&grid, "portfolioLabel"))?;

    for (idx, record) in apps.iter().enumerate() {
        let copy = translator.app_copy(locale, record);
        writeln!(
            out,
            "<li><a href=\"{href}\"><span class=\"index\">{number:02}</span> \
             <img src=\"{icon}\" alt=\"\" width=\"64\" height=\"64\"> \
             <h3>{name}</h3> <p>{tagline}</p> <span class=\"status status-{status}\">{status_label}</span> \
             <span class=\"explore\">{explore}</span></a></li>",
            href = ctx.href(locale, &Route::App(record.slug).to_string()),
            number = idx + 1,
            icon = esc(record.icon),
            name = esc(copy.name),
            tagline = esc(copy.tagline),
            status = record.status.as_str(),
            status_label = t(&common, record.status.as_str()),
            explore = t(&grid, "explore"),
        )?;
    }

    out.push_str("</ul>\n");
    let count = apps.len().to_string();
    writeln!(out, "<p class=\"count\">{}</p>", esc(&grid.format("activeProjects", &[("count", &count)])))?;
    out.push_str("</section>\n");
    Ok(())
}

fn featured(out: &mut String, ctx: &RenderContext<'_>, locale: Locale) -> Result<(), RenderError> {
    let labels = ctx.scope(locale, "featured");
    let record = vapps_catalog::featured();
    let copy = ctx.synthesizer.translator().app_copy(locale, record);
    let lead = copy.description.split('.').next().unwrap_or(copy.description);

    out.push_str("<section id=\"featured\">\n");
    section_heading(out, &t(&labels, "sectionNumber"), &t(&labels, "sectionLabel"))?;
    writeln!(out, "<h2>{}</h2>", esc(&copy.name.to_uppercase()))?;
    writeln!(out, "<p>{}. <em>{}</em></p>", esc(lead), esc(copy.tagline))?;

    if let Some(testimonial) = &copy.testimonial {
        writeln!(
            out,
            "<blockquote><p>“{}”</p><footer>{}, {}</footer></blockquote>",
            esc(testimonial.quote),
            esc(testimonial.author),
            esc(testimonial.role)
        )?;
    }

    out.push_str("<dl class=\"stats\">\n");
    if let Some(users) = record.stats.as_ref().and_then(|s| s.users) {
        writeln!(out, "<div><dt>{}</dt><dd>{}</dd></div>", t(&labels, "users"), esc(users))?;
    }
    if let Some(rating) = record.rating() {
        writeln!(out, "<div><dt>{}</dt><dd>{}</dd></div>", t(&labels, "rating"), esc(rating))?;
    }
    writeln!(out, "<div><dt>{}</dt><dd>{}</dd></div>", t(&labels, "platforms"), record.platforms.count())?;
    out.push_str("</dl>\n");

    writeln!(
        out,
        "<p><a href=\"{}\">{}</a></p>",
        ctx.href(locale, &Route::App(record.slug).to_string()),
        t(&labels, "viewCaseStudy")
    )?;
    out.push_str("</section>\n");
    Ok(())
}

fn studio(out: &mut String, ctx: &RenderContext<'_>, locale: Locale) -> Result<(), RenderError> {
    let studio = ctx.scope(locale, "studio");

    out.push_str("<section id=\"studio\">\n");
    section_heading(out, &t(&studio, "sectionNumber"), &t(&studio, "sectionLabel"))?;
    writeln!(
        out,
        "<h2>{} {} {}</h2>",
        t(&studio, "title1"),
        t(&studio, "title2"),
        t(&studio, "title3")
    )?;
    writeln!(
        out,
        "<p>{} <em>{}</em>, <em>{}</em> {} <em>{}</em>.</p>",
        t(&studio, "description1"),
        t(&studio, "beautiful"),
        t(&studio, "functional"),
        t(&studio, "description2"),
        t(&studio, "inspiring")
    )?;
    writeln!(out, "<p>{}</p>\n<p>{}</p>", t(&studio, "description3"), t(&studio, "description4"))?;
    writeln!(out, "<p class=\"lab\">{}</p>\n<ul class=\"principles\">", t(&studio, "creativeLab"))?;

    for key in PRINCIPLES {
        writeln!(
            out,
            "<li><h3>{}</h3><p>{}</p></li>",
            t(&studio, &format!("principles.{key}.title")),
            t(&studio, &format!("principles.{key}.description"))
        )?;
    }
    out.push_str("</ul>\n");

    writeln!(
        out,
        "<blockquote><p>“{}”</p><footer>{}</footer></blockquote>",
        t(&studio, "quote"),
        t(&studio, "quoteAuthor")
    )?;

    let built = vapps_catalog::all().len().to_string();
    out.push_str("<dl class=\"stats\">\n");
    for (value, key) in STUDIO_STATS {
        let value = value.unwrap_or(built.as_str());
        writeln!(out, "<div><dt>{}</dt><dd>{value}</dd></div>", t(&studio, &format!("stats.{key}")))?;
    }
    out.push_str("</dl>\n</section>\n");
    Ok(())
}

fn contact(out: &mut String, ctx: &RenderContext<'_>, locale: Locale) -> Result<(), RenderError> {
    let contact = ctx.scope(locale, "contact");
    let email = esc(&ctx.synthesizer.settings().contact_email);

    out.push_str("<section id=\"contact\">\n");
    section_heading(out, &t(&contact, "sectionNumber"), &t(&contact, "sectionLabel"))?;
    writeln!(out, "<h2>{} {}</h2>", t(&contact, "title1"), t(&contact, "title2"))?;
    writeln!(out, "<p>{}</p>", t(&contact, "description"))?;
    writeln!(
        out,
        "<p><strong>{}</strong> {} <a href=\"mailto:{email}\">{email}</a></p>",
        t(&contact, "getInTouch"),
        t(&contact, "emailLabel")
    )?;

    writeln!(out, "<h3>{}</h3>\n<ul class=\"socials\">", t(&contact, "followJourney"))?;
    for (label, handle) in SOCIALS {
        writeln!(out, "<li>{label} <span>{handle}</span></li>")?;
    }
    out.push_str("</ul>\n");

    writeln!(
        out,
        "<form class=\"newsletter\" action=\"#contact\" method=\"get\">\n<h3>{}</h3>\n<p>{}</p>\n\
         <input type=\"email\" name=\"email\" placeholder=\"{}\" aria-label=\"{}\">\n\
         <button type=\"submit\">{}</button>\n</form>",
        t(&contact, "newsletter.title"),
        t(&contact, "newsletter.description"),
        t(&contact, "newsletter.placeholder"),
        t(&contact, "newsletter.placeholder"),
        t(&contact, "newsletter.subscribe")
    )?;
    out.push_str("</section>\n");
    Ok(())
}
