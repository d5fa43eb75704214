use super::layout::{Frame, document};
use super::{RenderContext, esc, t};
use crate::error::RenderError;
use std::fmt::Write;
use vapps_domain::constants::PRIVACY_APP;
use vapps_domain::content::AppRecord;
use vapps_domain::locale::Locale;
use vapps_domain::routes::Route;
use vapps_i18n::AppCopy;
use vapps_seo::jsonld::Crumb;

/// Number of sibling apps listed under "more apps".
const MORE_APPS: usize = 3;

pub(super) fn render(ctx: &RenderContext<'_>, locale: Locale, record: &AppRecord) -> Result<String, RenderError> {
    let seo = ctx.synthesizer;
    let copy = seo.translator().app_copy(locale, record);
    let meta = seo.synthesize(record, locale);

    let crumbs = [
        Crumb { name: seo.translator().text(locale, "nav.home").to_owned(), path: ctx.href(locale, "/") },
        Crumb {
            name: copy.name.to_owned(),
            path: ctx.href(locale, &Route::App(record.slug).to_string()),
        },
    ];
    let structured = [seo.software_application(record, locale), seo.breadcrumb(&crumbs)];
    let frame = Frame { locale, route: Some(Route::App(record.slug)), meta: &meta, structured: &structured };

    document(ctx, &frame, |out| {
        writeln!(
            out,
            "<article class=\"app\" style=\"--primary: {}; --secondary: {}\" data-gradient=\"{}\">",
            esc(record.primary_color),
            esc(record.secondary_color),
            esc(record.gradient)
        )?;
        overview(out, ctx, locale, record, &copy)?;
        features(out, ctx, locale, record, &copy)?;
        about(out, ctx, locale, &copy)?;
        more_apps(out, ctx, locale, record)?;
        call_to_action(out, ctx, locale, record, &copy)?;
        out.push_str("</article>\n");
        Ok(())
    })
}

fn overview(
    out: &mut String,
    ctx: &RenderContext<'_>,
    locale: Locale,
    record: &AppRecord,
    copy: &AppCopy<'_>,
) -> Result<(), RenderError> {
    let page = ctx.scope(locale, "appPage");
    let common = ctx.scope(locale, "common");
    let home = ctx.href(locale, "/");
    let apps_anchor = if home == "/" { "/#apps".to_owned() } else { format!("{home}#apps") };

    writeln!(out, "<p class=\"back\"><a href=\"{apps_anchor}\">← {}</a></p>", t(&page, "backToApps"))?;
    out.push_str("<header>\n");
    writeln!(
        out,
        "<img src=\"{}\" alt=\"{name}\" width=\"128\" height=\"128\">\n<h1>{name}</h1>",
        esc(record.logo),
        name = esc(copy.name)
    )?;
    writeln!(
        out,
        "<p class=\"status status-{}\">{}</p>",
        record.status.as_str(),
        t(&common, record.status.as_str())
    )?;
    writeln!(out, "<p class=\"tagline\">{}</p>\n<p>{}</p>", esc(copy.tagline), esc(copy.description))?;

    if let Some(stats) = &record.stats {
        out.push_str("<dl class=\"stats\">\n");
        if let Some(users) = stats.users {
            writeln!(out, "<div><dt>{}</dt><dd>{}</dd></div>", t(&common, "users"), esc(users))?;
        }
        if let Some(rating) = stats.rating {
            writeln!(out, "<div><dt>{}</dt><dd>{}</dd></div>", t(&common, "rating"), esc(rating))?;
        }
        out.push_str("</dl>\n");
    }

    out.push_str("<ul class=\"platforms\">\n");
    for tag in record.platforms.tags() {
        writeln!(out, "<li>{}</li>", t(&common, tag))?;
    }
    out.push_str("</ul>\n");

    if record.links.is_empty() {
        writeln!(out, "<p class=\"coming-soon\">{}</p>", t(&page, "comingSoon"))?;
    } else {
        out.push_str("<ul class=\"links\">\n");
        for link in record.links {
            writeln!(
                out,
                "<li><a href=\"{}\" rel=\"noopener\" data-kind=\"{}\">{}</a></li>",
                esc(link.url),
                link.kind.as_str(),
                esc(link.label.unwrap_or(link.kind.as_str()))
            )?;
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</header>\n");

    if !record.screenshots.is_empty() {
        out.push_str("<ul class=\"screenshots\">\n");
        for (idx, shot) in record.screenshots.iter().enumerate() {
            writeln!(
                out,
                "<li><img src=\"{}\" alt=\"{} {}\" loading=\"lazy\"></li>",
                esc(shot),
                esc(copy.name),
                idx + 1
            )?;
        }
        out.push_str("</ul>\n");
    }

    if let Some(testimonial) = &copy.testimonial {
        writeln!(
            out,
            "<blockquote class=\"testimonial\"><p>“{}”</p><footer>{}, {}</footer></blockquote>",
            esc(testimonial.quote),
            esc(testimonial.author),
            esc(testimonial.role)
        )?;
    }
    Ok(())
}

fn features(
    out: &mut String,
    ctx: &RenderContext<'_>,
    locale: Locale,
    record: &AppRecord,
    copy: &AppCopy<'_>,
) -> Result<(), RenderError> {
    let page = ctx.scope(locale, "appPage");

    out.push_str("<section id=\"features\">\n");
    writeln!(out, "<p class=\"section-label\">{}</p>", t(&page, "features.sectionLabel"))?;
    writeln!(out, "<h2>{} {}</h2>\n<ol class=\"features\">", t(&page, "features.title1"), t(&page, "features.title2"))?;
    for (idx, feature) in copy.features.iter().enumerate() {
        let icon = record.features.get(idx).and_then(|f| f.icon);
        let icon_attr = icon.map(|name| format!(" data-icon=\"{}\"", esc(name))).unwrap_or_default();
        writeln!(
            out,
            "<li{icon_attr}><span class=\"index\">{:02}</span><h3>{}</h3><p>{}</p></li>",
            idx + 1,
            esc(feature.title),
            esc(feature.description)
        )?;
    }
    out.push_str("</ol>\n</section>\n");
    Ok(())
}

fn about(out: &mut String, ctx: &RenderContext<'_>, locale: Locale, copy: &AppCopy<'_>) -> Result<(), RenderError> {
    if copy.long_description.is_none() {
        return Ok(());
    }
    let page = ctx.scope(locale, "appPage");

    out.push_str("<section id=\"about\">\n");
    writeln!(out, "<p class=\"section-label\">{}</p>", t(&page, "about.sectionLabel"))?;
    writeln!(out, "<h2>{} {}</h2>", t(&page, "about.title"), esc(&copy.name.to_uppercase()))?;
    for paragraph in copy.paragraphs() {
        writeln!(out, "<p>{}</p>", esc(paragraph))?;
    }
    out.push_str("</section>\n");
    Ok(())
}

fn more_apps(out: &mut String, ctx: &RenderContext<'_>, locale: Locale, record: &AppRecord) -> Result<(), RenderError> {
    let page = ctx.scope(locale, "appPage");
    let translator = ctx.synthesizer.translator();
    let home = ctx.href(locale, "/");
    let apps_anchor = if home == "/" { "/#apps".to_owned() } else { format!("{home}#apps") };

    out.push_str("<section id=\"more-apps\">\n");
    writeln!(out, "<p class=\"section-label\">{}</p>", t(&page, "moreApps.sectionLabel"))?;
    writeln!(out, "<h2>{} {}</h2>\n<ul>", t(&page, "moreApps.title1"), t(&page, "moreApps.title2"))?;

    for other in vapps_catalog::all().iter().filter(|a| a.slug != record.slug).take(MORE_APPS) {
        let copy = translator.app_copy(locale, other);
        writeln!(
            out,
            "<li><a href=\"{}\"><h3>{}</h3><p>{}</p></a></li>",
            ctx.href(locale, &Route::App(other.slug).to_string()),
            esc(copy.name),
            esc(copy.tagline)
        )?;
    }

    writeln!(out, "</ul>\n<p><a href=\"{apps_anchor}\">{}</a></p>", t(&page, "moreApps.viewAll"))?;
    out.push_str("</section>\n");
    Ok(())
}

fn call_to_action(
    out: &mut String,
    ctx: &RenderContext<'_>,
    locale: Locale,
    record: &AppRecord,
    copy: &AppCopy<'_>,
) -> Result<(), RenderError> {
    let page = ctx.scope(locale, "appPage");
    let email = esc(&ctx.synthesizer.settings().contact_email);

    out.push_str("<section class=\"cta\">\n");
    writeln!(out, "<h2>{} {}?</h2>", t(&page, "cta.readyToTry"), esc(&copy.name.to_uppercase()))?;
    writeln!(out, "<p>{}. {}</p>", esc(copy.tagline), t(&page, "cta.downloadNow"))?;
    writeln!(
        out,
        "<p><a href=\"mailto:{email}?subject={}\">{}</a> <a href=\"{}\">{}</a></p>",
        esc(record.slug),
        t(&page, "getNotified"),
        ctx.href(locale, "/"),
        t(&page, "backToHome")
    )?;

    if record.slug == PRIVACY_APP {
        writeln!(
            out,
            "<p><a href=\"{}\">{}</a></p>",
            ctx.href(locale, &Route::Privacy(record.slug).to_string()),
            esc(ctx.synthesizer.translator().text(locale, "privacy.title"))
        )?;
    }
    out.push_str("</section>\n");
    Ok(())
}
