use super::layout::{Frame, document};
use super::{RenderContext, esc, t};
use crate::error::RenderError;
use std::fmt::Write;
use vapps_domain::content::AppRecord;
use vapps_domain::locale::Locale;
use vapps_domain::routes::Route;
use vapps_seo::jsonld::Crumb;

pub(super) fn render(ctx: &RenderContext<'_>, locale: Locale, record: &AppRecord) -> Result<String, RenderError> {
    let seo = ctx.synthesizer;
    let privacy = ctx.scope(locale, "privacy");
    let meta = seo.privacy(record, locale);
    let app_path = ctx.href(locale, &Route::App(record.slug).to_string());

    let crumbs = [
        Crumb { name: seo.translator().text(locale, "nav.home").to_owned(), path: ctx.href(locale, "/") },
        Crumb { name: record.name.to_owned(), path: app_path.clone() },
        Crumb {
            name: privacy.t("title"),
            path: ctx.href(locale, &Route::Privacy(record.slug).to_string()),
        },
    ];
    let structured = [seo.breadcrumb(&crumbs)];
    let frame = Frame { locale, route: Some(Route::Privacy(record.slug)), meta: &meta, structured: &structured };

    let app = [("app", record.name)];
    let email = &seo.settings().privacy_email;
    let mailto = format!("<a href=\"mailto:{0}\">{0}</a>", esc(email));

    document(ctx, &frame, |out| {
        out.push_str("<article class=\"privacy\">\n");
        writeln!(out, "<p class=\"back\"><a href=\"{app_path}\">← {}</a></p>", esc(&privacy.format("backToApp", &app)))?;
        writeln!(out, "<h1>{}</h1>", t(&privacy, "title"))?;
        let updated = privacy.t("updatedOn");
        writeln!(out, "<p class=\"updated\">{}</p>", esc(&privacy.format("lastUpdated", &[("date", &updated)])))?;

        for idx in 0..privacy.len("sections") {
            let section = format!("sections.{idx}");
            out.push_str("<section>\n");
            writeln!(out, "<h2>{}. {}</h2>", idx + 1, t(&privacy, &format!("{section}.title")))?;

            // `{email}` becomes a link, so the rest of the lead is escaped first.
            let lead = privacy.format(&format!("{section}.lead"), &[("app", record.name), ("email", "\u{0}")]);
            if !lead.is_empty() {
                writeln!(out, "<p>{}</p>", esc(&lead).replace('\u{0}', &mailto))?;
            }

            let items = privacy.len(&format!("{section}.items"));
            if items > 0 {
                out.push_str("<ul>\n");
                for item in 0..items {
                    let text = privacy.format(&format!("{section}.items.{item}"), &app);
                    writeln!(out, "<li>{}</li>", esc(&text))?;
                }
                out.push_str("</ul>\n");
            }
            out.push_str("</section>\n");
        }

        out.push_str("</article>\n");
        Ok(())
    })
}
