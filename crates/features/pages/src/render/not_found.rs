use super::layout::{Frame, document};
use super::{RenderContext, t};
use crate::error::RenderError;
use std::fmt::Write;
use vapps_domain::locale::Locale;

pub(super) fn render(ctx: &RenderContext<'_>, locale: Locale) -> Result<String, RenderError> {
    let meta = ctx.synthesizer.not_found(locale);
    let frame = Frame { locale, route: None, meta: &meta, structured: &[] };
    let scope = ctx.scope(locale, "notFound");

    document(ctx, &frame, |out| {
        writeln!(
            out,
            "<section class=\"not-found\">\n<p class=\"code\">{}</p>\n<h1>{}</h1>\n<p>{}</p>",
            t(&scope, "code"),
            t(&scope, "title"),
            t(&scope, "description")
        )?;
        writeln!(out, "<p><a href=\"{}\">{}</a></p>\n</section>", ctx.href(locale, "/"), t(&scope, "backToHome"))?;
        Ok(())
    })
}
