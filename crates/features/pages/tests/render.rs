use std::collections::HashSet;
use vapps_domain::config::SiteSettings;
use vapps_domain::locale::Locale;
use vapps_domain::routes::Route;
use vapps_i18n::Translator;
use vapps_pages::{PageStatus, RenderContext, enumerate, page_path, pages, redirect_stub, render, render_path};
use vapps_seo::Synthesizer;

fn synthesizer() -> Synthesizer {
    let translator = Translator::embedded(Locale::En).expect("embedded catalogs parse");
    Synthesizer::new(SiteSettings::default(), translator)
}

#[test]
fn every_inventory_page_renders() {
    let seo = synthesizer();
    let ctx = RenderContext::new(&seo, 2025);

    for page in pages() {
        let rendered = render(&ctx, page.locale, Some(page.route)).expect("page renders");
        assert_eq!(rendered.status, PageStatus::Ok, "{}", page_path(&page, Locale::En));
        assert!(rendered.html.starts_with("<!DOCTYPE html>"));
        assert!(rendered.html.contains(&format!("<html lang=\"{}\">", page.locale)));
        assert!(rendered.html.contains("© 2025"));
    }
}

#[test]
fn app_page_embeds_metadata_and_structured_data() {
    let seo = synthesizer();
    let ctx = RenderContext::new(&seo, 2025);

    let page = render_path(&ctx, Locale::En, "/apps/qr-sessions").expect("renders");
    assert_eq!(page.status, PageStatus::Ok);
    assert!(page.html.contains("<title>QR Sessions - Sessions made simple | Various Apps</title>"));
    assert!(page.html.contains(r#"<link rel="canonical" href="https://various-apps.com/apps/qr-sessions">"#));
    assert!(page.html.contains(r#""@type":"SoftwareApplication""#));
    assert!(page.html.contains(r#""@type":"BreadcrumbList""#));
}

#[test]
fn localized_app_page_links_stay_in_locale() {
    let seo = synthesizer();
    let ctx = RenderContext::new(&seo, 2025);

    let page = render(&ctx, Locale::Tr, Some(Route::App("viona"))).expect("renders");
    assert!(page.html.contains("Mükemmel randevunuzu alın"));
    assert!(page.html.contains(r#"href="/tr/apps/qr-sessions""#));
    assert!(page.html.contains(r#"href="/en/apps/viona""#));
}

#[test]
fn unknown_app_renders_not_found() {
    let seo = synthesizer();
    let ctx = RenderContext::new(&seo, 2025);

    let page = render(&ctx, Locale::En, Some(Route::App("unknown"))).expect("renders");
    assert_eq!(page.status, PageStatus::NotFound);
    assert!(page.html.contains("<title>App Not Found | Various Apps</title>"));
    assert!(page.html.contains(r#"content="noindex"#));
    assert!(!page.html.contains(r#"rel="canonical""#));

    let unparsed = render_path(&ctx, Locale::Tr, "/nowhere/at/all").expect("renders");
    assert_eq!(unparsed.status, PageStatus::NotFound);
}

#[test]
fn privacy_page_falls_back_to_default_copy() {
    let seo = synthesizer();
    let ctx = RenderContext::new(&seo, 2025);

    let page = render(&ctx, Locale::Tr, Some(Route::Privacy("ai-poster"))).expect("renders");
    assert_eq!(page.status, PageStatus::Ok);
    assert!(page.html.contains("Privacy Policy"));
    assert!(page.html.contains(r#"<a href="mailto:admin@various-apps.com">admin@various-apps.com</a>"#));
    assert!(page.html.contains("Last updated: January 27, 2025"));
}

#[test]
fn privacy_for_other_apps_is_not_found() {
    let seo = synthesizer();
    let ctx = RenderContext::new(&seo, 2025);

    let page = render_path(&ctx, Locale::En, "/apps/viona/privacy").expect("renders");
    assert_eq!(page.status, PageStatus::NotFound);
}

#[test]
fn enumeration_covers_each_pair_once() {
    let pairs = enumerate();
    let unique: HashSet<_> = pairs.iter().collect();

    assert_eq!(pairs.len(), Locale::ALL.len() * vapps_catalog::list_ids().len());
    assert_eq!(unique.len(), pairs.len());
}

#[test]
fn inventory_paths_are_unique() {
    let paths: HashSet<_> = pages().iter().map(|p| page_path(p, Locale::En)).collect();
    assert_eq!(paths.len(), pages().len());
    assert!(paths.contains("/tr/apps/posture-pal"));
    assert!(!paths.iter().any(|p| p.starts_with("/en")));
}

#[test]
fn redirect_stub_points_at_location() {
    let stub = redirect_stub("/apps/viona");
    assert!(stub.contains(r#"<meta http-equiv="refresh" content="0; url=/apps/viona">"#));
    assert!(stub.contains(r#"content="noindex""#));
}
