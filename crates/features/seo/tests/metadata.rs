mod common;

use common::synthesizer;
use proptest::prelude::*;
use vapps_domain::locale::Locale;
use vapps_seo::head::write_head;

#[test]
fn title_carries_name_and_tagline() {
    let seo = synthesizer();
    let record = vapps_catalog::lookup("qr-sessions").expect("qr-sessions");

    let meta = seo.synthesize(record, Locale::En);
    assert_eq!(meta.title, "QR Sessions - Sessions made simple | Various Apps");
    assert!(meta.title.contains(record.name));
    assert!(meta.title.contains(record.tagline));
    assert_eq!(meta.canonical.as_deref(), Some("https://various-apps.com/apps/qr-sessions"));
}

#[test]
fn every_title_carries_localized_name_and_tagline() {
    let seo = synthesizer();

    for record in vapps_catalog::all() {
        for locale in Locale::ALL {
            let copy = seo.translator().app_copy(locale, record);
            let meta = seo.synthesize(record, locale);

            assert!(!copy.name.is_empty() && !copy.tagline.is_empty(), "{locale} {}", record.slug);
            assert_eq!(meta.title, format!("{} - {} | Various Apps", copy.name, copy.tagline), "{locale}");
            if locale == Locale::En {
                assert!(meta.title.contains(record.name), "{}", record.slug);
                assert!(meta.title.contains(record.tagline), "{}", record.slug);
            }
        }
    }
}

#[test]
fn localized_metadata_uses_translated_copy() {
    let seo = synthesizer();
    let record = vapps_catalog::lookup("viona").expect("viona");

    let meta = seo.synthesize(record, Locale::Tr);
    assert_eq!(meta.title, "Viona - Mükemmel randevunuzu alın | Various Apps");
    assert_eq!(meta.canonical.as_deref(), Some("https://various-apps.com/tr/apps/viona"));
    assert_eq!(meta.open_graph.locale, "tr_TR");
}

#[test]
fn alternates_cover_every_locale_and_x_default() {
    let meta = synthesizer().synthesize(vapps_catalog::featured(), Locale::Tr);
    let pairs: Vec<_> = meta.alternates.iter().map(|a| (a.hreflang.as_str(), a.href.as_str())).collect();

    assert_eq!(
        pairs,
        [
            ("en", "https://various-apps.com/apps/qr-sessions"),
            ("tr", "https://various-apps.com/tr/apps/qr-sessions"),
            ("x-default", "https://various-apps.com/apps/qr-sessions"),
        ]
    );
}

#[test]
fn keywords_lead_with_name_and_platforms() {
    let meta = synthesizer().synthesize(vapps_catalog::lookup("qr-sessions").expect("qr"), Locale::En);
    assert_eq!(&meta.keywords[..4], ["QR Sessions", "iOS", "Android", "Web"]);
    assert!(meta.keywords.iter().any(|k| k == "Instant QR Generation"));
    assert_eq!(meta.keywords.last().map(String::as_str), Some("digital experiences"));
}

#[test]
fn social_preview_uses_the_logo() {
    let meta = synthesizer().synthesize(vapps_catalog::lookup("ai-poster").expect("ai-poster"), Locale::En);
    let image = &meta.open_graph.images[0];
    assert_eq!(image.url, "https://various-apps.com/apps/ai-poster/logo.png");
    assert_eq!((image.width, image.height), (512, 512));
    assert_eq!(image.alt, "AI Poster");
    assert_eq!(meta.twitter.card, "summary_large_image");
    assert_eq!(meta.twitter.images, [image.url.clone()]);
}

#[test]
fn home_and_not_found_metadata() {
    let seo = synthesizer();

    let home = seo.home(Locale::En);
    assert_eq!(home.title, "Various Apps | Digital Craftsmen");
    assert_eq!(home.canonical.as_deref(), Some("https://various-apps.com"));
    assert_eq!(home.open_graph.images[0].width, 1200);

    let missing = seo.not_found(Locale::En);
    assert_eq!(missing.title, "App Not Found | Various Apps");
    assert!(!missing.robots.index);
    assert!(missing.canonical.is_none());
}

#[test]
fn privacy_metadata_names_the_app() {
    let seo = synthesizer();
    let record = vapps_catalog::lookup("ai-poster").expect("ai-poster");

    let meta = seo.privacy(record, Locale::Tr);
    assert_eq!(meta.title, "Privacy Policy - AI Poster");
    assert_eq!(meta.canonical.as_deref(), Some("https://various-apps.com/tr/apps/ai-poster/privacy"));
}

#[test]
fn head_markup_is_escaped() {
    let meta = synthesizer().synthesize(vapps_catalog::lookup("viona-partner").expect("vp"), Locale::En);
    let mut head = String::new();
    write_head(&mut head, &meta).expect("write head");

    assert!(head.contains("<title>Viona Partner - Grow your service business | Various Apps</title>"));
    assert!(head.contains(r#"<link rel="alternate" hreflang="x-default" href="https://various-apps.com/apps/viona-partner">"#));
    assert!(head.contains(r#"<meta name="robots" content="index, follow">"#));
}

proptest! {
    #[test]
    fn synthesize_is_idempotent(idx in 0usize..5, tr in any::<bool>()) {
        let seo = synthesizer();
        let record = &vapps_catalog::all()[idx];
        let locale = if tr { Locale::Tr } else { Locale::En };

        let first = serde_json::to_string(&seo.synthesize(record, locale)).expect("json");
        let second = serde_json::to_string(&seo.synthesize(record, locale)).expect("json");
        prop_assert_eq!(first, second);
    }
}
