use serde_json::Value;
use vapps_domain::locale::Locale;
use vapps_i18n::Translator;

fn translator() -> Translator {
    Translator::embedded(Locale::En).expect("embedded catalogs parse")
}

fn leaf_keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                leaf_keys(child, &format!("{prefix}{key}."), out);
            }
        },
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                leaf_keys(child, &format!("{prefix}{idx}."), out);
            }
        },
        _ => out.push(prefix.trim_end_matches('.').to_owned()),
    }
}

#[test]
fn turkish_catalog_covers_every_translated_key() {
    let t = translator();
    let mut keys = Vec::new();
    leaf_keys(t.get(Locale::En, "apps").expect("apps"), "apps.", &mut keys);
    leaf_keys(t.get(Locale::En, "hero").expect("hero"), "hero.", &mut keys);
    leaf_keys(t.get(Locale::En, "common").expect("common"), "common.", &mut keys);

    for key in keys {
        assert!(t.get(Locale::Tr, &key).is_some(), "missing tr key {key}");
    }
}

#[test]
fn lookup_uses_requested_locale() {
    let t = translator();
    assert_eq!(t.text(Locale::En, "apps.viona.tagline"), "Book your perfect appointment");
    assert_eq!(t.text(Locale::Tr, "apps.viona.tagline"), "Mükemmel randevunuzu alın");
    assert_eq!(t.text(Locale::Tr, "apps.qr-sessions.features.0.title"), "Anında QR Oluşturma");
}

#[test]
fn missing_translation_falls_back_to_default_then_key() {
    let t = translator();
    assert!(t.get(Locale::Tr, "privacy.title").is_none());
    assert_eq!(t.text(Locale::Tr, "privacy.title"), "Privacy Policy");
    assert_eq!(t.text(Locale::Tr, "no.such.key"), "no.such.key");
    assert_eq!(t.len(Locale::Tr, "privacy.sections"), 8);
}

#[test]
fn scoped_formatting_interpolates() {
    let t = translator();
    let grid = t.scope(Locale::Tr, "appsGrid");
    assert_eq!(grid.format("activeProjects", &[("count", "5")]), "5 aktif proje");
    assert_eq!(t.scope(Locale::En, "appsGrid").t("title2"), "CREATIONS");
}

#[test]
fn every_record_has_localized_copy() {
    let t = translator();
    for locale in Locale::ALL {
        for slug in ["viona", "viona-partner", "qr-sessions", "posture-pal", "ai-poster"] {
            let key = format!("apps.{slug}.name");
            assert_ne!(t.text(locale, &key), key);
            assert_eq!(t.len(locale, &format!("apps.{slug}.features")), 6);
        }
    }
}

#[test]
fn init_creates_slice() {
    let state = vapps_i18n::I18n::load(Locale::En).expect("embedded catalogs parse");
    let translator = state.translator.clone();

    let slice = vapps_i18n::init(state);
    assert_eq!(slice.id, std::any::TypeId::of::<vapps_i18n::I18n>());
    let registered = slice.downcast::<vapps_i18n::I18n>().expect("i18n state");
    assert_eq!(registered.translator.text(Locale::Tr, "nav.home"), translator.text(Locale::Tr, "nav.home"));
}

#[test]
fn app_copy_is_localized_with_record_fallback() {
    let t = translator();
    let record = vapps_catalog_fixture::posture_pal();

    let tr = t.app_copy(Locale::Tr, &record);
    assert_eq!(tr.tagline, "Samimi duruş arkadaşınız");
    assert_eq!(tr.features.len(), 1);
    assert_eq!(tr.features[0].title, "Yapay Zekâ ile Duruş Algılama");
    assert_eq!(tr.paragraphs().count(), 2);

    let mut unknown = record;
    unknown.slug = "unlisted";
    let copy = t.app_copy(Locale::Tr, &unknown);
    assert_eq!(copy.name, "PosturePal");
    assert_eq!(copy.features[0].title, "Detection");
}

mod vapps_catalog_fixture {
    use vapps_domain::content::{AppFeature, AppRecord, AppStatus};
    use vapps_domain::platforms::PlatformSet;

    pub(crate) fn posture_pal() -> AppRecord {
        AppRecord {
            slug: "posture-pal",
            name: "PosturePal",
            tagline: "Your friendly posture companion",
            description: "Posture monitoring.",
            long_description: Some("First.\n\nSecond."),
            logo: "/apps/posture-pal/logo.png",
            icon: "/apps/posture-pal/icon.png",
            screenshots: &[],
            features: &[AppFeature { title: "Detection", description: "Pose analysis", icon: None }],
            links: &[],
            status: AppStatus::Beta,
            platforms: PlatformSet::MOBILE,
            primary_color: "#F6EAD7",
            secondary_color: "#E5D4C0",
            gradient: "from-orange-400 to-amber-500",
            stats: None,
            testimonial: None,
        }
    }
}
