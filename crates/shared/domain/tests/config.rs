use vapps_domain::config::{ServerConfig, SiteConfig, SiteSettings, StorageConfig};
use vapps_domain::locale::Locale;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 3000);
    assert!(server.ssl.is_none());

    let site = SiteSettings::default();
    assert_eq!(site.base_url, "https://various-apps.com");
    assert_eq!(site.name, "Various Apps");
    assert_eq!(site.default_locale, Locale::En);

    let storage = StorageConfig::default();
    assert_eq!(storage.static_dir, std::path::PathBuf::from("public"));
    assert_eq!(storage.output_dir, std::path::PathBuf::from("dist"));
}

#[test]
fn site_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "site": { "base_url": "https://example.test/", "default_locale": "tr" },
        "storage": { "static_dir": "/srv/public", "output_dir": "/srv/dist" }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.site.default_locale, Locale::Tr);
    assert_eq!(cfg.site.name, "Various Apps", "unset fields keep their defaults");
    assert_eq!(cfg.storage.static_dir, std::path::PathBuf::from("/srv/public"));
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn site_url_joins_without_double_slashes() {
    let mut cfg = SiteConfig::default();
    cfg.site.base_url = "https://example.test/".to_owned();

    assert_eq!(cfg.site.url("/"), "https://example.test");
    assert_eq!(cfg.site.url("/tr/apps/viona"), "https://example.test/tr/apps/viona");
}
