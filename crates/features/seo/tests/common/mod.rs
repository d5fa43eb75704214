#![allow(dead_code)]

use vapps_domain::config::SiteSettings;
use vapps_domain::locale::Locale;
use vapps_domain::routes::{PageRoute, Route};
use vapps_i18n::Translator;
use vapps_seo::Synthesizer;

pub fn synthesizer() -> Synthesizer {
    let translator = Translator::embedded(Locale::En).expect("embedded catalogs parse");
    Synthesizer::new(SiteSettings::default(), translator)
}

pub fn page_inventory() -> Vec<PageRoute> {
    Locale::ALL
        .into_iter()
        .flat_map(|locale| {
            std::iter::once(PageRoute::new(locale, Route::Home))
                .chain(vapps_catalog::list_ids().into_iter().map(move |id| PageRoute::new(locale, Route::App(id))))
                .chain(std::iter::once(PageRoute::new(locale, Route::Privacy("ai-poster"))))
        })
        .collect()
}
