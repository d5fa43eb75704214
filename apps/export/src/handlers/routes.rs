use vapps::domain::locale::Locale;
use vapps::features::pages::{enumerate, page_path, pages};

/// Public paths of every exportable page, one per entry.
#[must_use]
pub fn page_paths(default: Locale) -> Vec<String> {
    pages().iter().map(|page| page_path(page, default)).collect()
}

/// Prints the page inventory, or the `(locale, id)` pairs when `pairs` is set.
pub fn print_routes(default: Locale, pairs: bool) {
    if pairs {
        for (locale, id) in enumerate() {
            println!("{locale}\t{id}");
        }
    } else {
        for path in page_paths(default) {
            println!("{path}");
        }
    }
}
