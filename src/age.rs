//! Image ages: when each image was created, keyed by its bare ID.
//!
//! Handy for spotting stale images in node caches.

use log::warn;
use std::collections::BTreeMap;

use crate::image::Image;

/// Cleaned image ID to creation time in Unix epoch seconds.
pub type AgeMap = BTreeMap<String, i64>;

/// The hash algorithm prefix that we strip from image IDs.
const ID_PREFIX: &str = "sha256:";

/// Strip the hash algorithm prefix from an image ID, if it has one.
pub fn clean_id(id: &str) -> &str {
    id.strip_prefix(ID_PREFIX).unwrap_or(id)
}

/// Build the age map for `images`. Later images win on duplicate IDs.
pub fn age_map(images: &[Image]) -> AgeMap {
    let mut ages = AgeMap::new();
    for image in images {
        let id = clean_id(&image.Id);
        if let Some(previous) = ages.insert(id.to_owned(), image.Created) {
            warn!(
                "image {} listed more than once, using created {} instead of {}",
                id, image.Created, previous
            );
        }
    }
    ages
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;
    use std::sync::Once;

    thread_local! {
        static WARNINGS: RefCell<Vec<String>> = RefCell::new(Vec::new());
    }

    /// Keeps the warnings logged on the current test's thread.
    struct CaptureWarnings;

    impl Log for CaptureWarnings {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Warn
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureWarnings = CaptureWarnings;
    static INIT: Once = Once::new();

    fn take_warnings() -> Vec<String> {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).ok();
            log::set_max_level(LevelFilter::Warn);
        });
        WARNINGS.with(|w| w.borrow_mut().drain(..).collect())
    }

    fn image(id: &str, created: i64) -> Image {
        Image {
            Id: id.to_owned(),
            Created: created,
            ..Image::default()
        }
    }

    #[test]
    fn strips_sha256_prefix() {
        assert_eq!(clean_id("sha256:abc"), "abc");
    }

    #[test]
    fn cleaning_is_idempotent() {
        assert_eq!(clean_id("abc"), "abc");
        assert_eq!(clean_id(clean_id("sha256:abc")), "abc");
    }

    #[test]
    fn other_algorithms_are_left_alone() {
        assert_eq!(clean_id("sha512:abc"), "sha512:abc");
    }

    #[test]
    fn one_entry_per_image() {
        let ages = age_map(&[image("sha256:abc", 1000), image("def", 2000)]);
        assert_eq!(ages.len(), 2);
        assert_eq!(ages["abc"], 1000);
        assert_eq!(ages["def"], 2000);
    }

    #[test]
    fn last_duplicate_wins() {
        take_warnings();
        let ages = age_map(&[image("sha256:abc", 1000), image("abc", 3000)]);
        assert_eq!(ages.len(), 1);
        assert_eq!(ages["abc"], 3000);

        let warnings = take_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("abc"));
        assert!(warnings[0].contains("3000"));
    }

    #[test]
    fn distinct_ids_log_nothing() {
        take_warnings();
        age_map(&[image("sha256:abc", 1000), image("sha256:def", 2000)]);
        assert!(take_warnings().is_empty());
    }

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(age_map(&[]).is_empty());
    }
}
