//! One module per routed page. Each content module pairs a `PageContent`
//! type (what the page fetches) with its view; static copy lives next to the
//! view as plain data.

pub mod challenge;
pub mod home;
pub mod impact;
pub mod marketing;
pub mod not_found;
pub mod research;
pub mod visual_identity;
pub mod website_redesign;

/// Display key for the item at `index` of a fetched collection.
///
/// Ids are not validated, so the position keeps keys unique even when the
/// server repeats or omits one.
pub(crate) fn item_key(index: usize, id: &str) -> String {
    format!("{index}-{id}")
}

#[cfg(test)]
mod tests {
    use super::item_key;

    #[test]
    fn keys_stay_unique_for_repeated_ids() {
        assert_ne!(item_key(0, "dup"), item_key(1, "dup"));
        assert_eq!(item_key(2, ""), "2-");
    }
}
