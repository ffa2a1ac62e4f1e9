//! Paged gallery list state machine.
//!
//! Owns the append-only, de-duplicated item list behind the wallpapers and
//! favorites pages. Fetches are identified by a [`FetchTicket`] carrying the
//! epoch the request was issued under; the epoch advances on every filter
//! change, so a response from a superseded fetch is discarded instead of
//! overwriting newer state.

use tracing::warn;

use crate::models::{Wallpaper, WallpaperPage};

/// Page size for the main gallery and favorites listings.
pub const GALLERY_PAGE_SIZE: usize = 12;
/// Window size for the similar-wallpapers strip.
pub const SIMILAR_PAGE_SIZE: usize = 10;

/// Identifies an in-flight page fetch. Responses are only applied when the
/// ticket's epoch still matches the list's.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub epoch: u64,
    pub offset: usize,
    pub limit: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryList {
    items: Vec<Wallpaper>,
    offset: usize,
    total: usize,
    has_more: bool,
    loading: bool,
    error: Option<String>,
    epoch: u64,
    page_size: usize,
}

impl Default for GalleryList {
    fn default() -> Self {
        Self::new(GALLERY_PAGE_SIZE)
    }
}

impl GalleryList {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            offset: 0,
            total: 0,
            has_more: true,
            loading: false,
            error: None,
            epoch: 0,
            page_size,
        }
    }

    pub fn items(&self) -> &[Wallpaper] {
        &self.items
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|w| w.id == id)
    }

    /// Start over for a new filter. Advances the epoch so any fetch still in
    /// flight for the previous filter resolves as stale.
    pub fn begin_reset(&mut self) -> FetchTicket {
        self.epoch += 1;
        self.loading = true;
        self.error = None;
        FetchTicket {
            epoch: self.epoch,
            offset: 0,
            limit: self.page_size,
        }
    }

    pub fn apply_reset(&mut self, ticket: FetchTicket, page: WallpaperPage) {
        if !self.accept(ticket) {
            return;
        }
        self.loading = false;
        self.total = page.total;
        self.items = page.wallpapers;
        self.offset = self.page_size;
        self.has_more = self.items.len() < self.total;
    }

    pub fn fail_reset(&mut self, ticket: FetchTicket, message: impl Into<String>) {
        if !self.accept(ticket) {
            return;
        }
        self.loading = false;
        self.items.clear();
        self.error = Some(message.into());
    }

    /// Next page under the current filter. `None` while a fetch is in flight
    /// or when the backend has nothing further to report.
    pub fn begin_load_more(&mut self) -> Option<FetchTicket> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        Some(FetchTicket {
            epoch: self.epoch,
            offset: self.offset,
            limit: self.page_size,
        })
    }

    /// Appends a fetched page, skipping ids already present (the backend may
    /// return overlapping pages). `has_more` is recomputed from the
    /// post-dedup length, so duplicate suppression never strands unreachable
    /// items behind a prematurely-false flag.
    pub fn apply_more(&mut self, ticket: FetchTicket, page: WallpaperPage) {
        if !self.accept(ticket) {
            return;
        }
        self.loading = false;
        self.total = page.total;
        for wallpaper in page.wallpapers {
            if !self.contains(wallpaper.id) {
                self.items.push(wallpaper);
            }
        }
        self.offset += ticket.limit;
        self.has_more = self.items.len() < self.total;
    }

    pub fn fail_more(&mut self, ticket: FetchTicket) {
        if !self.accept(ticket) {
            return;
        }
        self.loading = false;
    }

    /// Drop a deleted or un-favorited item. `offset` is deliberately left
    /// alone; the next page request may re-return neighbors, which the
    /// dedup in [`apply_more`](Self::apply_more) absorbs.
    pub fn remove(&mut self, id: i64) {
        let before = self.items.len();
        self.items.retain(|w| w.id != id);
        if self.items.len() < before {
            self.total = self.total.saturating_sub(1);
        }
    }

    fn accept(&self, ticket: FetchTicket) -> bool {
        if ticket.epoch != self.epoch {
            warn!(
                ticket_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "discarding stale gallery response"
            );
            return false;
        }
        true
    }
}

/// Similar-wallpapers strip: the backend returns all candidates in one
/// response (no total), and the client reveals them in windows of
/// [`SIMILAR_PAGE_SIZE`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimilarList {
    all: Vec<Wallpaper>,
    shown: usize,
    loading: bool,
    error: Option<String>,
    epoch: u64,
}

impl SimilarList {
    pub fn visible(&self) -> &[Wallpaper] {
        &self.all[..self.shown]
    }

    pub fn has_more(&self) -> bool {
        self.shown < self.all.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a fetch for a newly-previewed wallpaper.
    pub fn begin_fetch(&mut self) -> u64 {
        self.epoch += 1;
        self.loading = true;
        self.error = None;
        self.epoch
    }

    pub fn apply(&mut self, epoch: u64, wallpapers: Vec<Wallpaper>) {
        if epoch != self.epoch {
            return;
        }
        self.loading = false;
        self.shown = wallpapers.len().min(SIMILAR_PAGE_SIZE);
        self.all = wallpapers;
    }

    pub fn fail(&mut self, epoch: u64, message: impl Into<String>) {
        if epoch != self.epoch {
            return;
        }
        self.loading = false;
        self.all.clear();
        self.shown = 0;
        self.error = Some(message.into());
    }

    /// Reveal the next window from the already-fetched set.
    pub fn load_more(&mut self) {
        self.shown = (self.shown + SIMILAR_PAGE_SIZE).min(self.all.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Wallpaper};
    use chrono::Utc;

    fn wp(id: i64) -> Wallpaper {
        Wallpaper {
            id,
            image_url: format!("/img/{id}.png"),
            image_thumb_url: None,
            image_medium_url: None,
            category: Category {
                id: 1,
                name: "space".into(),
                description: None,
                preview_url: None,
            },
            tags: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn page(ids: std::ops::Range<i64>, total: usize, limit: usize, offset: usize) -> WallpaperPage {
        WallpaperPage {
            wallpapers: ids.map(wp).collect(),
            total,
            limit,
            offset,
        }
    }

    #[test]
    fn reset_fills_first_page_and_computes_has_more() {
        let mut list = GalleryList::default();
        let ticket = list.begin_reset();
        assert!(list.is_loading());

        list.apply_reset(ticket, page(0..12, 25, 12, 0));
        assert_eq!(list.items().len(), 12);
        assert_eq!(list.total(), 25);
        assert!(list.has_more());
        assert!(!list.is_loading());
    }

    #[test]
    fn reset_with_total_below_page_size_ends_the_list() {
        let mut list = GalleryList::default();
        let ticket = list.begin_reset();
        list.apply_reset(ticket, page(0..5, 5, 12, 0));
        assert_eq!(list.items().len(), 5);
        assert!(!list.has_more());
    }

    #[test]
    fn two_load_mores_exhaust_a_total_of_25() {
        // Total 25 at page size 12 -> 12 + 12 + 1.
        let mut list = GalleryList::default();
        let t = list.begin_reset();
        list.apply_reset(t, page(0..12, 25, 12, 0));

        let t = list.begin_load_more().expect("second page");
        assert_eq!(t.offset, 12);
        list.apply_more(t, page(12..24, 25, 12, 12));
        assert_eq!(list.items().len(), 24);
        assert!(list.has_more());

        let t = list.begin_load_more().expect("third page");
        assert_eq!(t.offset, 24);
        list.apply_more(t, page(24..25, 25, 12, 24));
        assert_eq!(list.items().len(), 25);
        assert!(!list.has_more());
    }

    #[test]
    fn overlapping_pages_are_deduplicated() {
        let mut list = GalleryList::default();
        let t = list.begin_reset();
        list.apply_reset(t, page(0..12, 20, 12, 0));

        // Backend re-returns ids 10 and 11 at the page boundary.
        let t = list.begin_load_more().unwrap();
        list.apply_more(t, page(10..20, 20, 12, 12));

        let ids: Vec<i64> = list.items().iter().map(|w| w.id).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert_eq!(list.items().len(), 20);
        // Post-dedup has_more: 20 of 20 fetched, nothing left.
        assert!(!list.has_more());
    }

    #[test]
    fn has_more_survives_duplicate_only_pages() {
        let mut list = GalleryList::default();
        let t = list.begin_reset();
        list.apply_reset(t, page(0..12, 14, 12, 0));

        // Entirely-overlapping page: nothing appended, but 12 < 14 so the
        // list still reports more.
        let t = list.begin_load_more().unwrap();
        list.apply_more(t, page(0..12, 14, 12, 12));
        assert_eq!(list.items().len(), 12);
        assert!(list.has_more());
    }

    #[test]
    fn load_more_is_gated_while_in_flight_and_at_end() {
        let mut list = GalleryList::default();
        let t = list.begin_reset();
        assert!(list.begin_load_more().is_none(), "loading in flight");
        list.apply_reset(t, page(0..12, 12, 12, 0));
        assert!(list.begin_load_more().is_none(), "nothing more");
    }

    #[test]
    fn stale_epoch_responses_are_discarded() {
        let mut list = GalleryList::default();
        let old = list.begin_reset();
        let fresh = list.begin_reset();

        // The superseded fetch resolves late; it must not clobber anything.
        list.apply_reset(old, page(50..62, 100, 12, 0));
        assert!(list.items().is_empty());
        assert!(list.is_loading());

        list.apply_reset(fresh, page(0..12, 25, 12, 0));
        assert_eq!(list.items()[0].id, 0);
    }

    #[test]
    fn stale_failure_does_not_set_error() {
        let mut list = GalleryList::default();
        let old = list.begin_reset();
        let fresh = list.begin_reset();
        list.fail_reset(old, "boom");
        assert!(list.error().is_none());
        list.fail_reset(fresh, "boom");
        assert_eq!(list.error(), Some("boom"));
    }

    #[test]
    fn failed_reset_leaves_items_empty() {
        let mut list = GalleryList::default();
        let t = list.begin_reset();
        list.apply_reset(t, page(0..12, 25, 12, 0));

        let t = list.begin_reset();
        list.fail_reset(t, "network down");
        assert!(list.items().is_empty());
        assert_eq!(list.error(), Some("network down"));
    }

    #[test]
    fn remove_drops_item_and_decrements_total() {
        let mut list = GalleryList::default();
        let t = list.begin_reset();
        list.apply_reset(t, page(0..12, 25, 12, 0));

        list.remove(5);
        assert!(!list.contains(5));
        assert_eq!(list.items().len(), 11);
        assert_eq!(list.total(), 24);

        // Removing an absent id is a no-op.
        list.remove(99);
        assert_eq!(list.total(), 24);
    }

    #[test]
    fn similar_list_reveals_in_windows_of_ten() {
        let mut similar = SimilarList::default();
        let epoch = similar.begin_fetch();
        similar.apply(epoch, (0..23).map(wp).collect());

        assert_eq!(similar.visible().len(), 10);
        assert!(similar.has_more());
        similar.load_more();
        assert_eq!(similar.visible().len(), 20);
        similar.load_more();
        assert_eq!(similar.visible().len(), 23);
        assert!(!similar.has_more());
    }

    #[test]
    fn similar_list_discards_stale_responses() {
        let mut similar = SimilarList::default();
        let old = similar.begin_fetch();
        let fresh = similar.begin_fetch();
        similar.apply(old, (0..5).map(wp).collect());
        assert!(similar.visible().is_empty());
        similar.apply(fresh, (10..15).map(wp).collect());
        assert_eq!(similar.visible().len(), 5);
        assert_eq!(similar.visible()[0].id, 10);
    }
}
