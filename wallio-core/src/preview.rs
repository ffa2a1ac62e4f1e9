//! Preview modal state: the currently-open wallpaper and adjacent-item
//! navigation.
//!
//! A previewed item is not always a member of the loaded list page (it may
//! have been reached through the similar-wallpapers strip), so the last
//! list-resident item is kept as the anchor for next/previous requests.

use crate::models::{PreviewInfo, Wallpaper};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Preview {
    current: Option<PreviewInfo>,
    open: bool,
    navigating: bool,
    last_list_item: Option<PreviewInfo>,
}

impl Preview {
    pub fn current(&self) -> Option<&PreviewInfo> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_navigating(&self) -> bool {
        self.navigating
    }

    /// Open the preview on fetched info. `in_list` marks the item as
    /// list-resident, which makes it the new navigation anchor.
    pub fn show(&mut self, info: PreviewInfo, in_list: bool) {
        if in_list {
            self.last_list_item = Some(info.clone());
        }
        self.current = Some(info);
        self.open = true;
    }

    /// Open with a synthesized preview when the info fetch failed: the
    /// summary already in hand, assumed non-favorite.
    pub fn show_fallback(&mut self, wallpaper: Wallpaper, in_list: bool) {
        self.show(PreviewInfo::assumed(wallpaper), in_list);
    }

    /// Claim the navigation slot. Returns `false` when nothing is open or a
    /// navigation request is already in flight.
    pub fn begin_navigation(&mut self) -> bool {
        if !self.open || self.navigating || self.current.is_none() {
            return false;
        }
        self.navigating = true;
        true
    }

    /// The id adjacent requests are issued against: the open item when it is
    /// part of the backing list, otherwise the last list-resident item.
    pub fn anchor_id(&self, list_contains: impl Fn(i64) -> bool) -> Option<i64> {
        let current = self.current.as_ref()?;
        if list_contains(current.wallpaper.id) {
            return Some(current.wallpaper.id);
        }
        self.last_list_item.as_ref().map(|info| info.wallpaper.id)
    }

    /// Successful navigation replaces both the open item and the anchor.
    pub fn apply_navigation(&mut self, info: PreviewInfo) {
        self.last_list_item = Some(info.clone());
        self.current = Some(info);
    }

    /// Always runs, success or failure; pairs with
    /// [`begin_navigation`](Self::begin_navigation).
    pub fn end_navigation(&mut self) {
        self.navigating = false;
    }

    /// Optimistically flip the favorite flag when the toggled id is the one
    /// on screen, whether or not a follow-up info refetch lands.
    pub fn set_favorite(&mut self, id: i64, is_favorite: bool) {
        if let Some(info) = &mut self.current {
            if info.wallpaper.id == id {
                info.is_favorite = is_favorite;
            }
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::Utc;

    fn info(id: i64, is_favorite: bool) -> PreviewInfo {
        PreviewInfo {
            wallpaper: Wallpaper {
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
            },
            is_favorite,
        }
    }

    #[test]
    fn navigation_is_gated_while_in_flight() {
        let mut preview = Preview::default();
        assert!(!preview.begin_navigation(), "nothing open");

        preview.show(info(1, false), true);
        assert!(preview.begin_navigation());
        assert!(!preview.begin_navigation(), "already navigating");

        preview.end_navigation();
        assert!(preview.begin_navigation());
    }

    #[test]
    fn next_then_previous_returns_to_origin() {
        // Backend contract: previous(next(x)) == x under an unchanged filter.
        let mut preview = Preview::default();
        preview.show(info(7, false), true);

        assert!(preview.begin_navigation());
        preview.apply_navigation(info(8, false));
        preview.end_navigation();

        assert!(preview.begin_navigation());
        preview.apply_navigation(info(7, false));
        preview.end_navigation();

        assert_eq!(preview.current().unwrap().wallpaper.id, 7);
    }

    #[test]
    fn anchor_falls_back_to_last_list_item() {
        let mut preview = Preview::default();
        // Opened from the list, then followed a similar link out of it.
        preview.show(info(7, false), true);
        preview.show(info(42, false), false);

        let in_list = |id: i64| id == 7;
        assert_eq!(preview.anchor_id(in_list), Some(7));
    }

    #[test]
    fn anchor_prefers_list_resident_current() {
        let mut preview = Preview::default();
        preview.show(info(3, false), true);
        preview.show(info(7, false), true);
        assert_eq!(preview.anchor_id(|id| id == 3 || id == 7), Some(7));
    }

    #[test]
    fn anchor_is_none_without_any_list_residency() {
        let mut preview = Preview::default();
        preview.show(info(42, false), false);
        assert_eq!(preview.anchor_id(|_| false), None);
    }

    #[test]
    fn navigation_updates_the_anchor() {
        let mut preview = Preview::default();
        preview.show(info(7, false), true);
        preview.begin_navigation();
        preview.apply_navigation(info(8, false));
        preview.end_navigation();

        // 8 is not in the loaded page, so navigation relies on the anchor
        // having moved with it.
        assert_eq!(preview.anchor_id(|_| false), Some(8));
    }

    #[test]
    fn favorite_flag_flips_only_for_the_open_item() {
        let mut preview = Preview::default();
        preview.show(info(7, false), true);

        preview.set_favorite(9, true);
        assert!(!preview.current().unwrap().is_favorite);

        preview.set_favorite(7, true);
        assert!(preview.current().unwrap().is_favorite);
    }

    #[test]
    fn fallback_preview_assumes_non_favorite() {
        let mut preview = Preview::default();
        preview.show_fallback(info(5, true).wallpaper, true);
        let current = preview.current().unwrap();
        assert_eq!(current.wallpaper.id, 5);
        assert!(!current.is_favorite);
    }

    #[test]
    fn close_clears_the_open_item_but_keeps_the_anchor() {
        let mut preview = Preview::default();
        preview.show(info(7, false), true);
        preview.close();
        assert!(!preview.is_open());
        assert!(preview.current().is_none());

        // Re-opening from a similar link still has an anchor to lean on.
        preview.show(info(42, false), false);
        assert_eq!(preview.anchor_id(|_| false), Some(7));
    }
}
