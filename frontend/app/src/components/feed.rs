use std::rc::Rc;

use communication::Artwork;
use yew::Reducible;

/// How many placeholder cards trail the real ones while a page is loading.
pub const SKELETON_BATCH: usize = 8;

/// Pagination state of the gallery feed, held in a reducer so that every
/// transition applies to the latest state regardless of which event
/// (intersection or network response) dispatched it.
///
/// `page` starts at 1 and only ever increases. `loading` is true exactly
/// while a fetch for `page` is in flight; since `Advance` is refused while
/// loading, there is never more than one request at a time. `has_more`
/// latches to false on the first empty page and stays false until remount.
#[derive(Clone, PartialEq, Debug)]
pub struct FeedState {
    pub page: u32,
    pub has_more: bool,
    pub loading: bool,
    pub artworks: Vec<Artwork>,
}

pub enum FeedAction {
    /// Move to the next page and begin loading it. Ignored while a load is
    /// in flight or after the feed is exhausted.
    Advance,
    /// A page arrived; append it in request order. An empty page means the
    /// backend has nothing further.
    Loaded(Vec<Artwork>),
    /// The fetch failed. The error is logged at the fetch site; here we only
    /// clear the in-flight flag so the user can trigger another attempt.
    Failed,
}

impl FeedState {
    /// Fresh mount: the load of page 1 begins immediately.
    pub fn new() -> Self {
        Self {
            page: 1,
            has_more: true,
            loading: true,
            artworks: Vec::new(),
        }
    }

    pub fn can_advance(&self) -> bool {
        !self.loading && self.has_more
    }

    pub fn exhausted(&self) -> bool {
        !self.has_more
    }
}

impl Reducible for FeedState {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: FeedAction) -> Rc<Self> {
        match action {
            FeedAction::Advance => {
                if !self.can_advance() {
                    return self;
                }
                let mut next = (*self).clone();
                next.page += 1;
                next.loading = true;
                Rc::new(next)
            }
            FeedAction::Loaded(items) => {
                let mut next = (*self).clone();
                next.loading = false;
                next.has_more = !items.is_empty();
                next.artworks.extend(items);
                Rc::new(next)
            }
            FeedAction::Failed => {
                let mut next = (*self).clone();
                next.loading = false;
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: &str) -> Artwork {
        Artwork {
            id: id.to_owned(),
            title: format!("Artwork {id}"),
            description: None,
            image_url: format!("https://img.example/{id}.jpg"),
            artist_id: "artist".to_owned(),
            created_at: serde_json::Value::Null,
            blurhash: None,
            price: None,
        }
    }

    fn page_of(ids: &[&str]) -> Vec<Artwork> {
        ids.iter().map(|id| artwork(id)).collect()
    }

    fn apply(state: FeedState, action: FeedAction) -> FeedState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn mount_loads_page_one() {
        let state = FeedState::new();
        assert_eq!(state.page, 1);
        assert!(state.loading);
        assert!(state.has_more);
        assert!(state.artworks.is_empty());
    }

    #[test]
    fn pages_append_in_request_order() {
        let mut state = FeedState::new();
        state = apply(state, FeedAction::Loaded(page_of(&["a", "b"])));
        state = apply(state, FeedAction::Advance);
        assert_eq!(state.page, 2);
        state = apply(state, FeedAction::Loaded(page_of(&["c"])));

        let ids: Vec<&str> = state.artworks.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(state.artworks.len(), 2 + 1);
    }

    #[test]
    fn advance_refused_while_loading() {
        // Scenario D: the intersection fires twice before the fetch resolves.
        let mut state = FeedState::new();
        state = apply(state, FeedAction::Loaded(page_of(&["a"])));
        state = apply(state, FeedAction::Advance);
        assert_eq!(state.page, 2);

        // Second intersection arrives while page 2 is still in flight.
        let again = apply(state.clone(), FeedAction::Advance);
        assert_eq!(again.page, 2);
        assert_eq!(again, state);
    }

    #[test]
    fn empty_page_exhausts_the_feed_permanently() {
        // Scenario B: page 1 is full, page 2 is empty.
        let mut state = FeedState::new();
        state = apply(state, FeedAction::Loaded(page_of(&["a", "b"])));
        state = apply(state, FeedAction::Advance);
        state = apply(state, FeedAction::Loaded(vec![]));

        assert!(!state.has_more);
        assert!(state.exhausted());
        assert_eq!(state.artworks.len(), 2);

        // Further intersections never issue another page.
        let after = apply(state.clone(), FeedAction::Advance);
        assert_eq!(after.page, state.page);
        assert!(!after.loading);
    }

    #[test]
    fn failure_clears_loading_and_keeps_everything_else() {
        // Scenario C: the very first fetch rejects.
        let state = apply(FeedState::new(), FeedAction::Failed);
        assert!(!state.loading);
        assert!(state.artworks.is_empty());
        assert!(state.has_more, "a failure is not exhaustion");
        assert_eq!(state.page, 1);

        // The user can trigger another attempt afterwards.
        let retried = apply(state, FeedAction::Advance);
        assert!(retried.loading);
        assert_eq!(retried.page, 2);
    }

    #[test]
    fn full_first_page_is_not_exhaustion() {
        // Scenario A: 24 records on page 1.
        let items: Vec<Artwork> = (0..24).map(|n| artwork(&n.to_string())).collect();
        let state = apply(FeedState::new(), FeedAction::Loaded(items));
        assert_eq!(state.artworks.len(), 24);
        assert!(state.has_more);
        assert!(!state.loading);
        assert!(!state.exhausted());
    }

    #[test]
    fn page_only_changes_through_accepted_advances() {
        // Neither load completion nor failure moves the page counter, so a
        // new fetch can only start once the previous one has finished.
        let mut state = FeedState::new();
        state = apply(state, FeedAction::Loaded(page_of(&["a"])));
        assert_eq!(state.page, 1);
        state = apply(state, FeedAction::Advance);
        state = apply(state, FeedAction::Failed);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn duplicate_ids_are_kept_as_delivered() {
        // The backend's page semantics are unspecified; the feed does not
        // deduplicate, it renders exactly what was delivered.
        let mut state = FeedState::new();
        state = apply(state, FeedAction::Loaded(page_of(&["a"])));
        state = apply(state, FeedAction::Advance);
        state = apply(state, FeedAction::Loaded(page_of(&["a"])));
        assert_eq!(state.artworks.len(), 2);
        assert_eq!(state.artworks[0].id, state.artworks[1].id);
    }
}
