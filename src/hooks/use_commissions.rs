use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::commission::{CommissionReport, DailyCommission, WeeklyCommission};
use crate::models::error::AppError;
use crate::models::shop::ShopId;
use crate::services::api::ApiHandle;

/// Identifies one issued commissions request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Hands out monotonically increasing tickets; only the latest one is current.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Cell<u64>,
}

impl RequestTracker {
    pub fn issue(&self) -> RequestTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Makes every outstanding ticket stale.
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}

/// A commissions fetch that has to be sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: RequestTicket,
    pub shop_id: ShopId,
}

/// Local state of the commissions view for the current shop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommissionsState {
    pub report: Rc<CommissionReport>,
    pub loading: bool,
    pub error: Option<AppError>,
    shop_id: Option<ShopId>,
}

/// What the view should render, in precedence order.
#[derive(Debug, PartialEq)]
pub enum Screen<'a> {
    NoShop,
    Loading,
    Failed(&'a AppError),
    Loaded(&'a CommissionReport),
}

impl CommissionsState {
    /// Fresh state for a request that has just been issued.
    pub fn loading(shop_id: ShopId) -> Self {
        Self {
            report: Rc::default(),
            loading: true,
            error: None,
            shop_id: Some(shop_id),
        }
    }

    /// State after a request for `shop_id` completed.
    pub fn resolved(shop_id: ShopId, result: Result<CommissionReport, AppError>) -> Self {
        let (report, error) = match result {
            Ok(report) => (Rc::new(report), None),
            Err(e) => (Rc::default(), Some(e)),
        };

        Self {
            report,
            loading: false,
            error,
            shop_id: Some(shop_id),
        }
    }

    /// Starts a fetch cycle for the selected shop.
    ///
    /// Returns the state to show right away and, when a shop is selected, the
    /// one request to send. Any request still outstanding becomes stale.
    pub fn begin(
        tracker: &RequestTracker,
        shop_id: Option<ShopId>,
    ) -> (Self, Option<FetchRequest>) {
        match shop_id {
            None => {
                tracker.invalidate();
                (Self::default(), None)
            }
            Some(shop_id) => {
                let ticket = tracker.issue();
                let state = Self::loading(shop_id.clone());
                (state, Some(FetchRequest { ticket, shop_id }))
            }
        }
    }

    /// Applies the result of `request`, or `None` if a newer request superseded it.
    pub fn settle(
        tracker: &RequestTracker,
        request: FetchRequest,
        result: Result<CommissionReport, AppError>,
    ) -> Option<Self> {
        tracker
            .is_current(request.ticket)
            .then(|| Self::resolved(request.shop_id, result))
    }

    /// Shop the state was produced for.
    pub fn shop_id(&self) -> Option<&ShopId> {
        self.shop_id.as_ref()
    }

    pub fn daily(&self) -> &[DailyCommission] {
        &self.report.daily_commissions
    }

    pub fn weekly(&self) -> &[WeeklyCommission] {
        &self.report.weekly_commissions
    }

    /// State produced for another shop counts as loading: the fetch for the
    /// current shop is issued after the render that first sees it.
    pub fn screen(&self, shop_id: Option<&ShopId>) -> Screen<'_> {
        if shop_id.is_none() {
            Screen::NoShop
        } else if self.loading || self.shop_id.as_ref() != shop_id {
            Screen::Loading
        } else if let Some(error) = &self.error {
            Screen::Failed(error)
        } else {
            Screen::Loaded(&self.report)
        }
    }
}

/// Handle returned by `use_commissions` hook
#[derive(Clone, PartialEq)]
pub struct CommissionsHandle {
    pub state: CommissionsState,
    pub reload: Callback<()>,
}

/// Fetches commissions whenever `shop_id` changes or a reload is requested.
///
/// The HTTP client comes from the nearest `ContextProvider<ApiHandle>`.
#[hook]
pub fn use_commissions(shop_id: Option<ShopId>) -> CommissionsHandle {
    let api = use_context::<ApiHandle>();
    let state = use_state(CommissionsState::default);
    let tracker = use_memo((), |_| RequestTracker::default());
    let trigger = use_state(|| 0u32); // Reload trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((shop_id, trigger_value), move |(shop_id, _)| {
            let (next, request) = CommissionsState::begin(&tracker, shop_id.clone());
            state.set(next);

            if let Some(request) = request {
                let tracker = tracker.clone();
                spawn_local(async move {
                    let shop_id = request.shop_id.clone();
                    let result = match api {
                        Some(api) => api.fetch_commissions(&shop_id).await,
                        None => Err(AppError::ConfigError(
                            "No commissions client in context".to_string(),
                        )),
                    };

                    if let Err(e) = &result {
                        gloo::console::error!(&format!(
                            "Failed to fetch commissions for shop {shop_id}: {e}"
                        ));
                    }

                    match CommissionsState::settle(&tracker, request, result) {
                        Some(settled) => state.set(settled),
                        None => gloo::console::debug!(&format!(
                            "Discarding stale commissions response for shop {shop_id}"
                        )),
                    }
                });
            }

            move || tracker.invalidate()
        });
    }

    let reload = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    CommissionsHandle {
        state: (*state).clone(),
        reload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop(id: &str) -> ShopId {
        ShopId::parse(id).unwrap()
    }

    #[test]
    fn test_tracker_only_latest_ticket_is_current() {
        let tracker = RequestTracker::default();
        let first = tracker.issue();
        let second = tracker.issue();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_tracker_invalidate_stales_outstanding_ticket() {
        let tracker = RequestTracker::default();
        let ticket = tracker.issue();
        tracker.invalidate();

        assert!(!tracker.is_current(ticket));
    }

    #[test]
    fn test_begin_without_shop_issues_no_request() {
        let tracker = RequestTracker::default();
        let (state, request) = CommissionsState::begin(&tracker, None);

        assert!(request.is_none());
        assert_eq!(state, CommissionsState::default());
        assert_eq!(state.screen(None), Screen::NoShop);
    }

    #[test]
    fn test_clearing_shop_stales_outstanding_request() {
        let tracker = RequestTracker::default();
        let (_, request) = CommissionsState::begin(&tracker, Some(shop("S1")));
        CommissionsState::begin(&tracker, None);

        let settled =
            CommissionsState::settle(&tracker, request.unwrap(), Ok(CommissionReport::default()));
        assert!(settled.is_none());
    }

    #[test]
    fn test_loading_state_clears_previous_error() {
        let tracker = RequestTracker::default();
        let (_, request) = CommissionsState::begin(&tracker, Some(shop("S1")));
        let failed = CommissionsState::settle(
            &tracker,
            request.unwrap(),
            Err(AppError::NetworkError("offline".to_string())),
        )
        .unwrap();
        assert!(failed.error.is_some());

        let (next, _) = CommissionsState::begin(&tracker, Some(shop("S1")));
        assert!(next.loading);
        assert!(next.error.is_none());
        assert!(next.daily().is_empty());
    }

    #[test]
    fn test_state_for_other_shop_renders_as_loading() {
        let loaded = CommissionsState::resolved(shop("S1"), Ok(CommissionReport::default()));

        assert_eq!(loaded.screen(Some(&shop("S2"))), Screen::Loading);
    }
}
