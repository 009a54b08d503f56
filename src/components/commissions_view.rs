use std::rc::Rc;
use yew::prelude::*;

use crate::components::commission_table::CommissionTable;
use crate::components::status::{Status, StatusKind};
use crate::hooks::use_commissions::{Screen, use_commissions};
use crate::models::shop::ShopId;

pub const DAILY_EMPTY_MESSAGE: &str = "No daily commissions found.";
pub const WEEKLY_EMPTY_MESSAGE: &str = "No weekly commissions found.";

#[derive(Properties, PartialEq)]
pub struct CommissionsViewProps {
    #[prop_or_default]
    pub shop_id: Option<ShopId>,
}

/// Daily and weekly commission tables for one shop.
#[function_component(CommissionsView)]
pub fn commissions_view(props: &CommissionsViewProps) -> Html {
    let handle = use_commissions(props.shop_id.clone());

    let rows = use_memo(handle.state.report.clone(), |report| {
        (Rc::new(report.daily_rows()), Rc::new(report.weekly_rows()))
    });

    match handle.state.screen(props.shop_id.as_ref()) {
        Screen::NoShop => html! { <Status kind={StatusKind::NoShop} /> },
        Screen::Loading => html! { <Status kind={StatusKind::Loading} /> },
        Screen::Failed(error) => html! {
            <Status
                kind={StatusKind::Failed(error.clone())}
                on_retry={Some(handle.reload.clone())}
            />
        },
        Screen::Loaded(_) => {
            let (daily_rows, weekly_rows) = &*rows;
            html! {
                <div class="commissions">
                    <CommissionTable
                        title="Daily Commissions"
                        label_header="Date"
                        empty_message={DAILY_EMPTY_MESSAGE}
                        rows={daily_rows.clone()}
                    />
                    <CommissionTable
                        title="Weekly Commissions"
                        label_header="Week"
                        empty_message={WEEKLY_EMPTY_MESSAGE}
                        rows={weekly_rows.clone()}
                    />
                </div>
            }
        }
    }
}
