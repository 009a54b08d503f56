use crate::models::error::AppError;
use yew::prelude::*;

/// Non-table states of the commissions view.
#[derive(Clone, Debug, PartialEq)]
pub enum StatusKind {
    NoShop,
    Loading,
    Failed(AppError),
}

impl StatusKind {
    pub fn message(&self) -> &'static str {
        match self {
            StatusKind::NoShop => "No shop selected.",
            StatusKind::Loading => "Loading commissions...",
            StatusKind::Failed(_) => "Failed to load commissions",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub kind: StatusKind,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    let message = props.kind.message();

    match &props.kind {
        StatusKind::NoShop => html! {
            <div class="status idle">
                <p>{message}</p>
            </div>
        },
        StatusKind::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{message}</p>
            </div>
        },
        StatusKind::Failed(error) => html! {
            <div class="status error" role="alert">
                <p>{message}</p>
                <p class="status-hint">{error.hint()}</p>
                if let Some(on_retry) = &props.on_retry {
                    <button class="retry-button" onclick={on_retry.reform(|_: MouseEvent| ())}>
                        {"Retry"}
                    </button>
                }
            </div>
        },
    }
}
