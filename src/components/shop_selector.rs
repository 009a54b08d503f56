use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::shop::ShopId;
use crate::utils::debounce::Debouncer;

#[derive(Properties, PartialEq)]
pub struct ShopSelectorProps {
    pub shop_id: Option<ShopId>,
    pub on_change: Callback<Option<ShopId>>,
}

/// Shop id input; typing is debounced, Enter or blur commits immediately
#[function_component(ShopSelector)]
pub fn shop_selector(props: &ShopSelectorProps) -> Html {
    let text = use_state(|| {
        props
            .shop_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    });
    let debouncer = use_memo((), |_| Debouncer::default());

    let on_input = {
        let text = text.clone();
        let debouncer = debouncer.clone();
        let callback = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let value = target.value();
            text.set(value.clone());

            let callback = callback.clone();
            debouncer.schedule(Config::SHOP_INPUT_DEBOUNCE_MS, move || {
                callback.emit(ShopId::parse(&value));
            });
        })
    };

    let on_commit = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlInputElement = e.target_unchecked_into();
            debouncer.cancel();
            callback.emit(ShopId::parse(&target.value()));
        })
    };

    html! {
        <label class="shop-selector">
            <span>{"Shop ID"}</span>
            <input
                type="text"
                placeholder="Enter a shop ID"
                aria-label="Shop identifier"
                value={(*text).clone()}
                oninput={on_input}
                onchange={on_commit}
            />
        </label>
    }
}
