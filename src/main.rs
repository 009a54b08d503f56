use yew::prelude::*;

use shop_commissions::components::{CommissionsView, ShopSelector};
use shop_commissions::hooks::use_shop::use_shop;
use shop_commissions::services::api::{ApiHandle, CommissionsClient};

#[function_component(App)]
fn app() -> Html {
    let shop = use_shop();
    let api = use_memo((), |_| CommissionsClient::new().map(ApiHandle::new));

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Shop Commissions"}</h1>
                <ShopSelector shop_id={shop.shop_id.clone()} on_change={shop.set_shop.clone()} />
            </header>

            <main class="app-main">
                {
                    match &*api {
                        Ok(api) => html! {
                            <ContextProvider<ApiHandle> context={api.clone()}>
                                <CommissionsView shop_id={shop.shop_id.clone()} />
                            </ContextProvider<ApiHandle>>
                        },
                        Err(e) => html! {
                            <div class="status error">
                                <p>{e.to_string()}</p>
                            </div>
                        },
                    }
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
