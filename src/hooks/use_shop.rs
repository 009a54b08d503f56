use gloo_storage::Storage;
use yew::prelude::*;

use crate::config::Config;
use crate::models::shop::ShopId;

/// Handle returned by `use_shop` hook
#[derive(Clone, PartialEq)]
pub struct ShopHandle {
    pub shop_id: Option<ShopId>,
    pub set_shop: Callback<Option<ShopId>>,
}

/// Selected shop with localStorage persistence
#[hook]
pub fn use_shop() -> ShopHandle {
    let shop_id = use_state(load_shop_preference);

    // Effect: Persist selection to localStorage on change
    {
        let shop_value = (*shop_id).clone();
        use_effect_with(shop_value, move |shop_id| {
            save_shop_preference(shop_id.as_ref());
            || ()
        });
    }

    let set_shop = {
        let shop_id = shop_id.clone();
        Callback::from(move |new_shop| shop_id.set(new_shop))
    };

    ShopHandle {
        shop_id: (*shop_id).clone(),
        set_shop,
    }
}

/// Load the last selected shop from localStorage
fn load_shop_preference() -> Option<ShopId> {
    gloo_storage::LocalStorage::get(Config::SHOP_STORAGE_KEY).ok()
}

/// Save the selected shop to localStorage, clearing it when no shop is selected
fn save_shop_preference(shop_id: Option<&ShopId>) {
    match shop_id {
        Some(shop_id) => {
            if let Err(e) = gloo_storage::LocalStorage::set(Config::SHOP_STORAGE_KEY, shop_id) {
                gloo::console::warn!(&format!("Failed to save selected shop: {e:?}"));
            }
        }
        None => gloo_storage::LocalStorage::delete(Config::SHOP_STORAGE_KEY),
    }
}
