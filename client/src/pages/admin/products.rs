//! Admin product list with active/popular toggles.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{DEFAULT_CURRENCY, Product, ProductUpdate};
use crate::state::toast::Toasts;
use crate::util::format::format_price;

/// Product flags an admin can flip from the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductFlag {
    Active,
    Popular,
}

/// Partial update that inverts `flag` on `product`.
pub fn toggle_update(product: &Product, flag: ProductFlag) -> ProductUpdate {
    match flag {
        ProductFlag::Active => ProductUpdate { is_active: Some(!product.is_active), ..ProductUpdate::default() },
        ProductFlag::Popular => ProductUpdate { is_popular: Some(!product.is_popular), ..ProductUpdate::default() },
    }
}

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let toasts = Toasts::expect();
    let products = LocalResource::new(|| api::fetch_admin_products());

    let toggle = move |product: Product, flag: ProductFlag| {
        let update = toggle_update(&product, flag);
        leptos::task::spawn_local(async move {
            match api::update_product(&product.product_id, &update).await {
                Ok(_) => products.refetch(),
                Err(e) => toasts.error(e.user_message("Could not update the product.")),
            }
        });
    };

    view! {
        <div class="admin-page">
            <h1>"Products"</h1>
            <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                {move || {
                    products.get().map(|result| match result {
                        Ok(list) => view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Category"</th>
                                        <th>"Monthly"</th>
                                        <th>"Yearly"</th>
                                        <th>"Active"</th>
                                        <th>"Popular"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|product| {
                                            let for_active = product.clone();
                                            let for_popular = product.clone();
                                            view! {
                                                <tr>
                                                    <td>{product.name_en.clone()}</td>
                                                    <td>{product.category.label()}</td>
                                                    <td>{format_price(product.price_monthly, DEFAULT_CURRENCY)}</td>
                                                    <td>{format_price(product.price_yearly, DEFAULT_CURRENCY)}</td>
                                                    <td>
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=product.is_active
                                                            on:change=move |_| toggle(for_active.clone(), ProductFlag::Active)
                                                        />
                                                    </td>
                                                    <td>
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=product.is_popular
                                                            on:change=move |_| toggle(for_popular.clone(), ProductFlag::Popular)
                                                        />
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any(),
                        Err(e) => view! {
                            <p class="admin-page__error">{e.user_message("Could not load products.")}</p>
                        }
                            .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
