use dioxus::prelude::*;

use ui::views::{sample_other_products, Order, OrderDetailsView, ProductDetails, ProductPageView};

#[component]
pub fn OrderDetails() -> Element {
    rsx! {
        OrderDetailsView { order: Order::sample() }
    }
}

#[component]
pub fn ProductPage() -> Element {
    rsx! {
        ProductPageView {
            product: ProductDetails::sample(),
            other_products: sample_other_products(),
        }
    }
}
