use dioxus::prelude::*;

use ui::views::{DashboardShell, NavItem};

use crate::Route;

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Chat", "/dashboards/chat"),
        NavItem::new("Embedding", "/admin/models/embedding"),
        NavItem::new("Orders", "/ecommerce/orders/order-details"),
        NavItem::new("Products", "/ecommerce/products/product-page"),
        NavItem::new("Pricing", "/pages/pricing-page"),
    ]
}

#[component]
pub fn DashboardLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        DashboardShell {
            nav_items: nav_items(),
            active_path: route.to_string(),
            on_navigate: move |path: String| match path.parse::<Route>() {
                Ok(target) => {
                    nav.push(target);
                }
                Err(_) => tracing::warn!("No route for {}", path),
            },
            Outlet::<Route> {}
        }
    }
}
