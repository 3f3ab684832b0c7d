use dioxus::prelude::*;

use ui::{use_theme_provider, Settings, Theme};
use views::{Chat, DashboardLayout, EmbeddingModels, NotFound, OrderDetails, Pricing, ProductPage};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(DashboardLayout)]
        #[route("/dashboards/chat")]
        Chat {},
        #[route("/admin/models/embedding")]
        EmbeddingModels {},
        #[route("/ecommerce/orders/order-details")]
        OrderDetails {},
        #[route("/ecommerce/products/product-page")]
        ProductPage {},
    #[end_layout]
    #[route("/pages/pricing-page")]
    Pricing {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}

/// Settings from `dashboard.toml` and the environment, or the defaults if they don't parse.
fn load_settings() -> Settings {
    match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Invalid dashboard settings, using defaults: {}", e);
            Settings::default()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(load_settings);
    use_theme_provider(Theme::Light);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::DASHBOARD_CSS }

        Router::<Route> {}
    }
}

/// Redirect `/` to the chat dashboard
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Chat {});
    rsx! {}
}
