mod chat;
pub use chat::{ChatPageView, FeedbackSubmission};

mod dashboard_shell;
pub use dashboard_shell::{DashboardShell, NavItem};

mod embedding_models;
pub use embedding_models::EmbeddingModelsView;

mod order_details;
pub use order_details::{BillingInformation, Order, OrderDetailsView, OrderSummary, TimelineStep};

mod product_page;
pub use product_page::{sample_other_products, ProductDetails, ProductPageView, ProductRow};

mod pricing;
pub use pricing::{BillingPeriod, PricingPageView, TrustedBrands};
