mod dashboard_layout;
pub use dashboard_layout::DashboardLayout;

mod chat;
pub use chat::Chat;

mod embedding_models;
pub use embedding_models::EmbeddingModels;

mod ecommerce;
pub use ecommerce::{OrderDetails, ProductPage};

mod pricing;
pub use pricing::Pricing;

mod not_found;
pub use not_found::NotFound;
