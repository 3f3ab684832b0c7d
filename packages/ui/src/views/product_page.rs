use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, DefaultCell};
use crate::format::format_cents;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetails {
    pub name: String,
    pub price: u64,
    pub rating: u8,
    pub in_stock: bool,
    pub images: Vec<String>,
    pub highlights: Vec<String>,
}

/// A row of the "Other Products" table.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub name: String,
    pub price: u64,
    pub review: String,
    pub availability: String,
    pub id: String,
}

impl ProductDetails {
    pub fn sample() -> Self {
        Self {
            name: "Minimal Bar Stool".into(),
            price: 119_000,
            rating: 4,
            in_stock: true,
            images: (1..=5)
                .map(|i| format!("/images/products/product-details-{i}.jpg"))
                .collect(),
            highlights: vec![
                "The most beautiful curves of this swivel stool adds an elegant touch to any environment".into(),
                "Memory swivel seat returns to original seat position".into(),
                "Comfortable integrated footrest".into(),
                "Height adjustable with pneumatic height control".into(),
            ],
        }
    }
}

pub fn sample_other_products() -> Vec<ProductRow> {
    let row = |name: &str, price: u64, review: &str, availability: &str, id: &str| ProductRow {
        name: name.into(),
        price,
        review: review.into(),
        availability: availability.into(),
        id: id.into(),
    };

    vec![
        row("Christopher Knight Home", 8900, "4.5", "in stock", "230019"),
        row("Bar Height Swivel Barstool", 9900, "5", "in stock", "87120"),
        row("Signature Design by Ashley", 12900, "4.5", "in stock", "412301"),
        row("Modern Square", 5900, "4.5", "out of stock", "001992"),
    ]
}

#[component]
pub fn ProductPageView(product: ProductDetails, other_products: Vec<ProductRow>) -> Element {
    let mut active_image = use_signal(|| 0usize);
    let price = format_cents(product.price);
    let stars = "★".repeat(product.rating.min(5) as usize);
    let main_image = product.images.get(active_image()).cloned().unwrap_or_default();

    rsx! {
        div {
            class: "py-6",
            div {
                class: "rounded-xl shadow bg-white dark:bg-neutral-800 p-6",
                h5 { class: "mb-6 text-xl font-medium", "Product Details" }
                div {
                    class: "grid grid-cols-1 lg:grid-cols-12 gap-6",
                    div {
                        class: "lg:col-span-6 xl:col-span-5",
                        img { class: "w-full rounded-lg shadow", src: "{main_image}", alt: "Product image" }
                        div {
                            class: "product-thumbnails flex gap-2 mt-4",
                            for (idx, image) in product.images.iter().enumerate() {
                                img {
                                    key: "{image}",
                                    class: "w-16 h-16 rounded cursor-pointer",
                                    src: "{image}",
                                    alt: "Product image {idx}",
                                    onclick: move |_| active_image.set(idx),
                                }
                            }
                        }
                    }
                    div {
                        class: "lg:col-span-5 lg:mx-auto",
                        h3 { class: "text-2xl font-bold", "{product.name}" }
                        p { class: "text-amber-500", "{stars}" }
                        h6 { class: "mt-4 font-medium", "Price" }
                        h5 { class: "text-xl font-bold", "{price}" }
                        if product.in_stock {
                            span { class: "badge text-green-600 font-semibold text-xs uppercase", "in stock" }
                        } else {
                            span { class: "badge text-red-600 font-semibold text-xs uppercase", "out of stock" }
                        }
                        h6 { class: "mt-4 font-medium", "Description" }
                        ul {
                            class: "list-disc ml-5 text-sm text-neutral-600",
                            for highlight in product.highlights.iter() {
                                li { key: "{highlight}", "{highlight}" }
                            }
                        }
                        div {
                            class: "mt-6",
                            Button { variant: ButtonVariant::Primary, class: "w-full", "Add to cart" }
                        }
                    }
                }
                div {
                    class: "mt-16 mb-4",
                    h5 { class: "mb-2 ml-4 text-xl font-medium", "Other Products" }
                    table {
                        class: "other-products w-full",
                        thead {
                            tr {
                                th { "Product" }
                                th { "Price" }
                                th { "Review" }
                                th { "Availability" }
                                th { "Id" }
                            }
                        }
                        tbody {
                            for row in other_products.iter() {
                                tr {
                                    key: "{row.id}",
                                    td { DefaultCell { "{row.name}" } }
                                    td { DefaultCell { {format_cents(row.price)} } }
                                    td { DefaultCell { "{row.review}" } }
                                    td { DefaultCell { "{row.availability}" } }
                                    td { DefaultCell { "{row.id}" } }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_details_and_table() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                ProductPageView {
                    product: ProductDetails::sample(),
                    other_products: sample_other_products(),
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Minimal Bar Stool"));
        assert!(html.contains("$1,190.00"));
        assert!(html.contains("product-details-1.jpg"));
        assert!(html.contains("Modern Square"));
        assert!(html.contains("$59.00"));
    }
}
