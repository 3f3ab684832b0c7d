use dioxus::prelude::*;

use crate::components::{Badge, BadgeColor, Button, ButtonVariant, Divider};
use crate::format::format_cents;

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineStep {
    pub title: String,
    pub date: String,
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BillingInformation {
    pub name: String,
    pub company: String,
    pub email: String,
    pub vat_number: String,
}

/// Amounts shown in the order summary, in cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub product_price: u64,
    pub delivery: u64,
    pub taxes: u64,
}

impl OrderSummary {
    pub fn total(&self) -> u64 {
        self.product_price + self.delivery + self.taxes
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub number: String,
    pub placed_on: String,
    pub tracking_code: String,
    pub product_name: String,
    pub product_image: String,
    pub delivered: bool,
    pub timeline: Vec<TimelineStep>,
    pub card_brand: String,
    pub card_last4: String,
    pub billing: BillingInformation,
    pub summary: OrderSummary,
}

impl Order {
    /// Fixture order for the dashboard preview.
    pub fn sample() -> Self {
        let step = |title: &str, date: &str, done: bool| TimelineStep {
            title: title.to_string(),
            date: date.to_string(),
            done,
        };

        Self {
            number: "241342".into(),
            placed_on: "23.02.2021".into(),
            tracking_code: "KF332".into(),
            product_name: "Gold Glasses".into(),
            product_image: "/images/products/product-details-1.jpg".into(),
            delivered: true,
            timeline: vec![
                step("Order received", "22 DEC 7:20 AM", true),
                step("Generate order id #1832412", "22 DEC 7:21 AM", true),
                step("Order transmitted to courier", "22 DEC 8:10 AM", true),
                step("Order delivered", "22 DEC 4:54 PM", true),
            ],
            card_brand: "Mastercard".into(),
            card_last4: "7852".into(),
            billing: BillingInformation {
                name: "Oliver Liam".into(),
                company: "Viking Burrito".into(),
                email: "oliver@burrito.com".into(),
                vat_number: "FRB1235476".into(),
            },
            summary: OrderSummary {
                product_price: 9000,
                delivery: 1400,
                taxes: 179,
            },
        }
    }
}

#[component]
pub fn OrderDetailsView(order: Order) -> Element {
    let summary = order.summary;
    let status = if order.delivered { "delivered" } else { "in transit" };
    let status_color = if order.delivered { BadgeColor::Success } else { BadgeColor::Info };
    let total = format_cents(summary.total());

    rsx! {
        div {
            class: "my-12 flex justify-center",
            div {
                class: "w-full lg:w-2/3 rounded-xl shadow bg-white dark:bg-neutral-800",
                div {
                    class: "pt-4 px-4 flex justify-between items-center",
                    div {
                        h6 { class: "font-semibold", "Order Details" }
                        p { class: "text-sm text-neutral-600",
                            "Order no. "
                            b { "{order.number}" }
                            " from "
                            b { "{order.placed_on}" }
                        }
                        p { class: "text-sm text-neutral-600",
                            "Code: "
                            b { "{order.tracking_code}" }
                        }
                    }
                    Button { variant: ButtonVariant::Outline, "Invoice" }
                }
                Divider {}
                div {
                    class: "pt-2 pb-6 px-4",
                    div {
                        class: "mb-6 flex items-center gap-4",
                        img { class: "w-28 rounded-lg", src: "{order.product_image}", alt: "{order.product_name}" }
                        div {
                            h6 { class: "font-semibold", "{order.product_name}" }
                            p { class: "text-sm text-neutral-600 mb-2", "Order is {status}." }
                            Badge { color: status_color, label: status }
                        }
                    }
                    Divider {}
                    div {
                        class: "mt-6 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-12 gap-6",
                        div {
                            class: "lg:col-span-3",
                            h6 { class: "font-semibold mb-2", "Track order" }
                            ol {
                                class: "order-timeline space-y-3",
                                for step in order.timeline.iter() {
                                    li {
                                        key: "{step.title}",
                                        class: if step.done { "timeline-step done" } else { "timeline-step" },
                                        p { class: "text-sm font-medium", "{step.title}" }
                                        p { class: "text-xs text-neutral-500", "{step.date}" }
                                    }
                                }
                            }
                        }
                        div {
                            class: "lg:col-span-5",
                            h6 { class: "font-semibold mb-2", "Payment details" }
                            p { class: "border rounded-lg p-3 text-sm",
                                "{order.card_brand} ****  ****  ****  {order.card_last4}"
                            }
                            div {
                                class: "mt-6",
                                h6 { class: "font-semibold mb-2", "Billing Information" }
                                dl {
                                    class: "billing-information text-sm bg-neutral-100 dark:bg-neutral-700 rounded-lg p-4",
                                    dt { class: "font-semibold", "{order.billing.name}" }
                                    dd { "Company Name: {order.billing.company}" }
                                    dd { "Email Address: {order.billing.email}" }
                                    dd { "VAT Number: {order.billing.vat_number}" }
                                }
                            }
                        }
                        div {
                            class: "lg:col-span-3 lg:ml-auto",
                            h6 { class: "font-semibold mb-2", "Order Summary" }
                            SummaryRow { label: "Product Price:", amount: summary.product_price }
                            SummaryRow { label: "Delivery:", amount: summary.delivery }
                            SummaryRow { label: "Taxes:", amount: summary.taxes }
                            div {
                                class: "order-total flex justify-between mt-4 font-semibold",
                                span { "Total:" }
                                span { "{total}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryRow(label: &'static str, amount: u64) -> Element {
    let amount = format_cents(amount);

    rsx! {
        div {
            class: "flex justify-between mb-1 text-sm",
            span { class: "text-neutral-600", "{label}" }
            span { class: "font-medium", "{amount}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_adds_price_delivery_and_taxes() {
        let summary = OrderSummary {
            product_price: 9000,
            delivery: 1400,
            taxes: 179,
        };
        assert_eq!(summary.total(), 10_579);
        assert_eq!(OrderSummary::default().total(), 0);
    }

    #[test]
    fn renders_sample_order() {
        let mut dom = VirtualDom::new(|| rsx! { OrderDetailsView { order: Order::sample() } });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("241342"));
        assert!(html.contains("$105.79"));
        assert_eq!(html.matches("timeline-step done").count(), 4);
        assert!(html.contains("role=\"separator\""));
    }
}
