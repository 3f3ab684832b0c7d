use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaCheck, FaXmark};
use crate::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Annual => "Annual",
        }
    }

    /// Prices of the Starter, Premium and Enterprise plans, in dollars.
    pub fn prices(self) -> [&'static str; 3] {
        match self {
            Self::Monthly => ["59", "89", "99"],
            Self::Annual => ["119", "159", "399"],
        }
    }

    fn per(self) -> &'static str {
        match self {
            Self::Monthly => "mo",
            Self::Annual => "yr",
        }
    }
}

struct Plan {
    name: &'static str,
    features: [(&'static str, bool); 6],
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        features: [
            ("2 team members", true),
            ("20GB Cloud storage", true),
            ("Integration help", false),
            ("Sketch Files", false),
            ("API Access", false),
            ("Complete documentation", false),
        ],
    },
    Plan {
        name: "Premium",
        features: [
            ("10 team members", true),
            ("40GB Cloud storage", true),
            ("Integration help", true),
            ("Sketch Files", true),
            ("API Access", false),
            ("Complete documentation", false),
        ],
    },
    Plan {
        name: "Enterprise",
        features: [
            ("Unlimited team members", true),
            ("100GB Cloud storage", true),
            ("Integration help", true),
            ("Sketch Files", true),
            ("API Access", true),
            ("Complete documentation", true),
        ],
    },
];

const BRANDS: [&str; 6] = ["coinbase", "nasa", "netflix", "pinterest", "spotify", "vodafone"];

#[component]
pub fn PricingPageView() -> Element {
    let mut period = use_signal(BillingPeriod::default);
    let prices = period().prices();
    let per = period().per();

    rsx! {
        div {
            class: "pricing-page container mx-auto",
            div {
                class: "text-center pt-12",
                h3 { class: "text-3xl font-bold text-white", "See our pricing" }
                p { class: "text-white opacity-80 mb-6",
                    "You have Free Unlimited Updates and Premium Support on each package."
                }
                div {
                    class: "inline-flex rounded-lg bg-neutral-100 p-1",
                    role: "tablist",
                    for (tab, label) in [BillingPeriod::Monthly, BillingPeriod::Annual].map(|t| (t, t.label())) {
                        button {
                            key: "{label}",
                            id: if tab == BillingPeriod::Annual { "annual" } else { "monthly" },
                            r#type: "button",
                            role: "tab",
                            aria_selected: if period() == tab { "true" } else { "false" },
                            class: if period() == tab { "px-6 py-1 rounded bg-white shadow" } else { "px-6 py-1 rounded" },
                            onclick: move |_| period.set(tab),
                            "{label}"
                        }
                    }
                }
            }
            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-6 mt-8",
                for (plan, price) in PLANS.iter().zip(prices) {
                    div {
                        key: "{plan.name}",
                        class: "pricing-card rounded-xl shadow bg-white dark:bg-neutral-800 p-6 text-center",
                        span { class: "uppercase text-xs font-bold text-neutral-500", "{plan.name}" }
                        h2 { class: "text-4xl font-bold my-4",
                            sup { "$" }
                            "{price}"
                            small { class: "text-sm font-normal", "/{per}" }
                        }
                        ul {
                            class: "text-left space-y-2 mb-6",
                            for (feature, included) in plan.features {
                                li {
                                    key: "{feature}",
                                    class: if included { "flex items-center gap-2" } else { "flex items-center gap-2 opacity-50" },
                                    if included {
                                        Icon { icon: FaCheck, width: 12, height: 12 }
                                    } else {
                                        Icon { icon: FaXmark, width: 12, height: 12 }
                                    }
                                    "{feature}"
                                }
                            }
                        }
                        Button { variant: ButtonVariant::Primary, class: "w-full", "Join" }
                    }
                }
            }
            TrustedBrands {}
        }
    }
}

#[component]
pub fn TrustedBrands() -> Element {
    rsx! {
        div {
            class: "mt-16",
            div {
                class: "text-center",
                h6 { class: "opacity-50", "More than 50+ brands trust Material" }
            }
            div {
                class: "mt-10 grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-8",
                for brand in BRANDS {
                    div {
                        key: "{brand}",
                        class: "opacity-90 mb-6",
                        img {
                            class: "block w-full h-full",
                            src: "/images/logos/gray-logos/logo-{brand}.svg",
                            alt: "{brand}",
                        }
                    }
                }
            }
        }
    }
}
