//! Small presentational building blocks shared by the dashboard views.

mod badge;
mod button;
mod cell;
mod divider;
mod progress;

pub use badge::{Badge, BadgeColor};
pub use button::{Button, ButtonVariant};
pub use cell::DefaultCell;
pub use divider::Divider;
pub use progress::Progress;
