//! Shared UI Components

mod button;
mod empty_state;
mod toast;

pub use button::{Button, ButtonVariant};
pub use empty_state::EmptyState;
pub use toast::{Toast, ToastType};
