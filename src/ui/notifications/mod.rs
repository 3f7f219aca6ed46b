// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking user feedback.
//!
//! - [`notification`]: the `Notification` value and its severity
//! - [`manager`]: queueing, expiry and dismissal
//! - [`toast`]: rendering
//!
//! Info toasts disappear after 3s, warnings after 5s, and errors stay until
//! dismissed. At most three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
