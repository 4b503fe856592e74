//! Observable state holders shared by the store and any front end

mod observable;

pub use observable::{Observable, SubscriptionId};
