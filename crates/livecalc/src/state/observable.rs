//! Publish/subscribe value holder
//!
//! A value plus a list of callbacks run on every `set`. Single-threaded:
//! callbacks are plain `FnMut` and run synchronously inside `set`.

use std::fmt;

/// Handle returned by [`Observable::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// A value that notifies subscribers when it is set
pub struct Observable<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    next_id: u64,
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Observable<T> {
    /// Creates an observable holding `value`
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and notifies every subscriber
    ///
    /// Subscribers are notified even when the new value equals the old one.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for (_, callback) in &mut self.subscribers {
            callback(&self.value);
        }
    }

    /// Registers a callback, run in subscription order on each `set`
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_holds_value() {
        let obs = Observable::new(5);
        assert_eq!(*obs.get(), 5);
        assert_eq!(obs.subscriber_count(), 0);
    }

    #[test]
    fn test_set_notifies_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut obs = Observable::new(String::new());

        let first = Rc::clone(&seen);
        obs.subscribe(move |v: &String| first.borrow_mut().push(format!("a:{v}")));
        let second = Rc::clone(&seen);
        obs.subscribe(move |v: &String| second.borrow_mut().push(format!("b:{v}")));

        obs.set("1+1".to_string());
        assert_eq!(*seen.borrow(), vec!["a:1+1", "b:1+1"]);
        assert_eq!(obs.get(), "1+1");
    }

    #[test]
    fn test_set_same_value_still_notifies() {
        let count = Rc::new(RefCell::new(0));
        let mut obs = Observable::new(1);
        let c = Rc::clone(&count);
        obs.subscribe(move |_| *c.borrow_mut() += 1);

        obs.set(1);
        obs.set(1);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut obs = Observable::new(0);
        let c = Rc::clone(&count);
        let id = obs.subscribe(move |_| *c.borrow_mut() += 1);

        obs.set(1);
        assert!(obs.unsubscribe(id));
        assert!(!obs.unsubscribe(id));
        obs.set(2);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(obs.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_ids_are_unique() {
        let mut obs = Observable::new(0);
        let a = obs.subscribe(|_| {});
        let b = obs.subscribe(|_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_hides_callbacks() {
        let mut obs = Observable::new(3);
        obs.subscribe(|_| {});
        let dbg = format!("{obs:?}");
        assert!(dbg.contains("value: 3"));
        assert!(dbg.contains("subscribers: 1"));
    }

    #[test]
    fn test_default() {
        let obs: Observable<String> = Observable::default();
        assert!(obs.get().is_empty());
    }
}
