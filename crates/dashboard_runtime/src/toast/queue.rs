use std::{cell::RefCell, collections::VecDeque, fmt, rc::Rc};

use super::ToastMessage;

type Listener = Rc<dyn Fn(Option<&ToastMessage>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Handle returned by [`ToastQueue::subscribe`], used to unsubscribe.
pub struct ToastSubscription(u64);

#[derive(Default)]
struct QueueState {
    pending: VecDeque<ToastMessage>,
    listeners: Vec<(ToastSubscription, Listener)>,
    next_subscription: u64,
}

#[derive(Clone, Default)]
/// Shared FIFO of pending toasts.
///
/// Clones are handles to the same queue. Create one per page and inject it wherever toasts are
/// raised or rendered.
pub struct ToastQueue {
    state: Rc<RefCell<QueueState>>,
}

impl fmt::Debug for ToastQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ToastQueue")
            .field("pending", &state.pending)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl ToastQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast to the tail of the queue.
    pub fn add(&self, toast: ToastMessage) {
        let head_changed = {
            let mut state = self.state.borrow_mut();
            state.pending.push_back(toast);
            state.pending.len() == 1
        };
        if head_changed {
            self.notify();
        }
    }

    /// Removes the head of the queue and returns it. Does nothing on an empty queue.
    pub fn shift(&self) -> Option<ToastMessage> {
        let removed = self.state.borrow_mut().pending.pop_front();
        if removed.is_some() {
            self.notify();
        }
        removed
    }

    /// Returns the toast that should be on screen right now.
    pub fn current(&self) -> Option<ToastMessage> {
        self.state.borrow().pending.front().cloned()
    }

    /// Number of toasts waiting, the displayed one included.
    pub fn len(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().pending.is_empty()
    }

    /// Snapshot of every pending toast in display order.
    pub fn pending(&self) -> Vec<ToastMessage> {
        self.state.borrow().pending.iter().cloned().collect()
    }

    /// Registers `listener` to be called with the new head whenever the head changes.
    ///
    /// Listeners run after the queue is released, so they may call [`ToastQueue::shift`] or
    /// [`ToastQueue::add`] themselves.
    pub fn subscribe(
        &self,
        listener: impl Fn(Option<&ToastMessage>) + 'static,
    ) -> ToastSubscription {
        let mut state = self.state.borrow_mut();
        let subscription = ToastSubscription(state.next_subscription);
        state.next_subscription += 1;
        state.listeners.push((subscription, Rc::new(listener)));
        subscription
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, subscription: ToastSubscription) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.listeners.len();
        state.listeners.retain(|(id, _)| *id != subscription);
        state.listeners.len() != before
    }

    fn notify(&self) {
        let (current, listeners) = {
            let state = self.state.borrow();
            let listeners: Vec<Listener> = state
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            (state.pending.front().cloned(), listeners)
        };
        for listener in listeners {
            listener(current.as_ref());
        }
    }
}
