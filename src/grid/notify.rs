use crate::models::GridEvent;

/// Returns false once the subscriber can no longer receive events
type Callback = Box<dyn FnMut(&GridEvent) -> bool + Send>;

/// Handle returned by [`crate::BitGrid::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(super) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(super) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Deliver `event` in subscription order, dropping disconnected entries
    pub(super) fn notify(&mut self, event: &GridEvent) {
        log::trace!("event {:?} -> {} subscriber(s)", event, self.entries.len());
        self.entries.retain_mut(|(id, callback)| {
            let alive = callback(event);
            if !alive {
                log::debug!("dropping disconnected subscriber {id:?}");
            }
            alive
        });
    }
}
