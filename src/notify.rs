/// Transient toast notifications
///
/// The app owns one bounded toast queue instead of an ambient
/// global toast channel. Each toast stays on screen for
/// TOAST_DURATION and is then removed by an expiry task carrying
/// its id.

use std::collections::VecDeque;
use std::time::Duration;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Most toasts shown at once; the oldest is dropped beyond this
pub const MAX_TOASTS: usize = 4;

/// Visual severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    /// Destructive styling for validation and provider errors
    Error,
}

/// A single on-screen notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub kind: ToastKind,
}

/// Bounded queue of active toasts
#[derive(Debug, Default)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast and return its id for the expiry timer
    pub fn push(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        kind: ToastKind,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.queue.push_back(Toast {
            id,
            title: title.into(),
            body: body.into(),
            kind,
        });

        // Oldest toast gives way once the queue is full
        if self.queue.len() > MAX_TOASTS {
            self.queue.pop_front();
        }

        id
    }

    /// Remove a toast once its display time is up.
    /// Dismissing an already-dropped toast is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.queue.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
