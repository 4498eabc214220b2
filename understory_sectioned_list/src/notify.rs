// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat-list change notification primitives.

use alloc::vec::Vec;

/// Receiver of flat-position change notifications.
///
/// This is the notification half of the flat rendering surface. A position of
/// `None` means the caller's coordinate did not map to any item; the receiver
/// decides what that means (typically ignore it, or warn in debug builds).
pub trait FlatListNotifier {
    /// The item at `position` changed in place.
    fn item_changed(&mut self, position: Option<usize>);

    /// An item was inserted at `position`.
    fn item_inserted(&mut self, position: Option<usize>);

    /// The item at `position` was removed.
    fn item_removed(&mut self, position: Option<usize>);

    /// The item at `from` moved to `to`.
    fn item_moved(&mut self, from: Option<usize>, to: Option<usize>);
}

/// A single recorded flat notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlatUpdate {
    /// See [`FlatListNotifier::item_changed`].
    Changed(Option<usize>),
    /// See [`FlatListNotifier::item_inserted`].
    Inserted(Option<usize>),
    /// See [`FlatListNotifier::item_removed`].
    Removed(Option<usize>),
    /// See [`FlatListNotifier::item_moved`].
    Moved {
        /// Source position.
        from: Option<usize>,
        /// Destination position.
        to: Option<usize>,
    },
}

impl FlatUpdate {
    /// Returns `true` if every position carried by this update resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        match self {
            Self::Changed(p) | Self::Inserted(p) | Self::Removed(p) => p.is_some(),
            Self::Moved { from, to } => from.is_some() && to.is_some(),
        }
    }

    /// Forward this update to `notifier`.
    pub fn apply<N: FlatListNotifier + ?Sized>(self, notifier: &mut N) {
        match self {
            Self::Changed(p) => notifier.item_changed(p),
            Self::Inserted(p) => notifier.item_inserted(p),
            Self::Removed(p) => notifier.item_removed(p),
            Self::Moved { from, to } => notifier.item_moved(from, to),
        }
    }
}

/// Records notifications in order, for batching or replay.
impl FlatListNotifier for Vec<FlatUpdate> {
    fn item_changed(&mut self, position: Option<usize>) {
        self.push(FlatUpdate::Changed(position));
    }

    fn item_inserted(&mut self, position: Option<usize>) {
        self.push(FlatUpdate::Inserted(position));
    }

    fn item_removed(&mut self, position: Option<usize>) {
        self.push(FlatUpdate::Removed(position));
    }

    fn item_moved(&mut self, from: Option<usize>, to: Option<usize>) {
        self.push(FlatUpdate::Moved { from, to });
    }
}

impl<N: FlatListNotifier + ?Sized> FlatListNotifier for &mut N {
    fn item_changed(&mut self, position: Option<usize>) {
        (**self).item_changed(position);
    }

    fn item_inserted(&mut self, position: Option<usize>) {
        (**self).item_inserted(position);
    }

    fn item_removed(&mut self, position: Option<usize>) {
        (**self).item_removed(position);
    }

    fn item_moved(&mut self, from: Option<usize>, to: Option<usize>) {
        (**self).item_moved(from, to);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{FlatListNotifier, FlatUpdate};

    #[test]
    fn recorder_keeps_order() {
        let mut log: Vec<FlatUpdate> = Vec::new();
        log.item_inserted(Some(3));
        log.item_moved(Some(1), Some(3));
        log.item_removed(None);
        assert_eq!(
            log,
            vec![
                FlatUpdate::Inserted(Some(3)),
                FlatUpdate::Moved {
                    from: Some(1),
                    to: Some(3)
                },
                FlatUpdate::Removed(None),
            ]
        );
    }

    #[test]
    fn replay_reproduces_the_log() {
        let log = vec![
            FlatUpdate::Changed(Some(0)),
            FlatUpdate::Moved {
                from: Some(2),
                to: None,
            },
        ];
        let mut replayed: Vec<FlatUpdate> = Vec::new();
        for update in log.iter().copied() {
            update.apply(&mut replayed);
        }
        assert_eq!(replayed, log);
    }

    #[test]
    fn resolution() {
        assert!(FlatUpdate::Changed(Some(0)).is_resolved());
        assert!(!FlatUpdate::Inserted(None).is_resolved());
        assert!(
            !FlatUpdate::Moved {
                from: Some(0),
                to: None
            }
            .is_resolved()
        );
    }
}
