// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismiss hand-off from the gesture side to whoever owns application state.
//!
//! Any `FnMut()` is a [`DismissHandler`]. When the gesture runs somewhere other
//! than the state owner, use [`dismiss_channel`]: the [`DismissSender`] queues a
//! message on an unbounded channel and the owner drains the receiver.
//!
//! ```
//! use glide_swipe::{DismissHandler, dismiss_channel};
//!
//! let (mut first, mut rx) = dismiss_channel("buy milk");
//! let mut second = first.with_message("walk dog");
//!
//! second.dismiss();
//! first.dismiss();
//! assert_eq!(rx.try_recv(), Ok("walk dog"));
//! assert_eq!(rx.try_recv(), Ok("buy milk"));
//! ```

use core::fmt::Debug;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Receives the commit decision of a swipe.
pub trait DismissHandler {
    /// Called once, when a swipe commits.
    fn dismiss(&mut self);
}

impl<F: FnMut()> DismissHandler for F {
    fn dismiss(&mut self) {
        self();
    }
}

/// A [`DismissHandler`] that sends a fixed message over a channel.
#[derive(Clone, Debug)]
pub struct DismissSender<M> {
    tx: UnboundedSender<M>,
    message: M,
}

impl<M> DismissSender<M> {
    /// Sends `message` on `tx` when dismissed.
    pub fn new(tx: UnboundedSender<M>, message: M) -> Self {
        Self { tx, message }
    }

    /// A sender on the same channel carrying a different message.
    #[must_use]
    pub fn with_message(&self, message: M) -> Self {
        Self {
            tx: self.tx.clone(),
            message,
        }
    }

    /// The message this sender delivers.
    pub fn message(&self) -> &M {
        &self.message
    }
}

impl<M: Clone + Debug> DismissHandler for DismissSender<M> {
    fn dismiss(&mut self) {
        if self.tx.send(self.message.clone()).is_err() {
            tracing::warn!(message = ?self.message, "dismiss receiver dropped");
        }
    }
}

/// Creates a channel and a sender delivering `message` on it.
pub fn dismiss_channel<M>(message: M) -> (DismissSender<M>, UnboundedReceiver<M>) {
    let (tx, rx) = unbounded_channel();
    (DismissSender::new(tx, message), rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_handlers() {
        let mut count = 0;
        let mut handler = || count += 1;
        handler.dismiss();
        handler.dismiss();
        assert_eq!(count, 2);
    }

    #[test]
    fn dropped_receiver_is_not_fatal() {
        let (mut sender, rx) = dismiss_channel(7_u32);
        drop(rx);
        sender.dismiss();
        assert_eq!(*sender.message(), 7);
    }

    #[tokio::test]
    async fn receiver_can_await() {
        let (mut sender, mut rx) = dismiss_channel('x');
        sender.dismiss();
        assert_eq!(rx.recv().await, Some('x'));
    }
}
