// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-shot hover timers driven by host timestamps.
//!
//! The engine owns no clock. Pointer events carry a timestamp and the host calls
//! [`MenuTree::advance`](crate::MenuTree::advance) with the current time; a timer is nothing more
//! than a deadline in that same millisecond timeline.

/// Which hover timer of a menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Opens the submenu of the active item.
    Open,
    /// Closes the currently open submenu.
    Close,
}

/// A pending deadline, or nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Timer {
    deadline: Option<u64>,
}

impl Timer {
    /// Arm the timer unless it is already pending. Returns `true` if it was armed.
    pub(crate) fn start(&mut self, now: u64, delay: u64) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now.saturating_add(delay));
        true
    }

    /// Clear the timer. Returns `true` if it was pending.
    pub(crate) fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub(crate) const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Clear the timer if its deadline has passed. Returns `true` if it fired.
    pub(crate) fn fire(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
