/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Menu-command router.
//!
//! An explicit registry owned by the composition root. Views register a
//! handler on mount and unregister on unmount; registrations form a stack
//! and dispatch reaches only the most recent one, so a view mounted on top
//! of another shadows it and teardown restores the one beneath.
//!
//! Handlers receive the state store and host ports at dispatch time. A
//! handler that captured state at registration and acted on it later is
//! the failure mode this design removes.

use log::{debug, warn};

use crate::app::EditorApp;
use crate::runtime::HostPorts;
use super::MenuCommand;

pub type CommandHandler = Box<dyn FnMut(&mut EditorApp, &HostPorts<'_>, MenuCommand)>;

/// Opaque registration token returned by [`CommandRouter::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerToken(u64);

pub struct CommandRouter {
    stack: Vec<(HandlerToken, CommandHandler)>,
    next_token: u64,
}

impl CommandRouter {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            next_token: 0,
        }
    }

    /// Push a handler; it becomes the sole dispatch target until it is
    /// unregistered or shadowed by a later registration.
    pub fn register(&mut self, handler: CommandHandler) -> HandlerToken {
        let token = HandlerToken(self.next_token);
        self.next_token += 1;
        self.stack.push((token, handler));
        token
    }

    /// Pop a registration. Unregistering the top entry restores the one
    /// beneath it. Out-of-order teardown (a token below the top, e.g. two
    /// views unmounting in mount order) is warned about and the named
    /// entry removed; an unknown token (already unregistered) is a no-op.
    pub fn unregister(&mut self, token: HandlerToken) {
        match self.stack.iter().position(|(t, _)| *t == token) {
            Some(idx) if idx + 1 == self.stack.len() => {
                self.stack.pop();
            }
            Some(idx) => {
                warn!(
                    "Out-of-order command handler teardown (token {}); removing mid-stack entry",
                    token.0
                );
                self.stack.remove(idx);
            }
            None => {
                debug!(
                    "Ignoring unregister for unknown command handler token {}",
                    token.0
                );
            }
        }
    }

    /// Forward a command to the active handler. Returns false when no
    /// handler is registered and the command was dropped; commands arriving
    /// before any view mounts (or after the last unmounts) are expected and
    /// harmless.
    pub fn dispatch(
        &mut self,
        app: &mut EditorApp,
        host: &HostPorts<'_>,
        command: MenuCommand,
    ) -> bool {
        let Some((_, handler)) = self.stack.last_mut() else {
            debug!("Dropping {command:?}: no command consumer registered");
            return false;
        };
        handler(app, host, command);
        true
    }

    pub fn active_handlers(&self) -> usize {
        self.stack.len()
    }
}

impl Default for CommandRouter {
    fn default() -> Self {
        Self::new()
    }
}
