// Copyright 2024 The Strata Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

//! A thin, blocking connection-acceptance loop.
//!
//! This is deliberately not a poll-based service monitoring many sockets
//! at once (that's this crate's explicit Non-goal); it accepts one
//! connection at a time on the calling thread and hands each to a
//! [`task::TaskManager`] so the accept loop itself never blocks on a
//! handler.

use std::sync::Arc;

use status::Result;

use crate::listener::ListenSocket;
use crate::tcp::TcpSocket;

/// Handles a single accepted connection, off the accept loop's thread.
pub trait ConnectionHandler: Send + Sync {
    /// Called with an accepted socket. Runs on a [`task::TaskManager`]
    /// worker, not on the accept loop's thread.
    fn handle(&self, socket: TcpSocket);
}

impl<F: Fn(TcpSocket) + Send + Sync> ConnectionHandler for F {
    fn handle(&self, socket: TcpSocket) {
        self(socket)
    }
}

/// Accepts connections on a [`ListenSocket`] and dispatches each to a
/// [`ConnectionHandler`] via a [`task::TaskManager`].
pub struct SocketService {
    listener: ListenSocket,
    tasks: Arc<task::TaskManager>,
    handler: Arc<dyn ConnectionHandler>,
}

impl SocketService {
    /// Creates a service that accepts on `listener` and hands each
    /// connection to `tasks`, running `handler` for it.
    pub fn new(listener: ListenSocket, tasks: Arc<task::TaskManager>, handler: Arc<dyn ConnectionHandler>) -> Self {
        Self { listener, tasks, handler }
    }

    /// Blocks until one connection arrives, then submits it to the task
    /// manager for handling and returns.
    pub fn accept_and_dispatch(&mut self) -> Result<()> {
        let socket = self.listener.accept()?;
        let handler = Arc::clone(&self.handler);
        self.tasks.submit(move || handler.handle(socket))
    }

    /// Runs the accept loop forever, dispatching every accepted
    /// connection. Returns only if accepting fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.accept_and_dispatch()?;
        }
    }
}
