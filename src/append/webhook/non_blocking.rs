// Copyright 2025 Hooklog Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::thread::JoinHandle;

use anyhow::Context;
use crossbeam_channel::Receiver;
use crossbeam_channel::Sender;
use crossbeam_channel::TrySendError;

use super::transport::Transport;

/// Overflow policy for non-blocking delivery.
///
/// When the channel is full, an incoming payload is handled according to the
/// specified policy.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum OverflowPolicy {
    /// Blocks until the channel is not full.
    Block,
    /// Drops the incoming payload.
    DropIncoming,
}

#[derive(Debug)]
enum Message {
    Payload(Vec<u8>),
    Shutdown,
}

/// Hands rendered payloads to a dedicated delivery thread.
///
/// Dropping this sends a shutdown message and joins the worker, so payloads
/// already queued are still delivered on shutdown.
#[derive(Debug)]
pub(crate) struct NonBlocking {
    sender: Sender<Message>,
    handle: Option<JoinHandle<()>>,
    overflow: OverflowPolicy,
}

impl NonBlocking {
    pub(crate) fn new(
        transport: Transport,
        thread_name: String,
        buffered_lines_limit: Option<usize>,
        overflow: OverflowPolicy,
    ) -> Self {
        let (sender, receiver) = match buffered_lines_limit {
            Some(limit) => crossbeam_channel::bounded(limit),
            None => crossbeam_channel::unbounded(),
        };

        let worker = Worker {
            transport,
            receiver,
        };
        let handle = std::thread::Builder::new()
            .name(thread_name)
            .spawn(move || worker.run())
            .expect("failed to spawn the webhook delivery thread");

        Self {
            sender,
            handle: Some(handle),
            overflow,
        }
    }

    pub(crate) fn send(&self, payload: Vec<u8>) -> anyhow::Result<()> {
        match self.overflow {
            OverflowPolicy::Block => self
                .sender
                .send(Message::Payload(payload))
                .context("failed to send payload to the webhook delivery thread"),
            OverflowPolicy::DropIncoming => match self.sender.try_send(Message::Payload(payload)) {
                Ok(()) | Err(TrySendError::Full(_)) => Ok(()),
                Err(TrySendError::Disconnected(_)) => {
                    anyhow::bail!("the webhook delivery thread is gone")
                }
            },
        }
    }
}

impl Drop for NonBlocking {
    fn drop(&mut self) {
        let _ = self.sender.send(Message::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

struct Worker {
    transport: Transport,
    receiver: Receiver<Message>,
}

impl Worker {
    fn run(self) {
        while let Ok(message) = self.receiver.recv() {
            match message {
                Message::Payload(payload) => {
                    if let Err(err) = self.transport.deliver(payload) {
                        eprintln!("failed to deliver webhook payload: {err:#}");
                    }
                }
                Message::Shutdown => break,
            }
        }
    }
}
