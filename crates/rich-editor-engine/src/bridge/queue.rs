/// Outbound FIFO of host messages with a one-shot, payload-free trigger.
///
/// The host is only ever told "something is queued"; it then pulls the whole
/// batch with [`drain`](Self::drain). One pending trigger is enough to empty
/// a FIFO, so a trigger is only armed when the queue goes from empty to
/// non-empty and none is already armed.
#[derive(Debug, Default)]
pub struct BridgeQueue {
    messages: Vec<String>,
    trigger_pending: bool,
}

impl BridgeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. Returns true if this call armed the trigger.
    pub fn enqueue(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        log::debug!("queueing host message {message:?}");
        let was_empty = self.messages.is_empty();
        self.messages.push(message);

        if was_empty && !self.trigger_pending {
            self.trigger_pending = true;
            return true;
        }
        false
    }

    /// Take every queued message in order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    /// Drain as a JSON array of strings.
    pub fn drain_json(&mut self) -> Result<String, serde_json::Error> {
        let batch = self.drain();
        serde_json::to_string(&batch)
    }

    /// Fire the armed trigger, if any. Returns true if the host should be
    /// signalled, which is only the case when messages are still waiting.
    pub fn fire_trigger(&mut self) -> bool {
        if !std::mem::take(&mut self.trigger_pending) {
            return false;
        }
        !self.messages.is_empty()
    }

    pub fn is_trigger_pending(&self) -> bool {
        self.trigger_pending
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
