//! JSON wire codec and the in-process message channel.
//!
//! Payloads are the `kind`-tagged JSON encoding of `Message`. Delivery is
//! fire-and-forget: the protocol carries full snapshots, so a dropped or
//! reordered payload heals itself on the next document change. A decode
//! failure is the receiver's to log and discard, never to propagate.

use core_snapshot::Message;
use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("malformed wire payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Encode a message for the channel.
pub fn encode(msg: &Message) -> String {
    // Message serialization cannot fail: no non-string map keys, no
    // non-serializable types.
    serde_json::to_string(msg).unwrap_or_default()
}

/// Decode a channel payload.
pub fn decode(payload: &str) -> Result<Message, WireError> {
    Ok(serde_json::from_str(payload)?)
}

/// An unordered-or-ordered message channel carrying encoded payloads.
pub fn channel() -> (Sender<String>, Receiver<String>) {
    unbounded()
}

/// Fire-and-forget send: encoding the message and pushing it down the
/// channel. A closed channel is logged, not surfaced.
pub fn send(tx: &Sender<String>, msg: &Message) {
    if tx.send(encode(msg)).is_err() {
        warn!(target: "bridge.wire", "channel_closed_message_dropped");
    }
}
