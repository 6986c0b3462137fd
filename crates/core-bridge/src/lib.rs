//! Receiving-side sync bridge: the single holder of the current snapshot.
//!
//! The bridge owns one `Snapshot` as shared state with a single writer
//! (`apply`) and re-renders its layout consumer after every apply. Applies
//! are full replacements: no merging with prior state, no validation of the
//! sender's invariants, last-applied-wins when messages arrive faster than
//! renders are observed. An empty-text message falls back to the canonical
//! placeholder so the renderer never shows a zero-size layout.

pub mod bootstrap;
pub mod wire;

pub use wire::{WireError, channel, decode, encode};

use core_snapshot::{Message, PLACEHOLDER_TEXT, Snapshot, placeholder};
use tracing::debug;

/// External layout consumer: anything that can place positioned styled runs
/// on a `(width, height)` grid of character cells.
pub trait LayoutConsumer {
    fn render(&mut self, snapshot: &Snapshot);
}

pub struct SyncBridge<C: LayoutConsumer> {
    state: Snapshot,
    consumer: C,
}

impl<C: LayoutConsumer> SyncBridge<C> {
    /// Start holding the default-language placeholder and render it once, so
    /// a consumer has content before the first message arrives.
    pub fn new(mut consumer: C) -> Self {
        let state = placeholder(PLACEHOLDER_TEXT, None);
        consumer.render(&state);
        Self { state, consumer }
    }

    /// Replace the held snapshot and re-render. Empty text swaps in the
    /// canonical placeholder for the message's language (or the default when
    /// the language field is empty); anything else is stored verbatim.
    pub fn apply(&mut self, msg: Snapshot) {
        let placeholder_applied = msg.text.is_empty();
        self.state = if placeholder_applied {
            placeholder(PLACEHOLDER_TEXT, Some(&msg.language))
        } else {
            msg
        };
        debug!(
            target: "bridge.apply",
            language = %self.state.language,
            run_count = self.state.runs.len(),
            placeholder_applied,
            "snapshot_applied"
        );
        self.consumer.render(&self.state);
    }

    pub fn apply_message(&mut self, msg: Message) {
        let Message::Text(snapshot) = msg;
        self.apply(snapshot);
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_snapshot::EditorSession;
    use core_style::Theme;

    /// Records every snapshot it is asked to render.
    #[derive(Default)]
    struct RecordingConsumer {
        rendered: Vec<Snapshot>,
    }

    impl LayoutConsumer for RecordingConsumer {
        fn render(&mut self, snapshot: &Snapshot) {
            self.rendered.push(snapshot.clone());
        }
    }

    fn snap(text: &str, language: &str) -> Snapshot {
        EditorSession::new(language, Theme::default())
            .unwrap()
            .synthesize(text)
    }

    #[test]
    fn starts_with_default_placeholder_rendered() {
        let bridge = SyncBridge::new(RecordingConsumer::default());
        assert_eq!(bridge.snapshot().text, PLACEHOLDER_TEXT);
        assert_eq!(bridge.snapshot().language, "Rust");
        assert_eq!(bridge.consumer().rendered.len(), 1);
    }

    #[test]
    fn non_empty_snapshot_stored_verbatim() {
        let mut bridge = SyncBridge::new(RecordingConsumer::default());
        let s = snap("fn main() {}", "Rust");
        bridge.apply(s.clone());
        assert_eq!(bridge.snapshot(), &s);
        assert_eq!(bridge.consumer().rendered.len(), 2);
    }

    #[test]
    fn empty_text_falls_back_to_placeholder_for_language() {
        let mut bridge = SyncBridge::new(RecordingConsumer::default());
        bridge.apply(snap("", "Markdown"));
        let expected = placeholder(PLACEHOLDER_TEXT, Some("Markdown"));
        assert_eq!(bridge.snapshot(), &expected);
        assert_eq!(bridge.snapshot().language, "Markdown");
    }

    #[test]
    fn empty_text_and_empty_language_uses_default() {
        let mut bridge = SyncBridge::new(RecordingConsumer::default());
        bridge.apply(Snapshot {
            width: 0,
            height: 1,
            text: String::new(),
            runs: Vec::new(),
            language: String::new(),
        });
        assert_eq!(bridge.snapshot(), &placeholder(PLACEHOLDER_TEXT, None));
    }

    #[test]
    fn each_apply_is_a_full_replacement() {
        let mut bridge = SyncBridge::new(RecordingConsumer::default());
        bridge.apply(snap("first", "Plain Text"));
        bridge.apply(snap("second", "Plain Text"));
        assert_eq!(bridge.snapshot().text, "second");
        // one initial render plus one per apply
        assert_eq!(bridge.consumer().rendered.len(), 3);
    }

    #[test]
    fn apply_message_unwraps_the_text_variant() {
        let mut bridge = SyncBridge::new(RecordingConsumer::default());
        bridge.apply_message(Message::Text(snap("hello", "Plain Text")));
        assert_eq!(bridge.snapshot().text, "hello");
    }
}
