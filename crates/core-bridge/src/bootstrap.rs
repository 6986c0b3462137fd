//! One-shot session bootstrap: seeding an initial document into a served
//! template resource.
//!
//! Outside the steady-state snapshot protocol, a session starts by
//! substituting two sentinel tokens in an opaque template: the initial
//! document text (JSON-escaped, so it can land inside a string literal in
//! the resource) and the initial language name. The language is validated
//! against the registry here; an unknown name means no highlighter can ever
//! be selected, which is a fatal configuration error rather than something
//! to degrade through.

use core_highlight::{LanguageError, lookup};
use tracing::info;

/// Sentinel replaced by the JSON-escaped initial document text.
pub const TEXT_TOKEN: &str = "{{GSX_TEXT}}";
/// Sentinel replaced by the initial language name.
pub const LANGUAGE_TOKEN: &str = "{{GSX_LANGUAGE}}";

/// Substitute the bootstrap sentinels into a template resource.
pub fn seed(template: &str, text: &str, language: &str) -> Result<String, LanguageError> {
    let language = lookup(language)?;
    // serde_json string encoding includes the surrounding quotes; the
    // template supplies its own delimiters, so strip exactly those two.
    let quoted = serde_json::to_string(text).unwrap_or_else(|_| String::from("\"\""));
    let escaped = &quoted[1..quoted.len() - 1];
    let seeded = template
        .replace(TEXT_TOKEN, escaped)
        .replace(LANGUAGE_TOKEN, language.name);
    info!(
        target: "bridge.bootstrap",
        language = language.name,
        text_bytes = text.len(),
        "session_seeded"
    );
    Ok(seeded)
}
