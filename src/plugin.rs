//! The two entry points the host calls: the convert command and the paste
//! handler.
//!
//! Neither treats a missing link as an error. When nothing can be converted
//! the document is left exactly as it was and, for paste, the host's default
//! behaviour takes over.

use crate::editor::{Editor, resolve_selection};
use crate::embed::{self, EmbedOptions};
use crate::extract::{self, PlayerIds};
use crate::settings::Settings;
use tracing::{debug, info};

/// A command the host registers in its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: &'static str,
    pub name: &'static str,
    /// Default key binding, `Mod` being Ctrl or Cmd depending on platform.
    pub hotkey: &'static str,
}

pub const CONVERT_COMMAND: CommandSpec = CommandSpec {
    id: "convert-bilibili-url",
    name: "Convert Bilibili URL to Embedded Player",
    hotkey: "Mod+Shift+B",
};

/// Why the paste handler let a paste through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassReason {
    /// Paste enhancement is switched off.
    Disabled,
    /// The clipboard carried no plain text.
    NoClipboardText,
    /// The text holds no Bilibili URL.
    NoVideoUrl,
    /// A Bilibili URL is present but no `/video/<id>` was found.
    NoVideoId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// The paste was consumed and a player inserted. The host must stop the
    /// default paste from running.
    Handled(PlayerIds),
    /// Nothing was touched; the host should paste as usual.
    Passthrough(PassReason),
}

impl PasteOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, PasteOutcome::Handled(_))
    }
}

/// Replaces the selected link, or the link under the cursor, with a player.
///
/// Returns the ids that were embedded, or `None` if the text held no video id.
/// When nothing is selected and no link is under the cursor the selection ends
/// up empty and nothing is inserted.
pub fn convert_url_to_player<E: Editor + ?Sized>(
    editor: &mut E,
    settings: &Settings,
) -> Option<PlayerIds> {
    let selected = resolve_selection(editor);
    let Some(ids) = extract::extract(selected.trim()) else {
        debug!(text = selected.trim(), "no video id in selection");
        return None;
    };

    let snippet = embed::build_for(&ids, &EmbedOptions::from(settings));
    editor.replace_selection(&snippet);
    info!(video_id = %ids.video_id, page = %ids.page, "converted link to player");
    Some(ids)
}

/// Handles a paste of `clipboard` (the plain-text payload, if any).
///
/// Only a payload containing a Bilibili URL with a `/video/<id>` segment is
/// taken over; the current selection is then replaced with a player.
pub fn paste_url_to_player<E: Editor + ?Sized>(
    clipboard: Option<&str>,
    editor: &mut E,
    settings: &Settings,
) -> PasteOutcome {
    match classify_paste(clipboard, settings) {
        Ok(ids) => {
            let snippet = embed::build_for(&ids, &EmbedOptions::from(settings));
            editor.replace_selection(&snippet);
            info!(video_id = %ids.video_id, page = %ids.page, "pasted link as player");
            PasteOutcome::Handled(ids)
        }
        Err(reason) => {
            debug!(?reason, "paste passed through");
            PasteOutcome::Passthrough(reason)
        }
    }
}

fn classify_paste(clipboard: Option<&str>, settings: &Settings) -> Result<PlayerIds, PassReason> {
    if !settings.enhance_default_paste {
        return Err(PassReason::Disabled);
    }

    let text = match clipboard {
        Some(t) if !t.is_empty() => t,
        _ => return Err(PassReason::NoClipboardText),
    };

    if !extract::contains_video_url(text) {
        return Err(PassReason::NoVideoUrl);
    }

    extract::extract(text).ok_or(PassReason::NoVideoId)
}
