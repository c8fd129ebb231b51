pub mod editor;
pub mod embed;
pub mod error;
pub mod extract;
pub mod locate;
mod pattern;
pub mod plugin;
pub mod settings;
pub mod span;

pub use editor::{Editor, MemoryEditor, resolve_selection};
pub use error::{Error, Result};
pub use extract::{PlayerIds, extract};
pub use plugin::{PasteOutcome, convert_url_to_player, paste_url_to_player};
pub use settings::Settings;
pub use span::{Position, Span};

use std::fs;
use std::path::Path;
use tracing::debug;

/// Options controlling what happens to the document after a conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// If true, write the result back over the source file.
    pub in_place: bool,
}

/// Where the editor cursor (and optionally the selection anchor) sits when a
/// file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub cursor: Position,
    /// Other end of the selection; `None` means nothing is selected.
    pub anchor: Option<Position>,
}

impl CursorState {
    pub fn at(cursor: Position) -> Self {
        Self {
            cursor,
            anchor: None,
        }
    }
}

/// Command mode: open `path`, run the convert command at `state` and return
/// the resulting document together with the embedded ids, if any.
pub fn convert_file(
    path: &Path,
    state: CursorState,
    settings: &Settings,
    write_opts: &WriteOptions,
) -> Result<(String, Option<PlayerIds>)> {
    let mut editor = open_editor(path, state)?;
    let ids = plugin::convert_url_to_player(&mut editor, settings);
    let text = finish(path, editor, ids.is_some(), write_opts)?;
    Ok((text, ids))
}

/// Paste mode: open `path` and paste `clipboard` at `state`.
///
/// A pass-through falls back to the default paste, inserting the clipboard
/// text as-is.
pub fn paste_into_file(
    path: &Path,
    state: CursorState,
    clipboard: Option<&str>,
    settings: &Settings,
    write_opts: &WriteOptions,
) -> Result<(String, PasteOutcome)> {
    let mut editor = open_editor(path, state)?;
    let outcome = plugin::paste_url_to_player(clipboard, &mut editor, settings);

    let mut changed = outcome.is_handled();
    if let (PasteOutcome::Passthrough(_), Some(text)) = (&outcome, clipboard)
        && !text.is_empty()
    {
        editor.replace_selection(text);
        changed = true;
    }

    let text = finish(path, editor, changed, write_opts)?;
    Ok((text, outcome))
}

fn open_editor(path: &Path, state: CursorState) -> Result<MemoryEditor> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // if we ever encounter invalid UTF-8, fallback to lossy conversion
    let text = String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());

    let mut editor = MemoryEditor::new(text);
    match state.anchor {
        Some(anchor) => editor.select(anchor, state.cursor)?,
        None => editor.set_cursor(state.cursor)?,
    }
    Ok(editor)
}

fn finish(
    path: &Path,
    editor: MemoryEditor,
    changed: bool,
    write_opts: &WriteOptions,
) -> Result<String> {
    let text = editor.into_text();
    if write_opts.in_place && changed {
        fs::write(path, &text).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "document written");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const URL: &str = "https://www.bilibili.com/video/BV1xx?p=3";

    #[test]
    fn convert_file_in_place_rewrites_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.md");
        fs::write(&path, format!("# Notes\n{URL}\n")).unwrap();

        let (text, ids) = convert_file(
            &path,
            CursorState::at(Position::new(1, 3)),
            &Settings::default(),
            &WriteOptions { in_place: true },
        )
        .unwrap();

        assert_eq!(ids.unwrap().video_id, "BV1xx");
        assert!(text.starts_with("# Notes\n<div "), "{text}");
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn convert_file_without_link_does_not_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.md");
        fs::write(&path, "plain").unwrap();

        let (text, ids) = convert_file(
            &path,
            CursorState::at(Position::new(0, 2)),
            &Settings::default(),
            &WriteOptions { in_place: true },
        )
        .unwrap();

        assert!(ids.is_none());
        assert_eq!(text, "plain");
    }

    #[test]
    fn explicit_selection_is_converted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.md");
        fs::write(&path, "id: /video/AbC123 end").unwrap();

        let state = CursorState {
            cursor: Position::new(0, 17),
            anchor: Some(Position::new(0, 4)),
        };
        let (text, ids) =
            convert_file(&path, state, &Settings::default(), &WriteOptions::default()).unwrap();

        assert_eq!(ids.unwrap().video_id, "AbC123");
        assert!(text.starts_with("id: <div "), "{text}");
        assert!(text.ends_with("</div>\n end"), "{text}");
        // not in place
        assert_eq!(fs::read_to_string(&path).unwrap(), "id: /video/AbC123 end");
    }

    #[test]
    fn passthrough_paste_inserts_raw_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.md");
        fs::write(&path, "ab").unwrap();

        let (text, outcome) = paste_into_file(
            &path,
            CursorState::at(Position::new(0, 1)),
            Some("hello"),
            &Settings::default(),
            &WriteOptions::default(),
        )
        .unwrap();

        assert!(!outcome.is_handled());
        assert_eq!(text, "ahellob");
    }

    #[test]
    fn cursor_outside_document_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.md");
        fs::write(&path, "ab").unwrap();

        let err = convert_file(
            &path,
            CursorState::at(Position::new(3, 0)),
            &Settings::default(),
            &WriteOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { line: 3, ch: 0 }));
    }
}
