use ankideck::domain::{Export, Note};
use ankideck::ports::Format;
use anyhow::{Context, Result};
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;

/// Scratch directory for export/import files
#[allow(dead_code)]
pub struct TestWorkspace {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        Ok(Self { temp_dir })
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.temp_dir.path().join(file_name)
    }

    /// Encode `export` into `<name>.<ext>` and return the path
    pub fn write_export(&self, name: &str, format: Format, export: &Export) -> Result<PathBuf> {
        let path = self.path(&format!("{name}.{}", format.extension()));
        let mut file = std::fs::File::create(&path)?;
        format.encode(export, &mut file)?;
        Ok(path)
    }
}

/// The two-note deck with deliberately unsorted notes, tags and fields
#[allow(dead_code)]
pub fn unordered_export() -> Export {
    Export::for_deck(
        "Test Deck",
        vec![
            Note::new(2, "Basic")
                .with_tag("b")
                .with_tag("a")
                .with_field("z", "Z", 2)
                .with_field("a", "A", 1),
            Note::new(1, "Basic")
                .with_tag("d")
                .with_tag("c")
                .with_field("y", "Y", 2)
                .with_field("b", "B", 1),
        ],
    )
}

/// Same content as [`unordered_export`], listed in a different order
#[allow(dead_code)]
pub fn reordered_export() -> Export {
    Export::for_deck(
        "Test Deck",
        vec![
            Note::new(1, "Basic")
                .with_tag("c")
                .with_tag("d")
                .with_field("b", "B", 1)
                .with_field("y", "Y", 2),
            Note::new(2, "Basic")
                .with_tag("a")
                .with_tag("b")
                .with_field("a", "A", 1)
                .with_field("z", "Z", 2),
        ],
    )
}

/// Realistic deck: HTML content, unicode, a cloze note and note type definitions
#[allow(dead_code)]
pub fn spanish_export() -> Export {
    Export::for_deck(
        "Languages::Spanish",
        vec![
            Note::new(1695797540371, "Basic")
                .with_tag("vocab")
                .with_tag("a1")
                .with_field("Front", "<b>la mañana</b>", 0)
                .with_field("Back", "the morning", 1),
            Note::new(1695797540370, "Cloze")
                .with_tag("grammar")
                .with_field("Text", "Yo {{c1::soy}} estudiante.", 0)
                .with_field("Back Extra", "ser: \"to be\"", 1),
        ],
    )
    .with_models(vec![
        json!({
            "name": "Basic",
            "type": 0,
            "flds": [{"name": "Front", "ord": 0}, {"name": "Back", "ord": 1}],
            "tmpls": [{"name": "Card 1", "qfmt": "{{Front}}", "afmt": "{{FrontSide}}<hr id=answer>{{Back}}"}],
            "css": ".card {\n font-family: arial;\n}"
        }),
        json!({
            "name": "Cloze",
            "type": 1,
            "flds": [{"name": "Text", "ord": 0}, {"name": "Back Extra", "ord": 1}],
            "latexsvg": false
        }),
    ])
}
