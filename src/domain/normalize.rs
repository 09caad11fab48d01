// src/domain/normalize.rs
//
// Canonical ordering applied before a deck is written, so that the same deck
// always produces the same bytes no matter in which order AnkiConnect or a
// hash map handed us its notes, tags and fields.
use crate::domain::{Export, Field};
use serde::Serializer;
use std::collections::HashMap;

/// Sort notes by id and each note's tags lexicographically.
///
/// The sort is stable, so notes sharing an id keep their relative order.
/// Duplicate tags are kept. Fields are ordered at serialization time by
/// [`serialize_sorted_fields`]; their `order` attribute is data, not a sort key.
pub fn normalize(export: &mut Export) {
    export.notes.sort_by_key(|note| note.id);
    for note in &mut export.notes {
        note.tags.sort();
    }
}

/// Canonicalized copy, leaving the input untouched
pub fn normalized(export: &Export) -> Export {
    let mut copy = export.clone();
    normalize(&mut copy);
    copy
}

/// Field names in byte order
pub fn sorted_fields(fields: &HashMap<String, Field>) -> Vec<(&String, &Field)> {
    let mut entries: Vec<_> = fields.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries
}

pub fn serialize_sorted_fields<S>(
    fields: &HashMap<String, Field>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(sorted_fields(fields))
}
