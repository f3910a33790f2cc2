use crate::{
    document::model::SceneDocument,
    foundation::error::{PixfaceError, PixfaceResult},
};

/// Parse and validate raw canvas JSON into a [`SceneDocument`].
///
/// Pure transform: no draw calls are issued and no engine state is touched.
/// Per-entry delay fallbacks are resolved here, once, so the per-tick path
/// works on final values. On failure the error is
/// [`PixfaceError::MalformedDocument`] carrying a human-readable diagnostic;
/// the caller decides whether to render an error state.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn parse_document(bytes: &[u8]) -> PixfaceResult<SceneDocument> {
    let mut doc: SceneDocument = serde_json::from_slice(bytes)
        .map_err(|e| PixfaceError::malformed(format!("invalid canvas JSON: {e}")))?;
    doc.resolve_defaults();
    doc.validate()?;
    tracing::debug!(
        name = %doc.name,
        author = %doc.author,
        version = doc.version,
        "parsed canvas document"
    );
    Ok(doc)
}

#[cfg(test)]
#[path = "../../tests/unit/document/parse.rs"]
mod tests;
