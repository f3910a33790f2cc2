use crate::{
    assets::decode::ImageDecoder,
    clock::source::Clock,
    document::model::{LoopEntry, SceneDocument},
    document::parse::parse_document,
    foundation::core::{Millis, Rect},
    foundation::error::{PixfaceError, PixfaceResult},
    render::elements::{DATETIME_REFRESH_MS, refresh_datetime, render_setup},
    render::surface::DrawSurface,
    sprite::controller::SpriteController,
};

/// The canvas interpreter: owns one scene document and the sprite arena, and
/// advances them against the caller's draw surface and clock.
///
/// All mutable state lives in this struct; there are no process-wide
/// singletons. The engine assumes a single caller thread and never blocks —
/// the caller drives [`CanvasEngine::tick`] at least as often as the shortest
/// configured frame delay.
#[derive(Clone, Debug)]
pub struct CanvasEngine<D> {
    decoder: D,
    document: Option<SceneDocument>,
    sprites: Vec<SpriteController>,
    last_datetime_refresh: Millis,
}

impl<D: ImageDecoder> CanvasEngine<D> {
    /// An engine with no document, using `decoder` to resolve frame images.
    pub fn new(decoder: D) -> Self {
        Self {
            decoder,
            document: None,
            sprites: Vec::new(),
            last_datetime_refresh: Millis(0),
        }
    }

    /// Parse a canvas document and bring the display to its initial state.
    ///
    /// On success: the surface is cleared to the document background, static
    /// elements and datetime text are drawn, and one sprite controller is
    /// constructed per sprite loop entry (frame dimensions probed from each
    /// set's first frame). On failure the engine keeps no partial state and
    /// the error is returned for the caller to present.
    #[tracing::instrument(skip_all, fields(len = bytes.len()))]
    pub fn setup<S: DrawSurface, C: Clock>(
        &mut self,
        bytes: &[u8],
        surface: &mut S,
        clock: &C,
    ) -> PixfaceResult<()> {
        self.document = None;
        self.sprites.clear();

        let doc = parse_document(bytes)?;
        let now = clock.now();

        surface.fill_rect(
            Rect::new(0, 0, surface.width(), surface.height()),
            doc.bg_color,
        );
        render_setup(&doc, surface);
        refresh_datetime(&doc, surface, clock);

        let mut sprites = Vec::new();
        for (index, entry) in doc.loop_entries.iter().enumerate() {
            let LoopEntry::Sprite(entry) = entry else {
                tracing::debug!(index, "skipping unknown loop entry");
                continue;
            };
            // Indices were validated with the document; the frame set is
            // present and non-empty.
            let frames = &doc.sprites[entry.sprite];
            let size = self
                .decoder
                .probe(&frames[0].image)
                .map_err(|e| PixfaceError::sprite(format!("loop entry {index}: {e}")))?;
            sprites.push(SpriteController::new(index, entry, frames.len(), size, now));
        }

        tracing::debug!(sprites = sprites.len(), "canvas ready");
        self.sprites = sprites;
        self.document = Some(doc);
        self.last_datetime_refresh = now;
        Ok(())
    }

    /// One display tick: evaluate every sprite controller in loop-entry
    /// order, then refresh datetime elements once per elapsed second.
    ///
    /// A no-op until [`CanvasEngine::setup`] has succeeded.
    pub fn tick<S: DrawSurface, C: Clock>(&mut self, surface: &mut S, clock: &C) {
        let Some(doc) = &self.document else {
            return;
        };
        let now = clock.now();
        let second = clock.wall().second;

        for sprite in &mut self.sprites {
            sprite.tick(doc, surface, now, second);
        }

        if now.since(self.last_datetime_refresh) >= DATETIME_REFRESH_MS {
            refresh_datetime(doc, surface, clock);
            self.last_datetime_refresh = now;
        }
    }

    /// The active scene document, if setup succeeded.
    pub fn document(&self) -> Option<&SceneDocument> {
        self.document.as_ref()
    }

    /// The sprite arena, one controller per sprite loop entry.
    pub fn sprites(&self) -> &[SpriteController] {
        &self.sprites
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/canvas.rs"]
mod tests;
