use super::*;
use crate::{
    assets::decode::{DecodedImage, ImageDecoder},
    clock::source::{ManualClock, WallTime},
    document::model::ImageRef,
    foundation::core::{Color, Point, Size},
    foundation::error::PixfaceError,
    render::recording::{DrawOp, RecordingSurface},
};

/// Decoder that reports a fixed size without touching the image data.
#[derive(Clone, Copy, Debug)]
struct StubDecoder(Size);

impl ImageDecoder for StubDecoder {
    fn probe(&self, _image: &ImageRef) -> PixfaceResult<Size> {
        Ok(self.0)
    }

    fn decode(&self, _image: &ImageRef) -> PixfaceResult<DecodedImage> {
        Ok(DecodedImage {
            width: self.0.width,
            height: self.0.height,
            rgba8: vec![0; (self.0.width * self.0.height * 4) as usize],
        })
    }
}

/// Decoder that rejects every image.
#[derive(Clone, Copy, Debug)]
struct FailingDecoder;

impl ImageDecoder for FailingDecoder {
    fn probe(&self, _image: &ImageRef) -> PixfaceResult<Size> {
        Err(PixfaceError::decode("unreadable frame"))
    }

    fn decode(&self, _image: &ImageRef) -> PixfaceResult<DecodedImage> {
        Err(PixfaceError::decode("unreadable frame"))
    }
}

fn engine() -> CanvasEngine<StubDecoder> {
    CanvasEngine::new(StubDecoder(Size::new(8, 8)))
}

fn clock_at(hour: u8, minute: u8) -> ManualClock {
    ManualClock::new(WallTime {
        year: 2024,
        month: 7,
        day: 3,
        weekday: 3,
        hour,
        minute,
        second: 0,
    })
}

#[test]
fn solid_background_document_constructs_no_sprites() {
    // One full-surface fillrect, no sprites, no loop entries.
    let json = br#"{
        "name": "solid", "author": "t", "version": 1,
        "bgColor": 0, "delay": 1000,
        "setup": [{"type": "fillrect", "x": 0, "y": 0, "width": 64, "height": 64, "color": 0}],
        "sprites": [], "loop": []
    }"#;
    let mut surface = RecordingSurface::new(64, 64);
    let clock = clock_at(10, 0);
    let mut engine = engine();

    engine.setup(json, &mut surface, &clock).unwrap();

    assert_eq!(
        surface.ops(),
        &[
            // clear to the document background
            DrawOp::FillRect {
                rect: Rect::new(0, 0, 64, 64),
                color: Color(0),
            },
            // the declared element
            DrawOp::FillRect {
                rect: Rect::new(0, 0, 64, 64),
                color: Color(0),
            },
        ]
    );
    assert!(engine.sprites().is_empty());
    assert!(engine.document().is_some());
}

#[test]
fn malformed_document_leaves_no_state_and_no_draws() {
    let json = br#"{
        "name": "dangling", "delay": 1000,
        "setup": [], "sprites": [],
        "loop": [{"type": "sprite", "x": 0, "y": 0, "sprite": 2}]
    }"#;
    let mut surface = RecordingSurface::new(64, 64);
    let clock = clock_at(10, 0);
    let mut engine = engine();

    let err = engine.setup(json, &mut surface, &clock).unwrap_err();
    assert!(matches!(err, PixfaceError::MalformedDocument(_)));
    assert!(surface.ops().is_empty());
    assert!(engine.document().is_none());
    assert!(engine.sprites().is_empty());
}

#[test]
fn failed_setup_discards_previous_document() {
    let good = br#"{"name": "ok", "delay": 1000, "setup": [], "sprites": [], "loop": []}"#;
    let mut surface = RecordingSurface::new(64, 64);
    let clock = clock_at(10, 0);
    let mut engine = engine();

    engine.setup(good, &mut surface, &clock).unwrap();
    assert!(engine.document().is_some());

    engine.setup(b"{ not json", &mut surface, &clock).unwrap_err();
    assert!(engine.document().is_none());

    // ticking without a document is a no-op
    let before = surface.ops().len();
    engine.tick(&mut surface, &clock);
    assert_eq!(surface.ops().len(), before);
}

#[test]
fn setup_is_deterministic() {
    let json = br#"{
        "name": "mix", "delay": 1000, "bgColor": 2776,
        "setup": [
            {"type": "text", "x": 2, "y": 8, "font": "picopixel", "fgColor": 65535, "bgColor": 2776, "content": "hi"},
            {"type": "datetime", "x": 15, "y": 44, "font": "square", "fgColor": 41088, "bgColor": 2776, "content": "H:i"},
            {"type": "rect", "x": 0, "y": 0, "width": 64, "height": 64, "color": 65535}
        ],
        "sprites": [[{"image": "AAAA"}]],
        "loop": [{"type": "sprite", "x": 0, "y": 36, "sprite": 0}]
    }"#;
    let clock = clock_at(10, 45);

    let mut first = RecordingSurface::new(64, 64);
    let mut second = RecordingSurface::new(64, 64);
    engine().setup(json, &mut first, &clock).unwrap();
    engine().setup(json, &mut second, &clock).unwrap();

    assert_eq!(first.ops(), second.ops());
    assert!(first.ops().contains(&DrawOp::Print {
        text: "10:45".to_string(),
    }));
}

#[test]
fn sprites_are_built_per_loop_entry_with_probed_dimensions() {
    let json = br#"{
        "name": "sprites", "delay": 1000,
        "setup": [], "sprites": [[{"image": "AAAA"}, {"image": "BBBB"}]],
        "loop": [
            {"type": "sprite", "x": 0, "y": 36, "sprite": 0, "frameDelay": 100},
            {"type": "confetti"},
            {"type": "sprite", "x": 20, "y": 10, "sprite": 0}
        ]
    }"#;
    let mut surface = RecordingSurface::new(64, 64);
    let clock = clock_at(10, 0);
    let mut engine = engine();

    engine.setup(json, &mut surface, &clock).unwrap();

    // the unknown loop entry constructs no controller
    assert_eq!(engine.sprites().len(), 2);
    assert_eq!(engine.sprites()[0].entry_index(), 0);
    assert_eq!(engine.sprites()[1].entry_index(), 2);
    assert_eq!(engine.sprites()[0].total_frames(), 2);
    assert_eq!(engine.sprites()[1].position(), Point::new(20, 10));
}

#[test]
fn frame_probe_failure_is_a_sprite_error() {
    let json = br#"{
        "name": "bad frames", "delay": 1000,
        "setup": [], "sprites": [[{"image": "????"}]],
        "loop": [{"type": "sprite", "x": 0, "y": 0, "sprite": 0}]
    }"#;
    let mut surface = RecordingSurface::new(64, 64);
    let clock = clock_at(10, 0);
    let mut engine = CanvasEngine::new(FailingDecoder);

    let err = engine.setup(json, &mut surface, &clock).unwrap_err();
    assert!(matches!(err, PixfaceError::Sprite(_)));
    assert!(err.to_string().contains("loop entry 0"));
    assert!(engine.document().is_none());
    assert!(engine.sprites().is_empty());
}

#[test]
fn tick_advances_sprites_in_loop_entry_order() {
    let json = br#"{
        "name": "anim", "delay": 1000,
        "setup": [], "sprites": [[{"image": "frame0"}, {"image": "frame1"}]],
        "loop": [{"type": "sprite", "x": 0, "y": 36, "sprite": 0, "frameDelay": 100, "loopDelay": 1000}]
    }"#;
    let mut surface = RecordingSurface::new(64, 64);
    let mut clock = clock_at(10, 0);
    let mut engine = engine();

    engine.setup(json, &mut surface, &clock).unwrap();
    surface.take_ops();

    clock.advance(100);
    engine.tick(&mut surface, &clock);
    assert_eq!(
        surface.ops(),
        &[DrawOp::DrawImage {
            at: Point::new(0, 36),
            image: ImageRef("frame1".to_string()),
        }]
    );
    assert_eq!(engine.sprites()[0].frames_shown(), 1);
}

#[test]
fn datetime_refreshes_once_per_second() {
    let json = br#"{
        "name": "clock", "delay": 1000,
        "setup": [{"type": "datetime", "x": 0, "y": 10, "fgColor": 1, "bgColor": 0, "content": "H:i"}],
        "sprites": [], "loop": []
    }"#;
    let mut surface = RecordingSurface::new(64, 64);
    let mut clock = clock_at(10, 59);
    let mut engine = engine();

    engine.setup(json, &mut surface, &clock).unwrap();
    surface.take_ops();

    // under a second of elapsed engine time: nothing to redraw
    clock.advance(500);
    engine.tick(&mut surface, &clock);
    assert!(surface.ops().is_empty());

    // crossing the second: the datetime element is erased and redrawn
    clock.advance(500);
    engine.tick(&mut surface, &clock);
    let prints: Vec<_> = surface
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Print { .. }))
        .collect();
    assert_eq!(prints.len(), 1);

    // the next refresh needs another full second
    surface.take_ops();
    clock.advance(400);
    engine.tick(&mut surface, &clock);
    assert!(surface.ops().is_empty());
}

#[test]
fn minute_rollover_appears_on_the_next_refresh() {
    let json = br#"{
        "name": "clock", "delay": 1000,
        "setup": [{"type": "datetime", "x": 0, "y": 10, "fgColor": 1, "bgColor": 0, "content": "H:i"}],
        "sprites": [], "loop": []
    }"#;
    let mut surface = RecordingSurface::new(64, 64);
    let mut clock = clock_at(10, 59);
    clock.set_wall(WallTime {
        second: 59,
        ..clock.wall()
    });
    let mut engine = engine();

    engine.setup(json, &mut surface, &clock).unwrap();
    surface.take_ops();

    clock.advance(1000);
    engine.tick(&mut surface, &clock);
    assert!(surface.ops().contains(&DrawOp::Print {
        text: "11:00".to_string(),
    }));
}
