//! Symbol generation
//!
//! `encode_svg` is a thin adapter over the `qrcode` encoder; the
//! `GeneratorPipeline` runs it on worker threads and keeps the cached SVG
//! markup current. Regenerations are ordered by a monotonic generation
//! counter: each completion is applied only if it is newer than the newest
//! one applied so far, so rapid edits cannot leave a stale symbol behind.
//!
//! Rejected input never disturbs the cache. A regeneration runs on every
//! keystroke, and a color field mid-edit is routinely malformed; the last
//! good symbol stays on screen until a valid state comes along.

use crate::qr::options::OptionSnapshot;
use log::debug;
use qrcode::render::svg;
use qrcode::QrCode;
use std::fmt;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

// ─────────────────────────────────────────────────────────────────────────────
// Encode Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Reasons the encoder boundary rejects a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The payload is empty; no symbol is emitted for it.
    EmptyPayload,
    /// A color is not `#` followed by 3, 4, 6, or 8 hex digits.
    MalformedColor(String),
    /// The encoder itself refused the payload (e.g., over capacity).
    Encoder(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::EmptyPayload => write!(f, "Payload is empty"),
            EncodeError::MalformedColor(value) => write!(f, "Malformed color value '{}'", value),
            EncodeError::Encoder(msg) => write!(f, "Encoder error: {}", msg),
        }
    }
}

impl std::error::Error for EncodeError {}

// ─────────────────────────────────────────────────────────────────────────────
// Encoder Adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Check a color against the format the encoder accepts: `#` plus 3, 4, 6,
/// or 8 hex digits. The transparent sentinel is the 8-digit all-zero case.
fn validate_color(value: &str) -> Result<(), EncodeError> {
    let malformed = || EncodeError::MalformedColor(value.to_owned());

    let digits = value.strip_prefix('#').ok_or_else(malformed)?;
    if !matches!(digits.len(), 3 | 4 | 6 | 8) {
        return Err(malformed());
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    Ok(())
}

/// Encode the snapshot into SVG markup.
///
/// The markup carries the symbol's own coordinate system; the display/export
/// size is applied later by the rasterizer, so size is not a parameter here.
pub fn encode_svg(snapshot: &OptionSnapshot) -> Result<String, EncodeError> {
    if snapshot.payload.is_empty() {
        return Err(EncodeError::EmptyPayload);
    }
    validate_color(&snapshot.foreground)?;
    validate_color(&snapshot.background)?;

    let code = QrCode::new(snapshot.payload.as_bytes())
        .map_err(|e| EncodeError::Encoder(e.to_string()))?;

    Ok(code
        .render::<svg::Color>()
        .dark_color(svg::Color(&snapshot.foreground))
        .light_color(svg::Color(&snapshot.background))
        .build())
}

// ─────────────────────────────────────────────────────────────────────────────
// Generator Pipeline
// ─────────────────────────────────────────────────────────────────────────────

/// A finished regeneration attempt.
#[derive(Debug)]
struct Completion {
    generation: u64,
    result: Result<String, EncodeError>,
}

/// Owns the cached SVG markup and the regeneration machinery.
///
/// `request` spawns a worker per regeneration; `poll` drains finished
/// attempts on the UI thread once per frame. Only the UI thread ever touches
/// the cache.
#[derive(Debug)]
pub struct GeneratorPipeline {
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
    /// Counter handed to the next regeneration
    next_generation: u64,
    /// Newest completion observed, applied or not
    seen_generation: u64,
    /// Newest completion whose markup was applied
    applied_generation: u64,
    /// Cached vector markup; empty until the first successful generation
    markup: String,
}

impl GeneratorPipeline {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            next_generation: 0,
            seen_generation: 0,
            applied_generation: 0,
            markup: String::new(),
        }
    }

    /// The current cached vector markup. Empty means no symbol yet.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn has_symbol(&self) -> bool {
        !self.markup.is_empty()
    }

    /// Whether a regeneration has been requested that has not completed.
    pub fn in_flight(&self) -> bool {
        self.next_generation > self.seen_generation
    }

    /// Kick off a regeneration for the given snapshot on a worker thread.
    pub fn request(&mut self, snapshot: OptionSnapshot) {
        self.next_generation += 1;
        let generation = self.next_generation;
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = encode_svg(&snapshot);
            // The receiver only goes away on shutdown; a send error is moot then
            let _ = sender.send(Completion { generation, result });
        });
    }

    /// Drain finished regenerations and update the cache.
    ///
    /// Returns `true` if the cached markup changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.receiver.try_recv() {
            changed |= self.apply(completion);
        }
        changed
    }

    /// Apply one completion: newest generation wins, failures keep the cache.
    fn apply(&mut self, completion: Completion) -> bool {
        self.seen_generation = self.seen_generation.max(completion.generation);

        if completion.generation <= self.applied_generation {
            debug!(
                "Dropping stale generation {} (newest applied: {})",
                completion.generation, self.applied_generation
            );
            return false;
        }

        match completion.result {
            Ok(markup) => {
                self.applied_generation = completion.generation;
                self.markup = markup;
                true
            }
            Err(err) => {
                // Best-effort policy: keep showing the last good symbol
                debug!("Generation {} rejected: {}", completion.generation, err);
                false
            }
        }
    }
}

impl Default for GeneratorPipeline {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn snapshot(payload: &str, foreground: &str, background: &str) -> OptionSnapshot {
        OptionSnapshot {
            payload: payload.to_owned(),
            foreground: foreground.to_owned(),
            background: background.to_owned(),
        }
    }

    #[test]
    fn test_encode_valid_snapshot() {
        let markup = encode_svg(&snapshot("https://example.com", "#000000", "#ffffff")).unwrap();
        assert!(markup.contains("<svg"));
        assert!(markup.contains("#000000"));
        assert!(markup.contains("#ffffff"));
    }

    #[test]
    fn test_encode_rejects_empty_payload() {
        let err = encode_svg(&snapshot("", "#000000", "#ffffff")).unwrap_err();
        assert_eq!(err, EncodeError::EmptyPayload);
    }

    #[test]
    fn test_encode_rejects_malformed_colors() {
        // mid-edit states a keystroke away from valid
        for bad in ["#00000", "000000", "#gggggg", "#", "red"] {
            let err = encode_svg(&snapshot("hello", bad, "#ffffff")).unwrap_err();
            assert!(matches!(err, EncodeError::MalformedColor(_)), "{}", bad);
        }
    }

    #[test]
    fn test_encode_accepts_all_hex_widths() {
        for color in ["#000", "#0000", "#336699", "#00000000"] {
            assert!(encode_svg(&snapshot("hello", color, "#fff")).is_ok(), "{}", color);
        }
    }

    #[test]
    fn test_encode_passes_transparent_sentinel_through() {
        let markup = encode_svg(&snapshot("hello", "#000000", "#00000000")).unwrap();
        assert!(markup.contains("#00000000"));
    }

    #[test]
    fn test_apply_in_order() {
        let mut pipeline = GeneratorPipeline::new();
        assert!(pipeline.apply(Completion {
            generation: 1,
            result: Ok("<svg>1</svg>".to_owned()),
        }));
        assert!(pipeline.apply(Completion {
            generation: 2,
            result: Ok("<svg>2</svg>".to_owned()),
        }));
        assert_eq!(pipeline.markup(), "<svg>2</svg>");
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut pipeline = GeneratorPipeline::new();
        // generation 2 finishes first, then the older generation 1 straggles in
        assert!(pipeline.apply(Completion {
            generation: 2,
            result: Ok("<svg>new</svg>".to_owned()),
        }));
        assert!(!pipeline.apply(Completion {
            generation: 1,
            result: Ok("<svg>old</svg>".to_owned()),
        }));
        assert_eq!(pipeline.markup(), "<svg>new</svg>");
    }

    #[test]
    fn test_rejection_keeps_last_good_markup() {
        let mut pipeline = GeneratorPipeline::new();
        pipeline.apply(Completion {
            generation: 1,
            result: Ok("<svg>good</svg>".to_owned()),
        });
        assert!(!pipeline.apply(Completion {
            generation: 2,
            result: Err(EncodeError::EmptyPayload),
        }));
        assert_eq!(pipeline.markup(), "<svg>good</svg>");
    }

    #[test]
    fn test_rejection_on_empty_cache_stays_empty() {
        let mut pipeline = GeneratorPipeline::new();
        assert!(!pipeline.apply(Completion {
            generation: 1,
            result: Err(EncodeError::EmptyPayload),
        }));
        assert!(!pipeline.has_symbol());
    }

    #[test]
    fn test_success_after_failed_newer_generation() {
        let mut pipeline = GeneratorPipeline::new();
        // generation 2 failed; generation 1's success may still land
        pipeline.apply(Completion {
            generation: 2,
            result: Err(EncodeError::EmptyPayload),
        });
        assert!(pipeline.apply(Completion {
            generation: 1,
            result: Ok("<svg>late</svg>".to_owned()),
        }));
        assert_eq!(pipeline.markup(), "<svg>late</svg>");
    }

    #[test]
    fn test_request_and_poll_end_to_end() {
        let mut pipeline = GeneratorPipeline::new();
        pipeline.request(snapshot("https://example.com", "#000000", "#ffffff"));
        assert!(pipeline.in_flight());

        let deadline = Instant::now() + Duration::from_secs(5);
        while !pipeline.has_symbol() && Instant::now() < deadline {
            pipeline.poll();
            thread::sleep(Duration::from_millis(10));
        }

        assert!(pipeline.has_symbol());
        assert!(!pipeline.in_flight());
        assert!(pipeline.markup().contains("<svg"));
    }
}
