//! Smooth scrolling to section anchors.

use std::cell::Cell;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{Element, Window};

/// ~60 frames per second.
const FRAME_INTERVAL_MS: u32 = 16;

thread_local! {
    // Bumped by every new animation; older frame loops see the mismatch and stop.
    static GENERATION: Cell<u64> = Cell::new(0);
}

pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Absolute scroll position that puts an element `element_top` px below the
/// viewport top just under a fixed header `header_offset` px tall.
pub fn target_position(element_top: f64, scroll_y: f64, header_offset: f64, max_scroll: f64) -> f64 {
    (scroll_y + element_top - header_offset).clamp(0.0, max_scroll.max(0.0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        Self { from, to, duration_ms: f64::from(duration_ms) }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Same start and timing, new destination.
    pub fn retarget(self, to: f64) -> Self {
        Self { to, ..self }
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || self.is_finished(elapsed_ms) {
            return self.to;
        }
        let progress = ease_in_out_quad(elapsed_ms / self.duration_ms);
        self.from + (self.to - self.from) * progress
    }
}

fn now(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(web_sys::js_sys::Date::now)
}

/// Where the window must be scrolled to for `element` to sit under the header,
/// measured against the current layout.
fn destination(window: &Window, element: &Element, header_offset: f64) -> f64 {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    let top = element.get_bounding_client_rect().top();
    target_position(top, scroll_y, header_offset, document_height - viewport_height)
}

/// Smoothly scroll to the element with id `id`.
///
/// Returns `false`, leaving the viewport untouched, when there is no such
/// element.
pub fn scroll_to_anchor(id: &str, duration_ms: u32, header_offset: f64) -> bool {
    let Some(window) = web_sys::window() else {
        warn!("no window, cannot scroll to #{}", id);
        return false;
    };
    let Some(document) = window.document() else {
        warn!("no document, cannot scroll to #{}", id);
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        debug!("ignoring scroll to unknown anchor #{}", id);
        return false;
    };

    let animation = ScrollAnimation::new(
        window.scroll_y().unwrap_or(0.0),
        destination(&window, &element, header_offset),
        duration_ms,
    );
    debug!("scrolling to #{} ({} -> {})", id, animation.from, animation.to);

    let generation = GENERATION.with(|g| {
        let next = g.get().wrapping_add(1);
        g.set(next);
        next
    });
    let frame = Frame {
        generation,
        animation,
        element,
        header_offset,
        started_at: now(&window),
    };
    frame.step();
    true
}

struct Frame {
    generation: u64,
    animation: ScrollAnimation,
    element: Element,
    header_offset: f64,
    started_at: f64,
}

impl Frame {
    fn step(mut self) {
        if GENERATION.with(Cell::get) != self.generation || !self.element.is_connected() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        // Content above the target (lazy images, late reveals) can move it mid-flight.
        self.animation = self
            .animation
            .retarget(destination(&window, &self.element, self.header_offset));

        let elapsed = now(&window) - self.started_at;
        window.scroll_to_with_x_and_y(0.0, self.animation.position_at(elapsed));

        if !self.animation.is_finished(elapsed) {
            let timeout = Timeout::new(FRAME_INTERVAL_MS, move || self.step());
            timeout.forget();
        }
    }
}
