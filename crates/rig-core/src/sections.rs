//! Journey sections and the listener-side state that highlights them.

use crate::constants::{PUBLISH_MAX, SECTION_COUNT};

/// One stop along the journey.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub title: &'static str,
    pub description: &'static str,
}

/// The page's five stops, in nav order: Home, Features, Dashboard, Shop, Contact.
pub const SECTIONS: [SectionDescriptor; SECTION_COUNT] = [
    SectionDescriptor {
        title: "Home",
        description: "Unlock the Roblox hub built for high-energy crews.",
    },
    SectionDescriptor {
        title: "Features",
        description: "Quest tracking, community profiles and secure Discord access in one control center.",
    },
    SectionDescriptor {
        title: "Dashboard",
        description: "Control every piece from one immersive dashboard.",
    },
    SectionDescriptor {
        title: "Shop",
        description: "Power up your community store.",
    },
    SectionDescriptor {
        title: "Contact",
        description: "Ready to build your hub?",
    },
];

/// Clamp a received progress value into [0, PUBLISH_MAX]; non-finite -> 0.
#[inline]
pub fn listener_progress(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, PUBLISH_MAX)
    } else {
        0.0
    }
}

/// `min(count - 1, floor(v * count))`. Exactly 1.0 still maps to the last index.
#[inline]
pub fn section_index(v: f32, count: usize) -> usize {
    if count == 0 || !v.is_finite() || v <= 0.0 {
        return 0;
    }
    let idx = (v * count as f32).floor() as usize;
    idx.min(count - 1)
}

/// Which section is lit and how full the progress bar is.
///
/// A pure function of the last value: no hysteresis, so jitter across a
/// boundary flips between neighbours.
#[derive(Clone, Debug)]
pub struct OverlayState {
    sections: &'static [SectionDescriptor],
    active: usize,
    fill: f32,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new(&SECTIONS)
    }
}

impl OverlayState {
    pub fn new(sections: &'static [SectionDescriptor]) -> Self {
        Self {
            sections,
            active: 0,
            fill: 0.0,
        }
    }

    /// Apply one progress value. Returns the new index only when it changed.
    pub fn apply(&mut self, v: f32) -> Option<usize> {
        let v = listener_progress(v);
        self.fill = v;
        let next = section_index(v, self.sections.len());
        if next == self.active {
            return None;
        }
        log::debug!("[overlay] section {} -> {}", self.active, next);
        self.active = next;
        Some(next)
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn fill(&self) -> f32 {
        self.fill
    }

    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active && index < self.sections.len()
    }

    pub fn active_section(&self) -> Option<&'static SectionDescriptor> {
        self.sections.get(self.active)
    }

    pub fn sections(&self) -> &'static [SectionDescriptor] {
        self.sections
    }
}
