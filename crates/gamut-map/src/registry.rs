//! Method registry for lookup by key and uniform dispatch.
//!
//! The registry owns the list of built-in methods and the
//! [`MethodContext`] their lookup tables live in.
//!
//! # Architecture
//!
//! Every entry carries a [`MethodKind`]. [`Registry::compute`] runs the
//! algorithm for that kind inside its mapping gamut and then chains the
//! result into the display gamut: a wider mapping gamut is clipped, the
//! display gamut itself is returned as is.
//!
//! # Example
//!
//! ```rust
//! use gamut_color::{Color, Gamut, Space, DEFAULT_GAMUT_EPSILON};
//! use gamut_map::Registry;
//!
//! let registry = Registry::new(Gamut::Srgb);
//! let out = registry.map("raytrace", &Color::oklch(0.9, 0.4, 250.0)).unwrap();
//! assert_eq!(out.space(), Space::Srgb);
//! assert!(out.in_gamut(Gamut::Srgb, DEFAULT_GAMUT_EPSILON));
//! ```

use std::sync::{Arc, OnceLock};

use tracing::{debug, trace};

use gamut_color::{Color, Gamut, Space};

use crate::context::MethodContext;
use crate::error::{MapError, MapResult};
use crate::methods::{bjorn, chromium, clip, css, edge_seeker, raytrace, scale};

/// Algorithm selector with its per-variant parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Per-channel clamp in the display gamut.
    Clip,
    /// CSS Color 4 chroma search in `gamut`.
    Css {
        /// Mapping gamut.
        gamut: Gamut,
    },
    /// Linear midpoint scaling in the display gamut.
    Scale {
        /// Restore Oklch lightness and hue and scale a second time.
        restore_lh: bool,
    },
    /// Chromium's plane approximation of Rec.2020.
    Chromium,
    /// Ottosson gamut clipping in `gamut`.
    Bjorn {
        /// Mapping gamut.
        gamut: Gamut,
    },
    /// Ray casting against the linear RGB cube of `gamut`.
    Raytrace {
        /// Mapping gamut.
        gamut: Gamut,
    },
    /// Chroma capping with the edge-seeker table of `gamut`.
    EdgeSeeker {
        /// Mapping gamut.
        gamut: Gamut,
    },
}

impl MethodKind {
    /// Gamut the algorithm maps into before chaining into `display`.
    pub fn mapping_gamut(self, display: Gamut) -> Gamut {
        match self {
            Self::Clip | Self::Scale { .. } | Self::Chromium => display,
            Self::Css { gamut } | Self::Bjorn { gamut } | Self::Raytrace { gamut } | Self::EdgeSeeker { gamut } => gamut,
        }
    }
}

/// One registered method.
#[derive(Debug, Clone)]
pub struct MethodEntry {
    /// Stable lookup key, e.g. `"edge-seeker"`.
    pub key: &'static str,
    /// Human readable name.
    pub label: &'static str,
    /// One line description.
    pub description: &'static str,
    /// Camel-case prefix of aggregate result keys, e.g. `"edgeP3"`.
    pub result_prefix: &'static str,
    /// Algorithm and parameters.
    pub kind: MethodKind,
}

/// Central registry of gamut mapping methods.
///
/// # Thread Safety
///
/// Lookup tables are built lazily behind locks in the shared context; a
/// registry can be used from any number of threads.
#[derive(Debug)]
pub struct Registry {
    display: Gamut,
    entries: Vec<MethodEntry>,
    context: Arc<MethodContext>,
}

impl Registry {
    /// Registry with the built-in methods mapping for `display`.
    pub fn new(display: Gamut) -> Self {
        Self::with_context(display, Arc::new(MethodContext::new()))
    }

    /// Registry sharing an existing context.
    pub fn with_context(display: Gamut, context: Arc<MethodContext>) -> Self {
        let mut registry = Self {
            display,
            entries: Vec::new(),
            context,
        };
        registry.register_builtin_methods();
        registry
    }

    /// Process-wide registry for Display P3.
    pub fn global() -> &'static Registry {
        static INSTANCE: OnceLock<Registry> = OnceLock::new();
        INSTANCE.get_or_init(|| Registry::new(Gamut::DisplayP3))
    }

    fn register_builtin_methods(&mut self) {
        let display = self.display;
        self.register(MethodEntry {
            key: "clip",
            label: "Clip",
            description: "Clamp each display RGB channel to [0, 1]",
            result_prefix: "clip",
            kind: MethodKind::Clip,
        });
        self.register(MethodEntry {
            key: "css",
            label: "CSS Color 4",
            description: "Binary search on Oklch chroma until the clip is within one JND",
            result_prefix: "css",
            kind: MethodKind::Css { gamut: display },
        });
        self.register(MethodEntry {
            key: "css-rec2020",
            label: "CSS Color 4 (Rec.2020)",
            description: "CSS Color 4 mapping into Rec.2020, then clip",
            result_prefix: "cssRec2020",
            kind: MethodKind::Css { gamut: Gamut::Rec2020 },
        });
        self.register(MethodEntry {
            key: "scale",
            label: "Scale",
            description: "Shrink linear RGB toward 0.5 by the largest deviation",
            result_prefix: "scale",
            kind: MethodKind::Scale { restore_lh: false },
        });
        self.register(MethodEntry {
            key: "scale-lh",
            label: "Scale LH",
            description: "Scale, restore Oklch lightness and hue, scale again",
            result_prefix: "scaleLh",
            kind: MethodKind::Scale { restore_lh: true },
        });
        self.register(MethodEntry {
            key: "chromium",
            label: "Chromium",
            description: "Six-sector plane approximation of Rec.2020 in Oklab, then clip",
            result_prefix: "chromium",
            kind: MethodKind::Chromium,
        });
        self.register(MethodEntry {
            key: "bjorn",
            label: "Ottosson",
            description: "Ottosson gamut clipping at constant lightness",
            result_prefix: "bjornP3",
            kind: MethodKind::Bjorn { gamut: display },
        });
        self.register(MethodEntry {
            key: "bjornRec2020",
            label: "Ottosson (Rec.2020)",
            description: "Ottosson gamut clipping into Rec.2020, then clip",
            result_prefix: "bjorn",
            kind: MethodKind::Bjorn { gamut: Gamut::Rec2020 },
        });
        self.register(MethodEntry {
            key: "raytrace",
            label: "Raytrace",
            description: "Ray cast toward the achromatic axis in linear RGB",
            result_prefix: "raytraceP3",
            kind: MethodKind::Raytrace { gamut: display },
        });
        self.register(MethodEntry {
            key: "raytraceRec2020",
            label: "Raytrace (Rec.2020)",
            description: "Ray cast into Rec.2020, then clip",
            result_prefix: "raytrace",
            kind: MethodKind::Raytrace { gamut: Gamut::Rec2020 },
        });
        self.register(MethodEntry {
            key: "edge-seeker",
            label: "Edge Seeker",
            description: "Cap Oklch chroma with a precomputed boundary table",
            result_prefix: "edgeP3",
            kind: MethodKind::EdgeSeeker { gamut: display },
        });
        self.register(MethodEntry {
            key: "edge-seeker-rec2020",
            label: "Edge Seeker (Rec.2020)",
            description: "Cap chroma with the Rec.2020 boundary table, then clip",
            result_prefix: "edge",
            kind: MethodKind::EdgeSeeker { gamut: Gamut::Rec2020 },
        });
    }

    /// Registers a method, replacing any entry with the same key.
    pub fn register(&mut self, entry: MethodEntry) {
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Display gamut every result is returned in.
    pub fn display(&self) -> Gamut {
        self.display
    }

    /// Shared lookup table context.
    pub fn context(&self) -> &Arc<MethodContext> {
        &self.context
    }

    /// Registered methods in registration order.
    pub fn entries(&self) -> &[MethodEntry] {
        &self.entries
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    /// Entry for `key`.
    pub fn get(&self, key: &str) -> MapResult<&MethodEntry> {
        self.entries.iter().find(|e| e.key == key).ok_or_else(|| MapError::UnknownMethod {
            key: key.to_string(),
            known: self.keys().collect::<Vec<_>>().join(", "),
        })
    }

    /// Maps `color` with the method registered under `key`.
    pub fn map(&self, key: &str, color: &Color) -> MapResult<Color> {
        let entry = self.get(key)?;
        Ok(self.compute(entry, color))
    }

    /// Runs `entry` on `color`; the result is in the display gamut's
    /// encoded space.
    pub fn compute(&self, entry: &MethodEntry, color: &Color) -> Color {
        let display = self.display;
        let gamut = entry.kind.mapping_gamut(display);
        trace!(method = entry.key, color = %color, "compute");

        let mapped = match entry.kind {
            MethodKind::Clip => clip::map(color, display),
            MethodKind::Css { gamut } => css::map(color, gamut),
            MethodKind::Scale { restore_lh: false } => scale::map(color, display),
            MethodKind::Scale { restore_lh: true } => scale::map_lh(color, display),
            MethodKind::Chromium => chromium::map(color, display),
            MethodKind::Bjorn { gamut } => bjorn::map(color, &self.context.oklab_gamut(gamut)),
            MethodKind::Raytrace { gamut } => raytrace::map(color, &self.context.oklab_gamut(gamut)),
            MethodKind::EdgeSeeker { gamut } => {
                edge_seeker::map(color, &self.context.edge_table(gamut), gamut)
            }
        };

        if gamut == display {
            mapped.to(Space::encoded(display))
        } else {
            mapped.clip(display)
        }
    }

    /// Builds the lookup tables `keys` will need ahead of a run.
    pub fn prepare<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> MapResult<()> {
        for key in keys {
            let entry = self.get(key)?;
            match entry.kind {
                MethodKind::EdgeSeeker { gamut } => {
                    self.context.edge_table(gamut);
                }
                MethodKind::Bjorn { gamut } | MethodKind::Raytrace { gamut } => {
                    self.context.oklab_gamut(gamut);
                }
                _ => {}
            }
            debug!(method = key, "prepared");
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Gamut::DisplayP3)
    }
}
