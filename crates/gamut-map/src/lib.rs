//! # gamut-map
//!
//! Gamut mapping algorithms and the registry that dispatches them.
//!
//! # Methods
//!
//! | Key | Algorithm |
//! |-----|-----------|
//! | `clip` | per-channel clamp |
//! | `css`, `css-rec2020` | CSS Color 4 chroma search |
//! | `scale`, `scale-lh` | linear midpoint scaling |
//! | `chromium` | six-sector plane approximation of Rec.2020 |
//! | `bjorn`, `bjornRec2020` | Ottosson gamut clipping |
//! | `raytrace`, `raytraceRec2020` | ray cast against the linear RGB cube |
//! | `edge-seeker`, `edge-seeker-rec2020` | chroma capping with a lookup table |
//!
//! Keys ending in `Rec2020`/`-rec2020` map into Rec.2020 first and clip
//! into the display gamut afterwards.
//!
//! # Architecture
//!
//! ```text
//!   Registry ---- MethodEntry { key, kind } ---> methods::*
//!      |
//!      +-- Arc<MethodContext>
//!              +-- EdgeTable per gamut
//!              +-- OklabGamut per gamut
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use gamut_color::{Color, Gamut};
//! use gamut_map::Registry;
//!
//! let registry = Registry::new(Gamut::DisplayP3);
//! let wide = Color::rgb(Gamut::Rec2020, [0.0, 1.0, 0.0]);
//! let mapped = registry.map("css", &wide).unwrap();
//! assert!(mapped.in_gamut(Gamut::DisplayP3, 0.0001));
//! ```
//!
//! # Dependencies
//!
//! - `gamut-color` - color values and conversions
//! - `rayon` - parallel edge table construction
//! - `tracing` - table build and dispatch logging

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod context;
mod error;
pub mod edge_table;
pub mod methods;
pub mod oklab_gamut;
pub mod registry;

pub use context::MethodContext;
pub use edge_table::EdgeTable;
pub use error::{MapError, MapResult};
pub use oklab_gamut::{Cusp, OklabGamut};
pub use registry::{MethodEntry, MethodKind, Registry};
