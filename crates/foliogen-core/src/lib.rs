//! # Foliogen Core
//!
//! Library crate behind the `foliogen` CLI. It scaffolds a static web
//! portfolio: pick a bundled template, name a folder, and get a ready-to-open
//! site (`index.html`, `styles.css`, `script.js`, plus an `assets/`
//! directory for media).
//!
//! ## Architecture
//!
//! Two modules, one seam between them:
//!
//! - [`registry`]: the closed set of bundled templates. Asset bodies are
//!   embedded into the binary at compile time, so lookups are pure reads of
//!   static data and a broken bundle is a build failure, not a runtime one.
//! - [`generator`]: the filesystem side. Resolves the destination, creates
//!   directories idempotently, writes the template assets verbatim.
//!
//! ## Example
//!
//! ```no_run
//! use foliogen_core::generate;
//!
//! let path = generate("MyPortfolio", "developer")?;
//! println!("created {}", path.display());
//! # Ok::<(), foliogen_core::GeneratorError>(())
//! ```

pub mod generator;
pub mod registry;

pub use generator::{generate, generate_in, GeneratorError, GeneratorResult};
pub use registry::{Asset, RegistryError, Template};
