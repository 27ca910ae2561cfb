// crates/foliogen-core/src/generator.rs - Portfolio Generation
//
// This module owns the filesystem side of scaffolding: it knows HOW to turn
// a template into a folder on disk. It deliberately knows nothing about
// argument parsing or terminal output - that lives in the CLI crate.
//
// CREATED STRUCTURE:
// ```
// <folder>/
// ├── index.html
// ├── styles.css
// ├── script.js
// └── assets/
//     └── README.md
// ```
//
// BEHAVIORAL CONTRACT:
// - Template validation happens before any filesystem mutation
// - Directory creation is idempotent; an existing destination is warned
//   about and then reused, never treated as an error
// - Asset files are written verbatim from the registry and overwrite any
//   existing file of the same name
// - On failure nothing is rolled back; partially written files may remain
//
// The whole operation is one linear sequence with a single branch
// (warn-if-exists). There is no state machine, no retries, no locking -
// concurrent runs against the same folder race at the OS level.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::registry::{Asset, RegistryError, Template};

/// Placeholder note written into the `assets/` subdirectory of every
/// generated portfolio. The generator supplies this itself; it is not a
/// registry asset.
const ASSETS_NOTE: &str = "# Assets\n\nPlace your images and other media files here.";

/// Errors that can occur during portfolio generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Template name outside the closed set; raised before any filesystem
    /// mutation
    #[error(transparent)]
    InvalidTemplate(#[from] RegistryError),

    /// The current working directory could not be resolved
    #[error("Failed to resolve current directory")]
    CurrentDir(#[source] io::Error),

    /// Directory creation or file write failed; wraps the OS error and
    /// names the path involved
    #[error("Failed to create portfolio files at {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Generate a portfolio folder under the current working directory
///
/// Validates the template name, then scaffolds `folder_name` relative to
/// the process working directory. Returns the absolute path of the created
/// folder.
///
/// EXAMPLES:
/// ```no_run
/// let path = foliogen_core::generate("MyPortfolio", "developer")?;
/// assert!(path.is_absolute());
/// # Ok::<(), foliogen_core::GeneratorError>(())
/// ```
pub fn generate(folder_name: &str, template_name: &str) -> GeneratorResult<PathBuf> {
    let base = env::current_dir().map_err(GeneratorError::CurrentDir)?;
    generate_in(&base, folder_name, template_name)
}

/// Generate a portfolio folder under an explicit base directory
///
/// Same contract as [`generate`] with the destination resolved against
/// `base` instead of the process working directory. This is the seam the
/// tests use: no chdir, no shared process state.
///
/// `base` is expected to be absolute (as `env::current_dir` always is);
/// the returned path is `base.join(folder_name)`.
pub fn generate_in(base: &Path, folder_name: &str, template_name: &str) -> GeneratorResult<PathBuf> {
    // Validate the template before touching the filesystem. An unknown
    // name must leave no trace on disk.
    let template: Template = template_name.parse()?;

    let destination = base.join(folder_name);

    // Existing destination is allowed: warn and proceed. Contents with the
    // fixed asset filenames will be overwritten below.
    if destination.exists() {
        warn!(
            folder = folder_name,
            path = %destination.display(),
            "destination already exists, contents may be overwritten"
        );
    }

    // Destination and assets/ subdirectory, both idempotent
    create_dir(&destination)?;
    let assets_dir = destination.join("assets");
    create_dir(&assets_dir)?;

    // The three asset slots, written verbatim from the registry
    for asset in Asset::ALL {
        write_file(&destination.join(asset.filename()), template.asset(asset))?;
    }

    // Placeholder note so the empty assets/ directory explains itself
    write_file(&assets_dir.join("README.md"), ASSETS_NOTE)?;

    Ok(destination)
}

/// Create a directory (and any missing parents), mapping failures to
/// [`GeneratorError::Filesystem`]
fn create_dir(path: &Path) -> GeneratorResult<()> {
    fs::create_dir_all(path).map_err(|source| GeneratorError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}

/// Write UTF-8 text to a file, overwriting any existing content
fn write_file(path: &Path, content: &str) -> GeneratorResult<()> {
    fs::write(path, content).map_err(|source| GeneratorError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}
