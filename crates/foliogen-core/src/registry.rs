// crates/foliogen-core/src/registry.rs - Bundled Template Registry
//
// This module is the closed mapping from template name to the static text
// assets shipped with the program. Every asset body is embedded at compile
// time with include_str!, which gives us two properties for free:
// - Lookups are pure reads of 'static data, no I/O and no failure path
// - A template file missing from the source tree breaks the build instead
//   of surfacing as a runtime "corrupted packaging" error
//
// TEMPLATE SET:
// - developer: dark single-page developer portfolio (sidebar navigation,
//   project filter, contact form)
// - photographer: light gallery-first photography portfolio (masonry grid,
//   lightbox)
//
// Adding a template means adding a directory under templates/ and one new
// enum variant; the compiler then walks you through the rest.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced by registry lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid template '{0}'. Available templates: {names}", names = Template::names().join(", "))]
    UnknownTemplate(String),
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

// Embedded asset bodies. Paths are relative to this source file.
const DEVELOPER_MARKUP: &str = include_str!("../templates/developer/index.html");
const DEVELOPER_STYLESHEET: &str = include_str!("../templates/developer/styles.css");
const DEVELOPER_SCRIPT: &str = include_str!("../templates/developer/script.js");

const PHOTOGRAPHER_MARKUP: &str = include_str!("../templates/photographer/index.html");
const PHOTOGRAPHER_STYLESHEET: &str = include_str!("../templates/photographer/styles.css");
const PHOTOGRAPHER_SCRIPT: &str = include_str!("../templates/photographer/script.js");

/// The closed set of bundled portfolio templates
///
/// The first variant is the default used when no `--template` is given.
/// Parsing is strict: names match exactly, no aliases, no case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Template {
    /// Dark single-page developer portfolio
    #[default]
    Developer,
    /// Gallery-first photography portfolio
    Photographer,
}

/// The three content slots every template provides
///
/// Each slot maps to a fixed output filename; the generator never invents
/// filenames of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Markup,
    Stylesheet,
    Script,
}

impl Template {
    /// All templates, in declaration order (first entry is the default)
    pub const ALL: [Template; 2] = [Template::Developer, Template::Photographer];

    /// Canonical name as accepted by `--template` and shown by `--list`
    pub fn name(self) -> &'static str {
        match self {
            Template::Developer => "developer",
            Template::Photographer => "photographer",
        }
    }

    /// One-line description shown by `--list`
    pub fn description(self) -> &'static str {
        match self {
            Template::Developer => "Dark single-page developer portfolio with project filter",
            Template::Photographer => "Light gallery-first photography portfolio with lightbox",
        }
    }

    /// All template names, for error messages and listings
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.name()).collect()
    }

    /// Resolve one of this template's content slots to its embedded body
    ///
    /// Pure read of static data. The match is exhaustive over the closed
    /// (template, asset) grid, so a missing combination cannot compile.
    pub fn asset(self, asset: Asset) -> &'static str {
        match (self, asset) {
            (Template::Developer, Asset::Markup) => DEVELOPER_MARKUP,
            (Template::Developer, Asset::Stylesheet) => DEVELOPER_STYLESHEET,
            (Template::Developer, Asset::Script) => DEVELOPER_SCRIPT,
            (Template::Photographer, Asset::Markup) => PHOTOGRAPHER_MARKUP,
            (Template::Photographer, Asset::Stylesheet) => PHOTOGRAPHER_STYLESHEET,
            (Template::Photographer, Asset::Script) => PHOTOGRAPHER_SCRIPT,
        }
    }
}

impl Asset {
    /// All content slots, in the order they are written to disk
    pub const ALL: [Asset; 3] = [Asset::Markup, Asset::Stylesheet, Asset::Script];

    /// Fixed output filename for this slot
    pub fn filename(self) -> &'static str {
        match self {
            Asset::Markup => "index.html",
            Asset::Stylesheet => "styles.css",
            Asset::Script => "script.js",
        }
    }
}

impl FromStr for Template {
    type Err = RegistryError;

    fn from_str(s: &str) -> RegistryResult<Self> {
        Template::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| RegistryError::UnknownTemplate(s.to_string()))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_resolves_every_asset() {
        for template in Template::ALL {
            for asset in Asset::ALL {
                let body = template.asset(asset);
                assert!(
                    !body.trim().is_empty(),
                    "empty asset {:?}/{:?}",
                    template,
                    asset
                );
            }
        }
    }

    #[test]
    fn test_markup_assets_are_html_documents() {
        for template in Template::ALL {
            let markup = template.asset(Asset::Markup);
            assert!(markup.starts_with("<!DOCTYPE html>"), "{:?}", template);
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for template in Template::ALL {
            let parsed: Template = template.name().parse().unwrap();
            assert_eq!(parsed, template);
        }
    }

    #[test]
    fn test_unknown_template_rejected() {
        let err = "not-a-real-template".parse::<Template>().unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownTemplate("not-a-real-template".to_string())
        );
        // Error message names the valid set so the user can self-correct
        let message = err.to_string();
        assert!(message.contains("developer"));
        assert!(message.contains("photographer"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Developer".parse::<Template>().is_err());
        assert!("DEVELOPER".parse::<Template>().is_err());
    }

    #[test]
    fn test_default_is_first_listed() {
        assert_eq!(Template::default(), Template::ALL[0]);
    }

    #[test]
    fn test_asset_filenames() {
        let names: Vec<_> = Asset::ALL.iter().map(|a| a.filename()).collect();
        assert_eq!(names, ["index.html", "styles.css", "script.js"]);
    }

    #[test]
    fn test_descriptions_are_single_line() {
        for template in Template::ALL {
            assert!(!template.description().contains('\n'));
        }
    }
}
