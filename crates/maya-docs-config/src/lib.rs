//! Site configuration for the Maya Signer documentation.
//!
//! This crate holds the typed configuration consumed by the static-site
//! generator: the data model, the compiled-in site definition, the merge
//! rules for override files, and the build-time checks and manifests
//! derived from a resolved configuration.

pub mod builder;
pub mod links;
pub mod load;
pub mod manifest;
pub mod merge;
pub mod nav;
pub mod site;
pub mod theme;
pub mod validate;

pub use builder::{base_config, build_config, site_overrides};
pub use links::{check_links, page_source, DeadLink, LinkError};
pub use load::{load_overrides, resolve, LoadError};
pub use manifest::{write_manifest, Manifest, ManifestError, ManifestPage};
pub use merge::{merge, PartialSiteConfig, PartialThemeConfig};
pub use nav::{NavDropdown, NavEntry, NavLink, Sidebar, SidebarGroup};
pub use site::{DiagramOptions, DiagramTheme, SiteConfig};
pub use theme::{
    EditLink, Footer, FormatOptions, LastUpdated, SearchConfig, SearchProvider, SocialLink,
    ThemeConfig,
};
pub use validate::{validate, ConfigError, Issue, Severity, ValidationReport};
