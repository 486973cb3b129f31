//! The compiled-in Maya Signer site definition.
//!
//! [`base_config`] is the minimal definition and [`site_overrides`] the
//! fully populated layer on top of it. [`build_config`] merges the two and
//! is the single source of truth for the site.

use crate::merge::{merge, PartialSiteConfig, PartialThemeConfig};
use crate::nav::{NavEntry, Sidebar, SidebarGroup};
use crate::site::{DiagramOptions, DiagramTheme, SiteConfig};
use crate::theme::{
    EditLink, Footer, FormatOptions, LastUpdated, SearchConfig, SearchProvider, SocialLink,
    ThemeConfig,
};

const REPOSITORY: &str = "https://github.com/Maya-AQSS/maya-signer";

/// Build the complete site configuration.
pub fn build_config() -> SiteConfig {
    merge(base_config(), site_overrides())
}

/// The minimal site definition.
pub fn base_config() -> SiteConfig {
    SiteConfig {
        title: "Maya Signer".to_string(),
        description: "Firma electrónica de documentos para Maya ERP".to_string(),
        lang: "es-ES".to_string(),
        base_path: "/maya-signer/".to_string(),
        source_dir: "user".to_string(),
        ignore_dead_links: true,
        diagram: DiagramOptions {
            theme: DiagramTheme::Light,
        },
        theme: ThemeConfig {
            nav: vec![
                NavEntry::link("Inicio", "/"),
                NavEntry::link("Guía de Usuario", "/user/"),
            ],
            search: SearchConfig {
                provider: SearchProvider::Local,
            },
            ..Default::default()
        },
    }
}

/// Everything the full site adds on top of [`base_config`].
pub fn site_overrides() -> PartialSiteConfig {
    PartialSiteConfig {
        theme: Some(PartialThemeConfig {
            logo: Some("/logo.svg".to_string()),
            nav: Some(nav()),
            sidebar: Some(sidebar()),
            social_links: Some(vec![SocialLink {
                icon: "github".to_string(),
                link: REPOSITORY.to_string(),
            }]),
            footer: Some(Footer {
                message: "Distribuido bajo licencia MIT.".to_string(),
                copyright: "Copyright © 2025 Maya AQSS".to_string(),
            }),
            search: Some(SearchConfig {
                provider: SearchProvider::Local,
            }),
            edit_link: Some(EditLink {
                pattern: format!("{}/edit/main/docs/:path", REPOSITORY),
                text: "Editar esta página en GitHub".to_string(),
            }),
            last_updated: Some(LastUpdated {
                text: "Última actualización".to_string(),
                format_options: FormatOptions {
                    date_style: Some("short".to_string()),
                    time_style: Some("short".to_string()),
                },
            }),
        }),
        ..Default::default()
    }
}

fn nav() -> Vec<NavEntry> {
    vec![
        NavEntry::link("Inicio", "/"),
        NavEntry::link("Guía de Usuario", "/user/"),
        NavEntry::dropdown("Plataformas", platform_items()),
        NavEntry::link("Certificados", "/user/certificates/"),
        NavEntry::link("Descargas", format!("{}/releases", REPOSITORY)),
    ]
}

fn platform_items() -> Vec<NavEntry> {
    vec![
        NavEntry::link("Linux", "/user/platforms/linux"),
        NavEntry::link("Windows", "/user/platforms/windows"),
        NavEntry::link("macOS", "/user/platforms/macos"),
    ]
}

fn sidebar() -> Sidebar {
    let mut sidebar = Sidebar::new();
    sidebar.insert(
        "/user/".to_string(),
        vec![
            SidebarGroup::new(
                "Guía de Usuario",
                vec![
                    NavEntry::link("Introducción", "/user/"),
                    NavEntry::link("Instalación", "/user/installation"),
                    NavEntry::link("Primeros pasos", "/user/getting-started"),
                    NavEntry::link("Firmar documentos", "/user/signing"),
                    NavEntry::link("Solución de problemas", "/user/troubleshooting"),
                ],
            ),
            SidebarGroup::new("Plataformas", platform_items()),
            SidebarGroup::new(
                "Certificados",
                vec![
                    NavEntry::link("Certificados digitales", "/user/certificates/"),
                    NavEntry::link("Importar un certificado", "/user/certificates/import"),
                    NavEntry::link("Tarjetas y tokens", "/user/certificates/smartcards"),
                ],
            ),
        ],
    );
    sidebar
}
