//! Static wallpaper-pack catalog
//!
//! The packs ship as code; the images live in public object storage and are
//! fetched by the browser directly, except for downloads which go through
//! the proxy endpoint.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    Colorful,
}

/// A downloadable wallpaper pack with a desktop and a mobile variant
#[derive(Debug, Clone, Serialize)]
pub struct WallpaperPack {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub desktop_url: &'static str,
    pub mobile_url: &'static str,
    pub theme: Theme,
    pub tags: &'static [&'static str],
    pub created_at: &'static str,
}

pub const CATALOG: &[WallpaperPack] = &[
    WallpaperPack {
        id: "mountain-serenity",
        name: "Mountain Serenity",
        description: "Breathtaking mountain landscapes in high resolution",
        desktop_url: "https://wallpapers.folio.dev/mountain-serenity/desktop.jpg",
        mobile_url: "https://wallpapers.folio.dev/mountain-serenity/mobile.jpg",
        theme: Theme::Light,
        tags: &["nature", "mountains", "landscape"],
        created_at: "2024-01-15",
    },
    WallpaperPack {
        id: "ocean-depths",
        name: "Ocean Depths",
        description: "Stunning underwater photography and ocean scenes",
        desktop_url: "https://wallpapers.folio.dev/ocean-depths/desktop.jpg",
        mobile_url: "https://wallpapers.folio.dev/ocean-depths/mobile.jpg",
        theme: Theme::Dark,
        tags: &["ocean", "underwater", "blue"],
        created_at: "2024-01-10",
    },
    WallpaperPack {
        id: "abstract-geometry",
        name: "Abstract Geometry",
        description: "Modern geometric patterns and abstract designs",
        desktop_url: "https://wallpapers.folio.dev/abstract-geometry/desktop.jpg",
        mobile_url: "https://wallpapers.folio.dev/abstract-geometry/mobile.jpg",
        theme: Theme::Colorful,
        tags: &["abstract", "geometric", "modern"],
        created_at: "2024-01-05",
    },
    WallpaperPack {
        id: "forest-canopy",
        name: "Forest Canopy",
        description: "Peaceful forest scenes and tree photography",
        desktop_url: "https://wallpapers.folio.dev/forest-canopy/desktop.jpg",
        mobile_url: "https://wallpapers.folio.dev/forest-canopy/mobile.jpg",
        theme: Theme::Light,
        tags: &["forest", "trees", "nature"],
        created_at: "2024-01-01",
    },
];

/// Look up a pack by its catalog id
pub fn find(id: &str) -> Option<&'static WallpaperPack> {
    CATALOG.iter().find(|pack| pack.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, pack) in CATALOG.iter().enumerate() {
            assert!(
                CATALOG[i + 1..].iter().all(|other| other.id != pack.id),
                "duplicate pack id {}",
                pack.id
            );
        }
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find("ocean-depths").map(|p| p.name), Some("Ocean Depths"));
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_value(Theme::Colorful).unwrap();
        assert_eq!(json, "colorful");
    }
}
