//! Name-keyed stores for images and fonts.
//!
//! Assets are loaded once, during the loading screen, and keyed by file
//! stem. A lookup miss after that point is a configuration error.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use macroquad::prelude::*;
use tracing::info;

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "bmp"];
pub const FONT_EXTENSIONS: &[&str] = &["ttf"];
pub const SOUND_EXTENSIONS: &[&str] = &["ogg", "mp3", "wav"];

#[derive(Default)]
pub struct AssetStore {
    images: HashMap<String, Texture2D>,
    fonts: HashMap<String, Font>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every image and font under the `images` and `fonts`
    /// subdirectories of `assets_dir`.
    pub fn load_all(&mut self, assets_dir: &Path) -> Result<()> {
        for (stem, path) in scan_dir(&assets_dir.join("images"), IMAGE_EXTENSIONS)? {
            let texture = load_texture_file(&path)?;
            self.images.insert(stem, texture);
        }
        for (stem, path) in scan_dir(&assets_dir.join("fonts"), FONT_EXTENSIONS)? {
            let bytes = fs::read(&path)
                .with_context(|| format!("failed to read font {}", path.display()))?;
            let font = load_ttf_font_from_bytes(&bytes)
                .map_err(|e| anyhow!("failed to parse font {}: {e:?}", path.display()))?;
            self.fonts.insert(stem, font);
        }
        info!(
            images = self.images.len(),
            fonts = self.fonts.len(),
            "assets loaded"
        );
        Ok(())
    }

    /// Register an image loaded outside the bulk scan (the loading
    /// screen itself needs one before the scan runs).
    pub fn insert_image(&mut self, name: &str, texture: Texture2D) {
        self.images.insert(name.to_string(), texture);
    }

    pub fn image(&self, name: &str) -> Result<&Texture2D> {
        self.images
            .get(name)
            .with_context(|| format!("missing image asset: {name}"))
    }

    pub fn font(&self, name: &str) -> Result<&Font> {
        self.fonts
            .get(name)
            .with_context(|| format!("missing font asset: {name}"))
    }
}

/// Decode one image file into a texture.
pub fn load_texture_file(path: &Path) -> Result<Texture2D> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read image {}", path.display()))?;
    let image = Image::from_file_with_format(&bytes, None)
        .map_err(|e| anyhow!("failed to decode image {}: {e:?}", path.display()))?;
    Ok(Texture2D::from_image(&image))
}

/// Collect `(stem, path)` pairs for the files in `directory` carrying an
/// accepted extension, sorted by stem so load order is stable.
pub fn scan_dir(directory: &Path, extensions: &[&str]) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("failed to read asset directory {}", directory.display()))?;

    let mut found = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        let stem = path.file_stem().and_then(|s| s.to_str());
        if let (Some(ext), Some(stem)) = (ext, stem) {
            if extensions.contains(&ext.as_str()) {
                found.push((stem.to_string(), path.clone()));
            }
        }
    }
    found.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_scan_dir_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.png", "b.txt", "c.PNG", "d.jpg"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let found = scan_dir(dir.path(), IMAGE_EXTENSIONS).unwrap();
        let stems: Vec<&str> = found.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(stems, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_scan_dir_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();
        File::create(dir.path().join("real.png")).unwrap();

        let found = scan_dir(dir.path(), IMAGE_EXTENSIONS).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "real");
    }

    #[test]
    fn test_scan_dir_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(scan_dir(&missing, IMAGE_EXTENSIONS).is_err());
    }

    #[test]
    fn test_missing_asset_lookup_errors() {
        let store = AssetStore::new();
        assert!(store.image("stick-bop-menu").is_err());
        assert!(store.font("OpenSans-Regular").is_err());
    }
}
