use std::path::Path;

use crate::foundation::error::{WorkspaceError, WorkspaceResult};

/// `accept` string handed to the native file picker.
pub const IMPORT_ACCEPT: &str = ".svg,.gltf,.glb,.obj,.fbx,.hdr,.exr,.png,.jpg";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    /// Vector artwork, imported as shape layers.
    Svg,
    /// 3D scene or mesh.
    Model,
    /// HDR environment map for scene lighting.
    EnvironmentMap,
    Image,
}

impl ImportKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "svg" => Some(Self::Svg),
            "gltf" | "glb" | "obj" | "fbx" => Some(Self::Model),
            "hdr" | "exr" => Some(Self::EnvironmentMap),
            "png" | "jpg" => Some(Self::Image),
            _ => None,
        }
    }
}

pub fn accepted_extensions() -> impl Iterator<Item = &'static str> {
    IMPORT_ACCEPT.split(',').map(|e| e.trim_start_matches('.'))
}

pub fn classify_import(path: &Path) -> WorkspaceResult<ImportKind> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| {
            WorkspaceError::validation(format!("no file extension: {}", path.display()))
        })?;
    ImportKind::from_extension(ext).ok_or_else(|| {
        WorkspaceError::validation(format!(
            "unsupported import type .{ext} (accepted: {IMPORT_ACCEPT})"
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/import.rs"]
mod tests;
