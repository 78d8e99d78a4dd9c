//! Lattice workspace core: the numeric side of the compositor editor shell.
//!
//! The editor UI is a thin layer over a handful of deterministic operations, all of which live
//! here as plain functions over explicit inputs:
//!
//! - **Timeline**: turn layer-bar drags into in/out point updates, with optional snapping to the
//!   playhead, other layers, composition bounds and markers ([`DragGesture`], [`SnapTargets`]).
//! - **Easing**: a closed table of named bezier presets ([`easing_handles`]) and their
//!   application to the selected keyframes of a [`KeyframeStore`] ([`apply_interpolation`]).
//! - **Overlays**: rulers, guides and grid snapping in composition space ([`GuideSet`],
//!   [`OverlaySnapper`]), plus node-connection curves ([`connection_path`]).
//! - **Projects**: JSON project files on disk ([`ProjectStore`]).
//!
//! Nothing here touches a UI toolkit. Gestures that hold global pointer listeners do so through
//! [`PointerCapture`], released when the [`DragSession`] ends.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod foundation;
mod overlay;
mod project;
mod state;
mod timeline;

pub use animation::apply::{Channel, EasingReport, KeyframeStore, apply_interpolation};
pub use animation::easing::{BezierHandles, EasingPreset, easing_handles};
pub use animation::keyframe::{
    ControlMode, Handle, Interpolation, Keyframe, KeyframeId, KeyframeMeta, KeyframeTrack, Lerp,
};
pub use assets::import::{IMPORT_ACCEPT, ImportKind, accepted_extensions, classify_import};
pub use foundation::core::{BezPath, Composition, Fps, Marker, Point, Rect, Vec2};
pub use foundation::error::{WorkspaceError, WorkspaceResult};
pub use foundation::settings::{
    DEFAULT_GRID_SIZE_PX, OVERLAY_SNAP_TOLERANCE_PX, SNAP_TOLERANCE_FRAMES, WorkspaceSettings,
};
pub use overlay::connection::{
    connection_curve, connection_hit, connection_midpoint, connection_path, connection_svg_d,
};
pub use overlay::guides::{Guide, GuideDrag, GuideId, GuideSet, Orientation, ruler_local_offset};
pub use overlay::snap::{OverlaySnapper, SnapResult};
pub use project::store::{
    Project, ProjectId, ProjectMeta, ProjectStore, ProjectSummary, sanitize_project_name,
};
pub use state::compositor::{ChannelValue, CompositorState, Layer, LayerId, LayerTransform};
pub use timeline::drag::{DragGesture, DragMode, DragSession, PointerCapture, frames_delta};
pub use timeline::scale::TimelineScale;
pub use timeline::snap::SnapTargets;
pub use timeline::span::LayerSpan;
