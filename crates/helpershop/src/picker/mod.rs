//! External collaborators for image acquisition.
//!
//! The stock screen gets product photos from a device picker (camera or
//! photo library) behind the [`ImagePicker`] trait, and checks capability
//! grants through [`PermissionGate`]. Both are seams: the real device
//! integrations live outside this crate, and tests plug in the canned
//! implementations below. Neither collaborator gates catalog or draft
//! operations; a denied permission only produces a warning.

use crate::model::ImageRef;
use async_trait::async_trait;
use tracing::warn;

/// Where the picker should capture from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Camera,
    Library,
}

/// One asset the picker returned. The stock screen consumes only the
/// location reference of the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedAsset {
    pub location: ImageRef,
}

/// Outcome of a picker invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerResponse {
    /// The user backed out. The caller leaves its image field unchanged.
    Cancelled,
    /// The picker failed; the message is logged, nothing else happens.
    Failed(String),
    /// Captured or selected assets, best first.
    Assets(Vec<PickedAsset>),
}

/// Camera/gallery picker seam.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Launches the picker for the given source. `quality` is the capture
    /// quality in `0.0..=1.0`, passed through to the device integration.
    async fn pick_image(&self, source: ImageSource, quality: f32) -> PickerResponse;
}

/// Capabilities the stock screen asks about before offering the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    StorageRead,
    Camera,
}

/// OS permission seam.
#[async_trait]
pub trait PermissionGate: Send + Sync {
    /// Whether the capability is currently granted.
    async fn check(&self, capability: Capability) -> bool;
    /// Prompts for the capability; returns the resulting grant.
    async fn request(&self, capability: Capability) -> bool;
}

/// Advisory permission sweep run when the stock screen opens: check each
/// capability, request it if absent, warn if denied. Never blocks anything.
pub async fn ensure_permissions(gate: &dyn PermissionGate) {
    for capability in [Capability::StorageRead, Capability::Camera] {
        if !gate.check(capability).await && !gate.request(capability).await {
            warn!(?capability, "Permission denied; related features may not work");
        }
    }
}

/// Picker stand-in that resolves immediately with a canned response. Used
/// by the demo binary and by tests.
pub struct CannedPicker {
    response: PickerResponse,
}

impl CannedPicker {
    pub fn new(response: PickerResponse) -> Self {
        Self { response }
    }

    /// A picker that always returns one asset at the given location.
    pub fn with_asset(uri: &str) -> Self {
        Self::new(PickerResponse::Assets(vec![PickedAsset {
            location: ImageRef::from(uri),
        }]))
    }
}

#[async_trait]
impl ImagePicker for CannedPicker {
    async fn pick_image(&self, _source: ImageSource, _quality: f32) -> PickerResponse {
        self.response.clone()
    }
}

/// Permission gate that grants everything. Used by the demo binary and by
/// tests.
pub struct GrantAll;

#[async_trait]
impl PermissionGate for GrantAll {
    async fn check(&self, _capability: Capability) -> bool {
        true
    }

    async fn request(&self, _capability: Capability) -> bool {
        true
    }
}

/// Permission gate that denies everything; exercises the advisory path.
pub struct DenyAll;

#[async_trait]
impl PermissionGate for DenyAll {
    async fn check(&self, _capability: Capability) -> bool {
        false
    }

    async fn request(&self, _capability: Capability) -> bool {
        false
    }
}
