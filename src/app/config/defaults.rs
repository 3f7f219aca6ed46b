// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and preview constants.
//!
//! # Categories
//!
//! - **Preview**: Start mode of the preview pane
//! - **Camera**: 3D camera projection and placement
//! - **Orbit**: Drag-to-rotate and wheel zoom behavior
//! - **Model**: Garment geometry fitting and material

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Whether a fresh session opens on the 3D preview.
pub const DEFAULT_START_IN_3D: bool = false;

// ==========================================================================
// Camera Defaults
// ==========================================================================

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 20.0;

/// Distance from the target when the scene opens.
pub const CAMERA_START_DISTANCE: f32 = 3.0;

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// ==========================================================================
// Orbit Defaults
// ==========================================================================

/// Fraction of the remaining angular velocity applied each frame.
pub const ORBIT_DAMPING: f32 = 0.1;

/// Multiplier applied to drag deltas.
pub const ORBIT_ROTATE_SPEED: f32 = 0.5;

pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 5.0;

/// Distance change per wheel line.
pub const ORBIT_ZOOM_STEP: f32 = 0.25;

/// Elevation stays this far (radians) away from either pole.
pub const ORBIT_POLE_MARGIN: f32 = 0.05;

// ==========================================================================
// Model Defaults
// ==========================================================================

/// Largest dimension of the garment after fitting, in scene units.
pub const MODEL_FIT_SIZE: f32 = 3.0;

/// Forward tilt applied when the model loads with its materials.
pub const MODEL_TILT_RADIANS: f32 = std::f32::consts::PI * 0.1;

/// Phong shininess exponent for the garment material.
pub const MODEL_SHININESS: f32 = 30.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);

    assert!(ORBIT_MIN_DISTANCE > 0.0);
    assert!(ORBIT_MAX_DISTANCE > ORBIT_MIN_DISTANCE);
    assert!(CAMERA_START_DISTANCE >= ORBIT_MIN_DISTANCE);
    assert!(CAMERA_START_DISTANCE <= ORBIT_MAX_DISTANCE);

    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING <= 1.0);
    assert!(ORBIT_ROTATE_SPEED > 0.0);
    assert!(ORBIT_POLE_MARGIN > 0.0);

    assert!(MODEL_FIT_SIZE > 0.0);
    assert!(MODEL_SHININESS > 0.0);
};
