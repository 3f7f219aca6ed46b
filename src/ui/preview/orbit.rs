// SPDX-License-Identifier: MPL-2.0
//! Orbit camera for the 3D preview.
//!
//! The camera circles a target at the origin. Dragging feeds an angular
//! velocity that [`Orbit::step`] applies a fraction of per frame, so the
//! model keeps turning briefly after the mouse is released. Zooming changes
//! the distance within fixed bounds. There is no pan.

use crate::app::config::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_DISTANCE, ORBIT_DAMPING,
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLE_MARGIN, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP,
};
use glam::{Mat4, Vec2, Vec3};
use iced::Point;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Below this angular speed (radians per frame) the camera is at rest.
const REST_THRESHOLD: f32 = 1e-4;

#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    /// Rotation around the vertical axis, in radians.
    azimuth: f32,
    /// Angle above the horizontal plane, in radians.
    elevation: f32,
    distance: f32,
    /// Pending (azimuth, elevation) change still to be applied.
    velocity: Vec2,
    drag_from: Option<Point>,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.0,
            distance: CAMERA_START_DISTANCE,
            velocity: Vec2::ZERO,
            drag_from: None,
        }
    }
}

impl Orbit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_drag(&mut self, at: Point) {
        self.drag_from = Some(at);
    }

    /// Converts cursor movement into angular velocity.
    ///
    /// A drag across the full viewport height turns the camera by
    /// `TAU * ORBIT_ROTATE_SPEED`.
    pub fn drag_to(&mut self, at: Point, viewport_height: f32) {
        let Some(from) = self.drag_from else {
            return;
        };
        let height = viewport_height.max(1.0);
        let delta = Vec2::new(at.x - from.x, at.y - from.y) * (TAU * ORBIT_ROTATE_SPEED / height);
        // Dragging right turns the model right, so the camera moves left.
        self.velocity += Vec2::new(-delta.x, delta.y);
        self.drag_from = Some(at);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    /// Moves the camera closer for positive `lines`, farther for negative.
    pub fn zoom(&mut self, lines: f32) {
        self.distance = (self.distance - lines * ORBIT_ZOOM_STEP)
            .clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// Applies one frame of damped rotation. Returns whether the camera is
    /// still moving.
    pub fn step(&mut self) -> bool {
        let applied = self.velocity * ORBIT_DAMPING;
        self.azimuth = (self.azimuth + applied.x).rem_euclid(TAU);
        let limit = FRAC_PI_2 - ORBIT_POLE_MARGIN;
        self.elevation = (self.elevation + applied.y).clamp(-limit, limit);
        self.velocity -= applied;

        if self.velocity.length() < REST_THRESHOLD {
            self.velocity = Vec2::ZERO;
        }
        self.velocity != Vec2::ZERO
    }

    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[must_use]
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Camera position in world space (Y up).
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.elevation.cos();
        Vec3::new(
            horizontal * self.azimuth.sin(),
            self.distance * self.elevation.sin(),
            horizontal * self.azimuth.cos(),
        )
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    #[must_use]
    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        let projection = Mat4::perspective_rh(
            CAMERA_FOV_DEGREES.to_radians(),
            aspect_ratio.max(f32::EPSILON),
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        projection * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn starts_in_front_of_the_model() {
        let orbit = Orbit::new();
        let eye = orbit.eye();
        assert_abs_diff_eq!(eye.z, CAMERA_START_DISTANCE, epsilon = 1e-6);
        assert_abs_diff_eq!(eye.x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn zoom_is_bounded() {
        let mut orbit = Orbit::new();
        orbit.zoom(100.0);
        assert_abs_diff_eq!(orbit.distance(), ORBIT_MIN_DISTANCE);
        orbit.zoom(-100.0);
        assert_abs_diff_eq!(orbit.distance(), ORBIT_MAX_DISTANCE);
    }

    #[test]
    fn drag_rotates_gradually_and_settles() {
        let mut orbit = Orbit::new();
        orbit.begin_drag(Point::new(0.0, 0.0));
        orbit.drag_to(Point::new(100.0, 0.0), 400.0);
        orbit.end_drag();

        let start = orbit.eye();
        assert!(orbit.step());
        let after_one = orbit.eye();
        assert_ne!(start, after_one);

        let mut frames = 0;
        while orbit.step() {
            frames += 1;
            assert!(frames < 1000, "orbit never settled");
        }
        // Total rotation equals the dragged amount.
        let expected = -100.0 * TAU * ORBIT_ROTATE_SPEED / 400.0;
        let azimuth = orbit.azimuth;
        assert_abs_diff_eq!(azimuth, expected.rem_euclid(TAU), epsilon = 1e-2);
    }

    #[test]
    fn elevation_stops_short_of_the_poles() {
        let mut orbit = Orbit::new();
        orbit.begin_drag(Point::new(0.0, 0.0));
        orbit.drag_to(Point::new(0.0, 10_000.0), 100.0);
        while orbit.step() {}
        assert!(orbit.elevation() <= FRAC_PI_2 - ORBIT_POLE_MARGIN + 1e-6);
        assert!(orbit.eye().is_finite());
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let mut orbit = Orbit::new();
        orbit.drag_to(Point::new(50.0, 50.0), 100.0);
        assert!(!orbit.step());
    }

    #[test]
    fn view_projection_maps_target_to_center() {
        let orbit = Orbit::new();
        let clip = orbit.view_projection(0.75) * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(clip.x / clip.w, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(clip.y / clip.w, 0.0, epsilon = 1e-6);
    }
}
