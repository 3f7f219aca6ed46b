// SPDX-License-Identifier: MPL-2.0
//! 3D preview state: model loading, garment material and camera.
//!
//! A `Scene` exists only while the 3D preview is shown. Dropping it releases
//! the geometry; any load still running is orphaned because its ticket no
//! longer matches a live scene.

use super::orbit::Orbit;
use crate::app::config::MODEL_SHININESS;
use crate::domain::GarmentColor;
use crate::error::ModelError;
use crate::media::model::{LoadOutcome, Model};
use iced::Point;
use std::time::{Duration, Instant};

/// Generation number of a model load.
///
/// Numbers keep growing across scenes: the root hands the last ticket to
/// [`Scene::continuing`] so a load started by a dropped scene can never
/// match a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    /// Geometry loaded without its material library.
    LoadedFallback { reason: ModelError },
    Failed { reason: ModelError },
}

impl LoadState {
    #[must_use]
    pub fn has_geometry(&self) -> bool {
        matches!(self, LoadState::Loaded | LoadState::LoadedFallback { .. })
    }
}

/// Surface shading applied to every mesh of the garment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMaterial {
    pub color: [f32; 3],
    pub shininess: f32,
    pub double_sided: bool,
}

impl SurfaceMaterial {
    #[must_use]
    pub fn for_garment(color: GarmentColor) -> Self {
        Self {
            color: color.rgb(),
            shininess: MODEL_SHININESS,
            double_sided: true,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    DragStarted(Point),
    /// Cursor position and canvas height.
    Dragged(Point, f32),
    DragEnded,
    /// Wheel movement in lines, positive away from the user.
    Zoomed(f32),
}

#[derive(Debug)]
pub struct Scene {
    state: LoadState,
    generation: u64,
    model: Option<Model>,
    /// One material per mesh of `model`.
    materials: Vec<SurfaceMaterial>,
    color: GarmentColor,
    orbit: Orbit,
    created_at: Instant,
    elapsed: Duration,
}

impl Scene {
    #[must_use]
    pub fn new(color: GarmentColor) -> Self {
        Self::continuing(color, LoadTicket::default())
    }

    /// A scene whose first load is numbered after `previous`.
    #[must_use]
    pub fn continuing(color: GarmentColor, previous: LoadTicket) -> Self {
        Self {
            state: LoadState::Idle,
            generation: previous.0,
            model: None,
            materials: Vec::new(),
            color,
            orbit: Orbit::new(),
            created_at: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    /// Starts a new load, superseding any earlier one.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        LoadTicket(self.generation)
    }

    /// Applies a load result. Returns `false` for a stale ticket.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<LoadOutcome, ModelError>,
    ) -> bool {
        if ticket.0 != self.generation {
            log::debug!("Dropping stale model load {}", ticket.0);
            return false;
        }

        match result {
            Ok(outcome) => {
                let state = match &outcome {
                    LoadOutcome::Full(_) => LoadState::Loaded,
                    LoadOutcome::Fallback { reason, .. } => LoadState::LoadedFallback {
                        reason: reason.clone(),
                    },
                };
                self.install(outcome.into_model());
                self.state = state;
            }
            Err(reason) => {
                log::warn!("Garment model unavailable: {reason}");
                self.model = None;
                self.materials.clear();
                self.state = LoadState::Failed { reason };
            }
        }
        true
    }

    fn install(&mut self, model: Model) {
        self.materials = vec![SurfaceMaterial::for_garment(self.color); model.meshes.len()];
        self.model = Some(model);
    }

    /// Replaces every mesh material with one for `color`. Before geometry
    /// arrives the color is kept and used when it does.
    pub fn recolor(&mut self, color: GarmentColor) {
        self.color = color;
        let material = SurfaceMaterial::for_garment(color);
        for slot in &mut self.materials {
            *slot = material;
        }
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::DragStarted(at) => self.orbit.begin_drag(at),
            Message::Dragged(at, height) => self.orbit.drag_to(at, height),
            Message::DragEnded => self.orbit.end_drag(),
            Message::Zoomed(lines) => self.orbit.zoom(lines),
        }
    }

    /// Advances the camera one frame.
    pub fn tick(&mut self, now: Instant) {
        self.elapsed = now.saturating_duration_since(self.created_at);
        self.orbit.step();
    }

    /// Ticket of the most recent load.
    #[must_use]
    pub fn ticket(&self) -> LoadTicket {
        LoadTicket(self.generation)
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    #[must_use]
    pub fn materials(&self) -> &[SurfaceMaterial] {
        &self.materials
    }

    #[must_use]
    pub fn color(&self) -> GarmentColor {
        self.color
    }

    #[must_use]
    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    /// Time since the scene was created, as of the last tick.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
