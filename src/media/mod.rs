// SPDX-License-Identifier: MPL-2.0
//! Media handling: upload decoding, MIME detection, the asset registry,
//! garment asset lookup, and the 3D garment model.

pub mod asset_store;
pub mod garment_assets;
pub mod image;
pub mod mime;
pub mod model;

pub use asset_store::{AssetStore, PendingFile, UploadedAsset};
pub use garment_assets::{GarmentAssets, ModelPaths};
pub use image::{load_image, ImageData};
