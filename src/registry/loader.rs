use std::marker::PhantomData;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RonLoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid {kind}: {reason}")]
    Invalid { kind: &'static str, reason: String },
}

/// Semantic checks run after a RON file deserializes. A rejected asset fails
/// the load instead of reaching the world half-valid.
pub trait Validate {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Deserialize and validate one RON document.
pub fn parse<T>(bytes: &[u8]) -> Result<T, RonLoaderError>
where
    T: DeserializeOwned + Validate + TypePath,
{
    let asset = ron::de::from_bytes::<T>(bytes)?;
    asset.validate().map_err(|reason| RonLoaderError::Invalid {
        kind: T::short_type_path(),
        reason,
    })?;
    Ok(asset)
}

/// Asset loader for any validated asset stored as RON.
#[derive(TypePath)]
pub struct RonLoader<T: TypePath> {
    extensions: Vec<&'static str>,
    _phantom: PhantomData<T>,
}

impl<T: TypePath> RonLoader<T> {
    pub fn new(extensions: &[&'static str]) -> Self {
        Self {
            extensions: extensions.to_vec(),
            _phantom: PhantomData,
        }
    }
}

impl<T> AssetLoader for RonLoader<T>
where
    T: Asset + TypePath + DeserializeOwned + Validate + Send + Sync + 'static,
{
    type Asset = T;
    type Settings = ();
    type Error = RonLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        parse(&bytes)
    }

    fn extensions(&self) -> &[&str] {
        &self.extensions
    }
}
