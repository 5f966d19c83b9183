//! `mathcore::settings` submodule provides [`MathSettings`] that tune tolerances and
//! handling of non-finite input.
//!
//! Settings are serialized by using Concise Binary Object Representation format.
//!

use crate::mathcore::{
    floats::EPSILON,
    vectors::{Vector2, Vector3},
};
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};
use thiserror::Error;

/// [`NonFinitePolicy`] enum lists ways of dealing with NaN and infinite components in direction input.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NonFinitePolicy {
    /// Input goes through float arithmetic as is.
    ///
    #[default]
    Propagate,
    /// Input is rejected and zero vector is returned.
    ///
    Reject,
}

/// [`SettingsError`] enum lists all errors that could occur during settings loading and saving.
///
#[derive(Error, Debug)]
pub enum SettingsError {
    /// I/O error while reading/writing.
    ///
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Data is not valid CBOR or has wrong layout.
    ///
    #[error("wrong data format: {0}")]
    Format(#[from] serde_cbor::Error),
    /// Epsilon is negative or not finite.
    ///
    #[error("epsilon should be finite and non-negative, got {0}")]
    InvalidEpsilon(f32),
}

/// [`MathSettings`] struct carries configuration of tolerance-dependent helpers.
///
/// If you do not want to tweak settings, just pass `..Default::default()` to fill up remaining options.
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::settings::{MathSettings, NonFinitePolicy};
/// let settings: MathSettings = MathSettings {
///     non_finite: NonFinitePolicy::Reject,
///     ..MathSettings::default()
/// };
/// assert!(settings.validate().is_ok());
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MathSettings {
    /// Tolerance for approximate comparisons.
    ///
    pub epsilon: f32,
    /// How direction helpers treat NaN and infinite input.
    ///
    pub non_finite: NonFinitePolicy,
}
impl Default for MathSettings {
    fn default() -> Self {
        MathSettings {
            epsilon: EPSILON,
            non_finite: NonFinitePolicy::default(),
        }
    }
}
impl MathSettings {
    /// Checks that settings are usable.
    ///
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(SettingsError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }

    /// Restores settings from reader.
    ///
    /// Missing fields are filled with default values.
    ///
    pub fn from_reader(reader: impl Read) -> Result<Self, SettingsError> {
        let settings: MathSettings = serde_cbor::from_reader(reader)?;
        settings.validate()?;
        Ok(settings)
    }
    /// Saves settings to writer.
    ///
    pub fn to_writer(&self, writer: impl Write) -> Result<(), SettingsError> {
        self.validate()?;
        serde_cbor::to_writer(writer, self)?;
        Ok(())
    }

    /// Restores settings from file.
    ///
    /// This function returns an error if file does not exist or if data is not recoverable.
    ///
    pub fn from_file(filename: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let settings: MathSettings = Self::from_reader(File::open(filename.as_ref())?)?;
        info!(
            "loaded math settings from {}: {settings:?}",
            filename.as_ref().display()
        );
        Ok(settings)
    }
    /// Saves settings to file.
    ///
    /// This function will create a file if it does not exist, and will truncate it if it does.
    ///
    pub fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), SettingsError> {
        self.to_writer(File::create(filename)?)
    }

    /// Compares two-dimensional vectors with configured epsilon.
    ///
    pub fn approx_eq2(&self, a: Vector2, b: Vector2) -> bool {
        a.approx_eq(b, self.epsilon)
    }
    /// Compares three-dimensional vectors with configured epsilon.
    ///
    pub fn approx_eq3(&self, a: Vector3, b: Vector3) -> bool {
        a.approx_eq(b, self.epsilon)
    }
}
