//! Sprite frame-list descriptions.
//!
//! A sprite is either a single still image or an ordered list of frames
//! flipped through at a fixed interval. The typed [`SpriteSpec`] record is the
//! core representation; the legacy comma-string form (`"a.png,b.png,100"`) is
//! accepted at the configuration edge through [`FromStr`] and through serde.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SpecError;

/// Typed description of one sprite's image frames.
///
/// An `interval` of `0` means "no animation, always frame 0"; multi-frame
/// sprites carry the per-frame display interval in the same time unit the
/// host uses for event times.
///
/// # Examples
///
/// ```
/// use animstage_core::anim::SpriteSpec;
///
/// let still = SpriteSpec::single("hero.png");
/// assert_eq!(still.interval, 0.0);
///
/// // The comma-string adapter: sources first, trailing interval last.
/// let walking: SpriteSpec = "walk0.png,walk1.png,100".parse().unwrap();
/// assert_eq!(walking.frames.len(), 2);
/// assert_eq!(walking.interval, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpriteSpecRepr")]
pub struct SpriteSpec {
	/// Image source identifiers, one per frame, in display order
	pub frames: Vec<String>,
	/// Per-frame display interval; `0` disables frame cycling
	pub interval: f64,
}

impl SpriteSpec {
	/// Creates a multi-frame sprite from sources and an interval.
	pub fn new<S: Into<String>>(frames: Vec<S>, interval: f64) -> Self {
		Self {
			frames: frames.into_iter().map(Into::into).collect(),
			interval,
		}
	}

	/// Creates a single still image with interval `0`.
	pub fn single<S: Into<String>>(source: S) -> Self {
		Self {
			frames: vec![source.into()],
			interval: 0.0,
		}
	}

	/// Returns `true` when the sprite cycles through more than one frame.
	pub fn is_animated(&self) -> bool {
		self.frames.len() > 1 && self.interval != 0.0
	}
}

impl FromStr for SpriteSpec {
	type Err = SpecError;

	/// Parses the packed comma-string form.
	///
	/// A string without commas names a single still image. With commas, every
	/// element but the last is an image source and the last must be the
	/// numeric frame interval.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if !s.contains(',') {
			return Ok(Self::single(s.trim()));
		}

		let items: Vec<&str> = s.split(',').map(str::trim).collect();
		let Some((tail, sources)) = items.split_last() else {
			return Err(SpecError::NoSources {
				spec: s.to_string(),
			});
		};

		let interval: f64 = tail.parse().map_err(|_| SpecError::BadInterval {
			spec: s.to_string(),
			tail: (*tail).to_string(),
		})?;

		if sources.is_empty() || sources.iter().any(|src| src.is_empty()) {
			return Err(SpecError::NoSources {
				spec: s.to_string(),
			});
		}

		Ok(Self::new(sources.to_vec(), interval))
	}
}

impl fmt::Display for SpriteSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.frames.len() == 1 && self.interval == 0.0 {
			write!(f, "{}", self.frames[0])
		} else {
			write!(f, "{},{}", self.frames.join(","), self.interval)
		}
	}
}

/// Accepts either the packed string or the typed record when deserializing.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpriteSpecRepr {
	Packed(String),
	Record {
		frames: Vec<String>,
		#[serde(default)]
		interval: f64,
	},
}

impl TryFrom<SpriteSpecRepr> for SpriteSpec {
	type Error = SpecError;

	fn try_from(repr: SpriteSpecRepr) -> Result<Self, Self::Error> {
		match repr {
			SpriteSpecRepr::Packed(s) => s.parse(),
			SpriteSpecRepr::Record {
				frames,
				interval,
			} => Ok(Self {
				frames,
				interval,
			}),
		}
	}
}
