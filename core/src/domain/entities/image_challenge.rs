//! Image challenge entity for the CAPTCHA step of the verification flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::keys;

/// Default number of characters in the rendered challenge text
pub const DEFAULT_TEXT_LENGTH: usize = 4;

/// An issued image challenge
///
/// The challenge id is supplied by the caller and correlates the rendered
/// image with the later validation attempt. The text is stored server-side
/// only; it never travels back to the client except as pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageChallenge {
    /// Caller-supplied correlation id (UUID-shaped)
    pub id: Uuid,

    /// The text rendered into the image
    pub text: String,

    /// Timestamp when the challenge was issued
    pub issued_at: DateTime<Utc>,
}

impl ImageChallenge {
    /// Creates a challenge for the given id and rendered text
    pub fn new(id: Uuid, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            issued_at: Utc::now(),
        }
    }

    /// Cache key this challenge is stored under
    pub fn cache_key(&self) -> String {
        keys::image_challenge_key(&self.id)
    }

    /// Case-sensitive comparison against a submitted answer
    pub fn matches(&self, submitted: &str) -> bool {
        self.text == submitted
    }
}
