//! Types produced by the challenge generator.

/// Challenge text together with its rendered image.
#[derive(Debug, Clone)]
pub struct GeneratedChallenge {
    /// The text the user must read off the image
    pub text: String,

    /// JPEG-encoded image bytes
    pub image: Vec<u8>,
}
