//! CAPTCHA rendering
//!
//! Asset-free implementation of the core `ChallengeGenerator` seam.

mod generator;
mod glyphs;

pub use generator::CaptchaGenerator;
