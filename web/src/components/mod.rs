mod confetti;
mod cursor_effects;
mod footer;
mod gallery;
mod hero;
mod messages;
mod reel_preview;

pub use confetti::{ConfettiOverlay, CONFETTI_COLORS};
pub use cursor_effects::CursorEffects;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use messages::Messages;
pub use reel_preview::ReelPreview;
