use dioxus::prelude::*;
use keepsake_core::ConfettiPiece;

/// Colours the bursts cycle through.
pub const CONFETTI_COLORS: &[&str] = &["#f472b6", "#c084fc", "#facc15", "#5eead4", "#fb7185"];

/// Full-viewport confetti layer. The owning component clears `pieces` when
/// its celebration window expires.
#[component]
pub fn ConfettiOverlay(pieces: Vec<ConfettiPiece>) -> Element {
    if pieces.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "confetti-layer",
            {pieces.iter().enumerate().map(|(index, piece)| {
                let color = CONFETTI_COLORS[piece.color % CONFETTI_COLORS.len()];
                rsx! {
                    span {
                        key: "{index}",
                        class: "confetti-piece",
                        style: "left: {piece.x}vw; width: {piece.size}px; height: {piece.size}px; background: {color}; animation-duration: {piece.fall_ms}ms; animation-delay: {piece.delay_ms}ms; --drift: {piece.drift}vw;",
                    }
                }
            })}
        }
    }
}
