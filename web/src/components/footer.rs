use crate::components::{ConfettiOverlay, CONFETTI_COLORS};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use keepsake_core::{scatter, Celebration, ConfettiPiece, BURST_PIECES};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const CHEER_MS: u32 = 3000;

/// Closing section with one click-triggered celebration. Clicking again
/// while it's running restarts the window.
#[component]
pub fn Footer() -> Element {
    let mut rng = use_signal(|| SmallRng::from_entropy());
    let mut cheer = use_signal(Celebration::new);
    let mut confetti = use_signal(Vec::<ConfettiPiece>::new);

    let on_celebrate = move |_| {
        let epoch = cheer.write().trigger();
        confetti.set(scatter(BURST_PIECES, CONFETTI_COLORS.len(), &mut *rng.write()));
        tracing::debug!(epoch, "footer celebration started");
        spawn(async move {
            TimeoutFuture::new(CHEER_MS).await;
            if cheer.write().expire(epoch) {
                confetti.write().clear();
            }
        });
    };

    rsx! {
        footer { class: "footer",
            ConfettiOverlay { pieces: confetti() }

            div { class: "footer-body",
                p { class: "footer-line", "Just wanted you to know... you're unforgettable." }
                button { class: "footer-button", onclick: on_celebrate, "Click Me" }
            }

            if cheer.read().is_active() {
                div { class: "footer-bloom", "🌷" }
                div { class: "footer-quote",
                    p { "🌷 A website for the prettiest soul" }
                }
            }

            span { class: "drift drift-a", "✨" }
            span { class: "drift drift-b", "💖" }
        }
    }
}
