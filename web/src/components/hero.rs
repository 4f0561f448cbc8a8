use crate::components::{ConfettiOverlay, CONFETTI_COLORS};
use dioxus::prelude::*;
use futures::StreamExt;
use gloo_timers::future::{IntervalStream, TimeoutFuture};
use keepsake_core::{
    scatter, CatchGame, CatchOutcome, Celebration, ConfettiPiece, ParticleField, ParticleId,
    Reveal, RingHunt, Span, SpawnProfile, BURST_PIECES,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const HEART_PROFILE: SpawnProfile = SpawnProfile {
    // Keep hearts within 10-90% of the panel.
    x: Span::new(10.0, 90.0),
    y: Span::new(10.0, 90.0),
    size: Span::new(20.0, 40.0),
    duration_ms: Span::new(2000.0, 5000.0),
    glyphs: &["🖤", "💝", "💖", "💗", "💓", "💕", "💘", "💞"],
};

const HEART_SPAWN_EVERY_MS: u32 = 2000;
const CATCH_GOAL: u32 = 3;
const CATCH_CHEER_MS: u32 = 3000;
const RING_BOXES: usize = 5;
const RING_CHEER_MS: u32 = 5000;

/// Landing section: greeting panel on the left, the two mini-games on the
/// right.
#[component]
pub fn Hero() -> Element {
    let mut rng = use_signal(|| SmallRng::from_entropy());
    let mut hearts = use_signal(ParticleField::new);
    let mut catch = use_signal(|| CatchGame::new(CATCH_GOAL).expect("goal is nonzero"));
    let mut hunt = use_signal(|| {
        let mut seed_rng = SmallRng::from_entropy();
        RingHunt::new(RING_BOXES, &mut seed_rng).expect("there is at least one box")
    });
    let mut catch_cheer = use_signal(Celebration::new);
    let mut ring_cheer = use_signal(Celebration::new);
    let mut confetti = use_signal(Vec::<ConfettiPiece>::new);

    // Ambient hearts: spawn on a fixed cadence, sweep as the leak bound, and
    // let each heart remove itself when its lifetime ends.
    use_future(move || async move {
        let mut ticks = IntervalStream::new(HEART_SPAWN_EVERY_MS);
        let mut now_ms: u64 = 0;
        while ticks.next().await.is_some() {
            now_ms += u64::from(HEART_SPAWN_EVERY_MS);
            hearts.write().sweep(now_ms);
            let heart = hearts.write().spawn(&HEART_PROFILE, &mut *rng.write(), now_ms);
            spawn(async move {
                TimeoutFuture::new(heart.duration_ms).await;
                hearts.write().remove(heart.id);
            });
        }
    });

    let mut on_heart = move |id: ParticleId| {
        // The heart goes immediately; a heart that is already gone cannot be
        // counted twice.
        if !hearts.write().remove(id) {
            return;
        }
        let outcome = catch.write().catch();
        match outcome {
            CatchOutcome::GoalReached => {
                let epoch = catch_cheer.write().trigger();
                confetti.set(scatter(BURST_PIECES, CONFETTI_COLORS.len(), &mut *rng.write()));
                tracing::debug!(epoch, "all hearts caught");
                spawn(async move {
                    TimeoutFuture::new(CATCH_CHEER_MS).await;
                    if catch_cheer.write().expire(epoch) {
                        catch.write().reset();
                        if !ring_cheer.peek().is_active() {
                            confetti.write().clear();
                        }
                    }
                });
            }
            CatchOutcome::Progress | CatchOutcome::AlreadyWon => {}
        }
    };

    let mut on_box = move |index: usize| {
        let reveal = hunt.write().reveal(index);
        if let Ok(Reveal::Ring) = reveal {
            let epoch = ring_cheer.write().trigger();
            confetti.set(scatter(BURST_PIECES, CONFETTI_COLORS.len(), &mut *rng.write()));
            tracing::debug!(epoch, index, "ring found");
            spawn(async move {
                TimeoutFuture::new(RING_CHEER_MS).await;
                if ring_cheer.write().expire(epoch) {
                    hunt.write().reset(&mut *rng.write());
                    if !catch_cheer.peek().is_active() {
                        confetti.write().clear();
                    }
                }
            });
        }
    };

    let caught = catch.read().caught();

    rsx! {
        section { class: "hero",
            ConfettiOverlay { pieces: confetti() }

            div { class: "hero-grid",
                div { class: "hero-panel",
                    h1 { class: "hero-title", "Hey Sainu 🌸" }
                    p { class: "hero-tagline", "I built you a little world... wanna explore it?" }
                }

                div { class: "hero-games",
                    div { class: "game-panel heart-game",
                        {hearts.read().iter().map(|heart| {
                            let id = heart.id;
                            rsx! {
                                button {
                                    key: "{heart.id}",
                                    class: "floating-heart",
                                    style: "left: {heart.x}%; top: {heart.y}%; font-size: {heart.size}px; animation-duration: {heart.duration_ms}ms;",
                                    onclick: move |_| on_heart(id),
                                    "{heart.glyph}"
                                }
                            }
                        })}

                        if catch_cheer.read().is_active() {
                            div { class: "game-overlay",
                                p { "You caught my heart 💖" }
                            }
                        }

                        div { class: "game-instructions",
                            p { class: "game-goal", "Catch {CATCH_GOAL} hearts to win!" }
                            p { class: "game-score", "Hearts caught: {caught}/{CATCH_GOAL}" }
                        }
                    }

                    div { class: "game-panel ring-game",
                        div { class: "ring-boxes",
                            {hunt.read().boxes().iter().enumerate().map(|(index, slot)| {
                                let face = if slot.revealed {
                                    if slot.has_ring { "💍" } else { "❌" }
                                } else {
                                    "🎁"
                                };
                                let state = if slot.revealed {
                                    if slot.has_ring { "ring-box revealed winner" } else { "ring-box revealed" }
                                } else {
                                    "ring-box"
                                };
                                rsx! {
                                    button {
                                        key: "{index}",
                                        class: "{state}",
                                        onclick: move |_| on_box(index),
                                        "{face}"
                                    }
                                }
                            })}
                        }

                        div { class: "game-instructions",
                            p { class: "game-goal", "Find the ring 💍" }
                        }

                        if ring_cheer.read().is_active() {
                            div { class: "game-overlay",
                                p { class: "proposal-line", "Will you be mine forever? 💍" }
                                p { class: "proposal-sub", "You found my heart and my ring ✨" }
                            }
                        }
                    }
                }
            }
        }
    }
}
