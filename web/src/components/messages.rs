use crate::catalog::NOTES;
use dioxus::prelude::*;
use futures::StreamExt;
use gloo_timers::future::{IntervalStream, TimeoutFuture};
use keepsake_core::{Carousel, Direction, ParticleField, Span, SpawnProfile, Typewriter};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const SPARKLE_PROFILE: SpawnProfile = SpawnProfile {
    x: Span::new(0.0, 100.0),
    y: Span::new(0.0, 0.0),
    size: Span::new(10.0, 30.0),
    duration_ms: Span::new(2000.0, 5000.0),
    glyphs: &["❤️", "🌸", "✨"],
};

const SPARKLE_SPAWN_EVERY_MS: u32 = 300;
const NOTE_ROTATE_EVERY_MS: u32 = 5000;
const TYPE_TICK_MS: u32 = 40;

/// Rotating message ticker with a typewriter reveal and rising particles.
#[component]
pub fn Messages() -> Element {
    let mut rng = use_signal(|| SmallRng::from_entropy());
    let mut ticker = use_signal(|| Carousel::new(NOTES.len()).expect("there are notes"));
    let mut typer = use_signal(|| Typewriter::new(NOTES[0].text));
    let mut sparkles = use_signal(ParticleField::new);

    // Typewriter cadence. Writes only while a line is still coming out, so
    // finished lines don't rerender the section every tick.
    use_future(move || async move {
        let mut ticks = IntervalStream::new(TYPE_TICK_MS);
        while ticks.next().await.is_some() {
            if !typer.peek().is_done() {
                typer.write().tick();
            }
        }
    });

    // Ticker rotation.
    use_future(move || async move {
        let mut ticks = IntervalStream::new(NOTE_ROTATE_EVERY_MS);
        while ticks.next().await.is_some() {
            let next = ticker.write().advance(Direction::Forward);
            typer.write().restart(NOTES[next].text);
        }
    });

    // Ambient particles, on a much denser cadence than the other sections.
    use_future(move || async move {
        let mut ticks = IntervalStream::new(SPARKLE_SPAWN_EVERY_MS);
        let mut now_ms: u64 = 0;
        while ticks.next().await.is_some() {
            now_ms += u64::from(SPARKLE_SPAWN_EVERY_MS);
            sparkles.write().sweep(now_ms);
            let sparkle = sparkles.write().spawn(&SPARKLE_PROFILE, &mut *rng.write(), now_ms);
            spawn(async move {
                TimeoutFuture::new(sparkle.duration_ms).await;
                sparkles.write().remove(sparkle.id);
            });
        }
    });

    let current = ticker.read().index();
    let typed = typer.read().visible().to_string();
    let emoji = NOTES[current].emoji;

    rsx! {
        section { class: "messages",
            {sparkles.read().iter().map(|sparkle| rsx! {
                span {
                    key: "{sparkle.id}",
                    class: "message-sparkle",
                    style: "left: {sparkle.x}vw; font-size: {sparkle.size}px; animation-duration: {sparkle.duration_ms}ms;",
                    "{sparkle.glyph}"
                }
            })}

            div { class: "message-card",
                p { class: "message-text",
                    "{typed}"
                    span { class: "caret", "|" }
                }
                div { key: "{current}", class: "message-emoji", "{emoji}" }
            }
        }
    }
}
