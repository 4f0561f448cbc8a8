use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use keepsake_core::{ParticleField, Span, SpawnProfile};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const BURST_LIFE_MS: f32 = 1000.0;

// Position comes from the click itself; only size, lifetime, and glyph are
// sampled.
const BURST_PROFILE: SpawnProfile = SpawnProfile {
    x: Span::new(0.0, 0.0),
    y: Span::new(0.0, 0.0),
    size: Span::new(24.0, 32.0),
    duration_ms: Span::new(BURST_LIFE_MS, BURST_LIFE_MS),
    glyphs: &["❤️", "🌸"],
};

/// Cursor layer: wraps the page content, follows the pointer with a soft
/// trail dot, and pops a glyph where the user clicks.
#[component]
pub fn CursorEffects(children: Element) -> Element {
    let mut rng = use_signal(|| SmallRng::from_entropy());
    let mut pointer = use_signal(|| None::<(f64, f64)>);
    let mut bursts = use_signal(ParticleField::new);

    rsx! {
        div {
            class: "cursor-stage",
            onmousemove: move |evt| {
                let at = evt.client_coordinates();
                pointer.set(Some((at.x - 16.0, at.y - 16.0)));
            },
            onclick: move |evt| {
                let at = evt.client_coordinates();
                let burst = bursts.write().spawn_at(
                    at.x as f32,
                    at.y as f32,
                    &BURST_PROFILE,
                    &mut *rng.write(),
                    0,
                );
                // Each burst removes itself; removal is idempotent, so a
                // burst already gone is a no-op.
                spawn(async move {
                    TimeoutFuture::new(burst.duration_ms).await;
                    bursts.write().remove(burst.id);
                });
            },

            {children}

            if let Some((x, y)) = pointer() {
                div {
                    class: "cursor-dot",
                    style: "transform: translate({x}px, {y}px);",
                }
            }

            {bursts.read().iter().map(|burst| rsx! {
                span {
                    key: "{burst.id}",
                    class: "click-burst",
                    style: "left: {burst.x}px; top: {burst.y}px; font-size: {burst.size}px;",
                    "{burst.glyph}"
                }
            })}
        }
    }
}
