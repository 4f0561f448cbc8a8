use crate::catalog::{Moment, MOMENTS};
use dioxus::prelude::*;
use futures::StreamExt;
use gloo_timers::future::{IntervalStream, TimeoutFuture};
use keepsake_core::{Carousel, Direction, ParticleField, Span, SpawnProfile};
use rand::rngs::SmallRng;
use rand::SeedableRng;

// Butterflies rise through the whole section, so only their horizontal
// position matters.
const BUTTERFLY_PROFILE: SpawnProfile = SpawnProfile {
    x: Span::new(0.0, 100.0),
    y: Span::new(0.0, 0.0),
    size: Span::new(10.0, 30.0),
    duration_ms: Span::new(15000.0, 25000.0),
    glyphs: &["🦋"],
};

const BUTTERFLY_SPAWN_EVERY_MS: u32 = 2000;

/// Image carousel with a modal detail view and ambient butterflies.
#[component]
pub fn Gallery() -> Element {
    let mut rng = use_signal(|| SmallRng::from_entropy());
    let mut slides = use_signal(|| Carousel::new(MOMENTS.len()).expect("the gallery has images"));
    let mut butterflies = use_signal(ParticleField::new);

    use_future(move || async move {
        let mut ticks = IntervalStream::new(BUTTERFLY_SPAWN_EVERY_MS);
        let mut now_ms: u64 = 0;
        while ticks.next().await.is_some() {
            now_ms += u64::from(BUTTERFLY_SPAWN_EVERY_MS);
            butterflies.write().sweep(now_ms);
            let butterfly =
                butterflies
                    .write()
                    .spawn(&BUTTERFLY_PROFILE, &mut *rng.write(), now_ms);
            spawn(async move {
                TimeoutFuture::new(butterfly.duration_ms).await;
                butterflies.write().remove(butterfly.id);
            });
        }
    });

    let current = slides.read().index();
    let moment = MOMENTS[current];
    let shown = current + 1;
    let total = MOMENTS.len();

    rsx! {
        section { class: "gallery",
            div { class: "gallery-sky",
                {butterflies.read().iter().map(|butterfly| rsx! {
                    span {
                        key: "{butterfly.id}",
                        class: "butterfly",
                        style: "left: {butterfly.x}vw; font-size: {butterfly.size}px; animation-duration: {butterfly.duration_ms}ms;",
                        "{butterfly.glyph}"
                    }
                })}
            }

            h2 { class: "section-title", "Your Beautiful Moments 🌸" }

            div { class: "gallery-frame",
                img {
                    class: "gallery-photo",
                    src: "{moment.src}",
                    alt: "{moment.alt}",
                    onclick: move |_| slides.write().select_current(),
                }
            }

            div { class: "gallery-nav",
                button {
                    class: "nav-button",
                    onclick: move |_| {
                        slides.write().advance(Direction::Back);
                    },
                    "←"
                }
                span { class: "gallery-count", "{shown} / {total}" }
                button {
                    class: "nav-button",
                    onclick: move |_| {
                        slides.write().advance(Direction::Forward);
                    },
                    "→"
                }
            }

            if let Some(selected) = slides.read().selected() {
                GalleryModal {
                    moment: MOMENTS[selected],
                    on_close: move |_| slides.write().close(),
                }
            }
        }
    }
}

/// Modal detail view over one gallery image. Closing returns to the carousel
/// without moving it.
#[component]
fn GalleryModal(moment: Moment, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div { class: "modal-card", onclick: move |evt| evt.stop_propagation(),
                img { class: "modal-photo", src: "{moment.src}", alt: "{moment.alt}" }
                button {
                    class: "modal-close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                p { class: "modal-compliment", "{moment.compliment}" }
            }
        }
    }
}
