use crate::catalog::REELS;
use dioxus::prelude::*;
use keepsake_core::{Carousel, Direction};

/// Embedded reel carousel. The player frames are opaque third-party embeds.
#[component]
pub fn ReelPreview() -> Element {
    let mut reels = use_signal(|| Carousel::new(REELS.len()).expect("there are reels"));

    let current = reels.read().index();
    let reel = REELS[current];

    rsx! {
        section { class: "reels",
            h2 { class: "section-title", "Our Special Moments 🎥" }

            div { class: "reel-stage",
                div { class: "reel-frame",
                    iframe {
                        class: "reel-embed",
                        src: "{reel.embed_url}",
                        scrolling: "no",
                        allow: "autoplay; clipboard-write; encrypted-media; picture-in-picture; web-share",
                    }
                    div { class: "reel-shade" }
                }

                div { key: "{current}", class: "reel-caption",
                    p { "{reel.caption}" }
                }

                div { class: "reel-nav",
                    button {
                        class: "nav-button",
                        onclick: move |_| {
                            reels.write().advance(Direction::Back);
                        },
                        "←"
                    }
                    button {
                        class: "nav-button",
                        onclick: move |_| {
                            reels.write().advance(Direction::Forward);
                        },
                        "→"
                    }
                }
            }
        }
    }
}
