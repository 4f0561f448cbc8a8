use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div { class: "not-found",
            div { class: "not-found-card",
                h1 { class: "not-found-code", "404" }
                h2 { class: "not-found-heading", "Page Not Found" }
                p { class: "not-found-text",
                    "There's nothing at /{path} in this little world."
                }
                Link { to: "/", class: "not-found-home", "Back to the page" }
            }
        }
    }
}
