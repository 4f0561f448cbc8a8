use crate::components::{CursorEffects, Footer, Gallery, Hero, Messages, ReelPreview};
use dioxus::prelude::*;

/// The single page: every section composed in fixed order under the cursor
/// effect layer.
#[component]
pub fn Home() -> Element {
    use_effect(|| {
        tracing::info!("keepsake page mounted");
    });

    rsx! {
        CursorEffects {
            Hero {}
            Gallery {}
            Messages {}
            ReelPreview {}
            Footer {}
        }
    }
}
