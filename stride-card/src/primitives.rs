use dioxus::prelude::*;

// Clip-rect technique; keeps the text in the accessibility tree without
// painting it.
const VISUALLY_HIDDEN_STYLE: &str = "position: absolute; overflow: hidden; clip: rect(0 0 0 0); height: 1px; width: 1px; margin: -1px; padding: 0; border: 0;";

/// Text read by screen readers but never painted
#[component]
pub fn VisuallyHidden(children: Element) -> Element {
    rsx! {
        span { class: "visually-hidden", style: VISUALLY_HIDDEN_STYLE, {children} }
    }
}

/// Fixed-size gap between blocks
#[component]
pub fn Spacer(size: u32) -> Element {
    rsx! {
        div {
            style: "display: block; width: {size}px; min-width: {size}px; height: {size}px; min-height: {size}px;",
            aria_hidden: "true",
        }
    }
}
