use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::vm::menu_entries;

#[component]
pub fn HomeView() -> Element {
    let entries = menu_entries().into_iter().map(|entry| {
        let class = if entry.available {
            "menu-entry"
        } else {
            "menu-entry menu-entry--soon"
        };
        rsx! {
            li { key: "{entry.title}", class: "{class}",
                h3 { "{entry.title}" }
                p { "{entry.description}" }
                if entry.available {
                    Link { class: "btn btn-primary", to: Route::Quiz {}, "Play" }
                } else {
                    span { class: "badge", "Coming soon" }
                }
            }
        }
    });

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Tennis Trivia" }
                p { class: "view-subtitle", "Pick a quiz." }
            }
            ul { class: "menu", {entries} }
        }
    }
}
