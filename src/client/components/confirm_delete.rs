use dioxus::prelude::*;

/// Confirmation modal shown before a record is deleted.
#[component]
pub fn ConfirmDelete(
    name: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "font-bold text-lg", "Supprimer {name} ?" }
                p { class: "py-4", "Cette action est définitive." }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        onclick: move |_| on_cancel.call(()),
                        "Annuler"
                    }
                    button {
                        class: "btn btn-error",
                        onclick: move |_| on_confirm.call(()),
                        "Supprimer"
                    }
                }
            }
        }
    )
}
