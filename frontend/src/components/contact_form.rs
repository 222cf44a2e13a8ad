use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

// Shown when the request itself never completes (network down, server gone).
const REQUEST_FAILED_MESSAGE: &str =
    "Error al enviar el mensaje. Por favor, inténtalo de nuevo.";

#[derive(Clone, PartialEq, Default, Serialize)]
struct ContactDraft {
    name: String,
    email: String,
    phone: String,
    company: String,
    service: String,
    message: String,
}

#[derive(Deserialize)]
struct SuccessResponse {
    message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Clone, PartialEq)]
enum SubmitNote {
    Confirmation(String),
    Problem(String),
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Service identifier pushed into the draft when a package CTA was used.
    #[prop_or_default]
    pub preselected_service: Option<String>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_state(ContactDraft::default);
    let note = use_state(|| None::<SubmitNote>);
    let is_submitting = use_state(|| false);

    {
        let draft = draft.clone();
        use_effect_with_deps(
            move |preselected: &Option<String>| {
                if let Some(service) = preselected.clone() {
                    let mut next = (*draft).clone();
                    next.service = service;
                    draft.set(next);
                }
                || ()
            },
            props.preselected_service.clone(),
        );
    }

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.name = input.value();
            draft.set(next);
        })
    };

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.email = input.value();
            draft.set(next);
        })
    };

    let on_phone = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.phone = input.value();
            draft.set(next);
        })
    };

    let on_company = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.company = input.value();
            draft.set(next);
        })
    };

    let on_service = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.service = select.value();
            draft.set(next);
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.message = area.value();
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let note = note.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = draft.clone();
            let note = note.clone();
            let is_submitting = is_submitting.clone();
            let payload = (*draft).clone();

            is_submitting.set(true);
            note.set(None);

            spawn_local(async move {
                match Request::post(&format!("{}/api/contact", config::get_backend_url()))
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        match response.json::<SuccessResponse>().await {
                            Ok(body) => {
                                note.set(Some(SubmitNote::Confirmation(body.message)));
                                draft.set(ContactDraft::default());
                            }
                            Err(_) => {
                                note.set(Some(SubmitNote::Problem(
                                    REQUEST_FAILED_MESSAGE.to_string(),
                                )));
                            }
                        }
                    }
                    Ok(response) => {
                        let message = response
                            .json::<ErrorResponse>()
                            .await
                            .map(|body| body.error)
                            .unwrap_or_else(|_| REQUEST_FAILED_MESSAGE.to_string());
                        note.set(Some(SubmitNote::Problem(message)));
                    }
                    Err(_) => {
                        note.set(Some(SubmitNote::Problem(
                            REQUEST_FAILED_MESSAGE.to_string(),
                        )));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Nombre *"
                    value={draft.name.clone()}
                    oninput={on_name}
                />
                <input
                    type="email"
                    placeholder="Email *"
                    value={draft.email.clone()}
                    oninput={on_email}
                />
            </div>
            <div class="form-row">
                <input
                    type="tel"
                    placeholder="Teléfono *"
                    value={draft.phone.clone()}
                    oninput={on_phone}
                />
                <input
                    type="text"
                    placeholder="Empresa (opcional)"
                    value={draft.company.clone()}
                    oninput={on_company}
                />
            </div>
            <select value={draft.service.clone()} onchange={on_service}>
                <option value="" selected={draft.service.is_empty()}>
                    {"¿Qué servicio te interesa?"}
                </option>
                <option value="empresarial" selected={draft.service == "empresarial"}>
                    {"Presencia Digital Profesional"}
                </option>
                <option value="ecommerce" selected={draft.service == "ecommerce"}>
                    {"Tienda Online Ilimitada"}
                </option>
                <option value="asesoria" selected={draft.service == "asesoria"}>
                    {"Aún no lo sé, quiero asesoría"}
                </option>
            </select>
            <textarea
                placeholder="Cuéntanos sobre tu proyecto *"
                rows="5"
                value={draft.message.clone()}
                oninput={on_message}
            />
            <button type="submit" disabled={*is_submitting}>
                { if *is_submitting { "Enviando..." } else { "Solicitar Cotización" } }
            </button>
            {
                match &*note {
                    Some(SubmitNote::Confirmation(message)) => html! {
                        <p class="form-note success">{message.clone()}</p>
                    },
                    Some(SubmitNote::Problem(message)) => html! {
                        <p class="form-note problem">{message.clone()}</p>
                    },
                    None => html! {},
                }
            }
        </form>
    }
}
