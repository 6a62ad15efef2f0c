use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::notification::use_notifier;
use crate::config;
use crate::handoff;
use crate::lead::record::LeadRecord;
use crate::lead::schema::{FormVariant, LeadField};
use crate::submission::{DispatchPolicy, SubmissionController, SubmitOutcome, SubmitPhase};

const BUDGETS: &[&str] = &[
    "Under ₹5 Lakh",
    "₹5 – 10 Lakh",
    "₹10 – 25 Lakh",
    "₹25 – 50 Lakh",
    "₹50 Lakh+",
];

const SECTORS: &[&str] = &[
    "Food & Beverage",
    "Retail",
    "Education",
    "Health & Wellness",
    "Beauty & Salon",
    "Automotive",
    "Services",
];

const ROLES: &[&str] = &[
    "Investor",
    "Entrepreneur",
    "Existing Business Owner",
    "Brand Owner / Franchisor",
];

/// Pulls the variant's fields out of the form. Missing inputs read as empty.
fn read_record(form: &HtmlFormElement, variant: FormVariant) -> LeadRecord {
    let data = FormData::new_with_form(form).ok();
    variant
        .fields()
        .into_iter()
        .map(|field| {
            let value = data
                .as_ref()
                .and_then(|data| data.get(field.input_name()).as_string())
                .unwrap_or_default();
            (field.input_name(), value)
        })
        .collect()
}

fn select(name: &'static str, placeholder: &'static str, options: &'static [&'static str]) -> Html {
    html! {
        <select name={name}>
            <option value="" selected=true>{placeholder}</option>
            { for options.iter().map(|option| html! {
                <option value={*option}>{*option}</option>
            }) }
        </select>
    }
}

fn field_input(field: LeadField) -> Html {
    let name = field.input_name();
    match field {
        LeadField::Name => html! {
            <input type="text" name={name} placeholder="Your full name" autocomplete="name" />
        },
        LeadField::Phone | LeadField::Mobile => html! {
            <input type="tel" name={name} placeholder="Mobile number" autocomplete="tel" />
        },
        LeadField::Email => html! {
            <input type="email" name={name} placeholder="Email address" autocomplete="email" />
        },
        LeadField::City => html! {
            <input type="text" name={name} placeholder="Your city" />
        },
        LeadField::Investment | LeadField::Budget => select(name, "Investment budget", BUDGETS),
        LeadField::Sector => select(name, "Preferred sector", SECTORS),
        LeadField::Role => select(name, "I am a…", ROLES),
        LeadField::Message => html! {
            <textarea name={name} rows="4" placeholder="Tell us what you are looking for"></textarea>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub variant: FormVariant,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let variant = props.variant;
    let controller = use_mut_ref(|| SubmissionController::for_variant(variant));
    let form_ref = use_node_ref();
    let rerender = use_force_update();
    let notifier = use_notifier();

    // Back/forward cache brings the page back with the relay POST's busy state.
    {
        let controller = controller.clone();
        let rerender = rerender.clone();
        use_event_with_window("pageshow", move |_: Event| {
            if controller.borrow().phase() == SubmitPhase::Dispatching {
                controller.borrow_mut().complete();
                rerender.force_update();
            }
        });
    }

    let onsubmit = {
        let controller = controller.clone();
        let form_ref = form_ref.clone();
        let rerender = rerender.clone();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                e.prevent_default();
                return;
            };

            let record = read_record(&form, variant);
            let outcome = controller.borrow_mut().submit(&record);
            debug!(
                "{:?} form transitions {:?}",
                variant,
                controller.borrow().last_transitions()
            );
            if outcome.prevents_default() {
                e.prevent_default();
            }

            match outcome {
                SubmitOutcome::Rejected(err) => notifier.error(err.to_string()),
                SubmitOutcome::Ignored => {}
                SubmitOutcome::Dispatch(dispatch) => {
                    handoff::open(&dispatch.deep_link);
                    rerender.force_update();

                    if let Some(feedback) = dispatch.feedback {
                        let controller = controller.clone();
                        let rerender = rerender.clone();
                        let notifier = notifier.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(feedback.delay_ms).await;
                            notifier.success(feedback.message);
                            form.reset();
                            controller.borrow_mut().complete();
                            rerender.force_update();
                        });
                    }
                }
            }
        })
    };

    let (button, busy, native_relay) = {
        let controller = controller.borrow();
        (
            controller.button().clone(),
            controller.phase() == SubmitPhase::Dispatching,
            controller.policy() == DispatchPolicy::NativeRelay,
        )
    };

    let relay_endpoint = if native_relay {
        config::get_relay_endpoint()
    } else {
        None
    };

    let form_class = match variant {
        FormVariant::Contact => "lead-form contact-form",
        FormVariant::Hero => "lead-form hero-form",
    };

    html! {
        <form
            ref={form_ref}
            class={form_class}
            action={relay_endpoint}
            method="POST"
            novalidate=true
            aria-busy={busy.to_string()}
            {onsubmit}
        >
            if native_relay {
                <input type="hidden" name="_subject" value="New Franchise Enquiry – MakeMyFranchise" />
                <input type="hidden" name="_captcha" value="false" />
                <input type="hidden" name="_template" value="table" />
            }
            { for variant.fields().into_iter().map(|field| html! {
                <div class={classes!("form-group", format!("field-{}", field.input_name()))}>
                    { field_input(field) }
                </div>
            }) }
            <button type="submit" class="btn-submit" disabled={button.disabled}>
                { button.label }
            </button>
            <style>
                {r#"
                    .lead-form {
                        display: grid;
                        gap: 0.9rem;
                    }
                    .lead-form input,
                    .lead-form select,
                    .lead-form textarea {
                        width: 100%;
                        padding: 0.8rem 1rem;
                        border: 1px solid #e5e7eb;
                        border-radius: 8px;
                        font: inherit;
                        box-sizing: border-box;
                    }
                    .contact-form {
                        grid-template-columns: 1fr 1fr;
                    }
                    .contact-form .field-message,
                    .contact-form .btn-submit {
                        grid-column: 1 / -1;
                    }
                    .btn-submit {
                        padding: 0.9rem 1.5rem;
                        border: none;
                        border-radius: 8px;
                        background: #f97316;
                        color: #ffffff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .btn-submit:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    @media (max-width: 768px) {
                        .contact-form {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </form>
    }
}
