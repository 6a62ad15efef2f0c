use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;
use yew::{Children, Properties};

use crate::components::fade_in::{FadeIn, FadeKind};

/// Which FAQ item is expanded. Opening one closes the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    active: Option<usize>,
}

impl Accordion {
    pub fn toggle(&mut self, index: usize) {
        self.active = if self.active == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer = use_node_ref();

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let max_height = if props.open {
        let height = answer
            .cast::<HtmlElement>()
            .map(|el| el.scroll_height())
            .unwrap_or(0);
        format!("max-height: {}px;", height)
    } else {
        "max-height: 0px;".to_string()
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" ref={answer} style={max_height}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

const FAQS: &[(&str, &str)] = &[
    (
        "How much investment do I need to start a franchise?",
        "Brands on MakeMyFranchise start from under ₹5 lakh for kiosks and service models and go up to ₹50 lakh+ for full-format outlets. Share your budget and we shortlist brands that fit it.",
    ),
    (
        "Do you charge investors for consultation?",
        "No. Consultation, brand shortlisting and meeting coordination are free for investors. Our fees are paid by the franchisor.",
    ),
    (
        "How long does it take to open a franchise outlet?",
        "Most outlets open within 60 to 120 days of signing, depending on location search, fit-out and training schedules.",
    ),
    (
        "Can I run a franchise alongside my job?",
        "Several semi-managed and manager-run models are designed for that. Mention it in your enquiry and we will only suggest brands that allow it.",
    ),
    (
        "What happens after I submit an enquiry?",
        "Your enquiry opens in WhatsApp pre-filled for our team. Once you tap Send, a franchise advisor calls you back, usually the same working day.",
    ),
];

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    let items = FAQS.iter().enumerate().map(|(index, (question, answer))| {
        let on_toggle = {
            let accordion = accordion.clone();
            Callback::from(move |_: ()| {
                let mut next = *accordion;
                next.toggle(index);
                accordion.set(next);
            })
        };
        html! {
            <FaqItem question={*question} open={accordion.is_open(index)} {on_toggle}>
                <p>{*answer}</p>
            </FaqItem>
        }
    });

    html! {
        <section id="faq" class="faq-section">
            <FadeIn kind={FadeKind::Up} class={classes!("section-header")}>
                <h2>{"Frequently Asked Questions"}</h2>
                <p>{"Everything you need to know before you invest"}</p>
            </FadeIn>
            <div class="faq-list">
                { for items }
            </div>
            <style>
                {r#"
                .faq-section {
                    padding: 5rem 1.5rem;
                    max-width: 860px;
                    margin: 0 auto;
                }
                .faq-item {
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    background: #ffffff;
                    transition: box-shadow 0.3s ease;
                }
                .faq-item.active {
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.06);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.2rem 1.5rem;
                    background: none;
                    border: none;
                    font: inherit;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon {
                    font-size: 1.4rem;
                    color: #f97316;
                    margin-left: 1rem;
                }
                .faq-answer {
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    padding: 0 1.5rem;
                }
                .faq-answer p {
                    margin: 0 0 1.2rem;
                    color: #4b5563;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
