use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FadeKind {
    #[default]
    Up,
    Left,
    Right,
    /// Children appear one after another.
    Stagger,
}

impl FadeKind {
    fn class_name(self) -> &'static str {
        match self {
            FadeKind::Up => "fade-in",
            FadeKind::Left => "fade-in-left",
            FadeKind::Right => "fade-in-right",
            FadeKind::Stagger => "stagger-children",
        }
    }
}

pub fn fade_classes(kind: FadeKind, visible: bool, extra: &Classes) -> Classes {
    classes!(kind.class_name(), visible.then(|| "visible"), extra.clone())
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub kind: FadeKind,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper that reveals its children the first time they scroll into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if entry.is_intersecting() {
                                visible.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                );

                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(config::FADE_IN_THRESHOLD));
                init.set_root_margin(config::FADE_IN_ROOT_MARGIN);

                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &init,
                )
                .ok();

                if let (Some(observer), Some(element)) = (observer.as_ref(), node.cast::<web_sys::Element>()) {
                    observer.observe(&element);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={fade_classes(props.kind, *visible, &props.class)}
        >
            { for props.children.iter() }
        </div>
    }
}
