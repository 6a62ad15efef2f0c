use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Error => "notification notification-error",
        }
    }

    fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "#10b981",
            NotificationKind::Error => "#ef4444",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationEvent {
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: u64,
    pub event: NotificationEvent,
    pub phase: ToastPhase,
}

pub enum SlotAction {
    Show(NotificationEvent),
    BeginExit(u64),
    Remove(u64),
}

/// Holds the one toast on screen.
///
/// `show` evicts whatever was there. Actions carrying the id of an evicted
/// or removed toast are ignored, so late timers are harmless.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationSlot {
    current: Option<ActiveToast>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn current(&self) -> Option<&ActiveToast> {
        self.current.as_ref()
    }

    pub fn show(&mut self, event: NotificationEvent) -> u64 {
        self.next_id += 1;
        self.current = Some(ActiveToast {
            id: self.next_id,
            event,
            phase: ToastPhase::Visible,
        });
        self.next_id
    }

    pub fn begin_exit(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id && toast.phase == ToastPhase::Visible => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        if self.current.as_ref().map(|toast| toast.id) == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Applies `action`, returning whether anything changed.
    pub fn apply(&mut self, action: SlotAction) -> bool {
        match action {
            SlotAction::Show(event) => {
                self.show(event);
                true
            }
            SlotAction::BeginExit(id) => self.begin_exit(id),
            SlotAction::Remove(id) => self.remove(id),
        }
    }
}

impl Reducible for NotificationSlot {
    type Action = SlotAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

fn toast_style(kind: NotificationKind, phase: ToastPhase) -> String {
    let exit = match phase {
        ToastPhase::Visible => "",
        ToastPhase::Leaving => "opacity: 0; transform: translateX(100%); transition: all 0.3s ease;",
    };
    format!(
        "position: fixed; bottom: 24px; right: 24px; padding: 16px 24px; border-radius: 8px; \
         display: flex; align-items: center; gap: 8px; z-index: 9999; max-width: 400px; \
         box-shadow: 0 8px 32px rgba(0,0,0,0.15); animation: slideInRight 0.4s ease; \
         font-weight: 500; font-size: 0.95rem; background: {}; color: #ffffff; {}",
        kind.background(),
        exit
    )
}

/// Handle given to components that want to raise a toast.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    show: Callback<NotificationEvent>,
}

impl Notifier {
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        self.show.emit(NotificationEvent {
            message: message.into(),
            kind,
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| Notifier {
        show: Callback::from(|event: NotificationEvent| {
            warn!("No NotificationProvider mounted, dropping toast: {}", event.message);
        }),
    })
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let slot = use_reducer(NotificationSlot::default);

    let notifier = {
        let dispatcher = slot.dispatcher();
        use_state(move || Notifier {
            show: Callback::from(move |event| dispatcher.dispatch(SlotAction::Show(event))),
        })
    };

    // One pending timer per (toast, phase). Replacing the toast drops the old timer.
    let current = slot.current().map(|toast| (toast.id, toast.phase));
    {
        let dispatcher = slot.dispatcher();
        use_effect_with_deps(
            move |current| {
                let timer = (*current).map(|(id, phase)| match phase {
                    ToastPhase::Visible => Timeout::new(config::NOTIFICATION_DISPLAY_MS, move || {
                        dispatcher.dispatch(SlotAction::BeginExit(id));
                    }),
                    ToastPhase::Leaving => Timeout::new(config::NOTIFICATION_EXIT_MS, move || {
                        dispatcher.dispatch(SlotAction::Remove(id));
                    }),
                });
                move || drop(timer)
            },
            current,
        );
    }

    let toast = match slot.current() {
        Some(toast) => {
            let onclick = {
                let dispatcher = slot.dispatcher();
                let id = toast.id;
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(SlotAction::Remove(id)))
            };
            html! {
                <div
                    key={toast.id.to_string()}
                    class={toast.event.kind.class_name()}
                    style={toast_style(toast.event.kind, toast.phase)}
                    role="status"
                >
                    <span>{ &toast.event.message }</span>
                    <button
                        class="notification-close"
                        aria-label="Dismiss notification"
                        {onclick}
                    >
                        {"×"}
                    </button>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            { toast }
            <style>
                {r#"
                    @keyframes slideInRight {
                        from { transform: translateX(100%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                        font-size: 1.2rem;
                        margin-left: 12px;
                    }
                "#}
            </style>
        </ContextProvider<Notifier>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(message: &str) -> NotificationEvent {
        NotificationEvent {
            message: message.to_string(),
            kind: NotificationKind::Error,
        }
    }

    #[test]
    fn test_show_replaces_previous_toast() {
        let mut slot = NotificationSlot::default();
        let first = slot.show(error("first"));
        let second = slot.show(error("second"));

        assert_ne!(first, second);
        let current = slot.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.event.message, "second");
        assert_eq!(current.phase, ToastPhase::Visible);
    }

    #[test]
    fn test_lifecycle_visible_leaving_removed() {
        let mut slot = NotificationSlot::default();
        let id = slot.show(error("oops"));

        assert!(slot.begin_exit(id));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Leaving);
        assert!(!slot.begin_exit(id));

        assert!(slot.remove(id));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_late_timers_after_manual_dismiss_are_noops() {
        let mut slot = NotificationSlot::default();
        let id = slot.show(error("oops"));
        assert!(slot.apply(SlotAction::Remove(id)));

        assert!(!slot.apply(SlotAction::BeginExit(id)));
        assert!(!slot.apply(SlotAction::Remove(id)));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_stale_timer_does_not_touch_newer_toast() {
        let mut slot = NotificationSlot::default();
        let old = slot.show(error("old"));
        let new = slot.show(error("new"));

        assert!(!slot.apply(SlotAction::BeginExit(old)));
        assert!(!slot.apply(SlotAction::Remove(old)));
        let current = slot.current().unwrap();
        assert_eq!(current.id, new);
        assert_eq!(current.phase, ToastPhase::Visible);
    }

    #[test]
    fn test_reducer_keeps_rc_when_nothing_changes() {
        let slot = Rc::new(NotificationSlot::default());
        let reduced = slot.clone().reduce(SlotAction::Remove(42));
        assert!(Rc::ptr_eq(&slot, &reduced));

        let shown = reduced.reduce(SlotAction::Show(error("x")));
        assert_eq!(shown.current().map(|t| t.event.message.as_str()), Some("x"));
    }

    #[test]
    fn test_style_depends_on_kind_and_phase() {
        let success = toast_style(NotificationKind::Success, ToastPhase::Visible);
        let failure = toast_style(NotificationKind::Error, ToastPhase::Visible);
        assert!(success.contains("#10b981"));
        assert!(failure.contains("#ef4444"));
        assert!(!success.contains("opacity: 0"));

        let leaving = toast_style(NotificationKind::Error, ToastPhase::Leaving);
        assert!(leaving.contains("opacity: 0; transform: translateX(100%)"));
    }
}
