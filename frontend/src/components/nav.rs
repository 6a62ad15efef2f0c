use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub children: &'static [NavLink],
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        href: "#home",
        children: &[],
    },
    NavItem {
        label: "Franchises",
        href: "#sectors",
        children: &[
            NavLink { label: "Food & Beverage", href: "#sectors" },
            NavLink { label: "Retail", href: "#sectors" },
            NavLink { label: "Education", href: "#sectors" },
            NavLink { label: "Health & Wellness", href: "#sectors" },
        ],
    },
    NavItem {
        label: "How It Works",
        href: "#process",
        children: &[],
    },
    NavItem {
        label: "Resources",
        href: "#faq",
        children: &[
            NavLink { label: "FAQ", href: "#faq" },
            NavLink { label: "Why Us", href: "#why-us" },
        ],
    },
    NavItem {
        label: "Contact",
        href: "#contact",
        children: &[],
    },
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::STICKY_HEADER_OFFSET
}

pub fn is_mobile(width: f64) -> bool {
    width <= config::MOBILE_BREAKPOINT
}

/// Open/closed state of the mobile menu and its dropdowns.
///
/// At most one dropdown is open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub menu_open: bool,
    pub open_dropdown: Option<usize>,
}

impl MenuState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_dropdown(&mut self, index: usize) {
        self.open_dropdown = if self.open_dropdown == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_dropdown_open(&self, index: usize) -> bool {
        self.open_dropdown == Some(index)
    }

    pub fn close_all(&mut self) {
        self.menu_open = false;
        self.open_dropdown = None;
    }

    pub fn on_resize(&mut self, width: f64) {
        if !is_mobile(width) {
            self.close_all();
        }
    }

    pub fn on_document_click(&mut self, in_dropdown: bool, in_navbar: bool, width: f64) {
        if is_mobile(width) {
            if !in_navbar {
                self.menu_open = false;
            }
        } else if !in_dropdown {
            self.open_dropdown = None;
        }
    }
}

fn window_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

fn closest_exists(target: Option<web_sys::EventTarget>, selector: &str) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled_state = use_state(|| false);
    let menu = use_state(MenuState::default);

    {
        let is_scrolled_state = is_scrolled_state.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(scroll_y) = window().and_then(|w| w.scroll_y().ok()) {
                is_scrolled_state.set(is_scrolled(scroll_y));
            }
        });
    }

    {
        let menu = menu.clone();
        use_event_with_window("resize", move |_: Event| {
            let mut next = *menu;
            next.on_resize(window_width());
            if next != *menu {
                menu.set(next);
            }
        });
    }

    {
        let menu = menu.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let in_dropdown = closest_exists(e.target(), ".has-dropdown");
            let in_navbar = closest_exists(e.target(), ".navbar");
            let mut next = *menu;
            next.on_document_click(in_dropdown, in_navbar, window_width());
            if next != *menu {
                menu.set(next);
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle_menu();
            menu.set(next);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.close_all();
            menu.set(next);
        })
    };

    let items = NAV_ITEMS.iter().enumerate().map(|(index, item)| {
        if item.children.is_empty() {
            return html! {
                <li>
                    <a href={item.href} onclick={close_menu.clone()}>{item.label}</a>
                </li>
            };
        }

        let toggle_dropdown = {
            let menu = menu.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let mut next = *menu;
                next.toggle_dropdown(index);
                menu.set(next);
            })
        };

        html! {
            <li class={classes!("has-dropdown", menu.is_dropdown_open(index).then(|| "open"))}>
                <a href={item.href} onclick={toggle_dropdown}>
                    {item.label}
                    <span class="caret">{"▾"}</span>
                </a>
                <ul class="dropdown">
                    { for item.children.iter().map(|child| html! {
                        <li>
                            <a href={child.href} onclick={close_menu.clone()}>{child.label}</a>
                        </li>
                    }) }
                </ul>
            </li>
        }
    });

    html! {
        <header id="header" class={classes!("site-header", (*is_scrolled_state).then(|| "scrolled"))}>
            <nav class="navbar">
                <a href="#home" class="nav-logo" onclick={close_menu.clone()}>
                    {config::BRAND_NAME}
                </a>
                <ul id="navLinks" class={classes!("nav-links", menu.menu_open.then(|| "open"))}>
                    { for items }
                </ul>
                <button
                    id="mobileToggle"
                    class={classes!("mobile-toggle", menu.menu_open.then(|| "active"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 1000;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: #ffffff;
                        box-shadow: 0 2px 16px rgba(0, 0, 0, 0.08);
                    }
                    .navbar {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: 800;
                        font-size: 1.4rem;
                        color: #f97316;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-links a {
                        color: #1f2937;
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .has-dropdown {
                        position: relative;
                    }
                    .dropdown {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        min-width: 200px;
                        background: #ffffff;
                        border-radius: 8px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                        list-style: none;
                        padding: 0.5rem 0;
                    }
                    .dropdown li a {
                        display: block;
                        padding: 0.5rem 1rem;
                    }
                    .has-dropdown.open .dropdown {
                        display: block;
                    }
                    .mobile-toggle {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .mobile-toggle span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #1f2937;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .mobile-toggle.active span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }
                    .mobile-toggle.active span:nth-child(2) {
                        opacity: 0;
                    }
                    .mobile-toggle.active span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }
                    @media (max-width: 768px) {
                        .mobile-toggle {
                            display: block;
                        }
                        .nav-links {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            width: 100%;
                            flex-direction: column;
                            background: #ffffff;
                            padding: 1rem 1.5rem;
                        }
                        .nav-links.open {
                            display: flex;
                        }
                        .dropdown {
                            position: static;
                            box-shadow: none;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticky_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_toggle_dropdown_twice_restores_state() {
        let mut menu = MenuState::default();
        menu.toggle_dropdown(1);
        menu.toggle_dropdown(1);
        assert!(!menu.is_dropdown_open(1));

        let mut menu = MenuState {
            menu_open: true,
            open_dropdown: Some(3),
        };
        menu.toggle_dropdown(3);
        menu.toggle_dropdown(3);
        assert!(menu.is_dropdown_open(3));
        assert!(menu.menu_open);
    }

    #[test]
    fn test_opening_dropdown_closes_others() {
        let mut menu = MenuState::default();
        menu.toggle_dropdown(1);
        menu.toggle_dropdown(3);
        assert!(!menu.is_dropdown_open(1));
        assert!(menu.is_dropdown_open(3));
    }

    #[test]
    fn test_toggle_menu() {
        let mut menu = MenuState::default();
        menu.toggle_menu();
        assert!(menu.menu_open);
        menu.toggle_menu();
        assert!(!menu.menu_open);
    }

    #[test]
    fn test_resize_to_desktop_closes_everything() {
        let mut menu = MenuState {
            menu_open: true,
            open_dropdown: Some(1),
        };
        menu.on_resize(700.0);
        assert_eq!(menu, MenuState { menu_open: true, open_dropdown: Some(1) });
        menu.on_resize(1024.0);
        assert_eq!(menu, MenuState::default());
    }

    #[test]
    fn test_outside_click_on_desktop_closes_dropdowns() {
        let mut menu = MenuState {
            menu_open: false,
            open_dropdown: Some(1),
        };
        menu.on_document_click(true, true, 1280.0);
        assert!(menu.is_dropdown_open(1));
        menu.on_document_click(false, true, 1280.0);
        assert_eq!(menu.open_dropdown, None);
    }

    #[test]
    fn test_outside_click_on_mobile_closes_menu_only() {
        let mut menu = MenuState {
            menu_open: true,
            open_dropdown: Some(1),
        };
        menu.on_document_click(false, true, 400.0);
        assert!(menu.menu_open);
        menu.on_document_click(false, false, 400.0);
        assert!(!menu.menu_open);
        assert!(menu.is_dropdown_open(1));
    }

    #[test]
    fn test_dropdown_items_have_children() {
        let with_children = NAV_ITEMS.iter().filter(|item| !item.children.is_empty()).count();
        assert_eq!(with_children, 2);
    }
}
