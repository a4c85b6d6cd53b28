use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::scroll_link::ScrollLink;
use crate::config;
use crate::icons::{Icon, IconSvg};
use crate::nav::{MenuAction, MenuState, NavItem};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or(config::NAV_ITEMS)]
    pub items: &'static [NavItem],
}

/// Fixed top bar: brand, desktop links, and the mobile menu overlay.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu = use_reducer(MenuState::default);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::HEADER_SHADOW_AFTER_PX;

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let activate = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Activate))
    };

    let links = |class: &'static str| -> Html {
        props
            .items
            .iter()
            .map(|item| {
                html! {
                    <ScrollLink
                        key={item.label}
                        to={item.target}
                        class={class}
                        onactivate={activate.clone()}
                    >
                        { item.label }
                    </ScrollLink>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then_some("scrolled"))}>
            <nav class="site-nav">
                <ScrollLink to={config::anchor::HOME} class="brand" onactivate={activate.clone()}>
                    { config::BRAND }
                </ScrollLink>
                <div class="nav-links">
                    { links("nav-link") }
                </div>
                <button
                    class="menu-toggle"
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                    aria-expanded={menu.is_open().to_string()}
                >
                    <IconSvg icon={if menu.is_open() { Icon::X } else { Icon::Menu }} />
                </button>
            </nav>
            {
                if menu.is_open() {
                    html! {
                        <div class="mobile-menu">
                            { links("mobile-link") }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        background: #ffffff;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: box-shadow 0.3s ease;
                    }
                    .site-header.scrolled {
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
                    }
                    .site-nav {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #003366;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .nav-link, .mobile-link {
                        color: #003366;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover, .mobile-link:hover {
                        color: #FF6600;
                    }
                    .menu-toggle {
                        display: none;
                        background: none;
                        border: none;
                        color: #003366;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: none;
                        background: #ffffff;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        animation: menuIn 0.2s ease-out;
                    }
                    .mobile-link {
                        display: block;
                        padding: 0.5rem 1rem;
                    }
                    .mobile-link:hover {
                        background: #F4F4F4;
                    }
                    @keyframes menuIn {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .menu-toggle {
                            display: block;
                        }
                        .mobile-menu {
                            display: block;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
