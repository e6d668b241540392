//! Site Header Component
//!
//! Sticky header with the salon logo, section navigation and the mobile
//! menu button. Hides while scrolling down.

use dioxus::prelude::*;
use tatinails_core::{PageEvent, Target};

use crate::components::AnchorLink;
use crate::context::{fire, use_page, use_viewport};

/// Sections reachable from the header, in display order
const SECTIONS: [(&str, &str); 5] = [
    ("#services", "Услуги"),
    ("#portfolio", "Портфолио"),
    ("#prices", "Цены"),
    ("#appointment", "Запись"),
    ("#contacts", "Контакты"),
];

#[component]
pub fn SiteHeader() -> Element {
    let page = use_page();
    let viewport = use_viewport();

    let toggle_menu = move |_| {
        fire(page, viewport, PageEvent::MenuButtonClicked);
    };

    rsx! {
        header { class: viewport.class_list(&Target::Header, "header"),
            div { class: "container header__inner",
                AnchorLink { href: "#hero", class: "logo",
                    span { class: "logo__mark", "Tati" }
                    span { class: "logo__text", "Nails" }
                }

                nav { class: viewport.class_list(&Target::Nav, "nav"),
                    ul { class: "nav__list",
                        for (href, label) in SECTIONS {
                            li { key: "{href}", class: "nav__item",
                                AnchorLink {
                                    href: href.to_string(),
                                    class: "nav__link".to_string(),
                                    nav_link: true,
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                button {
                    class: viewport.class_list(&Target::MenuButton, "mobile-menu-btn"),
                    "aria-label": "Меню",
                    onclick: toggle_menu,
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}
