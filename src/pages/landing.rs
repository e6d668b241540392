//! Landing page - the whole salon site on one scrolling page.
//!
//! Header, hero, services, portfolio with lightbox, prices, booking form and
//! contacts. Cards marked `data-reveal` fade in as they scroll into view.

use dioxus::prelude::*;
use tatinails_core::Target;

use crate::components::{AnchorLink, BookingFormView, Lightbox, PortfolioGallery, SiteHeader};
use crate::context::{use_viewport, DomViewport};

/// (id, title, description)
const SERVICES: [(&str, &str, &str); 4] = [
    ("service-manicure", "Маникюр", "Классический, аппаратный и комбинированный маникюр с покрытием гель-лаком."),
    ("service-pedicure", "Педикюр", "Уход за стопами и ногтями, покрытие и SPA-процедуры."),
    ("service-extension", "Наращивание", "Моделирование гелем и акригелем любой длины и формы."),
    ("service-design", "Дизайн", "Френч, градиент, стемпинг, ручная роспись и втирки."),
];

/// (service, price)
const PRICES: [(&str, &str); 6] = [
    ("Маникюр без покрытия", "800 ₽"),
    ("Маникюр + гель-лак", "1 800 ₽"),
    ("Педикюр + гель-лак", "2 300 ₽"),
    ("Наращивание", "от 2 500 ₽"),
    ("Дизайн (1 ноготь)", "от 50 ₽"),
    ("Снятие покрытия", "300 ₽"),
];

/// Card that fades in once scrolled into view
#[component]
fn RevealCard(id: String, class: String, children: Element) -> Element {
    let viewport: DomViewport = use_viewport();
    let target = Target::Reveal(id.clone());

    rsx! {
        div {
            id: "{id}",
            "data-reveal": "true",
            class: viewport.class_list(&target, &class),
            {children}
        }
    }
}

#[component]
pub fn Landing() -> Element {
    rsx! {
        SiteHeader {}

        main {
            section { id: "hero", class: "hero",
                div { class: "container hero__content",
                    h1 { class: "hero__title", "Красота в каждой детали" }
                    p { class: "hero__subtitle",
                        "Студия ногтевого сервиса Tati Nails: аккуратный маникюр, стойкое покрытие и дизайн на любой вкус."
                    }
                    AnchorLink { href: "#appointment", class: "btn btn--primary", "Записаться" }
                }
            }

            section { id: "services", class: "section services",
                div { class: "container",
                    h2 { class: "section__title", "Услуги" }
                    div { class: "services-grid",
                        for (id, title, description) in SERVICES {
                            RevealCard { key: "{id}", id: id.to_string(), class: "service-card".to_string(),
                                h3 { class: "service-card__title", "{title}" }
                                p { class: "service-card__text", "{description}" }
                            }
                        }
                    }
                }
            }

            section { id: "portfolio", class: "section portfolio",
                div { class: "container",
                    h2 { class: "section__title", "Портфолио" }
                    PortfolioGallery {}
                }
            }

            section { id: "prices", class: "section prices",
                div { class: "container",
                    h2 { class: "section__title", "Цены" }
                    ul { class: "price-list",
                        for (service, price) in PRICES {
                            li { key: "{service}", class: "price-list__item",
                                span { class: "price-list__name", "{service}" }
                                span { class: "price-list__price", "{price}" }
                            }
                        }
                    }
                }
            }

            section { id: "appointment", class: "section appointment",
                div { class: "container",
                    h2 { class: "section__title", "Онлайн-запись" }
                    p { class: "section__subtitle",
                        "Оставьте заявку, и мы перезвоним, чтобы подобрать удобное время."
                    }
                    BookingFormView {}
                }
            }

            section { id: "contacts", class: "section contacts",
                div { class: "container",
                    h2 { class: "section__title", "Контакты" }
                    RevealCard { id: "contact-info".to_string(), class: "contact-info".to_string(),
                        p { "Адрес: ул. Цветочная, 12" }
                        p { "Телефон: "
                            a { href: "tel:+79001234567", "+7 (900) 123-45-67" }
                        }
                        p { "Ежедневно с 10:00 до 21:00" }
                    }
                }
            }
        }

        footer { class: "footer",
            div { class: "container",
                p { "© Tati Nails" }
            }
        }

        Lightbox {}
    }
}
