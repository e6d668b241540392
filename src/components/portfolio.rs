//! Portfolio Gallery Component
//!
//! Grid of work photos. Clicking one opens it in the lightbox instead of
//! following the link.

use dioxus::prelude::*;
use tatinails_core::{GalleryEntry, PageEvent, Target};

use crate::context::{fire, honour, use_page, use_viewport};

/// Portfolio works: (full-size image, thumbnail, alt text), in display order
const WORKS: [(&str, &str, &str); 8] = [
    ("images/portfolio/1.jpg", "images/portfolio/1-thumb.jpg", "Нюдовый маникюр с блёстками"),
    ("images/portfolio/2.jpg", "images/portfolio/2-thumb.jpg", "Френч на миндальной форме"),
    ("images/portfolio/3.jpg", "images/portfolio/3-thumb.jpg", "Красный гель-лак"),
    ("images/portfolio/4.jpg", "images/portfolio/4-thumb.jpg", "Градиент омбре"),
    ("images/portfolio/5.jpg", "images/portfolio/5-thumb.jpg", "Дизайн с цветами"),
    ("images/portfolio/6.jpg", "images/portfolio/6-thumb.jpg", "Педикюр с покрытием"),
    ("images/portfolio/7.jpg", "images/portfolio/7-thumb.jpg", "Наращивание гелем"),
    ("images/portfolio/8.jpg", "images/portfolio/8-thumb.jpg", "Минималистичный дизайн"),
];

/// Gallery entries as the page markup presents them
pub fn portfolio_entries() -> Vec<GalleryEntry> {
    WORKS
        .iter()
        .map(|(full, thumb, alt)| GalleryEntry::linked(*full, *thumb, *alt))
        .collect()
}

#[component]
pub fn PortfolioGallery() -> Element {
    let page = use_page();
    let viewport = use_viewport();

    rsx! {
        div { class: "portfolio-grid",
            for (position, (full, thumb, alt)) in WORKS.iter().enumerate() {
                {
                    let id = format!("work-{}", position + 1);
                    let target = Target::Reveal(id.clone());
                    rsx! {
                        a {
                            key: "{id}",
                            id: "{id}",
                            "data-reveal": "true",
                            class: viewport.class_list(&target, "portfolio-item"),
                            href: "{full}",
                            onclick: move |evt| {
                                let effects = fire(page, viewport, PageEvent::EntryClicked(position));
                                honour(&evt, &effects);
                            },

                            img { src: "{thumb}", alt: "{alt}", loading: "lazy" }
                            div { class: "portfolio-item__overlay",
                                span { class: "portfolio-item__zoom", "+" }
                            }
                        }
                    }
                }
            }
        }
    }
}
