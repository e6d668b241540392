//! Booking Form Component
//!
//! Appointment request form. Validation, the submit control lifecycle and the
//! request itself live in `tatinails_core::BookingForm`; this component only
//! binds them to signals.

use chrono::{Local, Utc};
use dioxus::prelude::*;
use tatinails_core::{
    min_booking_date, FormSurface, Notice, RawBookingFields, SubmitControl, SubmitControlState,
    Target,
};

use crate::components::NoticeModal;
use crate::context::{use_booking_form, use_viewport};

/// Form state as signals, seen by the controller through [`FormSurface`].
#[derive(Clone, Copy)]
struct SignalSurface {
    name: Signal<String>,
    phone: Signal<String>,
    date: Signal<String>,
    control: Signal<SubmitControl>,
    notice: Signal<Option<Notice>>,
}

impl SignalSurface {
    fn fields(&self) -> RawBookingFields {
        RawBookingFields::new(self.name.read().clone(), self.phone.read().clone(), self.date.read().clone())
    }
}

impl FormSurface for SignalSurface {
    fn set_control(&mut self, control: SubmitControl) {
        self.control.set(control);
    }

    fn notify(&mut self, notice: Notice) {
        self.notice.set(Some(notice));
    }

    fn clear_fields(&mut self) {
        self.name.set(String::new());
        self.phone.set(String::new());
        self.date.set(String::new());
    }
}

#[component]
pub fn BookingFormView() -> Element {
    let form = use_booking_form();
    let viewport = use_viewport();

    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut date = use_signal(String::new);
    let control = use_signal(|| form.control(SubmitControlState::Idle));
    let mut notice = use_signal(|| Option::<Notice>::None);

    // Past dates are not selectable; the endpoint does not re-check this
    let min_date = use_hook(|| min_booking_date(Local::now().date_naive()));

    let surface = SignalSurface {
        name,
        phone,
        date,
        control,
        notice,
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = form.clone();
        let mut surface = surface;
        let fields = surface.fields();
        spawn(async move {
            if let Err(e) = form.submit(&mut surface, &fields, Utc::now()).await {
                tracing::debug!("Booking not sent: {}", e);
            }
        });
    };

    let control_view = control();
    let reveal = Target::Reveal("appointment-form".to_string());

    rsx! {
        form {
            id: "appointment-form",
            "data-reveal": "true",
            class: viewport.class_list(&reveal, "appointment-form"),
            novalidate: true,
            onsubmit: on_submit,

            div { class: "form-group",
                label { r#for: "name", "Ваше имя" }
                input {
                    id: "name",
                    name: "name",
                    r#type: "text",
                    placeholder: "Как к вам обращаться?",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }

            div { class: "form-group",
                label { r#for: "phone", "Телефон" }
                input {
                    id: "phone",
                    name: "phone",
                    r#type: "tel",
                    placeholder: "+7 (___) ___-__-__",
                    value: "{phone}",
                    oninput: move |e| phone.set(e.value()),
                }
            }

            div { class: "form-group",
                label { r#for: "date", "Желаемая дата" }
                input {
                    id: "date",
                    name: "date",
                    r#type: "date",
                    min: "{min_date}",
                    value: "{date}",
                    oninput: move |e| date.set(e.value()),
                }
            }

            button {
                r#type: "submit",
                class: "btn btn--primary btn--block",
                disabled: control_view.disabled(),
                "{control_view.label()}"
            }
        }

        NoticeModal {
            notice: notice(),
            on_close: move |_| notice.set(None),
        }
    }
}
