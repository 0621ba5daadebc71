//! Static company page.

use leptos::prelude::*;

use crate::util::routes::CONTACT;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <header class="page-header">
                <h1>"About Igate Host"</h1>
                <p>"We help businesses get online and grow."</p>
            </header>
            <section class="about-page__body">
                <p>
                    "Igate Host provides web hosting, domain registration and digital marketing "
                    "services with local support and transparent pricing."
                </p>
                <ul class="about-page__values">
                    <li>"99.9% uptime on managed infrastructure"</li>
                    <li>"Support in Arabic and English"</li>
                    <li>"Monthly or yearly billing, cancel any time"</li>
                </ul>
                <a href=CONTACT class="btn btn--primary">"Get in touch"</a>
            </section>
        </div>
    }
}
