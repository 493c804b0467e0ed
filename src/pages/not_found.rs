//! 404 Page

use leptos::prelude::*;

use super::go_back;
use crate::brand::hints;
use crate::components::{AppLayout, Header};
use crate::confetti;

#[component]
pub fn NotFound() -> impl IntoView {
    Effect::new(move |_| confetti::burst());

    view! {
        <AppLayout title="WHOOPS!">
            <div class="page-center">
                <section class="panel panel--narrow notfound">
                    <Header title="404" subtitle="Page Not Found" show_paw=false />
                    <div class="panel__body notfound__body u-stack-md">
                        <p class="notfound__lead">"This path wandered off the map. The pixels got lost 🐾"</p>

                        <div class="notfound__ghost" aria-hidden="true">
                            <div class="eye"></div>
                            <div class="eye"></div>
                            <div class="frill frill-1"></div>
                            <div class="frill frill-2"></div>
                            <div class="frill frill-3"></div>
                            <div class="frill frill-4"></div>
                        </div>

                        <div class="u-actions-row">
                            <a href="/" class="btn">"← Home"</a>
                            <button type="button" class="btn btn--secondary" on:click=|_| go_back()>
                                "⤺ Go Back"
                            </button>
                            <a href="/dashboard" class="btn btn--ghost">"Dashboard"</a>
                        </div>

                        <p class="notfound__hint">{hints::NOT_FOUND}</p>
                    </div>
                </section>
            </div>
        </AppLayout>
    }
}
