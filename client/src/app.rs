//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns every cross-view resource for one page load: the client
//! configuration, the session store, the toast queue, the SSO latch and the
//! HTTP auth backend. They are provided through context and disposed with the
//! root owner.
//!
//! ROUTING
//! =======
//! Before the route table is evaluated, `AppRouter` checks the URL fragment for
//! a pending SSO exchange and, if present, renders the callback view whatever
//! the path. Protected and admin routes are wrapped in `RouteGuard`, which
//! classifies the current path with `util::routes::access_for`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{ParentRoute, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::navbar::Navbar;
use crate::components::route_guard::RouteGuard;
use crate::components::toaster::Toaster;
use crate::config::ClientConfig;
use crate::net::backend::HttpAuthBackend;
use crate::pages::about::AboutPage;
use crate::pages::admin::{
    AdminInvoicesPage, AdminLayout, AdminMessagesPage, AdminOrdersPage, AdminOverviewPage, AdminProductsPage,
};
use crate::pages::checkout::CheckoutPage;
use crate::pages::contact::ContactPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::plans::PlansPage;
use crate::pages::register::RegisterPage;
use crate::pages::sso_callback::SsoCallbackPage;
use crate::state::session::Session;
use crate::state::toast::Toasts;
use crate::util::sso::{SsoLatch, has_pending_exchange};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::default();
    let session = Session::provide(&config);
    Toasts::provide(&config);
    let backend = HttpAuthBackend::new(&config);
    provide_context(backend);
    provide_context(SsoLatch::new());
    provide_context(config);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.bootstrap(&backend).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Stylesheet id="leptos" href="/pkg/igate.css"/>
        <Title text="Igate Host"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <AppRouter/>
            </main>
            <Toaster/>
        </Router>
    }
}

/// Route table, preceded by the SSO fragment check.
#[component]
fn AppRouter() -> impl IntoView {
    let location = use_location();
    let sso_pending = Memo::new(move |_| location.hash.with(|hash| has_pending_exchange(hash)));

    view! {
        <Show when=move || sso_pending.get() fallback=RouteTable>
            <SsoCallbackPage/>
        </Show>
    }
}

#[component]
fn RouteTable() -> impl IntoView {
    view! {
        <Routes fallback=NotFoundPage>
            <Route path=StaticSegment("") view=HomePage/>
            <Route path=StaticSegment("about") view=AboutPage/>
            <Route path=StaticSegment("contact") view=ContactPage/>
            <Route path=StaticSegment("plans") view=PlansPage/>
            <Route path=StaticSegment("login") view=LoginPage/>
            <Route path=StaticSegment("register") view=RegisterPage/>
            <Route
                path=(StaticSegment("checkout"), ParamSegment("product_id"))
                view=|| view! {
                    <RouteGuard>
                        <CheckoutPage/>
                    </RouteGuard>
                }
            />
            <Route
                path=StaticSegment("dashboard")
                view=|| view! {
                    <RouteGuard>
                        <DashboardPage/>
                    </RouteGuard>
                }
            />
            <ParentRoute
                path=StaticSegment("admin")
                view=|| view! {
                    <RouteGuard>
                        <AdminLayout/>
                    </RouteGuard>
                }
            >
                <Route path=StaticSegment("") view=AdminOverviewPage/>
                <Route path=StaticSegment("products") view=AdminProductsPage/>
                <Route path=StaticSegment("orders") view=AdminOrdersPage/>
                <Route path=StaticSegment("invoices") view=AdminInvoicesPage/>
                <Route path=StaticSegment("messages") view=AdminMessagesPage/>
                <Route path=WildcardSegment("rest") view=NotFoundPage/>
            </ParentRoute>
        </Routes>
    }
}
