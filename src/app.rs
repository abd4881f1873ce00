use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::{LeadSettings, SETTINGS_ELEMENT_ID};
use crate::ui::{LandingPage, NotFoundPage, provide_notifications};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provided per request by the server; defaults elsewhere
    let settings = use_context::<LeadSettings>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
                <script type="application/json" id=SETTINGS_ELEMENT_ID inner_html=settings.to_json()></script>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Settings for this render: the request context on the server, the embedded
/// JSON in the browser
fn lead_settings() -> LeadSettings {
    #[cfg(feature = "hydrate")]
    {
        LeadSettings::from_document()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use_context::<LeadSettings>().unwrap_or_default()
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(lead_settings());
    provide_notifications();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/bindery.css"/>

        <Title text="Bindery - Book Printing & Binding"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
