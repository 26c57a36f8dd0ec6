//! Role-specific views reached from the login panel.

use glof_ews_core::Destination;
use leptos::prelude::*;
use leptos_meta::Title;

/// Administration view.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <DestinationView destination=Destination::Admin>
            <p>"Manage operator accounts and the monitoring stations of the early warning network."</p>
        </DestinationView>
    }
}

/// View for rescue teams and civil authorities.
#[component]
pub fn AuthorityPage() -> impl IntoView {
    view! {
        <DestinationView destination=Destination::Authority>
            <p>"Coordinate evacuation and rescue response for communities downstream of monitored lakes."</p>
        </DestinationView>
    }
}

/// View for geologists, and for any login without a recognised role.
#[component]
pub fn GeologistPage() -> impl IntoView {
    view! {
        <DestinationView destination=Destination::Geologist>
            <p>"Review lake level, temperature and seismic readings reported by the sensor network."</p>
        </DestinationView>
    }
}

#[component]
fn DestinationView(destination: Destination, children: Children) -> impl IntoView {
    view! {
        <Title text=destination.title()/>
        <div class="destination-page">
            <h1>{destination.title()}</h1>
            {children()}
            <a href="/" class="link-button">"Back to sign in"</a>
        </div>
    }
}
