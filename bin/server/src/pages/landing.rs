//! Landing page: sensor simulation panel and role-based sign in.

use crate::telemetry::{RecordSensorReadings, ServerTelemetrySink};
use glof_ews_core::{
    Destination, LoginField, LoginPanel, Reading, Role, SensorField, SensorPanel, parse_reading,
};
use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// The landing page component.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <div class="logo">
                <div class="logo-mark"></div>
            </div>

            <div class="landing-heading">
                <h1>"EWS of GLOF"</h1>
                <p>"Early Warning System for Glacial Lake Outburst Flood"</p>
            </div>

            <SensorSection/>
            <LoginSection/>

            <div class="forgot-password">
                <a href="#">"Forgot Password?"</a>
            </div>

            <p class="landing-note">
                "This system provides real-time monitoring and alerts for potential glacial lake outburst floods. "
                "Your role is crucial in managing and responding to these critical environmental events."
            </p>
        </div>
    }
}

/// Sensor data input section.
#[component]
fn SensorSection() -> impl IntoView {
    let panel = RwSignal::new(SensorPanel::new());
    let record = ServerAction::<RecordSensorReadings>::new();
    let sink = ServerTelemetrySink::new(record);

    Effect::new(move || {
        if let Some(Err(e)) = record.value().get() {
            warn!("sensor submission was not recorded: {e}");
        }
    });

    view! {
        <section class="panel">
            <h2>"Sensor Data Input"</h2>
            {SensorField::ALL
                .into_iter()
                .map(|field| view! { <SensorSlider field=field panel=panel/> })
                .collect_view()}
            <button
                type="button"
                class="primary-button"
                on:click=move |_| panel.with_untracked(|p| p.submit(&sink))
            >
                "Submit Sensor Data"
            </button>
        </section>
    }
}

/// Range input for a single sensor reading.
#[component]
fn SensorSlider(field: SensorField, panel: RwSignal<SensorPanel>) -> impl IntoView {
    let value = move || panel.with(|p| p.readings().get(field).to_string());

    let on_input = move |ev: leptos::ev::Event| match parse_reading(&event_target_value(&ev)) {
        Ok(requested) => panel.update(|p| {
            p.set_reading(field, requested);
        }),
        Err(e) => warn!("ignoring {field} input: {e}"),
    };

    view! {
        <div class="sensor-row">
            <div class="sensor-row-header">
                <label for=field.key()>{field.label()}</label>
                <span class="sensor-value">{value}</span>
            </div>
            <input
                id=field.key()
                name=field.key()
                type="range"
                min=Reading::MIN.to_string()
                max=Reading::MAX.to_string()
                prop:value=value
                on:input=on_input
                class="sensor-slider"
            />
        </div>
    }
}

/// Login section. Routes by role; credentials are not verified.
#[component]
fn LoginSection() -> impl IntoView {
    let panel = RwSignal::new(LoginPanel::new());
    let department_visible = Memo::new(move |_| panel.with(LoginPanel::department_visible));
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let navigator =
            |destination: Destination| navigate(destination.path(), Default::default());
        panel.update(|p| {
            p.submit(&navigator);
        });
    };

    view! {
        <section class="panel">
            <h2>"Login"</h2>
            <form class="login-form" on:submit=on_submit>
                <div class="form-row">
                    <label for="role">"Role"</label>
                    <select
                        id="role"
                        name=LoginField::Role.name()
                        on:change=move |ev| {
                            panel.update(|p| p.set_field(LoginField::Role, event_target_value(&ev)))
                        }
                    >
                        <option value="" disabled selected>"Select your role"</option>
                        {Role::ALL
                            .into_iter()
                            .map(|role| view! { <option value=role.identifier()>{role.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <LoginInput
                    panel=panel
                    field=LoginField::Username
                    label="Username/Email"
                    input_type="text"
                    placeholder="Enter your username or email"
                />
                <LoginInput
                    panel=panel
                    field=LoginField::Password
                    label="Password"
                    input_type="password"
                    placeholder="Enter your password"
                />

                <Show when=move || department_visible.get()>
                    <LoginInput
                        panel=panel
                        field=LoginField::Department
                        label="Department"
                        input_type="text"
                        placeholder="Enter your department"
                    />
                </Show>

                <button type="submit" class="primary-button">"Login"</button>
            </form>
        </section>
    }
}

/// Text input bound to one login field.
#[component]
fn LoginInput(
    panel: RwSignal<LoginPanel>,
    field: LoginField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-row">
            <label for=field.name()>{label}</label>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                placeholder=placeholder
                prop:value=move || panel.with(|p| p.credentials().get(field).to_string())
                on:input=move |ev| panel.update(|p| p.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}
