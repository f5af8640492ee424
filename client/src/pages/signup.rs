//! Signup page: name, email, password with confirmation, terms checkbox.
//!
//! The form lives in one `RwSignal<SignupForm>`; submission is delegated to
//! `signup::SignupController`, which owns validation, the in-flight guard,
//! and the post-success move to `/login`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use signup::form::visibility_label;
use signup::{FormSlot, SignupController, SignupForm};

use crate::net::api::signup_service;
use crate::util::navigate::RouterNavigator;

fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting { "Processing..." } else { "Sign Up" }
}

fn toggle_text(shown: bool) -> &'static str {
    if shown { "Hide" } else { "Show" }
}

/// Gives the controller access to the form signal; `None` once the page has
/// been torn down.
#[derive(Clone, Copy)]
struct SignalForm(RwSignal<SignupForm>);

impl FormSlot for SignalForm {
    fn with_form<R>(&self, f: impl FnOnce(&mut SignupForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupForm::new());
    let controller = Arc::new(SignupController::new(signup_service()));
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = Arc::clone(&controller);
        let navigator = RouterNavigator::new(navigate.clone());
        leptos::task::spawn_local(async move {
            let outcome = controller.submit(&SignalForm(form), &navigator).await;
            log::debug!("signup: submit finished: {outcome:?}");
        });
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <div class="login-header">
                    <h2>"Create Account"</h2>
                    <p>"Sign up to get started"</p>
                </div>
                <div class="login-form">
                    <form on:submit=on_submit>
                        <Show when=move || form.with(|f| !f.error.is_empty())>
                            <div class="error-message">{move || form.with(|f| f.error.clone())}</div>
                        </Show>
                        <div class="form-group">
                            <label for="fullName">"Full Name"</label>
                            <input
                                id="fullName"
                                type="text"
                                placeholder="John Doe"
                                autocomplete="name"
                                required=true
                                prop:value=move || form.with(|f| f.full_name.clone())
                                on:input=move |ev| form.update(|f| f.set_full_name(event_target_value(&ev)))
                            />
                        </div>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="your@email.com"
                                autocomplete="email"
                                required=true
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                            />
                        </div>
                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <div class="input-container">
                                <input
                                    id="password"
                                    type=move || form.with(SignupForm::password_input_type)
                                    placeholder="••••••••"
                                    autocomplete="new-password"
                                    required=true
                                    prop:value=move || form.with(|f| f.password.clone())
                                    on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                                />
                                <button
                                    type="button"
                                    class="toggle-password"
                                    tabindex="-1"
                                    aria-label=move || form.with(|f| visibility_label(f.show_password))
                                    on:click=move |_| form.update(SignupForm::toggle_password_visibility)
                                >
                                    {move || form.with(|f| toggle_text(f.show_password))}
                                </button>
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="confirmPassword">"Confirm Password"</label>
                            <div class="input-container">
                                <input
                                    id="confirmPassword"
                                    type=move || form.with(SignupForm::confirm_password_input_type)
                                    placeholder="••••••••"
                                    autocomplete="new-password"
                                    required=true
                                    prop:value=move || form.with(|f| f.confirm_password.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.set_confirm_password(event_target_value(&ev)));
                                    }
                                />
                                <button
                                    type="button"
                                    class="toggle-password"
                                    tabindex="-1"
                                    aria-label=move || form.with(|f| visibility_label(f.show_confirm_password))
                                    on:click=move |_| form.update(SignupForm::toggle_confirm_password_visibility)
                                >
                                    {move || form.with(|f| toggle_text(f.show_confirm_password))}
                                </button>
                            </div>
                        </div>
                        <div class="form-group">
                            <label class="terms-checkbox">
                                <input
                                    type="checkbox"
                                    required=true
                                    prop:checked=move || form.with(|f| f.accept_terms)
                                    on:change=move |ev| form.update(|f| f.set_accept_terms(event_target_checked(&ev)))
                                />
                                <span>
                                    "I agree to the "
                                    <a href="/terms" class="terms-link">"Terms of Service"</a>
                                    " and "
                                    <a href="/privacy" class="terms-link">"Privacy Policy"</a>
                                </span>
                            </label>
                        </div>
                        <button
                            type="submit"
                            class="login-button"
                            disabled=move || form.with(|f| !f.can_submit())
                        >
                            {move || submit_label(form.with(|f| f.is_submitting))}
                        </button>
                    </form>
                    <div class="signup">
                        <p>
                            "Already have an account? "
                            <a href="/login" class="forgot-password">"Sign in"</a>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
