use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, LoginOutcome};
use crate::models::LoginForm;

/// Email/password form that checks credentials against the API.
#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient context missing");
    let form = RwSignal::new(LoginForm::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_login(api.clone(), form);
    };

    view! {
        <div class="bg-gray-200 dark:bg-gray-800 dark:text-white p-10 shadow-lg">
            <form on:submit=on_submit class="w-2xs sm:w-md mx-auto">
                <Show when=move || form.with(LoginForm::has_error)>
                    <p class="text-red-500 text-center">
                        {move || form.with(|f| f.error().to_string())}
                    </p>
                </Show>

                <div class="mb-5 flex flex-col">
                    <label class="block mb-2.5 text-sm font-medium">"Email"</label>
                    <input
                        type="text"
                        class="p-2 border"
                        placeholder="Enter your email"
                        prop:value=move || form.with(|f| f.email().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_email(value));
                        }
                    />
                </div>
                <div class="mb-5 flex flex-col">
                    <label class="block mb-2.5 text-sm font-medium">"Password"</label>
                    <input
                        type="password"
                        class="p-2 border"
                        placeholder="Enter your password"
                        prop:value=move || form.with(|f| f.password().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_password(value));
                        }
                    />
                </div>
                <button
                    type="submit"
                    class="mt-2 w-20 border p-2 hover:bg-black dark:hover:bg-gray-200 dark:hover:text-black hover:text-white duration-200 cursor-pointer"
                >
                    "Login"
                </button>
            </form>
        </div>
    }
}

/// Send the current credentials and fold the answer back into the form.
fn submit_login(api: ApiClient, form: RwSignal<LoginForm>) {
    let credentials = form.with_untracked(LoginForm::credentials);

    spawn_local(async move {
        match api.login(&credentials).await {
            Ok(outcome) => {
                if !settle_login(form, &outcome) {
                    log::debug!("login view gone before the response arrived");
                }
            }
            Err(e) => {
                // Transport failure: nothing came back, so the form stays as it was
                log::error!("login request to {} failed: {e}", api.config().login_url());
            }
        }
    });
}

/// Apply an outcome unless the view was unmounted; `false` means it was.
fn settle_login(form: RwSignal<LoginForm>, outcome: &LoginOutcome) -> bool {
    form.try_update(|f| f.apply_outcome(outcome)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(message: &str) -> LoginOutcome {
        LoginOutcome::Rejected {
            status: 401,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_settle_updates_mounted_form() {
        let form = RwSignal::new(LoginForm::new());

        assert!(settle_login(form, &rejected("Invalid credentials")));
        assert_eq!(form.get_untracked().error(), "Invalid credentials");

        assert!(settle_login(form, &LoginOutcome::Accepted(None)));
        assert!(!form.get_untracked().has_error());
    }

    #[test]
    fn test_settle_after_unmount_is_skipped() {
        let form = RwSignal::new(LoginForm::new());
        form.dispose();

        assert!(!settle_login(form, &rejected("too late")));
    }
}
