//! Sign-in / registration modal.
//!
//! The active tab is an explicit enum owned here and passed down with a
//! setter; the forms never reach into each other's DOM. Client-side checks
//! (password confirmation, terms acceptance) run synchronously and pre-empt
//! the network call entirely; every backend failure message is surfaced
//! verbatim through a toast.

use api::{Role, SignUpMetadata, SignUpParams};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label, ModalOverlay, Switch};
use crate::icons::{FaEye, FaEyeSlash, FaRightToBracket, FaUserPlus};
use crate::toast::{push_toast, use_toasts, ToastVariant};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Register,
}

/// Everything the registration form collects. `city` is kept for the form but
/// not forwarded to the auth service, matching the profile metadata it
/// actually stores.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub location: String,
    pub city: String,
    pub accept_terms: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationError {
    PasswordMismatch,
    TermsNotAccepted,
}

impl RegistrationError {
    pub fn message(self) -> &'static str {
        match self {
            RegistrationError::PasswordMismatch => "Lozinke se ne podudaraju.",
            RegistrationError::TermsNotAccepted => "Morate prihvatiti uvjete korištenja.",
        }
    }
}

impl RegistrationForm {
    /// Checks run in order: password confirmation first, then consent. Only a
    /// form passing both turns into a sign-up payload.
    pub fn validate(&self, redirect_to: &str) -> Result<SignUpParams, RegistrationError> {
        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        if !self.accept_terms {
            return Err(RegistrationError::TermsNotAccepted);
        }
        Ok(SignUpParams {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            redirect_to: redirect_to.to_string(),
            metadata: SignUpMetadata {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                company_name: self.company_name.clone(),
                location: self.location.clone(),
                role: self.role,
            },
        })
    }
}

/// Confirmation-email links land back on the page that opened the modal.
fn page_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return format!("{origin}/");
            }
        }
    }
    "http://localhost:8080/".to_string()
}

/// Trigger buttons plus the modal itself.
#[component]
pub fn AuthModal() -> Element {
    let mut open = use_signal(|| false);
    let mut tab = use_signal(|| AuthTab::Login);

    let login_tab = tab_class(tab() == AuthTab::Login);
    let register_tab = tab_class(tab() == AuthTab::Register);

    rsx! {
        div { class: "flex items-center gap-3",
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| {
                    tab.set(AuthTab::Login);
                    open.set(true);
                },
                Icon { icon: FaRightToBracket, width: 16, height: 16 }
                "Prijavi se"
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    tab.set(AuthTab::Register);
                    open.set(true);
                },
                Icon { icon: FaUserPlus, width: 16, height: 16 }
                "Registriraj se"
            }
        }

        if open() {
            ModalOverlay {
                on_close: move |_| open.set(false),
                div { class: "p-6",
                    h2 {
                        class: "m-0 mb-6 text-center text-2xl font-bold text-foreground",
                        "Dobro došli na BalkanX"
                    }

                    div { class: "mb-6 grid grid-cols-2 gap-1 rounded-lg bg-muted p-1",
                        button {
                            r#type: "button",
                            class: login_tab,
                            onclick: move |_| tab.set(AuthTab::Login),
                            "Prijava"
                        }
                        button {
                            r#type: "button",
                            class: register_tab,
                            onclick: move |_| tab.set(AuthTab::Register),
                            "Registracija"
                        }
                    }

                    match tab() {
                        AuthTab::Login => rsx! {
                            LoginForm {
                                on_done: move |_| open.set(false),
                                on_switch: move |_| tab.set(AuthTab::Register),
                            }
                        },
                        AuthTab::Register => rsx! {
                            RegisterForm {
                                on_done: move |_| open.set(false),
                                on_switch: move |_| tab.set(AuthTab::Login),
                            }
                        },
                    }
                }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "rounded-md border-none bg-surface px-3 py-1.5 text-sm font-medium text-foreground cursor-pointer"
    } else {
        "rounded-md border-none bg-transparent px-3 py-1.5 text-sm font-medium text-foreground-secondary cursor-pointer hover:text-foreground"
    }
}

#[component]
fn LoginForm(on_done: EventHandler<()>, on_switch: EventHandler<()>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut toasts = use_toasts();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            loading.set(true);
            let address = email().trim().to_string();
            let secret = password();
            match api::client().sign_in(&address, &secret).await {
                Ok(_session) => {
                    push_toast(
                        &mut toasts,
                        "Uspješno ste se prijavili!",
                        "Dobro došli na BalkanX.",
                        ToastVariant::Default,
                    );
                    email.set(String::new());
                    password.set(String::new());
                    remember_me.set(false);
                    on_done.call(());
                }
                Err(api::Error::Backend(message)) => {
                    push_toast(
                        &mut toasts,
                        "Greška pri prijavi",
                        &message,
                        ToastVariant::Destructive,
                    );
                }
                Err(error) => {
                    tracing::error!("sign-in failed: {error}");
                    push_toast(
                        &mut toasts,
                        "Greška",
                        "Nešto je pošlo po zlu. Pokušajte ponovno.",
                        ToastVariant::Destructive,
                    );
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        form { class: "flex flex-col gap-4", onsubmit: handle_login,
            div { class: "flex flex-col gap-2",
                Label { html_for: "login-email", "Email" }
                Input {
                    id: "login-email",
                    r#type: "email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            PasswordField {
                id: "login-password",
                label: "Lozinka",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            div { class: "flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    Switch {
                        id: "remember-me",
                        checked: remember_me(),
                        onchange: move |checked| remember_me.set(checked),
                    }
                    Label {
                        html_for: "remember-me",
                        class: "text-foreground-secondary",
                        "Zapamti me"
                    }
                }
                a { href: "#", class: "text-sm text-primary hover:underline", "Zaboravljena lozinka?" }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                class: "w-full",
                disabled: loading(),
                if loading() { "Prijavljivanje..." } else { "Prijavi se" }
            }
        }

        p { class: "m-0 mt-4 text-center text-sm text-foreground-secondary",
            "Nemaš račun? "
            button {
                r#type: "button",
                class: "bg-transparent border-none p-0 font-medium text-primary cursor-pointer hover:underline",
                onclick: move |_| on_switch.call(()),
                "Registriraj se"
            }
        }
    }
}

#[component]
fn RegisterForm(on_done: EventHandler<()>, on_switch: EventHandler<()>) -> Element {
    let mut is_freelancer = use_signal(|| true);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut company_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut accept_terms = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut toasts = use_toasts();

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();

        let form = RegistrationForm {
            role: if is_freelancer() {
                Role::Freelancer
            } else {
                Role::Client
            },
            first_name: first_name(),
            last_name: last_name(),
            company_name: company_name(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
            location: location(),
            city: city(),
            accept_terms: accept_terms(),
        };

        let params = match form.validate(&page_origin()) {
            Ok(params) => params,
            Err(error) => {
                push_toast(&mut toasts, "Greška", error.message(), ToastVariant::Destructive);
                return;
            }
        };

        spawn(async move {
            loading.set(true);
            match api::client().sign_up(&params).await {
                Ok(()) => {
                    push_toast(
                        &mut toasts,
                        "Registracija uspješna!",
                        "Provjerite email za potvrdu računa.",
                        ToastVariant::Default,
                    );
                    first_name.set(String::new());
                    last_name.set(String::new());
                    company_name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    confirm_password.set(String::new());
                    location.set(String::new());
                    city.set(String::new());
                    accept_terms.set(false);
                    on_done.call(());
                }
                Err(api::Error::Backend(message)) => {
                    push_toast(
                        &mut toasts,
                        "Greška pri registraciji",
                        &message,
                        ToastVariant::Destructive,
                    );
                }
                Err(error) => {
                    tracing::error!("sign-up failed: {error}");
                    push_toast(
                        &mut toasts,
                        "Greška",
                        "Nešto je pošlo po zlu. Pokušajte ponovno.",
                        ToastVariant::Destructive,
                    );
                }
            }
            loading.set(false);
        });
    };

    let role_label = if is_freelancer() {
        "Registriraj se kao Freelancer"
    } else {
        "Registriraj se kao Klijent"
    };

    rsx! {
        div { class: "mb-4 flex items-center justify-center gap-2",
            Switch {
                id: "role-switch",
                checked: is_freelancer(),
                onchange: move |checked| is_freelancer.set(checked),
            }
            Label { html_for: "role-switch", "{role_label}" }
        }

        form { class: "flex flex-col gap-4", onsubmit: handle_register,
            if is_freelancer() {
                div { class: "grid grid-cols-2 gap-4",
                    div { class: "flex flex-col gap-2",
                        Label { html_for: "first-name", "Ime" }
                        Input {
                            id: "first-name",
                            required: true,
                            value: first_name(),
                            oninput: move |evt: FormEvent| first_name.set(evt.value()),
                        }
                    }
                    div { class: "flex flex-col gap-2",
                        Label { html_for: "last-name", "Prezime" }
                        Input {
                            id: "last-name",
                            required: true,
                            value: last_name(),
                            oninput: move |evt: FormEvent| last_name.set(evt.value()),
                        }
                    }
                }
            } else {
                div { class: "flex flex-col gap-2",
                    Label { html_for: "company-name", "Naziv tvrtke" }
                    Input {
                        id: "company-name",
                        required: true,
                        value: company_name(),
                        oninput: move |evt: FormEvent| company_name.set(evt.value()),
                    }
                }
            }

            div { class: "flex flex-col gap-2",
                Label { html_for: "register-email", "Email" }
                Input {
                    id: "register-email",
                    r#type: "email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            div { class: "grid grid-cols-2 gap-4",
                div { class: "flex flex-col gap-2",
                    Label { html_for: "location", "Država" }
                    Input {
                        id: "location",
                        placeholder: "Hrvatska",
                        required: true,
                        value: location(),
                        oninput: move |evt: FormEvent| location.set(evt.value()),
                    }
                }
                div { class: "flex flex-col gap-2",
                    Label { html_for: "city", "Grad" }
                    Input {
                        id: "city",
                        placeholder: "Zagreb",
                        required: true,
                        value: city(),
                        oninput: move |evt: FormEvent| city.set(evt.value()),
                    }
                }
            }

            PasswordField {
                id: "register-password",
                label: "Lozinka",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            PasswordField {
                id: "confirm-password",
                label: "Potvrda lozinke",
                value: confirm_password(),
                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
            }

            div { class: "flex items-center gap-2",
                Switch {
                    id: "accept-terms",
                    checked: accept_terms(),
                    onchange: move |checked| accept_terms.set(checked),
                }
                Label {
                    html_for: "accept-terms",
                    class: "text-foreground-secondary",
                    "Prihvaćam "
                    a { href: "#", class: "text-primary hover:underline", "Uvjete korištenja" }
                    " i "
                    a { href: "#", class: "text-primary hover:underline", "Pravila privatnosti" }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                class: "w-full",
                disabled: loading(),
                if loading() { "Registracija..." } else { "Registriraj se" }
            }
        }

        p { class: "m-0 mt-4 text-center text-sm text-foreground-secondary",
            "Već imaš račun? "
            button {
                r#type: "button",
                class: "bg-transparent border-none p-0 font-medium text-primary cursor-pointer hover:underline",
                onclick: move |_| on_switch.call(()),
                "Prijavi se"
            }
        }
    }
}

/// Masked input with its own show/hide toggle. Each field switches
/// independently.
#[component]
fn PasswordField(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let mut show = use_signal(|| false);
    let input_type = if show() { "text" } else { "password" };

    rsx! {
        div { class: "flex flex-col gap-2",
            Label { html_for: id.clone(), "{label}" }
            div { class: "relative",
                Input {
                    id,
                    class: "pr-10",
                    r#type: input_type.to_string(),
                    required: true,
                    value,
                    oninput: move |evt: FormEvent| oninput.call(evt),
                }
                button {
                    r#type: "button",
                    class: "absolute right-3 top-2.5 bg-transparent border-none cursor-pointer text-foreground-muted hover:text-foreground",
                    onclick: move |_| {
                        let shown = show();
                        show.set(!shown);
                    },
                    if show() {
                        Icon { icon: FaEyeSlash, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaEye, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form(role: Role) -> RegistrationForm {
        RegistrationForm {
            role,
            first_name: "Ana".to_string(),
            last_name: "Horvat".to_string(),
            company_name: String::new(),
            email: "ana@example.com".to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc123".to_string(),
            location: "Hrvatska".to_string(),
            city: "Zagreb".to_string(),
            accept_terms: true,
        }
    }

    #[test]
    fn mismatched_passwords_never_build_a_payload() {
        let mut form = filled_form(Role::Freelancer);
        form.confirm_password = "abc124".to_string();
        assert_eq!(
            form.validate("https://balkanx.app/"),
            Err(RegistrationError::PasswordMismatch)
        );
    }

    #[test]
    fn password_check_runs_before_terms_check() {
        let mut form = filled_form(Role::Freelancer);
        form.confirm_password = "different".to_string();
        form.accept_terms = false;
        assert_eq!(
            form.validate("https://balkanx.app/"),
            Err(RegistrationError::PasswordMismatch)
        );
    }

    #[test]
    fn missing_consent_never_builds_a_payload() {
        let mut form = filled_form(Role::Freelancer);
        form.accept_terms = false;
        assert_eq!(
            form.validate("https://balkanx.app/"),
            Err(RegistrationError::TermsNotAccepted)
        );
    }

    #[test]
    fn freelancer_payload_carries_role_and_name() {
        let params = filled_form(Role::Freelancer)
            .validate("https://balkanx.app/")
            .unwrap();
        assert_eq!(params.metadata.role, Role::Freelancer);
        assert_eq!(params.metadata.first_name, "Ana");
        assert_eq!(params.metadata.last_name, "Horvat");
        assert_eq!(params.metadata.company_name, "");
        assert_eq!(params.redirect_to, "https://balkanx.app/");
    }

    #[test]
    fn client_payload_carries_company_instead_of_name() {
        let mut form = filled_form(Role::Client);
        form.first_name = String::new();
        form.last_name = String::new();
        form.company_name = "Acme d.o.o.".to_string();
        let params = form.validate("https://balkanx.app/").unwrap();
        assert_eq!(params.metadata.role, Role::Client);
        assert_eq!(params.metadata.company_name, "Acme d.o.o.");
        assert_eq!(params.metadata.first_name, "");
        assert_eq!(params.metadata.last_name, "");
    }

    #[test]
    fn email_is_trimmed_into_the_payload() {
        let mut form = filled_form(Role::Freelancer);
        form.email = "  ana@example.com ".to_string();
        let params = form.validate("https://balkanx.app/").unwrap();
        assert_eq!(params.email, "ana@example.com");
    }
}
