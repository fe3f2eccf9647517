//! Registration form core: the state machine behind the register view.
//!
//! The form is an explicit state object owned by whoever renders it. Event
//! handlers call the transition methods; submission runs through
//! [`submit_registration`] with the two collaborators the form consumes — an
//! account-creation function and a navigation function — injected, so tests
//! can substitute doubles for both.

use api::{AccountError, CreateUserParams, Role};

/// Path of the login view, navigated to after a successful registration.
pub const LOGIN_PATH: &str = "/login";

/// Characters that count as "special" for password strength.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length, in characters.
pub const PASSWORD_MIN_CHARS: usize = 6;

const PASSWORD_ERROR: &str =
    "Password must be at least 6 characters long and contain at least one special character.";

/// Password strength predicate: at least [`PASSWORD_MIN_CHARS`] characters,
/// at least one of [`PASSWORD_SPECIAL_CHARS`].
pub fn password_is_strong(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_CHARS
        && password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
}

/// Something that can create an account from a registration request.
// UI futures never leave the render thread, so no Send bound.
#[allow(async_fn_in_trait)]
pub trait CreateAccount {
    async fn create_account(&self, params: CreateUserParams) -> Result<(), AccountError>;
}

/// Something that can move the user to another view. Fire-and-forget.
pub trait Navigate {
    fn navigate_to(&self, path: &str);
}

/// Mutable state of one registration form instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    name: String,
    email: String,
    password: String,
    role: Role,
    show_password: bool,
    password_error: Option<&'static str>,
    submitting: bool,
    submit_error: Option<AccountError>,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn password_visible(&self) -> bool {
        self.show_password
    }

    pub fn password_error(&self) -> Option<&'static str> {
        self.password_error
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_error(&self) -> Option<&AccountError> {
        self.submit_error.as_ref()
    }

    /// Replace the name verbatim. No validation.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.submit_error = None;
    }

    /// Replace the email verbatim. No shape check is enforced here.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.submit_error = None;
    }

    /// Replace the password and re-run the strength check against the new
    /// value, so the inline error can never go stale.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.password_error = if password_is_strong(&self.password) {
            None
        } else {
            Some(PASSWORD_ERROR)
        };
        self.submit_error = None;
    }

    /// Switch the password field between masked and plaintext rendering.
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Whether the submit control should be enabled: every required field
    /// filled, no strength error, no attempt already in flight.
    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
            && self.password_error.is_none()
            && !self.submitting
    }

    /// Start a submission attempt. Returns the request to send, or `None`
    /// (and no side effect) when the form is not submittable.
    pub fn begin_submit(&mut self) -> Option<CreateUserParams> {
        if !self.is_submittable() {
            return None;
        }
        self.submitting = true;
        self.submit_error = None;
        Some(CreateUserParams {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role,
        })
    }

    /// Record a failed attempt: the user stays on the form, fields untouched.
    pub fn submit_failed(&mut self, error: AccountError) {
        self.submitting = false;
        self.submit_error = Some(error);
    }
}

/// Run one submission attempt against the injected collaborators.
///
/// Guarded by [`RegisterForm::begin_submit`]: with a strength error, an empty
/// required field, or an attempt already in flight, neither collaborator is
/// called. On success the user is navigated to [`LOGIN_PATH`] exactly once;
/// on failure the classified error is logged and recorded, and the form goes
/// back to its editable state. No retry, no timeout.
pub async fn submit_registration<C, N>(form: &mut RegisterForm, accounts: &C, nav: &N)
where
    C: CreateAccount,
    N: Navigate,
{
    let Some(params) = form.begin_submit() else {
        return;
    };
    match accounts.create_account(params).await {
        Ok(()) => nav.navigate_to(LOGIN_PATH),
        Err(error) => {
            tracing::error!(%error, "registration failed");
            form.submit_failed(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct FakeAccounts {
        calls: RefCell<Vec<CreateUserParams>>,
        fail_with: Option<AccountError>,
    }

    impl FakeAccounts {
        fn failing(error: AccountError) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_with: Some(error),
            }
        }
    }

    impl CreateAccount for FakeAccounts {
        async fn create_account(&self, params: CreateUserParams) -> Result<(), AccountError> {
            self.calls.borrow_mut().push(params);
            match &self.fail_with {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    struct FakeNav {
        visited: RefCell<Vec<String>>,
    }

    impl Navigate for FakeNav {
        fn navigate_to(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    fn filled_form() -> RegisterForm {
        let mut form = RegisterForm::new();
        form.set_name("John Doe");
        form.set_email("johndoe@gmail.com");
        form.set_password("abc!23");
        form
    }

    #[test]
    fn strength_accepts_six_chars_with_special() {
        assert!(password_is_strong("abc!23"));
    }

    #[test]
    fn strength_rejects_missing_special() {
        assert!(!password_is_strong("abcdef"));
    }

    #[test]
    fn strength_rejects_too_short() {
        assert!(!password_is_strong("ab!"));
    }

    #[test]
    fn strength_rejects_empty() {
        assert!(!password_is_strong(""));
    }

    #[test]
    fn password_error_tracks_every_edit() {
        let mut form = RegisterForm::new();
        form.set_password("abcdef");
        assert!(form.password_error().is_some());
        form.set_password("abc!23");
        assert!(form.password_error().is_none());
        form.set_password("ab!");
        assert!(form.password_error().is_some());
    }

    #[test]
    fn submittable_requires_every_field_and_no_error() {
        let mut form = RegisterForm::new();
        assert!(!form.is_submittable());

        form.set_name("John Doe");
        form.set_email("johndoe@gmail.com");
        assert!(!form.is_submittable(), "password still empty");

        form.set_password("abcdef");
        assert!(!form.is_submittable(), "strength error present");

        form.set_password("abc!23");
        assert!(form.is_submittable());

        form.set_email("");
        assert!(!form.is_submittable());
    }

    #[test]
    fn begin_submit_defaults_role_to_user() {
        let mut form = filled_form();
        let params = form.begin_submit().expect("form is submittable");
        assert_eq!(params.role, Role::User);
        assert_eq!(params.name, "John Doe");
    }

    #[test]
    fn begin_submit_carries_selected_role() {
        let mut form = filled_form();
        form.set_role(Role::Creator);
        let params = form.begin_submit().expect("form is submittable");
        assert_eq!(params.role, Role::Creator);
    }

    #[test]
    fn begin_submit_rejects_while_in_flight() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        assert!(
            form.begin_submit().is_none(),
            "second attempt while one is in flight"
        );
    }

    #[test]
    fn visibility_toggle_round_trips_without_touching_value() {
        let mut form = filled_form();
        assert!(!form.password_visible());
        form.toggle_password_visibility();
        assert!(form.password_visible());
        form.toggle_password_visibility();
        assert!(!form.password_visible());
        assert_eq!(form.password(), "abc!23");
    }

    #[tokio::test]
    async fn weak_password_never_reaches_the_collaborators() {
        let mut form = filled_form();
        form.set_password("abcdef");
        let accounts = FakeAccounts::default();
        let nav = FakeNav::default();

        submit_registration(&mut form, &accounts, &nav).await;

        assert!(accounts.calls.borrow().is_empty());
        assert!(nav.visited.borrow().is_empty());
    }

    #[tokio::test]
    async fn success_submits_once_and_navigates_to_login() {
        let mut form = filled_form();
        let accounts = FakeAccounts::default();
        let nav = FakeNav::default();

        submit_registration(&mut form, &accounts, &nav).await;

        let calls = accounts.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].email, "johndoe@gmail.com");
        assert_eq!(*nav.visited.borrow(), [LOGIN_PATH]);
    }

    #[tokio::test]
    async fn failure_keeps_fields_and_never_navigates() {
        let mut form = filled_form();
        let accounts = FakeAccounts::failing(AccountError::Conflict);
        let nav = FakeNav::default();

        submit_registration(&mut form, &accounts, &nav).await;

        assert!(nav.visited.borrow().is_empty());
        assert_eq!(form.name(), "John Doe");
        assert_eq!(form.email(), "johndoe@gmail.com");
        assert_eq!(form.password(), "abc!23");
        assert!(!form.is_submitting());
        assert_eq!(form.submit_error(), Some(&AccountError::Conflict));

        // the next edit clears the recorded failure
        form.set_password("abc!234");
        assert!(form.submit_error().is_none());
    }
}
