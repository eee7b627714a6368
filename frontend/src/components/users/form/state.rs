use common::model::user::User;
use common::model::user_form::UserForm;

pub struct UserFormComponent {
    /// Local edit state for the three inputs and the validation message.
    pub form: UserForm,

    /// Session the inputs were last seeded for.
    pub session: u64,
}

impl UserFormComponent {
    pub fn new(user: &User, session: u64) -> Self {
        Self {
            form: UserForm::from_user(user),
            session,
        }
    }

    /// Re-seeds from `user` when `session` is one this form has not seen.
    /// Returns whether anything changed.
    pub fn sync(&mut self, user: &User, session: u64) -> bool {
        if session == self.session {
            return false;
        }
        self.session = session;
        self.form.load(user);
        true
    }
}
