/// The signed-in user as reported by the identity provider's session, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user_id: Option<String>,
}
