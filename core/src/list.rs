//! Pure projection of the user collection into displayable rows.
//!
//! Stateless by construction: the same slice always projects to the same
//! view. An empty collection projects to a distinct placeholder rather
//! than an empty row list, so frontends cannot render a bare void.

use uuid::Uuid;

use crate::types::User;

/// One displayable row of the user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Creation date formatted for display, when the server supplied one.
    pub created: Option<String>,
}

/// The rendered shape of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// No records: frontends show a "no users found" placeholder.
    Empty,
    Rows(Vec<UserRow>),
}

/// Project the collection into a [`ListView`], preserving order.
pub fn project(users: &[User]) -> ListView {
    if users.is_empty() {
        return ListView::Empty;
    }
    ListView::Rows(
        users
            .iter()
            .map(|user| UserRow {
                id: user.id,
                name: user.name.clone(),
                email: user.email.clone(),
                created: user.created_at.map(|at| at.format("%Y-%m-%d").to_string()),
            })
            .collect(),
    )
}

/// A blocking yes/no decision obtained before any delete is issued.
///
/// Declining must be a complete no-op: no request is sent and no state
/// changes. The CLI implements this as a terminal prompt; tests use
/// canned answers.
pub trait ConfirmDelete {
    fn confirm(&self, user: &User) -> bool;
}
