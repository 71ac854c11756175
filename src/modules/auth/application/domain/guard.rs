//! Authorization predicates. Pure, so every mutating path can call them
//! before touching a repository or the object store.

use super::entities::{Actor, UserId};

pub fn is_owner(resource_owner: UserId, actor: &Actor) -> bool {
    resource_owner == actor.id
}

pub fn is_admin(actor: &Actor) -> bool {
    actor.is_admin
}

/// Owner or admin: the rule for deleting posts, comments and accounts.
pub fn is_owner_or_admin(resource_owner: UserId, actor: &Actor) -> bool {
    is_owner(resource_owner, actor) || is_admin(actor)
}
