//! Action placeholder model.

use serde::{Deserialize, Serialize};

/// An action a category supports.
///
/// The action grammar is not defined yet, so this type has no fields and the
/// text codec never produces one. It exists so categories can carry an
/// `actions` list whose shape is settled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Action {}
