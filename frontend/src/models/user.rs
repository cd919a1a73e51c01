//! Room User Model

/// A member of the room roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomUser {
    pub id: String,
    pub name: String,
    /// This client.
    pub you: bool,
    pub owner: bool,
    pub streaming: bool,
}

impl RoomUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Flag suffix such as `" (You, Owner)"`; empty when no flag applies.
    pub fn flags(&self) -> String {
        let flags: Vec<&str> = [
            (self.you, "You"),
            (self.owner, "Owner"),
            (self.streaming, "Streaming"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect();

        if flags.is_empty() {
            String::new()
        } else {
            format!(" ({})", flags.join(", "))
        }
    }

    /// Name followed by its flags, as shown in the participant list.
    pub fn label(&self) -> String {
        format!("{}{}", self.name, self.flags())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let user = RoomUser::new("1", "bob");
        assert_eq!(user.flags(), "");
        assert_eq!(user.label(), "bob");
    }

    #[test]
    fn test_all_flags_in_order() {
        let user = RoomUser {
            you: true,
            owner: true,
            streaming: true,
            ..RoomUser::new("1", "me")
        };
        assert_eq!(user.label(), "me (You, Owner, Streaming)");
    }

    #[test]
    fn test_partial_flags() {
        let user = RoomUser {
            streaming: true,
            ..RoomUser::new("2", "carol")
        };
        assert_eq!(user.flags(), " (Streaming)");
    }
}
