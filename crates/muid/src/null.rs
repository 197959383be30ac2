use crate::Id;

/// An id that may be absent, mirroring SQL `NULL` semantics.
///
/// The JSON form (behind the `serde` feature) is `null` when invalid and
/// the inner [`Id`]'s JSON form otherwise. The pair shape keeps the inner
/// id addressable even when invalid, matching nullable-column conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullId {
    pub id: Id,
    pub valid: bool,
}

impl NullId {
    /// The absent id.
    pub const NULL: NullId = NullId {
        id: Id::NIL,
        valid: false,
    };

    /// Wraps a present id.
    pub const fn some(id: Id) -> Self {
        Self { id, valid: true }
    }

    /// Converts to an [`Option`], dropping the inner id when invalid.
    pub const fn as_option(self) -> Option<Id> {
        if self.valid { Some(self.id) } else { None }
    }
}

impl From<Id> for NullId {
    fn from(id: Id) -> Self {
        Self::some(id)
    }
}

impl From<Option<Id>> for NullId {
    fn from(id: Option<Id>) -> Self {
        match id {
            Some(id) => Self::some(id),
            None => Self::NULL,
        }
    }
}

impl From<NullId> for Option<Id> {
    fn from(null_id: NullId) -> Self {
        null_id.as_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        let id = Id::from_raw(42);
        assert_eq!(NullId::some(id).as_option(), Some(id));
        assert_eq!(NullId::NULL.as_option(), None);
        assert_eq!(NullId::from(Some(id)), NullId::some(id));
        assert_eq!(NullId::from(None), NullId::NULL);
        assert_eq!(Option::<Id>::from(NullId::some(id)), Some(id));
    }

    #[test]
    fn default_is_null() {
        assert_eq!(NullId::default(), NullId::NULL);
    }
}
