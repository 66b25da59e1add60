/// How a store assigns the `id` of a newly created record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// `id = max(existing ids, default 0) + 1`; any id sent by the caller is ignored
    AutoIncrement,
    /// The caller picks the id; creating with an id already present is rejected
    CallerSupplied,
}

/// A row kept in one of the in-memory stores
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable resource name used in error messages
    const RESOURCE: &'static str;

    const ID_POLICY: IdPolicy;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);
}

/// Implements [`Record`] for a struct with a public `id: i64` field
macro_rules! impl_record {
    ($ty:ty, $resource:literal, $policy:expr) => {
        impl $crate::models::record::Record for $ty {
            const RESOURCE: &'static str = $resource;
            const ID_POLICY: $crate::models::record::IdPolicy = $policy;

            fn id(&self) -> i64 {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = id;
            }
        }
    };
}

pub(crate) use impl_record;
