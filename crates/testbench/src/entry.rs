use crate::{error::MalformedReason, termination::Termination};
use std::fmt;

/// A type-erased zero-argument test procedure.
pub struct TestFn(Box<dyn FnMut() -> anyhow::Result<()>>);

impl TestFn {
    /// Wrap a closure whose return value implements [`Termination`].
    pub fn new<F, T>(mut f: F) -> Self
    where
        F: FnMut() -> T + 'static,
        T: Termination,
    {
        Self(Box::new(move || f().into_result()))
    }

    #[inline]
    pub(crate) fn call(&mut self) -> anyhow::Result<()> {
        (self.0)()
    }
}

impl fmt::Debug for TestFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestFn").finish()
    }
}

/// A registered `(description, procedure)` pair.
#[derive(Debug)]
pub struct TestEntry {
    description: String,
    testfn: TestFn,
}

impl TestEntry {
    /// Create an entry from a description and a procedure.
    pub fn new<D, F, T>(description: D, procedure: F) -> Self
    where
        D: Into<String>,
        F: FnMut() -> T + 'static,
        T: Termination,
    {
        Self {
            description: description.into(),
            testfn: TestFn::new(procedure),
        }
    }

    /// Return the human-readable description of this entry.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub(crate) fn testfn_mut(&mut self) -> &mut TestFn {
        &mut self.testfn
    }
}

/// A test entry whose parts are filled in at runtime.
///
/// Useful when the batch comes from a table built dynamically, where
/// either part may turn out to be missing. Registration rejects a
/// `RawEntry` with an empty slot.
#[derive(Debug, Default)]
pub struct RawEntry {
    /// The description slot.
    pub description: Option<String>,
    /// The procedure slot.
    pub procedure: Option<TestFn>,
}

impl RawEntry {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the description slot.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Fill the procedure slot.
    pub fn procedure<F, T>(mut self, procedure: F) -> Self
    where
        F: FnMut() -> T + 'static,
        T: Termination,
    {
        self.procedure = Some(TestFn::new(procedure));
        self
    }
}

/// Items accepted by [`TestBench::add_tests`].
///
/// [`TestBench::add_tests`]: crate::TestBench::add_tests
pub trait IntoTestEntry {
    /// Decompose the item into a test entry.
    fn into_test_entry(self) -> Result<TestEntry, MalformedReason>;
}

impl IntoTestEntry for TestEntry {
    #[inline]
    fn into_test_entry(self) -> Result<TestEntry, MalformedReason> {
        Ok(self)
    }
}

impl<D, F, T> IntoTestEntry for (D, F)
where
    D: Into<String>,
    F: FnMut() -> T + 'static,
    T: Termination,
{
    #[inline]
    fn into_test_entry(self) -> Result<TestEntry, MalformedReason> {
        Ok(TestEntry::new(self.0, self.1))
    }
}

impl IntoTestEntry for RawEntry {
    fn into_test_entry(self) -> Result<TestEntry, MalformedReason> {
        let description = self
            .description
            .ok_or(MalformedReason::MissingDescription)?;
        let testfn = self.procedure.ok_or(MalformedReason::MissingProcedure)?;
        Ok(TestEntry {
            description,
            testfn,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_entry_requires_both_slots() {
        let err = RawEntry::new().procedure(|| ()).into_test_entry().unwrap_err();
        assert_eq!(err, MalformedReason::MissingDescription);

        let err = RawEntry::new().description("a").into_test_entry().unwrap_err();
        assert_eq!(err, MalformedReason::MissingProcedure);

        let entry = RawEntry::new()
            .description("a")
            .procedure(|| ())
            .into_test_entry()
            .unwrap();
        assert_eq!(entry.description(), "a");
    }

    #[test]
    fn testfn_maps_return_value() {
        let mut entry = TestEntry::new("err", || Err::<(), _>(anyhow::anyhow!("boom")));
        assert!(entry.testfn_mut().call().is_err());

        let mut entry = TestEntry::new("falsy", || false);
        assert!(entry.testfn_mut().call().is_ok());
    }
}
